use serde::{Deserialize, Serialize};

/* ----- DATA SOURCES (shared by sources/ and datasets/) ----- */

/// A named category of datasets offered by the provider, e.g. an exchange feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    pub name: String,
    /// Number of datasets the provider lists under this source.
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub description: String,
    /// Provider identifier used in subsequent queries (e.g. `WIKI`).
    pub code: String,
}

impl DataSource {
    pub fn new(
        name: impl Into<String>,
        count: u64,
        description: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            count,
            description: description.into(),
            code: code.into(),
        }
    }
}

/* ----- PAGING (datasets/) ----- */

/// Page selection for listing endpoints. Values are passed through to the provider unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingOptions {
    pub per_page: u32,
    pub page: u32,
}

impl Default for PagingOptions {
    fn default() -> Self {
        Self {
            per_page: 20,
            page: 1,
        }
    }
}

impl PagingOptions {
    pub const fn new(per_page: u32, page: u32) -> Self {
        Self { per_page, page }
    }
}
