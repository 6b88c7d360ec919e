use serde::Deserialize;

/* ------------- Minimal serde mapping of /datasets.json ------------- */

#[derive(Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(default)]
    pub(crate) total_count: Option<u64>,
    #[serde(default)]
    pub(crate) current_page: Option<u32>,
    #[serde(default)]
    pub(crate) per_page: Option<u32>,
    #[serde(default)]
    pub(crate) docs: Vec<DocNode>,
    #[serde(default)]
    pub(crate) sources: Vec<SourceNode>,
}

#[derive(Deserialize)]
pub(crate) struct DocNode {
    #[serde(default)]
    pub(crate) source_code: Option<String>,
    #[serde(default)]
    pub(crate) code: Option<String>,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) frequency: Option<String>,
    #[serde(default)]
    pub(crate) from_date: Option<String>,
    #[serde(default)]
    pub(crate) to_date: Option<String>,
    #[serde(default)]
    pub(crate) column_names: Vec<String>,
}

#[derive(Deserialize)]
pub(crate) struct SourceNode {
    #[serde(default)]
    pub(crate) code: Option<String>,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) datasets_count: Option<u64>,
}
