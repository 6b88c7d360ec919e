use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::DataSource;

/// One dataset (ticker) returned by a search or source listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerInfo {
    pub source_code: String,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    /// e.g. `daily`, `monthly`.
    pub frequency: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub column_names: Vec<String>,
}

impl TickerInfo {
    /// The `SOURCE/CODE` pair used to request this dataset's market data.
    pub fn quandl_code(&self) -> String {
        format!("{}/{}", self.source_code, self.code)
    }
}

/// A page of tickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub tickers: Vec<TickerInfo>,
    /// In free-text search mode this is `tickers.len()`; when listing a source it is the
    /// provider's total across all pages.
    pub total_count: u64,
    pub current_page: u32,
    pub per_page: u32,
    /// Data sources the provider reported alongside the results.
    pub sources: Vec<DataSource>,
}

/// What to look for: free text, or every dataset of one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickerQuery {
    /// Sent as `query=<text>`.
    Search(String),
    /// Sent as `query=*&source_code=<code>`.
    Source(String),
}

impl TickerQuery {
    /// Builds a query from text plus a search-mode flag: `true` searches, `false` lists
    /// the source named by `query`.
    pub fn new(query: impl Into<String>, is_search: bool) -> Self {
        if is_search {
            TickerQuery::Search(query.into())
        } else {
            TickerQuery::Source(query.into())
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, TickerQuery::Search(_))
    }
}
