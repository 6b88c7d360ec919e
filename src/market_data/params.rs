use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Order in which rows come back from the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

/// Provider-side aggregation granularity (`collapse`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annual,
}

impl Timeframe {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Timeframe::None => "none",
            Timeframe::Daily => "daily",
            Timeframe::Weekly => "weekly",
            Timeframe::Monthly => "monthly",
            Timeframe::Quarterly => "quarterly",
            Timeframe::Annual => "annual",
        }
    }
}

/// Provider-side numeric transform applied after collapsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transformation {
    #[default]
    None,
    /// Row-on-row change.
    Diff,
    /// Row-on-row percentage change.
    Rdiff,
    /// Cumulative sum.
    Cumul,
    /// Rebased so the first row is 100.
    Normalize,
}

impl Transformation {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Transformation::None => "none",
            Transformation::Diff => "diff",
            Transformation::Rdiff => "rdiff",
            Transformation::Cumul => "cumul",
            Transformation::Normalize => "normalize",
        }
    }
}

/// Which rows of a dataset to return: the latest `n`, or an inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowSelection {
    /// Sent as `rows`.
    Rows(u32),
    /// Sent as `trim_start` / `trim_end`.
    DateRange { from: NaiveDate, to: NaiveDate },
}

impl Default for RowSelection {
    fn default() -> Self {
        RowSelection::Rows(100)
    }
}

pub(crate) fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
