use serde::Serialize;

/// Failure message for an operation whose result set came back empty.
pub const NO_DATA_FOUND: &str = "No data found";
/// Failure message for a market-data payload without columns or rows.
pub const NO_MARKET_DATA: &str = "No market data found for current ticker";
/// Failure message for a catalog page that no longer has the financial-data anchor.
pub const CATALOG_UNAVAILABLE: &str = "Can't load data sources list from web site";

/// The outcome of an operation that ran to completion.
///
/// `Success` carries the payload. `Failure` carries a human-readable explanation of an
/// expected negative outcome, such as an empty result set. Faults are not represented here;
/// they are returned as `Err(QdError)` around the envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OperationResult<T> {
    /// The operation produced a payload.
    Success(T),
    /// The operation ran but had nothing to return.
    Failure(String),
}

impl<T> OperationResult<T> {
    /// Builds a failed envelope from any displayable message.
    pub fn failure(message: impl Into<String>) -> Self {
        OperationResult::Failure(message.into())
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, OperationResult::Success(_))
    }

    /// The payload, if the operation succeeded.
    pub fn payload(&self) -> Option<&T> {
        match self {
            OperationResult::Success(p) => Some(p),
            OperationResult::Failure(_) => None,
        }
    }

    /// The failure message, if the operation failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            OperationResult::Success(_) => None,
            OperationResult::Failure(m) => Some(m),
        }
    }

    pub fn into_payload(self) -> Option<T> {
        match self {
            OperationResult::Success(p) => Some(p),
            OperationResult::Failure(_) => None,
        }
    }

    /// Converts into a standard `Result`, with the failure message as the error.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            OperationResult::Success(p) => Ok(p),
            OperationResult::Failure(m) => Err(m),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OperationResult<U> {
        match self {
            OperationResult::Success(p) => OperationResult::Success(f(p)),
            OperationResult::Failure(m) => OperationResult::Failure(m),
        }
    }
}
