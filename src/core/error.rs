use thiserror::Error;

/// The provider-fault type for all fallible operations in this crate.
///
/// Expected empty outcomes ("no data found") are never reported through this type; they
/// come back as [`OperationResult::Failure`](crate::OperationResult::Failure). A `QdError`
/// means the current operation could not be completed at all.
#[derive(Debug, Error)]
pub enum QdError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-successful HTTP status code.
    #[error("HTTP {status} at {url}: {message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The requested URL, with the auth token redacted.
        url: String,
        /// The provider's own error text when the body carried one, otherwise a generic description.
        message: String,
    },

    /// A provided or configured URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The provider returned a body that is not the JSON document we expected.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value inside an otherwise well-formed payload could not be converted.
    #[error("Parsing failed: {0}")]
    Parsing(String),

    /// No row mapper is registered for the requested data source.
    #[error("This datasource is not supported: {0}")]
    UnsupportedDataSource(String),

    /// The catalog page no longer has the structure the scraper relies on.
    #[error("Unexpected catalog page structure: {0}")]
    Scrape(String),

    /// The client or a request was configured with invalid values.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl QdError {
    /// Returns `true` when the provider answered but the payload could not be understood.
    pub fn is_parsing(&self) -> bool {
        matches!(self, QdError::Json(_) | QdError::Parsing(_))
    }

    /// Returns `true` for failures of the transport itself (network error or non-2xx status).
    pub fn is_transport(&self) -> bool {
        matches!(self, QdError::Http(_) | QdError::Status { .. })
    }

    /// The message reported to callers when a transport failure is degraded to a
    /// [`Failure`](crate::OperationResult::Failure).
    pub(crate) fn transport_message(&self) -> String {
        match self {
            QdError::Http(e) => e.to_string(),
            QdError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
