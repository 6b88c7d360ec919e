use serde::Deserialize;
use url::Url;

use crate::core::client::redact_url;
use crate::core::{OperationResult, QdClient, QdError};

/// How an operation reports a failure of the transport itself
/// (connection error or non-2xx status).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportPolicy {
    /// Raise the transport error as a fault (`Err(QdError)`).
    Fault,
    /// Degrade it to `Ok(OperationResult::Failure(<transport message>))`.
    Failure,
}

impl TransportPolicy {
    /// Applies the policy to an already-logged transport error.
    pub(crate) fn resolve<T>(self, err: QdError) -> Result<OperationResult<T>, QdError> {
        match self {
            TransportPolicy::Fault => Err(err),
            TransportPolicy::Failure => Ok(OperationResult::Failure(err.transport_message())),
        }
    }
}

/// GETs `url` and returns the body of a successful response.
///
/// Only transport failures come back as `Err`: a send/read error as [`QdError::Http`] and a
/// non-2xx status as [`QdError::Status`], carrying the provider's error text when it sent one.
pub(crate) async fn get_text(client: &QdClient, url: &Url, accept: &str) -> Result<String, QdError> {
    tracing::debug!(url = %redact_url(url), "GET");

    let resp = client
        .http()
        .get(url.clone())
        .header("accept", accept)
        .send()
        .await
        .map_err(|e| QdError::Http(e.without_url()))?;

    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| QdError::Http(e.without_url()))?;

    if !status.is_success() {
        return Err(QdError::Status {
            status: status.as_u16(),
            url: redact_url(url),
            message: provider_error_message(&text)
                .unwrap_or_else(|| format!("Unexpected response status: {}", status.as_u16())),
        });
    }

    Ok(text)
}

/// Logs a fault once, where it is detected, and hands it back for propagation.
pub(crate) fn log_fault(operation: &'static str, err: QdError) -> QdError {
    tracing::error!(operation, error = %err, "quandl request failed");
    err
}

/* ------------- Quandl error bodies ------------- */

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    quandl_error: Option<QuandlErrorNode>,
}

#[derive(Deserialize)]
struct QuandlErrorNode {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

fn provider_error_message(body: &str) -> Option<String> {
    let env: ErrorEnvelope = serde_json::from_str(body).ok()?;
    if let Some(node) = env.quandl_error {
        return match (node.code, node.message) {
            (Some(code), Some(msg)) => Some(format!("{code}: {msg}")),
            (None, Some(msg)) => Some(msg),
            (Some(code), None) => Some(code),
            (None, None) => None,
        };
    }
    env.error.filter(|e| !e.is_empty())
}
