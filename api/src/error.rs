//! Failure taxonomy for API calls.

use serde_json::Value;
use thiserror::Error;

/// What went wrong with an API call.
///
/// Every screen recovers from these by turning them into a displayed message;
/// none abort the application. [`ApiError::message_or`] implements the shared
/// mapping rule: network problems get the fixed connectivity text, HTTP errors
/// prefer the server-supplied `detail`, everything else falls back to the
/// caller's per-operation message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (offline, DNS, refused).
    #[error("no response from server: {0}")]
    Network(String),

    /// Login answered 2xx but the body carried no access token.
    #[error("login response carried no access token")]
    MissingToken,

    /// Non-success HTTP status, with the server's `detail` when it sent one.
    #[error("HTTP {status}")]
    Http { status: u16, detail: Option<String> },

    /// A 2xx response whose body could not be decoded.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub(crate) fn network(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }

    pub(crate) fn decode(err: reqwest::Error) -> Self {
        Self::Decode(err.to_string())
    }

    /// Build an HTTP error from a status code and the raw response body,
    /// extracting the `detail` message when the body is JSON that carries one.
    pub fn http(status: u16, body: &str) -> Self {
        Self::Http {
            status,
            detail: detail_from_body(body),
        }
    }

    /// The HTTP status, for [`ApiError::Http`] errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server rejected the bearer token. Treated as session
    /// expiry no matter which operation triggered it.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// The server-supplied `detail` text, when present.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Http {
                detail: Some(detail),
                ..
            } => Some(detail),
            _ => None,
        }
    }

    /// The user-facing message for this error, with `fallback` as the
    /// per-operation generic text.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Network(_) => "No se pudo conectar con el servidor".to_string(),
            Self::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Pull the human-readable `detail` out of a JSON error body, if any.
fn detail_from_body(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    json.get("detail")?.as_str().map(str::to_owned)
}
