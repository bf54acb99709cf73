//! Error types for the Etsy client.

use thiserror::Error;

/// Result type for Etsy client operations.
pub type Result<T> = std::result::Result<T, EtsyError>;

/// Etsy client errors.
#[derive(Debug, Error)]
pub enum EtsyError {
    /// Non-2xx response. The body is kept verbatim so callers can surface it.
    #[error("Etsy API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Transport or decoding failure (connection refused, invalid JSON)
    #[error("Etsy request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl EtsyError {
    /// Upstream HTTP status, when upstream answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            EtsyError::Api { status, .. } => Some(*status),
            EtsyError::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
