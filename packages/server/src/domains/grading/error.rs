//! Failure classes of a grading request.
//!
//! Every variant is terminal for the request: nothing is retried and nothing
//! degrades into a partial grade.

use std::fmt;

use etsy_client::EtsyError;
use thiserror::Error;

/// Which of the two upstream calls failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamStage {
    ShopLookup,
    ListingsFetch,
}

impl fmt::Display for UpstreamStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamStage::ShopLookup => f.write_str("/shops lookup"),
            UpstreamStage::ListingsFetch => f.write_str("listings fetch"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GradeError {
    /// The `shop` parameter was absent or blank
    #[error("Missing shop")]
    MissingShop,

    /// No API key in the environment
    #[error("Server missing {var}")]
    MissingApiKey { var: String },

    /// Upstream knows no shop by that name
    #[error("No shop found for '{shop_name}'")]
    ShopNotFound { shop_name: String },

    /// Upstream answered with a non-success status; passed through untranslated
    #[error("Etsy {stage} failed: {body}")]
    Upstream {
        stage: UpstreamStage,
        status: u16,
        body: String,
    },

    /// Upstream could not be reached, or its body was not JSON
    #[error("Etsy {stage} failed: {source}")]
    Transport {
        stage: UpstreamStage,
        #[source]
        source: EtsyError,
    },
}

impl GradeError {
    /// Classify a client error raised during `stage`.
    pub fn from_etsy(stage: UpstreamStage, err: EtsyError) -> Self {
        match err {
            EtsyError::Api { status, body } => GradeError::Upstream {
                stage,
                status,
                body,
            },
            source => GradeError::Transport { stage, source },
        }
    }
}
