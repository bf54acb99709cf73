//! Grading endpoint.
//!
//! GET /api/grade?shop=<storefront URL or shop name>
//!
//! Success is the `GradeResult` JSON. Every failure is `{ "error": "..." }`
//! with the status of its class; upstream statuses are forwarded as-is.

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domains::grading::{grade_shop, GradeError, GradeResult};
use crate::server::app::AxumAppState;

/// Query of a grade request. Keys may repeat; the first `shop` wins.
#[derive(Debug, Default, PartialEq)]
pub struct GradeQuery {
    /// Storefront URL or bare shop name
    shop: Option<String>,
}

impl GradeQuery {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            shop: pairs
                .into_iter()
                .find(|(key, _)| key == "shop")
                .map(|(_, value)| value),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl GradeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GradeError::MissingShop => StatusCode::BAD_REQUEST,
            GradeError::MissingApiKey { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            GradeError::ShopNotFound { .. } => StatusCode::NOT_FOUND,
            GradeError::Upstream { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            GradeError::Transport { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for GradeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            GradeError::MissingShop | GradeError::ShopNotFound { .. } => {
                tracing::info!(status = status.as_u16(), error = %self, "Grading rejected");
            }
            _ => {
                tracing::warn!(status = status.as_u16(), error = %self, "Grading failed");
            }
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Grade handler
pub async fn grade_handler(
    Extension(state): Extension<AxumAppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<GradeResult>, GradeError> {
    let query = GradeQuery::from_pairs(pairs);
    let result = grade_shop(query.shop.as_deref(), &state.deps).await?;
    Ok(Json(result))
}
