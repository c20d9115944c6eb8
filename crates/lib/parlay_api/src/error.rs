//! Application error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use parlay_core::fulfillment::FulfillmentError;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Webhook-call failures, one variant per pipeline stage.
///
/// The platform treats every webhook failure the same way, so all variants
/// render identically: HTTP 500 with a plain-text `ERROR: <details>` body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read request body: {0}")]
    BodyRead(String),

    #[error("invalid webhook request: {0}")]
    Decode(serde_json::Error),

    #[error(transparent)]
    Fulfillment(#[from] FulfillmentError),

    #[error("failed to encode webhook response: {0}")]
    Encode(serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "webhook call failed");
        (StatusCode::INTERNAL_SERVER_ERROR, format!("ERROR: {self}")).into_response()
    }
}
