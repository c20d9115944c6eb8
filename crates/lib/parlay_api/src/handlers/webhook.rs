//! Fulfillment webhook handler.

use axum::body::to_bytes;
use axum::extract::Request;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::info;

use parlay_core::fulfillment;
use parlay_core::models::fulfillment::WebhookRequest;

use crate::error::{AppError, AppResult};

/// `POST /webhook` — one fulfillment exchange: decode the request, build the
/// reply, encode it back.
///
/// The body is read and decoded by hand rather than through the `Json`
/// extractor so each stage (read, decode, respond, encode) fails as its own
/// [`AppError`] variant. Decoding is tolerant: unknown fields are discarded
/// and absent fields default to unset.
pub async fn webhook_handler(request: Request) -> AppResult<Response> {
    let body = to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|e| AppError::BodyRead(e.to_string()))?;

    let webhook_request: WebhookRequest =
        serde_json::from_slice(&body).map_err(AppError::Decode)?;
    info!(request = ?webhook_request, "webhook request");

    let webhook_response = fulfillment::respond(&webhook_request)?;
    info!(response = ?webhook_response, "webhook response");

    let encoded = serde_json::to_vec(&webhook_response).map_err(AppError::Encode)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        encoded,
    )
        .into_response())
}
