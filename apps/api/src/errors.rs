use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl AppError {
    /// Status, machine-readable code and the message shown to the user.
    /// Upstream details are logged here and never returned.
    pub fn describe(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(LlmError::Api { status, message }) => {
                tracing::error!("LLM API error (status {status}): {message}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    format!(
                        "The roadmap service returned an error (HTTP {status}). Please try again later."
                    ),
                )
            }
            AppError::Llm(LlmError::SafetyBlocked) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "SAFETY_BLOCKED",
                "The roadmap could not be generated because the request was flagged by safety \
                 filters. Please rephrase your skills and try again."
                    .to_string(),
            ),
            AppError::Llm(LlmError::MalformedResponse(detail)) => {
                tracing::error!("LLM returned an unusable response: {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    "INVALID_RESPONSE",
                    "Received an invalid response from the roadmap service. Please try again."
                        .to_string(),
                )
            }
            AppError::Llm(LlmError::Http(e)) => {
                tracing::error!("LLM transport error: {e}");
                let status = if e.is_timeout() {
                    StatusCode::GATEWAY_TIMEOUT
                } else {
                    StatusCode::BAD_GATEWAY
                };
                (
                    status,
                    "UPSTREAM_UNAVAILABLE",
                    "Could not reach the roadmap service. Please check your connection and try again."
                        .to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.describe();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
