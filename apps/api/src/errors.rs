use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::gateway::GatewayError;
use crate::session::{ScreenBusy, SessionError};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("A military profile must be translated first")]
    ProfileRequired,

    #[error("Generative service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Malformed generative response: {0}")]
    MalformedResponse(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<GatewayError> for AppError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::ServiceUnavailable(inner) => AppError::ServiceUnavailable(inner.to_string()),
            GatewayError::MalformedResponse(msg) => AppError::MalformedResponse(msg),
        }
    }
}

impl From<ScreenBusy> for AppError {
    fn from(e: ScreenBusy) -> Self {
        AppError::Conflict(e.to_string())
    }
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Completed => AppError::Conflict(e.to_string()),
            SessionError::EmptyAnswer | SessionError::NoQuestions => {
                AppError::Validation(e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::ProfileRequired => (
                StatusCode::PRECONDITION_REQUIRED,
                "PROFILE_REQUIRED",
                "Translate a military profile before generating a roadmap".to_string(),
            ),
            AppError::ServiceUnavailable(msg) => {
                tracing::error!("Generative service unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "SERVICE_UNAVAILABLE",
                    "The AI service could not be reached. Please try again.".to_string(),
                )
            }
            AppError::MalformedResponse(msg) => {
                tracing::error!("Malformed generative response: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_RESPONSE",
                    "The AI service returned an unusable response. Please try again.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
