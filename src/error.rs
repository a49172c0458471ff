//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("missing required fields: {0}")]
    Validation(String),

    #[error("destination address could not be resolved")]
    InvalidAddress,

    #[error("routing provider unavailable")]
    RoutingUnavailable,

    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON body returned for error responses
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION"),
            AppError::InvalidAddress => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_ADDRESS"),
            AppError::RoutingUnavailable => {
                tracing::warn!("routing provider unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, "PROVIDER_ERROR")
            }
            AppError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL")
            }
        };

        let body = ErrorBody {
            error: code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
