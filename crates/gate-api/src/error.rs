use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gate_core::DomainError;
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Session store error: {0}")]
    SessionStoreError(String),

    #[error("Template error: {0}")]
    TemplateError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::SessionStoreError(msg) => ApiError::SessionStoreError(msg),
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

impl From<handlebars::TemplateError> for ApiError {
    fn from(err: handlebars::TemplateError) -> Self {
        ApiError::TemplateError(err.to_string())
    }
}

impl From<handlebars::RenderError> for ApiError {
    fn from(err: handlebars::RenderError) -> Self {
        ApiError::TemplateError(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Details stay in the log; clients only see the error class.
        let (status, code) = match &self {
            ApiError::SessionStoreError(msg) => {
                tracing::error!("Session store error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "SESSION_STORE_ERROR")
            }
            ApiError::TemplateError(msg) => {
                tracing::error!("Template error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "TEMPLATE_ERROR")
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = Json(ApiResponse::<()>::error(code, "The request could not be processed"));
        (status, body).into_response()
    }
}
