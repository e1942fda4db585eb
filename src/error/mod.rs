use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::zora::ZoraClientError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("Upstream error: {0}")]
    Upstream(String),
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, err_msg) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::Storage(err) => {
                tracing::error!("Storage failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to store upload".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": err_msg
        }));

        (status, body).into_response()
    }
}

// Body extractors report 413 themselves when the request body limit trips mid-stream
fn body_error(status: StatusCode, message: String) -> ApiError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(message)
    } else {
        ApiError::InvalidRequest(message)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        body_error(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        body_error(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        let status = err.status();
        body_error(status, format!("Malformed multipart body: {}", err.body_text()))
    }
}

// ZoraClientError to ApiError conversion implementation
impl From<ZoraClientError> for ApiError {
    fn from(err: ZoraClientError) -> Self {
        match err {
            ZoraClientError::NotFound(msg) => ApiError::NotFound(msg),
            ZoraClientError::InvalidInput(msg) => ApiError::InvalidRequest(msg),
            other => ApiError::Upstream(other.to_string()),
        }
    }
}
