use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use service::errors::ServiceError;

/// JSON error body: `{"statusCode", "error", "message"}`.
#[derive(Debug, Serialize)]
pub struct JsonApiError {
    #[serde(skip)]
    pub status: StatusCode,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, status_code: status.as_u16(), error, message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let (status, error) = match &e {
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            ServiceError::InvalidType(_) | ServiceError::InvalidValue(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable Entity")
            }
            ServiceError::PreconditionFailed(_) => (StatusCode::PRECONDITION_FAILED, "Precondition Failed"),
            ServiceError::Validation(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
            ServiceError::Db(_) | ServiceError::Model(_) => {
                error!(code = e.code(), err = %e, "catalog store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };
        if status.is_client_error() {
            warn!(code = e.code(), status = status.as_u16(), err = %e, "request rejected");
        }
        Self::new(status, error, Some(e.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
}
