use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::error::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Resource Not Found: {0}")]
    NotFound(String),

    #[error("Storage Error: {0}")]
    Storage(StoreError),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { kind, .. } => AppError::NotFound(format!("{} not found", kind)),
            StoreError::StorageRead { .. } | StoreError::StorageWrite { .. } => AppError::Storage(err),
            StoreError::ActorCommunication(m) => AppError::Internal(m),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(m) => {
                tracing::warn!(application_error = %self, "Responding with error");
                HttpResponse::BadRequest().json(json!({"error": m}))
            }
            AppError::NotFound(m) => {
                tracing::warn!(application_error = %self, "Responding with error");
                HttpResponse::NotFound().json(json!({"error": m}))
            }
            AppError::Storage(_) | AppError::Internal(_) => {
                tracing::error!(application_error = %self, "Responding with error");
                HttpResponse::InternalServerError().json(json!({"error": "Internal server error"}))
            }
        }
    }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
