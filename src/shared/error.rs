//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Storage layer error
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A write targeted a row that no longer exists.
    #[error("Row {0} does not exist")]
    MissingRow(i64),

    /// A value does not fit its `NUMERIC` column.
    #[error("Numeric field overflow in {0}")]
    NumericOverflow(&'static str),
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            // Absence is signalled by status alone.
            AppError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, 10002, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, 10007, msg),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        let body = ErrorResponse {
            code,
            message,
        };

        (status, Json(body)).into_response()
    }
}
