//! Error types for the receipt service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::FieldError;

// == API Error Enum ==
/// Errors surfaced to HTTP callers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No points are cached under the requested identifier
    #[error("ID not found")]
    NotFound,

    /// Request body is not valid receipt JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Receipt failed field-level validation
    #[error("Receipt failed validation")]
    Validation(Vec<FieldError>),

    /// Identifier could not be derived from the receipt
    #[error("Failed to process receipt: {0}")]
    Processing(#[from] DerivationError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidJson(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            ApiError::Validation(fields) => Json(json!({
                "error": self.to_string(),
                "fields": fields,
            })),
            _ => Json(json!({
                "error": self.to_string()
            })),
        };

        (status, body).into_response()
    }
}

// == Derivation Error ==
/// Failure to compute a receipt identifier.
#[derive(Error, Debug)]
pub enum DerivationError {
    /// Receipt could not be serialized to its canonical form
    #[error("failed to canonicalize receipt: {0}")]
    Canonicalize(#[from] serde_json::Error),
}

// == Store Error ==
/// Failure to construct a cache store.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("cache capacity must be positive, got {0}")]
    InvalidCapacity(usize),
}

// == Result Type Alias ==
/// Convenience Result type for HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
