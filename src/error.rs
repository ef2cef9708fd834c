//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Storage and validation failures surface as one of these variants, and
/// `IntoResponse` below is the only place they are turned into HTTP.
///
/// # Error Categories
///
/// - **Validation Errors**: malformed or incomplete client input
/// - **Conflict Errors**: a write would duplicate an existing email
/// - **Resource Errors**: requested account does not exist
/// - **Internal Errors**: database or other unexpected failures
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body, field values or path parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("{0}")]
    Validation(String),

    /// Write rejected by the unique constraint on `accounts.email`.
    ///
    /// Returns HTTP 409 Conflict.
    #[error("{0}")]
    Conflict(String),

    /// Requested account does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Account not found")]
    NotFound,

    /// Request body exceeds the configured size limit.
    ///
    /// Returns HTTP 413 Payload Too Large.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Any other unexpected failure, e.g. the request body could not be read.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Machine-readable kind sent alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::Conflict(_) => "conflict",
            AppError::NotFound => "not_found",
            AppError::PayloadTooLarge(_) => "payload_too_large",
            AppError::Database(_) | AppError::Internal(_) => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Malformed JSON, wrong field types and a missing JSON content type are
/// client input problems. Oversized bodies are 413, and any other failure
/// while buffering the body is an internal error.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            ref r if r.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                AppError::PayloadTooLarge(r.body_text())
            }
            JsonRejection::BytesRejection(ref r) => AppError::Internal(r.body_text()),
            other => AppError::Validation(other.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(_: PathRejection) -> Self {
        AppError::Validation("Invalid account id".to_string())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": "Human-readable error message",
///   "code": "error_kind"
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `Validation` → 400 Bad Request
/// - `NotFound` → 404 Not Found
/// - `Conflict` → 409 Conflict
/// - `PayloadTooLarge` → 413 Payload Too Large
/// - `Database` / `Internal` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let message = match &self {
            AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                "An internal error occurred".to_string()
            }
            AppError::Conflict(msg) => {
                tracing::warn!(%msg, "write rejected");
                msg.clone()
            }
            _ => self.to_string(),
        };

        let body = Json(json!({
            "error": message,
            "code": code
        }));

        (status, body).into_response()
    }
}
