//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Validates it and calls the account repository
//! 3. Returns HTTP response (JSON, status code)

/// Account management endpoints
pub mod accounts;
/// Liveness endpoint
pub mod health;

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// Plain-text banner at `/`.
pub async fn index() -> &'static str {
    "Account Management API is running!"
}

/// Fallback for unmatched paths, so 404s carry the usual JSON error body.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Resource not found", "code": "not_found" })),
    )
}
