//! Health check endpoint for service monitoring.

use axum::Json;
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: &'static str,

    /// Service name reported to the orchestrator
    pub service: &'static str,
}

/// Liveness probe.
///
/// Polled by the container orchestrator, so it never touches storage and
/// cannot fail while the process is serving requests.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "account-management-api"
/// }
/// ```
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "account-management-api",
    })
}
