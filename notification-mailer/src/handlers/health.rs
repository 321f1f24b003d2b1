//! Health check endpoint

use axum::{http::StatusCode, response::IntoResponse};

/// Liveness probe handler
///
/// Returns 200 OK while the process is serving requests.
pub async fn liveness() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
