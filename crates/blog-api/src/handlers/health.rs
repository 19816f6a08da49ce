//! Liveness and readiness probes

use axum::{extract::State, http::StatusCode, Json};
use blog_service::dto::{HealthResponse, ReadinessResponse};
use tracing::warn;

use crate::state::AppState;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// GET /health/ready
///
/// 503 until a pooled connection can be checked out.
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let database = match state.pool().acquire().await {
        Ok(_) => true,
        Err(e) => {
            warn!(error = %e, "Database not reachable");
            false
        }
    };

    let status = if database { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status, Json(ReadinessResponse::ready(database)))
}
