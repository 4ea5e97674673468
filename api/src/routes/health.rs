//! Health check endpoint

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::ApiState;

/// Service health, including whether storage answered
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` or `degraded`
    pub status: String,
    /// Crate version
    pub version: String,
    /// RFC 3339 time of the check
    pub timestamp: String,
    /// Stored feedback documents, when storage is reachable
    pub stored_feedback: Option<u64>,
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Storage is unreachable", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<Arc<ApiState>>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, stored_feedback) = match state.repository.count().await {
        Ok(count) => (StatusCode::OK, "healthy", Some(count)),
        Err(e) => {
            tracing::warn!("Health check could not reach storage: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", None)
        }
    };

    (
        code,
        Json(HealthResponse {
            status: status.into(),
            version: state.version.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            stored_feedback,
        }),
    )
}
