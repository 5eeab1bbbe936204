//! Request handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use templatehub_compare::ComparisonResult;

use crate::error::ApiError;
use crate::state::AppState;

/// Health check response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" when the server answers.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/templates/{id}/versions/compare/{version_a_id}/{version_b_id}
pub async fn compare_versions(
    State(state): State<AppState>,
    Path((template_id, version_a_id, version_b_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<Json<ComparisonResult>, ApiError> {
    let result = state
        .compare
        .compare_versions(template_id, Some(version_a_id), Some(version_b_id))
        .await?;
    Ok(Json(result))
}
