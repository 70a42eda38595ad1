//! Admin endpoints: platform counters and the NGO moderation queue.

use axum::extract::{Extension, Path};
use axum::Json;
use uuid::Uuid;

use sewa_domain::{AdminStats, IssueStatus, Ngo, NgoStatus, UpdateNgoStatus};

use crate::error::ApiError;
use crate::kernel::ServerDeps;

/// Point-in-time counts computed by full scans. No caching, no
/// incremental counters.
pub async fn stats(Extension(deps): Extension<ServerDeps>) -> Result<Json<AdminStats>, ApiError> {
    let total_users = deps.users.count().await?;
    let active_issues = deps.issues.count_by_status(IssueStatus::Pending).await?;
    let resolved_issues = deps.issues.count_by_status(IssueStatus::Resolved).await?;
    let pending_ngos = deps.ngos.count_by_status(NgoStatus::Pending).await?;

    Ok(Json(AdminStats {
        total_users,
        active_issues,
        resolved_issues,
        pending_ngos,
    }))
}

pub async fn pending_ngos(
    Extension(deps): Extension<ServerDeps>,
) -> Result<Json<Vec<Ngo>>, ApiError> {
    Ok(Json(deps.ngos.list_by_status(NgoStatus::Pending).await?))
}

pub async fn update_ngo_status(
    Extension(deps): Extension<ServerDeps>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNgoStatus>,
) -> Result<Json<Ngo>, ApiError> {
    let ngo = deps
        .ngos
        .set_status(id, req.status)
        .await?
        .ok_or(ApiError::NotFound("NGO"))?;

    Ok(Json(ngo))
}
