//! Issue report endpoints.

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use sewa_domain::{Issue, IssueStatus, NewIssue};

use crate::error::ApiError;
use crate::kernel::ServerDeps;

pub async fn list(
    Extension(deps): Extension<ServerDeps>,
) -> Result<Json<Vec<Issue>>, ApiError> {
    Ok(Json(deps.issues.list().await?))
}

pub async fn create(
    Extension(deps): Extension<ServerDeps>,
    Json(req): Json<NewIssue>,
) -> Result<(StatusCode, Json<Issue>), ApiError> {
    let issue = deps
        .issues
        .insert(Issue {
            id: Uuid::new_v4(),
            category: req.category,
            severity: req.severity,
            description: req.description,
            status: IssueStatus::Pending,
            timestamp: Utc::now().timestamp_millis(),
            location: req.location,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(issue)))
}
