//! Public NGO endpoints. Moderation lives under `admin`.

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use sewa_domain::{NewNgo, Ngo, NgoStatus};

use crate::error::ApiError;
use crate::kernel::ServerDeps;

pub async fn list_approved(
    Extension(deps): Extension<ServerDeps>,
) -> Result<Json<Vec<Ngo>>, ApiError> {
    Ok(Json(deps.ngos.list_by_status(NgoStatus::Approved).await?))
}

/// Register an NGO; it enters the moderation queue as `Pending`.
pub async fn create(
    Extension(deps): Extension<ServerDeps>,
    Json(req): Json<NewNgo>,
) -> Result<(StatusCode, Json<Ngo>), ApiError> {
    let ngo = deps
        .ngos
        .insert(Ngo {
            id: Uuid::new_v4(),
            name: req.name,
            cause: req.cause,
            description: req.description,
            image: req.image,
            raised: 0,
            goal: req.goal.unwrap_or(10_000),
            status: NgoStatus::Pending,
            date: Utc::now().format("%Y-%m-%d").to_string(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ngo)))
}
