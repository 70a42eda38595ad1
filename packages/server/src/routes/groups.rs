//! Community group endpoints.

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use sewa_domain::{Group, NewGroup};

use crate::error::ApiError;
use crate::kernel::ServerDeps;

pub async fn list(
    Extension(deps): Extension<ServerDeps>,
) -> Result<Json<Vec<Group>>, ApiError> {
    Ok(Json(deps.groups.list().await?))
}

pub async fn create(
    Extension(deps): Extension<ServerDeps>,
    Json(req): Json<NewGroup>,
) -> Result<(StatusCode, Json<Group>), ApiError> {
    let group = deps
        .groups
        .insert(Group {
            id: Uuid::new_v4(),
            name: req.name,
            description: req.description,
            // The founder counts as the first member.
            members: 1,
            image: req.image,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(group)))
}
