//! Community blog endpoints.

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use sewa_domain::{BlogPost, NewBlogPost};

use crate::error::ApiError;
use crate::kernel::ServerDeps;

pub async fn list(
    Extension(deps): Extension<ServerDeps>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    Ok(Json(deps.blogs.list().await?))
}

pub async fn create(
    Extension(deps): Extension<ServerDeps>,
    Json(req): Json<NewBlogPost>,
) -> Result<(StatusCode, Json<BlogPost>), ApiError> {
    let post = deps
        .blogs
        .insert(BlogPost {
            id: Uuid::new_v4(),
            title: req.title,
            author: req.author,
            content: req.content,
            date: Utc::now().format("%Y-%m-%d").to_string(),
            likes: 0,
            category: req.category.unwrap_or_else(|| "General".into()),
            image: req.image,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(post)))
}
