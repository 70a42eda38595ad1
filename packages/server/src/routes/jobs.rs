//! Job board endpoints: listings, applications and pipeline moderation.

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use sewa_domain::{
    ApplicationStatus, Job, JobApplication, NewApplication, NewJob, UpdateApplicationStatus,
};

use crate::error::ApiError;
use crate::kernel::ServerDeps;

pub async fn list(Extension(deps): Extension<ServerDeps>) -> Result<Json<Vec<Job>>, ApiError> {
    Ok(Json(deps.jobs.list().await?))
}

pub async fn create(
    Extension(deps): Extension<ServerDeps>,
    Json(req): Json<NewJob>,
) -> Result<(StatusCode, Json<Job>), ApiError> {
    let job = deps
        .jobs
        .insert(Job {
            id: Uuid::new_v4(),
            title: req.title,
            company: req.company,
            location: req.location,
            job_type: req.job_type,
            salary_range: req.salary_range,
            description: req.description,
            requirements: req.requirements,
            posted_by: req.posted_by,
            posted_at: Utc::now(),
            applicants_count: 0,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(job)))
}

pub async fn list_applications(
    Extension(deps): Extension<ServerDeps>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<Vec<JobApplication>>, ApiError> {
    Ok(Json(deps.applications.list_for_job(job_id).await?))
}

/// File an application and bump the job's applicant counter by one.
pub async fn apply(
    Extension(deps): Extension<ServerDeps>,
    Json(req): Json<NewApplication>,
) -> Result<(StatusCode, Json<JobApplication>), ApiError> {
    deps.jobs
        .increment_applicants(req.job_id)
        .await?
        .ok_or(ApiError::NotFound("Job"))?;

    let application = deps
        .applications
        .insert(JobApplication {
            id: Uuid::new_v4(),
            job_id: req.job_id,
            applicant_id: req.applicant_id,
            applicant_name: req.applicant_name,
            resume_link: req.resume_link,
            cover_letter: req.cover_letter,
            status: ApplicationStatus::Applied,
            ai_match_score: None,
            applied_at: Utc::now(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(application)))
}

pub async fn update_application_status(
    Extension(deps): Extension<ServerDeps>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateApplicationStatus>,
) -> Result<Json<JobApplication>, ApiError> {
    let application = deps
        .applications
        .set_status(id, req.status)
        .await?
        .ok_or(ApiError::NotFound("Application"))?;

    Ok(Json(application))
}
