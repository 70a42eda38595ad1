//! Job board operations.

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use sewa_domain::{
    ApplicationStatus, Job, JobApplication, NewApplication, NewJob, UpdateApplicationStatus,
};

use crate::api::{ApiClient, Sourced};
use crate::error::Error;
use crate::fixtures;
use crate::state::keys;

impl ApiClient {
    pub async fn list_jobs(&self) -> Result<Sourced<Vec<Job>>, Error> {
        self.try_or_fallback("/api/jobs", self.get("/api/jobs"), || {
            self.read_seeded(keys::JOBS, fixtures::jobs)
        })
        .await
    }

    pub async fn post_job(&self, req: NewJob) -> Result<Sourced<Job>, Error> {
        self.try_or_fallback("/api/jobs", self.post("/api/jobs", &req), || {
            let mut jobs = self.read_seeded(keys::JOBS, fixtures::jobs)?;
            let job = Job {
                id: Uuid::new_v4(),
                title: req.title.clone(),
                company: req.company.clone(),
                location: req.location.clone(),
                job_type: req.job_type,
                salary_range: req.salary_range.clone(),
                description: req.description.clone(),
                requirements: req.requirements.clone(),
                posted_by: req.posted_by.clone(),
                posted_at: Utc::now(),
                applicants_count: 0,
            };
            jobs.insert(0, job.clone());
            self.write_collection(keys::JOBS, &jobs)?;
            Ok(job)
        })
        .await
    }

    pub async fn list_applicants(
        &self,
        job_id: Uuid,
    ) -> Result<Sourced<Vec<JobApplication>>, Error> {
        let path = format!("/api/jobs/{job_id}/applications");
        self.try_or_fallback("/api/jobs/:id/applications", self.get(&path), || {
            let applications: Vec<JobApplication> = self.read_collection(keys::APPLICATIONS)?;
            Ok(applications
                .into_iter()
                .filter(|a| a.job_id == job_id)
                .collect())
        })
        .await
    }

    /// File an application. Offline, the local job's applicant counter is
    /// bumped and a pseudo-random match score in 60..=99 stands in for the
    /// AI screening the backend would run.
    pub async fn apply_for_job(
        &self,
        req: NewApplication,
    ) -> Result<Sourced<JobApplication>, Error> {
        self.try_or_fallback(
            "/api/applications",
            self.post("/api/applications", &req),
            || {
                let mut applications: Vec<JobApplication> =
                    self.read_collection(keys::APPLICATIONS)?;
                let application = JobApplication {
                    id: Uuid::new_v4(),
                    job_id: req.job_id,
                    applicant_id: req.applicant_id.clone(),
                    applicant_name: req.applicant_name.clone(),
                    resume_link: req.resume_link.clone(),
                    cover_letter: req.cover_letter.clone(),
                    status: ApplicationStatus::Applied,
                    ai_match_score: Some(rand::thread_rng().gen_range(60..=99)),
                    applied_at: Utc::now(),
                };
                applications.push(application.clone());
                self.write_collection(keys::APPLICATIONS, &applications)?;

                let mut jobs = self.read_seeded(keys::JOBS, fixtures::jobs)?;
                if let Some(job) = jobs.iter_mut().find(|j| j.id == req.job_id) {
                    job.applicants_count += 1;
                    self.write_collection(keys::JOBS, &jobs)?;
                }
                Ok(application)
            },
        )
        .await
    }

    pub async fn update_application_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Sourced<JobApplication>, Error> {
        let path = format!("/api/applications/{id}/status");
        let body = UpdateApplicationStatus { status };
        self.try_or_fallback("/api/applications/:id/status", self.patch(&path, &body), || {
            let mut applications: Vec<JobApplication> = self.read_collection(keys::APPLICATIONS)?;
            let application = applications
                .iter_mut()
                .find(|a| a.id == id)
                .ok_or_else(|| Error::api(404, "Application not found (Mock Mode)"))?;
            application.status = status;
            let updated = application.clone();
            self.write_collection(keys::APPLICATIONS, &applications)?;
            Ok(updated)
        })
        .await
    }
}
