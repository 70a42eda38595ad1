//! In-process store implementations.
//!
//! The platform treats the document database as an external collaborator
//! reachable only through the traits in [`super::traits`]; these
//! implementations keep everything behind a `tokio::sync::RwLock` so the
//! server runs self-contained in development and tests.

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use sewa_domain::{
    ApplicationStatus, BlogPost, Group, Issue, IssueStatus, Job, JobApplication, Ngo, NgoStatus,
    Provider, UserProfile,
};

use super::traits::{
    ApplicationStore, BlogStore, GroupStore, IssueStore, JobStore, NgoStore, SmsGateway, UserStore,
};

// =============================================================================
// Users
// =============================================================================

#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<UserProfile>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.email.as_deref() == Some(email))
            .cloned())
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<UserProfile>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.phone_number.as_deref() == Some(phone_number))
            .cloned())
    }

    async fn find_by_provider(
        &self,
        provider: Provider,
        provider_id: &str,
    ) -> Result<Option<UserProfile>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.provider == provider && u.provider_id.as_deref() == Some(provider_id))
            .cloned())
    }

    async fn insert(&self, user: UserProfile) -> Result<UserProfile> {
        let mut users = self.users.write().await;
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: UserProfile) -> Result<UserProfile> {
        let mut users = self.users.write().await;
        if let Some(slot) = users.iter_mut().find(|u| u.id == user.id) {
            *slot = user.clone();
        }
        Ok(user)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.users.read().await.len() as u64)
    }
}

// =============================================================================
// Issues
// =============================================================================

#[derive(Default)]
pub struct MemoryIssueStore {
    issues: RwLock<Vec<Issue>>,
}

impl MemoryIssueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IssueStore for MemoryIssueStore {
    async fn list(&self) -> Result<Vec<Issue>> {
        let mut issues = self.issues.read().await.clone();
        issues.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(issues)
    }

    async fn insert(&self, issue: Issue) -> Result<Issue> {
        let mut issues = self.issues.write().await;
        issues.push(issue.clone());
        Ok(issue)
    }

    async fn count_by_status(&self, status: IssueStatus) -> Result<u64> {
        let issues = self.issues.read().await;
        Ok(issues.iter().filter(|i| i.status == status).count() as u64)
    }
}

// =============================================================================
// NGOs
// =============================================================================

#[derive(Default)]
pub struct MemoryNgoStore {
    ngos: RwLock<Vec<Ngo>>,
}

impl MemoryNgoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NgoStore for MemoryNgoStore {
    async fn list_by_status(&self, status: NgoStatus) -> Result<Vec<Ngo>> {
        let ngos = self.ngos.read().await;
        Ok(ngos.iter().filter(|n| n.status == status).cloned().collect())
    }

    async fn insert(&self, ngo: Ngo) -> Result<Ngo> {
        let mut ngos = self.ngos.write().await;
        ngos.push(ngo.clone());
        Ok(ngo)
    }

    async fn set_status(&self, id: Uuid, status: NgoStatus) -> Result<Option<Ngo>> {
        let mut ngos = self.ngos.write().await;
        Ok(ngos.iter_mut().find(|n| n.id == id).map(|n| {
            n.status = status;
            n.clone()
        }))
    }

    async fn count_by_status(&self, status: NgoStatus) -> Result<u64> {
        let ngos = self.ngos.read().await;
        Ok(ngos.iter().filter(|n| n.status == status).count() as u64)
    }
}

// =============================================================================
// Blog posts
// =============================================================================

#[derive(Default)]
pub struct MemoryBlogStore {
    posts: RwLock<Vec<BlogPost>>,
}

impl MemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogStore for MemoryBlogStore {
    async fn list(&self) -> Result<Vec<BlogPost>> {
        let posts = self.posts.read().await;
        Ok(posts.iter().rev().cloned().collect())
    }

    async fn insert(&self, post: BlogPost) -> Result<BlogPost> {
        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        Ok(post)
    }
}

// =============================================================================
// Groups
// =============================================================================

#[derive(Default)]
pub struct MemoryGroupStore {
    groups: RwLock<Vec<Group>>,
}

impl MemoryGroupStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GroupStore for MemoryGroupStore {
    async fn list(&self) -> Result<Vec<Group>> {
        Ok(self.groups.read().await.clone())
    }

    async fn insert(&self, group: Group) -> Result<Group> {
        let mut groups = self.groups.write().await;
        groups.push(group.clone());
        Ok(group)
    }
}

// =============================================================================
// Jobs
// =============================================================================

#[derive(Default)]
pub struct MemoryJobStore {
    jobs: RwLock<Vec<Job>>,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn list(&self) -> Result<Vec<Job>> {
        let mut jobs = self.jobs.read().await.clone();
        jobs.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
        Ok(jobs)
    }

    async fn insert(&self, job: Job) -> Result<Job> {
        let mut jobs = self.jobs.write().await;
        jobs.push(job.clone());
        Ok(job)
    }

    async fn increment_applicants(&self, id: Uuid) -> Result<Option<Job>> {
        let mut jobs = self.jobs.write().await;
        Ok(jobs.iter_mut().find(|j| j.id == id).map(|j| {
            j.applicants_count += 1;
            j.clone()
        }))
    }
}

// =============================================================================
// Job applications
// =============================================================================

#[derive(Default)]
pub struct MemoryApplicationStore {
    applications: RwLock<Vec<JobApplication>>,
}

impl MemoryApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApplicationStore for MemoryApplicationStore {
    async fn list_for_job(&self, job_id: Uuid) -> Result<Vec<JobApplication>> {
        let applications = self.applications.read().await;
        Ok(applications
            .iter()
            .filter(|a| a.job_id == job_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, application: JobApplication) -> Result<JobApplication> {
        let mut applications = self.applications.write().await;
        applications.push(application.clone());
        Ok(application)
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Option<JobApplication>> {
        let mut applications = self.applications.write().await;
        Ok(applications.iter_mut().find(|a| a.id == id).map(|a| {
            a.status = status;
            a.clone()
        }))
    }
}

// =============================================================================
// SMS gateway - development stand-in
// =============================================================================

/// Logs the code instead of delivering it. The real gateway is an external
/// collaborator that is not part of this deployment; the send endpoint
/// additionally echoes the code in its response body.
pub struct LogSmsGateway;

#[async_trait]
impl SmsGateway for LogSmsGateway {
    async fn send_code(&self, phone_number: &str, code: &str) -> Result<()> {
        tracing::info!(phone_number, code, "[SMS MOCK] OTP issued");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sewa_domain::{JobType, Role, Severity};

    fn job(title: &str, age_days: i64) -> Job {
        Job {
            id: Uuid::new_v4(),
            title: title.into(),
            company: "Acme".into(),
            location: "Remote".into(),
            job_type: JobType::Volunteer,
            salary_range: "Unpaid".into(),
            description: String::new(),
            requirements: vec![],
            posted_by: "e1".into(),
            posted_at: Utc::now() - Duration::days(age_days),
            applicants_count: 0,
        }
    }

    #[tokio::test]
    async fn issues_list_newest_first() {
        let store = MemoryIssueStore::new();
        for (i, ts) in [(1, 100), (2, 300), (3, 200)] {
            store
                .insert(Issue {
                    id: Uuid::new_v4(),
                    category: format!("cat{i}"),
                    severity: Severity::Low,
                    description: String::new(),
                    status: IssueStatus::Pending,
                    timestamp: ts,
                    location: None,
                })
                .await
                .unwrap();
        }
        let listed = store.list().await.unwrap();
        let stamps: Vec<i64> = listed.iter().map(|i| i.timestamp).collect();
        assert_eq!(stamps, vec![300, 200, 100]);
    }

    #[tokio::test]
    async fn jobs_list_newest_first_and_counter_bumps() {
        let store = MemoryJobStore::new();
        let old = store.insert(job("old", 2)).await.unwrap();
        let new = store.insert(job("new", 0)).await.unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed[0].id, new.id);
        assert_eq!(listed[1].id, old.id);

        let bumped = store.increment_applicants(old.id).await.unwrap().unwrap();
        assert_eq!(bumped.applicants_count, 1);
        assert!(store
            .increment_applicants(Uuid::new_v4())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn ngo_moderation_moves_between_status_lists() {
        let store = MemoryNgoStore::new();
        let ngo = store
            .insert(Ngo {
                id: Uuid::new_v4(),
                name: "Helping Hands".into(),
                cause: "Health".into(),
                description: String::new(),
                image: None,
                raised: 0,
                goal: 10_000,
                status: NgoStatus::Pending,
                date: "2024-03-01".into(),
            })
            .await
            .unwrap();

        assert_eq!(store.list_by_status(NgoStatus::Pending).await.unwrap().len(), 1);
        assert!(store.list_by_status(NgoStatus::Approved).await.unwrap().is_empty());

        store.set_status(ngo.id, NgoStatus::Approved).await.unwrap();
        assert!(store.list_by_status(NgoStatus::Pending).await.unwrap().is_empty());
        assert_eq!(store.count_by_status(NgoStatus::Approved).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn user_lookups_by_each_key() {
        let store = MemoryUserStore::new();
        let local = UserProfile::local("A".into(), "a@x.org".into(), "pw", Role::Citizen);
        let phone = UserProfile::phone("B".into(), "+15550001234".into());
        store.insert(local.clone()).await.unwrap();
        store.insert(phone.clone()).await.unwrap();

        assert_eq!(
            store.find_by_email("a@x.org").await.unwrap().unwrap().id,
            local.id
        );
        assert_eq!(
            store.find_by_phone("+15550001234").await.unwrap().unwrap().id,
            phone.id
        );
        assert!(store.find_by_email("nobody@x.org").await.unwrap().is_none());
        assert_eq!(store.count().await.unwrap(), 2);
    }
}
