// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. The persistent
// document store and the SMS gateway are external collaborators; handlers
// only ever see these seams.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use sewa_domain::{
    ApplicationStatus, BlogPost, Group, Issue, IssueStatus, Job, JobApplication, Ngo, NgoStatus,
    Provider, UserProfile,
};

// =============================================================================
// Identity store
// =============================================================================

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>>;

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<UserProfile>>;

    async fn find_by_provider(
        &self,
        provider: Provider,
        provider_id: &str,
    ) -> Result<Option<UserProfile>>;

    /// Insert a new identity. Uniqueness of email/phone (when present) is
    /// the caller's responsibility to pre-check; the store only persists.
    async fn insert(&self, user: UserProfile) -> Result<UserProfile>;

    /// Replace the identity with the same id.
    async fn update(&self, user: UserProfile) -> Result<UserProfile>;

    async fn count(&self) -> Result<u64>;
}

// =============================================================================
// Resource stores
// =============================================================================

#[async_trait]
pub trait IssueStore: Send + Sync {
    /// Newest-first by `timestamp`.
    async fn list(&self) -> Result<Vec<Issue>>;

    async fn insert(&self, issue: Issue) -> Result<Issue>;

    async fn count_by_status(&self, status: IssueStatus) -> Result<u64>;
}

#[async_trait]
pub trait NgoStore: Send + Sync {
    async fn list_by_status(&self, status: NgoStatus) -> Result<Vec<Ngo>>;

    async fn insert(&self, ngo: Ngo) -> Result<Ngo>;

    /// Returns the updated document, or `None` if the id is unknown.
    async fn set_status(&self, id: Uuid, status: NgoStatus) -> Result<Option<Ngo>>;

    async fn count_by_status(&self, status: NgoStatus) -> Result<u64>;
}

#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Newest-first by insertion order.
    async fn list(&self) -> Result<Vec<BlogPost>>;

    async fn insert(&self, post: BlogPost) -> Result<BlogPost>;
}

#[async_trait]
pub trait GroupStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Group>>;

    async fn insert(&self, group: Group) -> Result<Group>;
}

#[async_trait]
pub trait JobStore: Send + Sync {
    /// Newest-first by `posted_at`.
    async fn list(&self) -> Result<Vec<Job>>;

    async fn insert(&self, job: Job) -> Result<Job>;

    /// Bump `applicants_count` by one. Returns the updated job, or `None`
    /// if the id is unknown.
    async fn increment_applicants(&self, id: Uuid) -> Result<Option<Job>>;
}

#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn list_for_job(&self, job_id: Uuid) -> Result<Vec<JobApplication>>;

    async fn insert(&self, application: JobApplication) -> Result<JobApplication>;

    async fn set_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Option<JobApplication>>;
}

// =============================================================================
// SMS gateway (external collaborator - OTP delivery)
// =============================================================================

#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Deliver an OTP code to a phone number.
    async fn send_code(&self, phone_number: &str, code: &str) -> Result<()>;
}
