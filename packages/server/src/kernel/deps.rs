//! Server dependencies (using traits for testability)
//!
//! Central dependency container handed to every route handler. All external
//! services sit behind trait abstractions so tests can swap them out.

use std::sync::Arc;

use crate::auth::OtpStore;

use super::memory::{
    LogSmsGateway, MemoryApplicationStore, MemoryBlogStore, MemoryGroupStore, MemoryIssueStore,
    MemoryJobStore, MemoryNgoStore, MemoryUserStore,
};
use super::traits::{
    ApplicationStore, BlogStore, GroupStore, IssueStore, JobStore, NgoStore, SmsGateway, UserStore,
};

/// Server dependencies accessible to route handlers
#[derive(Clone)]
pub struct ServerDeps {
    pub users: Arc<dyn UserStore>,
    pub issues: Arc<dyn IssueStore>,
    pub ngos: Arc<dyn NgoStore>,
    pub blogs: Arc<dyn BlogStore>,
    pub groups: Arc<dyn GroupStore>,
    pub jobs: Arc<dyn JobStore>,
    pub applications: Arc<dyn ApplicationStore>,
    pub sms: Arc<dyn SmsGateway>,
    /// Pending one-time passwords, keyed by phone number.
    pub otp: Arc<OtpStore>,
}

impl ServerDeps {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        users: Arc<dyn UserStore>,
        issues: Arc<dyn IssueStore>,
        ngos: Arc<dyn NgoStore>,
        blogs: Arc<dyn BlogStore>,
        groups: Arc<dyn GroupStore>,
        jobs: Arc<dyn JobStore>,
        applications: Arc<dyn ApplicationStore>,
        sms: Arc<dyn SmsGateway>,
        otp: Arc<OtpStore>,
    ) -> Self {
        Self {
            users,
            issues,
            ngos,
            blogs,
            groups,
            jobs,
            applications,
            sms,
            otp,
        }
    }

    /// Fully in-process wiring: memory-backed stores, logging SMS gateway.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryIssueStore::new()),
            Arc::new(MemoryNgoStore::new()),
            Arc::new(MemoryBlogStore::new()),
            Arc::new(MemoryGroupStore::new()),
            Arc::new(MemoryJobStore::new()),
            Arc::new(MemoryApplicationStore::new()),
            Arc::new(LogSmsGateway),
            Arc::new(OtpStore::new()),
        )
    }
}
