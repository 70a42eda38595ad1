//! Issue reports, NGO listings, blogs, groups and admin operations.

use chrono::Utc;
use uuid::Uuid;

use sewa_domain::{
    AdminStats, BlogPost, Group, Issue, IssueStatus, NewBlogPost, NewIssue, Ngo, NgoStatus,
    UpdateNgoStatus,
};

use crate::api::{ApiClient, Sourced};
use crate::error::Error;
use crate::fixtures;
use crate::state::keys;

impl ApiClient {
    // --- Issue reports ---

    pub async fn submit_issue(&self, req: NewIssue) -> Result<Sourced<Issue>, Error> {
        self.try_or_fallback("/api/reports", self.post("/api/reports", &req), || {
            Ok(Issue {
                id: Uuid::new_v4(),
                category: req.category.clone(),
                severity: req.severity,
                description: req.description.clone(),
                status: IssueStatus::Pending,
                timestamp: Utc::now().timestamp_millis(),
                location: req.location.clone(),
            })
        })
        .await
    }

    pub async fn list_issues(&self) -> Result<Sourced<Vec<Issue>>, Error> {
        // No local issue archive; offline mode starts empty.
        self.try_or_fallback("/api/reports", self.get("/api/reports"), || Ok(Vec::new()))
            .await
    }

    // --- NGOs ---

    pub async fn list_ngos(&self) -> Result<Sourced<Vec<Ngo>>, Error> {
        self.try_or_fallback("/api/ngos", self.get("/api/ngos"), || {
            self.read_seeded(keys::NGOS, fixtures::ngos)
        })
        .await
    }

    // --- Blogs ---

    pub async fn list_blogs(&self) -> Result<Sourced<Vec<BlogPost>>, Error> {
        self.try_or_fallback("/api/blogs", self.get("/api/blogs"), || {
            self.read_seeded(keys::BLOGS, fixtures::blogs)
        })
        .await
    }

    pub async fn create_blog(&self, req: NewBlogPost) -> Result<Sourced<BlogPost>, Error> {
        self.try_or_fallback("/api/blogs", self.post("/api/blogs", &req), || {
            let mut posts = self.read_seeded(keys::BLOGS, fixtures::blogs)?;
            let post = BlogPost {
                id: Uuid::new_v4(),
                title: req.title.clone(),
                author: req.author.clone(),
                content: req.content.clone(),
                date: Utc::now().format("%Y-%m-%d").to_string(),
                likes: 0,
                category: req.category.clone().unwrap_or_else(|| "General".into()),
                image: req.image.clone(),
            };
            posts.insert(0, post.clone());
            self.write_collection(keys::BLOGS, &posts)?;
            Ok(post)
        })
        .await
    }

    // --- Groups ---

    pub async fn list_groups(&self) -> Result<Sourced<Vec<Group>>, Error> {
        self.try_or_fallback("/api/groups", self.get("/api/groups"), || {
            self.read_seeded(keys::GROUPS, fixtures::groups)
        })
        .await
    }

    // --- Admin ---

    pub async fn admin_stats(&self) -> Result<Sourced<AdminStats>, Error> {
        self.try_or_fallback("/api/admin/stats", self.get("/api/admin/stats"), || {
            // Demo numbers for the offline dashboard.
            Ok(AdminStats {
                total_users: 120,
                active_issues: 5,
                resolved_issues: 42,
                pending_ngos: 3,
            })
        })
        .await
    }

    pub async fn pending_ngos(&self) -> Result<Sourced<Vec<Ngo>>, Error> {
        self.try_or_fallback("/api/admin/ngos", self.get("/api/admin/ngos"), || {
            Ok(Vec::new())
        })
        .await
    }

    pub async fn update_ngo_status(
        &self,
        id: Uuid,
        status: NgoStatus,
    ) -> Result<Sourced<Ngo>, Error> {
        let path = format!("/api/admin/ngos/{id}");
        let body = UpdateNgoStatus { status };
        self.try_or_fallback("/api/admin/ngos/:id", self.patch(&path, &body), || {
            let mut ngos = self.read_seeded(keys::NGOS, fixtures::ngos)?;
            let ngo = ngos
                .iter_mut()
                .find(|n| n.id == id)
                .ok_or_else(|| Error::api(404, "NGO not found (Mock Mode)"))?;
            ngo.status = status;
            let updated = ngo.clone();
            self.write_collection(keys::NGOS, &ngos)?;
            Ok(updated)
        })
        .await
    }
}
