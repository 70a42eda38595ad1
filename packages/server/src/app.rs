//! Application setup and server configuration.

use axum::extract::Extension;
use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::{get, patch, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::routes::{admin, auth, blogs, groups, health, jobs, ngos, reports};

/// Build the Axum application router
pub fn build_app(deps: ServerDeps) -> Router {
    // CORS - the SPA may be served from anywhere during development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // Auth
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/oauth", post(auth::oauth))
        .route("/api/auth/otp/send", post(auth::otp_send))
        .route("/api/auth/otp/verify", post(auth::otp_verify))
        .route("/api/auth/guest", post(auth::guest))
        // Issue reports
        .route("/api/reports", get(reports::list).post(reports::create))
        // NGOs
        .route("/api/ngos", get(ngos::list_approved).post(ngos::create))
        // Blogs
        .route("/api/blogs", get(blogs::list).post(blogs::create))
        // Groups
        .route("/api/groups", get(groups::list).post(groups::create))
        // Job board
        .route("/api/jobs", get(jobs::list).post(jobs::create))
        .route("/api/jobs/:id/applications", get(jobs::list_applications))
        .route("/api/applications", post(jobs::apply))
        .route(
            "/api/applications/:id/status",
            patch(jobs::update_application_status),
        )
        // Admin
        .route("/api/admin/stats", get(admin::stats))
        .route("/api/admin/ngos", get(admin::pending_ngos))
        .route("/api/admin/ngos/:id", patch(admin::update_ngo_status))
        // Health check
        .route("/", get(health::health_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(Extension(deps)),
        )
}
