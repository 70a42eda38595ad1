// HTTP routes
pub mod admin;
pub mod auth;
pub mod blogs;
pub mod groups;
pub mod health;
pub mod jobs;
pub mod ngos;
pub mod reports;
