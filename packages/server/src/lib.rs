//! SEWA backend library.
//!
//! The binary in `main.rs` wires this together; integration tests build the
//! same router against in-memory stores.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod kernel;
pub mod routes;

pub use app::build_app;
pub use config::Config;
pub use error::ApiError;
pub use kernel::ServerDeps;
