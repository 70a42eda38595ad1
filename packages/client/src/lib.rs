//! Resilient data-access layer for the SEWA platform.
//!
//! Every operation first tries the authoritative REST backend. If the
//! transport fails - connection refused, DNS, timeout - the same operation
//! runs against a locally persisted store seeded with fixture data, after a
//! fixed simulated-latency pause, and the result is tagged
//! [`Origin::Fallback`]. Semantic failures from the server (wrong password,
//! duplicate email) are never swallowed by the fallback: they propagate to
//! the caller verbatim as [`Error::Api`].
//!
//! The local store is never reconciled back to the server when connectivity
//! returns, and concurrent writers are not serialized - both are accepted
//! limitations of the offline mode, not features.

pub mod api;
pub mod auth;
pub mod data;
pub mod error;
pub mod fixtures;
pub mod jobs;
pub mod session;
pub mod state;

pub use api::{ApiClient, ClientConfig, Origin, Sourced};
pub use error::Error;
pub use session::SessionContext;
pub use state::{FileStore, MemoryStore, StateStore};
