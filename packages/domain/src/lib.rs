//! Shared data model for the SEWA citizen-welfare platform.
//!
//! Everything that crosses the wire between the backend and the data-access
//! layer lives here: identity types, the civic resource documents, and the
//! request/response DTOs of the REST surface. Wire names are camelCase
//! on the JSON surface.

pub mod dto;
pub mod model;
pub mod user;

pub use dto::*;
pub use model::*;
pub use user::*;
