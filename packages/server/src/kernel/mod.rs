pub mod deps;
pub mod memory;
pub mod traits;

pub use deps::ServerDeps;
pub use traits::*;
