//! # Adapters Layer
//!
//! Concrete implementations of the driven ports: in-memory stores for
//! tests and single-process wiring, and the system clock. Production
//! deployments back the same ports with the database at the boundary
//! layer.

pub mod memory_store;
pub mod profile_directory;
pub mod time;

pub use memory_store::InMemoryChangeRequestStore;
pub use profile_directory::InMemoryProfileDirectory;
pub use time::SystemTimeSource;
