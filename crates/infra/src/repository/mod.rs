//! Persistence boundary.
//!
//! The services only need a find/save contract per entity. Any storage that
//! satisfies `VehicleRepository` / `PartRepository` is a valid backend; the
//! in-memory implementation here is for tests and local development.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryRepository;
pub use r#trait::{PartRepository, RepositoryError, VehicleRepository};
