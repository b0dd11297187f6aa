//! Infrastructure layer: persistence boundary and application services.

pub mod repository;
pub mod services;


pub use repository::{InMemoryRepository, PartRepository, RepositoryError, VehicleRepository};
pub use services::{PartService, ServiceError, VehicleService};
