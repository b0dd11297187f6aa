//! Application services (orchestration only).
//!
//! Each operation is one lookup, one domain call and one save. Business rules
//! stay on the entities; services never mutate stock or status themselves.

pub mod part_service;
pub mod vehicle_service;

use thiserror::Error;

use yard_core::DomainError;

use crate::repository::RepositoryError;

pub use part_service::PartService;
pub use vehicle_service::VehicleService;

/// Service-level failure.
///
/// Domain outcomes pass through unchanged; storage failures stay separate so
/// callers can tell "not allowed" from "could not persist".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// The domain error, if this is a domain outcome.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            ServiceError::Domain(err) => Some(err),
            ServiceError::Repository(_) => None,
        }
    }
}
