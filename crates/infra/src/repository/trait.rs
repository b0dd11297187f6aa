use std::sync::Arc;

use thiserror::Error;

use yard_core::PartNumber;
use yard_parts::Part;
use yard_vehicles::{Vehicle, Vin};

/// Failure inside a persistence backend (not a domain outcome).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Vehicle persistence contract.
///
/// `save` has upsert semantics and echoes back the stored value.
pub trait VehicleRepository: Send + Sync {
    fn find_by_vin(&self, vin: &Vin) -> Result<Option<Vehicle>, RepositoryError>;

    fn save(&self, vehicle: Vehicle) -> Result<Vehicle, RepositoryError>;
}

/// Part persistence contract.
///
/// `save` has upsert semantics and echoes back the stored value.
pub trait PartRepository: Send + Sync {
    fn find_by_part_number(&self, part_number: &PartNumber)
    -> Result<Option<Part>, RepositoryError>;

    fn save(&self, part: Part) -> Result<Part, RepositoryError>;
}

impl<R> VehicleRepository for Arc<R>
where
    R: VehicleRepository + ?Sized,
{
    fn find_by_vin(&self, vin: &Vin) -> Result<Option<Vehicle>, RepositoryError> {
        (**self).find_by_vin(vin)
    }

    fn save(&self, vehicle: Vehicle) -> Result<Vehicle, RepositoryError> {
        (**self).save(vehicle)
    }
}

impl<R> PartRepository for Arc<R>
where
    R: PartRepository + ?Sized,
{
    fn find_by_part_number(
        &self,
        part_number: &PartNumber,
    ) -> Result<Option<Part>, RepositoryError> {
        (**self).find_by_part_number(part_number)
    }

    fn save(&self, part: Part) -> Result<Part, RepositoryError> {
        (**self).save(part)
    }
}
