use yard_core::{DomainError, OwnerId};
use yard_vehicles::{Vehicle, VehicleStatus, Vin};

use super::ServiceError;
use crate::repository::VehicleRepository;

#[derive(Debug)]
pub struct VehicleService<R> {
    repository: R,
}

impl<R> VehicleService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

impl<R: VehicleRepository> VehicleService<R> {
    /// Reserve an `AVAILABLE` vehicle for `owner_id` and persist it.
    ///
    /// Fails with `NotFound` for an unknown VIN and `InvalidState` for any
    /// other status. Nothing is saved on failure.
    pub fn reserve_vehicle(&self, vin: &Vin, owner_id: OwnerId) -> Result<Vehicle, ServiceError> {
        let mut vehicle = self
            .repository
            .find_by_vin(vin)?
            .ok_or_else(|| DomainError::not_found("vehicle", vin.as_str()))?;

        if !vehicle.is_available_for_sale() {
            tracing::warn!(%vin, status = %vehicle.status(), "reservation rejected");
            return Err(DomainError::invalid_state(format!(
                "vehicle {vin} is {}, only AVAILABLE vehicles can be reserved",
                vehicle.status()
            ))
            .into());
        }

        vehicle.update_status(VehicleStatus::Reserved)?;
        vehicle.assign_owner(owner_id);

        let saved = self.repository.save(vehicle)?;
        tracing::info!(%vin, owner_id = ?saved.owner_id().map(OwnerId::as_str), "vehicle reserved");
        Ok(saved)
    }
}
