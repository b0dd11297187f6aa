use yard_core::{DomainError, PartNumber};
use yard_parts::Part;

use super::ServiceError;
use crate::repository::PartRepository;

#[derive(Debug)]
pub struct PartService<R> {
    repository: R,
}

impl<R> PartService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

impl<R: PartRepository> PartService<R> {
    /// Take `quantity_to_remove` units out of stock and persist the part.
    ///
    /// `InsufficientStock` from the entity is returned as-is.
    pub fn remove_stock(
        &self,
        part_number: &PartNumber,
        quantity_to_remove: i64,
    ) -> Result<Part, ServiceError> {
        let mut part = self
            .repository
            .find_by_part_number(part_number)?
            .ok_or_else(|| DomainError::not_found("part", part_number.as_str()))?;

        let delta = quantity_to_remove
            .checked_neg()
            .ok_or_else(|| DomainError::validation("quantity to remove out of range"))?;

        if let Err(err) = part.update_stock(delta) {
            tracing::warn!(%part_number, quantity_to_remove, error = %err, "stock removal rejected");
            return Err(err.into());
        }

        let saved = self.repository.save(part)?;
        tracing::info!(
            %part_number,
            removed = quantity_to_remove,
            remaining = saved.quantity_in_stock(),
            low_stock = saved.is_low_stock(),
            "stock removed"
        );
        Ok(saved)
    }
}
