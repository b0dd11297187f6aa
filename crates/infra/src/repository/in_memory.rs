use std::collections::HashMap;
use std::sync::RwLock;

use yard_core::{Entity, PartNumber};
use yard_parts::Part;
use yard_vehicles::{Vehicle, Vin};

use super::r#trait::{PartRepository, RepositoryError, VehicleRepository};

/// In-memory entity store keyed by entity id.
///
/// Intended for tests/dev. `find` hands out clones, so a caller mutating a
/// loaded entity never touches the stored copy until it calls `save`.
#[derive(Debug)]
pub struct InMemoryRepository<E: Entity> {
    inner: RwLock<HashMap<E::Id, E>>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Build a repository pre-loaded with `entities`.
    pub fn with_entities(entities: impl IntoIterator<Item = E>) -> Self {
        let map = entities
            .into_iter()
            .map(|e| (e.id().clone(), e))
            .collect();
        Self {
            inner: RwLock::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Entity + Clone> InMemoryRepository<E> {
    fn get(&self, id: &E::Id) -> Result<Option<E>, RepositoryError> {
        let map = self
            .inner
            .read()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".to_string()))?;
        Ok(map.get(id).cloned())
    }

    fn upsert(&self, entity: E) -> Result<E, RepositoryError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".to_string()))?;
        map.insert(entity.id().clone(), entity.clone());
        Ok(entity)
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleRepository for InMemoryRepository<Vehicle> {
    fn find_by_vin(&self, vin: &Vin) -> Result<Option<Vehicle>, RepositoryError> {
        self.get(vin)
    }

    fn save(&self, vehicle: Vehicle) -> Result<Vehicle, RepositoryError> {
        self.upsert(vehicle)
    }
}

impl PartRepository for InMemoryRepository<Part> {
    fn find_by_part_number(
        &self,
        part_number: &PartNumber,
    ) -> Result<Option<Part>, RepositoryError> {
        self.get(part_number)
    }

    fn save(&self, part: Part) -> Result<Part, RepositoryError> {
        self.upsert(part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yard_core::SupplierId;

    fn vehicle() -> Vehicle {
        Vehicle::buy_for_scrap("2G1RT51839Y100002", "Ford", "Fiesta", 1999, 500.0, 1000).unwrap()
    }

    #[test]
    fn save_then_find_returns_stored_copy() {
        let repo = InMemoryRepository::<Vehicle>::new();
        assert!(repo.is_empty());

        let saved = repo.save(vehicle()).unwrap();
        let found = repo.find_by_vin(saved.vin()).unwrap();
        assert_eq!(found, Some(saved));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn save_upserts_by_id() {
        let repo = InMemoryRepository::<Vehicle>::new();
        let mut v = repo.save(vehicle()).unwrap();
        v.add_photo("https://img/front.jpg");
        repo.save(v.clone()).unwrap();

        assert_eq!(repo.len(), 1);
        let found = repo.find_by_vin(v.vin()).unwrap().unwrap();
        assert_eq!(found.photos(), &["https://img/front.jpg"]);
    }

    #[test]
    fn mutating_a_loaded_entity_does_not_touch_the_store() {
        let part = Part::create_from_supplier(
            "PN-1",
            "Filtro",
            10,
            2.0,
            "A1",
            Some(SupplierId::from("SUP-01")),
            5,
            None,
        )
        .unwrap();
        let repo = InMemoryRepository::with_entities([part]);
        let key = PartNumber::from("PN-1");

        let mut loaded = repo.find_by_part_number(&key).unwrap().unwrap();
        loaded.update_stock(-3).unwrap();

        let stored = repo.find_by_part_number(&key).unwrap().unwrap();
        assert_eq!(stored.quantity_in_stock(), 10);
    }

    #[test]
    fn unknown_key_is_none() {
        let repo = InMemoryRepository::<Part>::default();
        let found = repo.find_by_part_number(&PartNumber::from("nope")).unwrap();
        assert!(found.is_none());
    }
}
