use chrono::{DateTime, Utc};
use serde::Serialize;

use yard_core::{DomainError, DomainResult, Entity, PartNumber, SupplierId};

/// Where a part came from. Fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Purchased from a supplier.
    Supplier(SupplierId),
    /// Harvested from a disassembled vehicle. The VIN is a plain reference
    /// and is not validated here.
    Disassembly { source_vehicle_vin: String },
}

impl Provenance {
    pub fn supplier_id(&self) -> Option<&SupplierId> {
        match self {
            Provenance::Supplier(id) => Some(id),
            Provenance::Disassembly { .. } => None,
        }
    }

    pub fn source_vehicle_vin(&self) -> Option<&str> {
        match self {
            Provenance::Supplier(_) => None,
            Provenance::Disassembly { source_vehicle_vin } => Some(source_vehicle_vin),
        }
    }
}

/// Entity: a stocked part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    part_number: PartNumber,
    name: String,
    description: Option<String>,
    quantity_in_stock: i64,
    low_stock_threshold: i64,
    unit_price: f64,
    location: String,
    provenance: Provenance,
    compatible_vehicles: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Part {
    #[allow(clippy::too_many_arguments)]
    fn stocked(
        part_number: PartNumber,
        name: String,
        quantity_in_stock: i64,
        unit_price: f64,
        location: String,
        provenance: Provenance,
        low_stock_threshold: i64,
        description: Option<String>,
    ) -> DomainResult<Self> {
        if part_number.is_blank() {
            return Err(DomainError::validation("part number cannot be empty"));
        }
        if quantity_in_stock < 0 {
            return Err(DomainError::validation(format!(
                "initial quantity cannot be negative (got {quantity_in_stock})"
            )));
        }

        let now = Utc::now();
        Ok(Self {
            part_number,
            name,
            description,
            quantity_in_stock,
            low_stock_threshold,
            unit_price,
            location,
            provenance,
            compatible_vehicles: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Create a part purchased from a supplier.
    ///
    /// Fails with `MissingProvenance` when `supplier_id` is absent or blank.
    #[allow(clippy::too_many_arguments)]
    pub fn create_from_supplier(
        part_number: impl Into<PartNumber>,
        name: impl Into<String>,
        quantity_in_stock: i64,
        unit_price: f64,
        location: impl Into<String>,
        supplier_id: Option<SupplierId>,
        low_stock_threshold: i64,
        description: Option<String>,
    ) -> DomainResult<Self> {
        let supplier_id = supplier_id
            .filter(|id| !id.is_blank())
            .ok_or_else(|| DomainError::missing_provenance("supplier_id"))?;

        Self::stocked(
            part_number.into(),
            name.into(),
            quantity_in_stock,
            unit_price,
            location.into(),
            Provenance::Supplier(supplier_id),
            low_stock_threshold,
            description,
        )
    }

    /// Create a part harvested from a disassembled vehicle.
    ///
    /// Fails with `MissingProvenance` when `source_vehicle_vin` is absent or blank.
    #[allow(clippy::too_many_arguments)]
    pub fn create_from_disassembly(
        part_number: impl Into<PartNumber>,
        name: impl Into<String>,
        quantity_in_stock: i64,
        unit_price: f64,
        location: impl Into<String>,
        source_vehicle_vin: Option<String>,
        low_stock_threshold: i64,
        description: Option<String>,
    ) -> DomainResult<Self> {
        let source_vehicle_vin = source_vehicle_vin
            .filter(|vin| !vin.trim().is_empty())
            .ok_or_else(|| DomainError::missing_provenance("source_vehicle_vin"))?;

        Self::stocked(
            part_number.into(),
            name.into(),
            quantity_in_stock,
            unit_price,
            location.into(),
            Provenance::Disassembly { source_vehicle_vin },
            low_stock_threshold,
            description,
        )
    }

    /// Add (`delta > 0`) or remove (`delta < 0`) stock.
    ///
    /// Rejects any change that would leave the quantity negative; quantity and
    /// `updated_at` are only written on success.
    pub fn update_stock(&mut self, delta: i64) -> DomainResult<()> {
        let new_quantity = self
            .quantity_in_stock
            .checked_add(delta)
            .ok_or_else(|| DomainError::validation("stock quantity overflow"))?;

        if new_quantity < 0 {
            return Err(DomainError::insufficient_stock(
                delta.saturating_abs(),
                self.quantity_in_stock,
            ));
        }

        self.quantity_in_stock = new_quantity;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// True iff the alert is enabled (threshold > 0) and stock is at or below it.
    pub fn is_low_stock(&self) -> bool {
        self.low_stock_threshold > 0 && self.quantity_in_stock <= self.low_stock_threshold
    }

    pub fn calculate_total_value(&self) -> f64 {
        self.quantity_in_stock as f64 * self.unit_price
    }

    /// Record `vin` as compatible. No-op if it is already listed.
    pub fn add_compatible_vehicle(&mut self, vin: impl Into<String>) {
        let vin = vin.into();
        if !self.is_compatible_vehicle(&vin) {
            self.compatible_vehicles.push(vin);
        }
    }

    pub fn is_compatible_vehicle(&self, vin: &str) -> bool {
        self.compatible_vehicles.iter().any(|v| v == vin)
    }

    pub fn part_number(&self) -> &PartNumber {
        &self.part_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn quantity_in_stock(&self) -> i64 {
        self.quantity_in_stock
    }

    pub fn low_stock_threshold(&self) -> i64 {
        self.low_stock_threshold
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    pub fn supplier_id(&self) -> Option<&SupplierId> {
        self.provenance.supplier_id()
    }

    pub fn source_vehicle_vin(&self) -> Option<&str> {
        self.provenance.source_vehicle_vin()
    }

    pub fn compatible_vehicles(&self) -> &[String] {
        &self.compatible_vehicles
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Free-form fields. Quantity and provenance have no setter.

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_unit_price(&mut self, unit_price: f64) {
        self.unit_price = unit_price;
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn set_low_stock_threshold(&mut self, low_stock_threshold: i64) {
        self.low_stock_threshold = low_stock_threshold;
    }
}

impl Entity for Part {
    type Id = PartNumber;

    fn id(&self) -> &Self::Id {
        &self.part_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn part_from_supplier() -> Part {
        Part::create_from_supplier(
            "PN-12345",
            "Filtro de Aceite",
            100,
            15.50,
            "A-1-1",
            Some(SupplierId::from("SUP-001")),
            20,
            None,
        )
        .unwrap()
    }

    fn part_from_disassembly() -> Part {
        Part::create_from_disassembly(
            "PN-67890-USED",
            "Puerta Delantera Izquierda",
            1,
            120.0,
            "D-3-5",
            Some("VIN-DESARME-987".to_string()),
            0,
            Some("Color rojo, leve rayón".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn supplier_part_carries_only_supplier_provenance() {
        let p = part_from_supplier();
        assert_eq!(p.name(), "Filtro de Aceite");
        assert_eq!(p.quantity_in_stock(), 100);
        assert_eq!(p.unit_price(), 15.50);
        assert_eq!(p.supplier_id().map(SupplierId::as_str), Some("SUP-001"));
        assert_eq!(p.source_vehicle_vin(), None);
        assert_eq!(p.id().as_str(), "PN-12345");
    }

    #[test]
    fn disassembly_part_carries_only_vin_provenance() {
        let p = part_from_disassembly();
        assert_eq!(p.quantity_in_stock(), 1);
        assert_eq!(p.source_vehicle_vin(), Some("VIN-DESARME-987"));
        assert_eq!(p.description(), Some("Color rojo, leve rayón"));
        assert_eq!(p.supplier_id(), None);
    }

    #[test]
    fn supplier_intake_requires_supplier_id() {
        let err = Part::create_from_supplier("P1", "N1", 1, 1.0, "L1", None, 1, None).unwrap_err();
        assert_eq!(err, DomainError::MissingProvenance("supplier_id"));

        let err = Part::create_from_supplier(
            "P1",
            "N1",
            1,
            1.0,
            "L1",
            Some(SupplierId::from("")),
            1,
            None,
        )
        .unwrap_err();
        assert_eq!(err, DomainError::MissingProvenance("supplier_id"));
    }

    #[test]
    fn disassembly_intake_requires_source_vin() {
        let err =
            Part::create_from_disassembly("P1", "N1", 1, 1.0, "L1", None, 1, None).unwrap_err();
        assert_eq!(err, DomainError::MissingProvenance("source_vehicle_vin"));

        let err = Part::create_from_disassembly("P1", "N1", 1, 1.0, "L1", Some(String::new()), 1, None)
            .unwrap_err();
        assert_eq!(err, DomainError::MissingProvenance("source_vehicle_vin"));
    }

    #[test]
    fn intake_rejects_negative_quantity_and_blank_part_number() {
        let supplier = || Some(SupplierId::from("SUP-001"));

        let err = Part::create_from_supplier("P1", "N1", -1, 1.0, "L1", supplier(), 1, None)
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = Part::create_from_supplier("  ", "N1", 1, 1.0, "L1", supplier(), 1, None)
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn update_stock_adds_and_removes() {
        let mut p = part_from_supplier();
        p.update_stock(25).unwrap();
        assert_eq!(p.quantity_in_stock(), 125);
        p.update_stock(-10).unwrap();
        assert_eq!(p.quantity_in_stock(), 115);
    }

    #[test]
    fn update_stock_rejects_going_negative_and_keeps_state() {
        let mut p = part_from_supplier();
        let before = p.clone();

        let err = p.update_stock(-101).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientStock {
                requested: 101,
                available: 100,
            }
        );
        assert_eq!(p, before);
    }

    #[test]
    fn update_stock_rejects_overflow() {
        let mut p = part_from_supplier();
        assert!(matches!(
            p.update_stock(i64::MAX),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(p.quantity_in_stock(), 100);
    }

    #[test]
    fn low_stock_triggers_at_threshold() {
        let mut p = part_from_supplier();
        assert!(!p.is_low_stock());
        p.update_stock(-80).unwrap();
        assert_eq!(p.quantity_in_stock(), 20);
        assert!(p.is_low_stock());
        p.update_stock(-1).unwrap();
        assert!(p.is_low_stock());
    }

    #[test]
    fn non_positive_threshold_disables_low_stock() {
        let mut p = part_from_disassembly();
        p.set_low_stock_threshold(0);
        assert!(!p.is_low_stock());
        p.set_low_stock_threshold(-10);
        assert!(!p.is_low_stock());
    }

    #[test]
    fn total_value_is_quantity_times_price() {
        assert_eq!(part_from_supplier().calculate_total_value(), 1550.0);
    }

    #[test]
    fn compatible_vehicles_are_deduplicated() {
        let mut p = part_from_supplier();
        let vin = "VIN-COMPAT-111";

        assert!(!p.is_compatible_vehicle(vin));
        p.add_compatible_vehicle(vin);
        assert!(p.is_compatible_vehicle(vin));

        let size = p.compatible_vehicles().len();
        p.add_compatible_vehicle(vin);
        assert_eq!(p.compatible_vehicles().len(), size);

        p.add_compatible_vehicle("1G1RC71839Y100001");
        assert_eq!(p.compatible_vehicles(), &["VIN-COMPAT-111", "1G1RC71839Y100001"]);
    }

    #[test]
    fn setters_leave_stock_and_provenance_alone() {
        let mut p = part_from_supplier();
        p.set_name("Filtro de Aire");
        p.set_unit_price(10.0);
        p.set_location("B-2-2");
        p.set_description(Some("nuevo".to_string()));

        assert_eq!(p.name(), "Filtro de Aire");
        assert_eq!(p.location(), "B-2-2");
        assert_eq!(p.description(), Some("nuevo"));
        assert_eq!(p.calculate_total_value(), 1000.0);
        assert_eq!(p.quantity_in_stock(), 100);
        assert!(matches!(p.provenance(), Provenance::Supplier(_)));
    }

    #[test]
    fn provenance_serializes_as_tagged_variant() {
        let json = serde_json::to_value(part_from_disassembly()).unwrap();
        assert_eq!(
            json["provenance"]["disassembly"]["source_vehicle_vin"],
            "VIN-DESARME-987"
        );
        let json = serde_json::to_value(part_from_supplier()).unwrap();
        assert_eq!(json["provenance"]["supplier"], "SUP-001");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: no sequence of stock updates drives quantity below zero,
        /// and a rejected update changes nothing.
        #[test]
        fn stock_never_goes_negative(
            initial in 0i64..1_000,
            deltas in prop::collection::vec(-500i64..500, 0..50),
        ) {
            let mut p = Part::create_from_supplier(
                "PN-PROP", "prop", initial, 2.5, "Z-0", Some(SupplierId::from("SUP")), 10, None,
            ).unwrap();

            for delta in deltas {
                let before = p.clone();
                match p.update_stock(delta) {
                    Ok(()) => prop_assert_eq!(p.quantity_in_stock(), before.quantity_in_stock() + delta),
                    Err(DomainError::InsufficientStock { requested, available }) => {
                        prop_assert_eq!(requested, delta.abs());
                        prop_assert_eq!(available, before.quantity_in_stock());
                        prop_assert_eq!(&p, &before);
                    }
                    Err(other) => prop_assert!(false, "unexpected error {other:?}"),
                }
                prop_assert!(p.quantity_in_stock() >= 0);
            }
        }

        /// Property: a non-positive threshold never reports low stock.
        #[test]
        fn disabled_threshold_is_never_low(threshold in i64::MIN..=0, quantity in 0i64..10_000) {
            let mut p = part_from_disassembly();
            p.set_low_stock_threshold(threshold);
            p.update_stock(quantity).unwrap();
            prop_assert!(!p.is_low_stock());
        }

        /// Property: adding the same VIN twice has the same effect as once.
        #[test]
        fn add_compatible_vehicle_is_idempotent(vins in prop::collection::vec("[A-Z0-9-]{1,17}", 1..10)) {
            let mut once = part_from_supplier();
            let mut twice = part_from_supplier();
            for vin in &vins {
                once.add_compatible_vehicle(vin.as_str());
                twice.add_compatible_vehicle(vin.as_str());
                twice.add_compatible_vehicle(vin.as_str());
            }
            prop_assert_eq!(once.compatible_vehicles(), twice.compatible_vehicles());
        }
    }
}
