use chrono::{DateTime, Utc};
use serde::Serialize;

use yard_core::{DomainError, DomainResult, Entity, OwnerId};

use crate::status::VehicleStatus;
use crate::vin::{Vin, validate_vin};

/// Entity: a vehicle held in the yard.
///
/// There is no public constructor: a `Vehicle` only comes into existence
/// through `buy_for_sale`, `buy_for_scrap` or `buy_for_repair`, each of which
/// validates the VIN and fixes the initial status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    vin: Vin,
    make: String,
    model: String,
    year: i32,
    purchase_price: f64,
    sale_price: f64,
    mileage: u32,
    license_plate: Option<String>,
    status: VehicleStatus,
    photos: Vec<String>,
    owner_id: Option<OwnerId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Vehicle {
    #[allow(clippy::too_many_arguments)]
    fn intake(
        vin: &str,
        make: String,
        model: String,
        year: i32,
        purchase_price: f64,
        mileage: u32,
        status: VehicleStatus,
        sale_price: f64,
        license_plate: Option<String>,
    ) -> DomainResult<Self> {
        let vin = Vin::parse(vin)?;
        let now = Utc::now();
        Ok(Self {
            vin,
            make,
            model,
            year,
            purchase_price,
            sale_price,
            mileage,
            license_plate,
            status,
            photos: Vec::new(),
            owner_id: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Intake a vehicle bought for resale; starts `AVAILABLE`.
    #[allow(clippy::too_many_arguments)]
    pub fn buy_for_sale(
        vin: &str,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        purchase_price: f64,
        mileage: u32,
        sale_price: f64,
        license_plate: Option<String>,
    ) -> DomainResult<Self> {
        Self::intake(
            vin,
            make.into(),
            model.into(),
            year,
            purchase_price,
            mileage,
            VehicleStatus::Available,
            sale_price,
            license_plate,
        )
    }

    /// Intake a vehicle bought to be stripped for parts; starts `FOR_DISASSEMBLED`.
    pub fn buy_for_scrap(
        vin: &str,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        purchase_price: f64,
        mileage: u32,
    ) -> DomainResult<Self> {
        Self::intake(
            vin,
            make.into(),
            model.into(),
            year,
            purchase_price,
            mileage,
            VehicleStatus::ForDisassembled,
            0.0,
            None,
        )
    }

    /// Intake a vehicle that needs work before it can be sold; starts `IN_REPAIR`.
    pub fn buy_for_repair(
        vin: &str,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        purchase_price: f64,
        mileage: u32,
    ) -> DomainResult<Self> {
        Self::intake(
            vin,
            make.into(),
            model.into(),
            year,
            purchase_price,
            mileage,
            VehicleStatus::InRepair,
            0.0,
            None,
        )
    }

    /// See [`validate_vin`].
    pub fn validate_vin(vin: &str) -> bool {
        validate_vin(vin)
    }

    /// Move to `next` if the transition table allows it.
    ///
    /// On failure the status and `updated_at` are left untouched.
    pub fn update_status(&mut self, next: VehicleStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::invalid_transition(
                self.status.as_str(),
                next.as_str(),
            ));
        }
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Append a photo reference. Duplicates are kept.
    pub fn add_photo(&mut self, url: impl Into<String>) {
        self.photos.push(url.into());
    }

    pub fn assign_owner(&mut self, owner_id: OwnerId) {
        self.owner_id = Some(owner_id);
    }

    /// Sale price minus purchase price. Negative means a loss.
    pub fn calculate_profit(&self) -> f64 {
        self.sale_price - self.purchase_price
    }

    pub fn is_available_for_sale(&self) -> bool {
        self.status == VehicleStatus::Available
    }

    pub fn can_be_disassembled(&self) -> bool {
        self.status == VehicleStatus::ForDisassembled
    }

    pub fn needs_repair(&self) -> bool {
        self.status == VehicleStatus::InRepair
    }

    pub fn vin(&self) -> &Vin {
        &self.vin
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn purchase_price(&self) -> f64 {
        self.purchase_price
    }

    pub fn sale_price(&self) -> f64 {
        self.sale_price
    }

    pub fn mileage(&self) -> u32 {
        self.mileage
    }

    pub fn license_plate(&self) -> Option<&str> {
        self.license_plate.as_deref()
    }

    pub fn status(&self) -> VehicleStatus {
        self.status
    }

    pub fn photos(&self) -> &[String] {
        &self.photos
    }

    pub fn owner_id(&self) -> Option<&OwnerId> {
        self.owner_id.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Descriptive fields with no cross-field invariant. Status and VIN have
    // no setter.

    pub fn set_make(&mut self, make: impl Into<String>) {
        self.make = make.into();
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    pub fn set_purchase_price(&mut self, purchase_price: f64) {
        self.purchase_price = purchase_price;
    }

    pub fn set_sale_price(&mut self, sale_price: f64) {
        self.sale_price = sale_price;
    }

    pub fn set_mileage(&mut self, mileage: u32) {
        self.mileage = mileage;
    }

    pub fn set_license_plate(&mut self, license_plate: Option<String>) {
        self.license_plate = license_plate;
    }
}

impl Entity for Vehicle {
    type Id = Vin;

    fn id(&self) -> &Self::Id {
        &self.vin
    }
}
