//! Vehicle domain module.
//!
//! Vehicles enter the yard through one of three intake constructors and then
//! move through a fixed status graph. All rules live on the entity itself; no
//! IO, no storage.

pub mod status;
pub mod vehicle;
pub mod vin;

pub use status::VehicleStatus;
pub use vehicle::Vehicle;
pub use vin::{Vin, validate_vin};
