//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own and are immutable once built.
/// Constructors are expected to validate, so holding a value object means
/// holding a valid value (e.g. a `Vin` that already passed the VIN rules).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
