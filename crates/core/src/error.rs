//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is an expected, recoverable outcome of a domain operation.
/// When an operation returns one of these, the entity it was called on is
/// unchanged. Infrastructure failures belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A VIN failed the 17-char / forbidden-letter / alphanumeric rule.
    #[error("invalid VIN: {0:?}")]
    InvalidVin(String),

    /// A vehicle status change not present in the transition table.
    #[error("illegal status transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    /// A part constructor was called without its provenance field.
    #[error("missing provenance: `{0}` is required")]
    MissingProvenance(&'static str),

    /// A stock update would leave the quantity negative.
    #[error("cannot remove {requested}: only {available} in stock")]
    InsufficientStock { requested: i64, available: i64 },

    /// A lookup by identifier returned nothing.
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    /// The entity exists but is not in a state that allows the operation.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A constructor or mutator received malformed input.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn invalid_vin(input: impl Into<String>) -> Self {
        Self::InvalidVin(input.into())
    }

    pub fn invalid_transition(from: &'static str, to: &'static str) -> Self {
        Self::InvalidTransition { from, to }
    }

    pub fn missing_provenance(field: &'static str) -> Self {
        Self::MissingProvenance(field)
    }

    pub fn insufficient_stock(requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
