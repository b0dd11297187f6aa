//! Vehicle Identification Number value object.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use yard_core::{DomainError, DomainResult, ValueObject};

/// Required VIN length.
pub const VIN_LENGTH: usize = 17;

const FORBIDDEN: [char; 3] = ['I', 'Q', 'O'];

/// Check a VIN against the identification rules.
///
/// Input is upper-cased first, so the check is case-insensitive. A VIN is
/// valid when it is exactly 17 characters long, contains none of `I`, `Q`,
/// `O`, and every character is in `[A-Z0-9]`.
pub fn validate_vin(vin: &str) -> bool {
    let upper = vin.to_ascii_uppercase();

    if upper.len() != VIN_LENGTH {
        return false;
    }
    if upper.contains(&FORBIDDEN[..]) {
        return false;
    }
    upper
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// A validated, upper-case VIN.
///
/// The only ways to get one are `Vin::parse`, `FromStr` and deserialization,
/// all of which run `validate_vin`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vin(String);

impl Vin {
    pub fn parse(input: &str) -> DomainResult<Self> {
        if !validate_vin(input) {
            return Err(DomainError::invalid_vin(input));
        }
        Ok(Self(input.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Vin {}

impl FromStr for Vin {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Vin {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Vin> for String {
    fn from(value: Vin) -> Self {
        value.0
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Vin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
