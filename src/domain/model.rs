use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque country identifier. No validation is applied to its value space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountryCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for CountryCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// One directed shipment: `origin` sent `quantity` units to `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub origin: CountryCode,
    pub destination: CountryCode,
    pub quantity: u64,
}

impl ShipmentRecord {
    pub fn new(
        origin: impl Into<CountryCode>,
        destination: impl Into<CountryCode>,
        quantity: u64,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            quantity,
        }
    }

    pub fn is_intra(&self) -> bool {
        self.origin == self.destination
    }
}

/// Both directions of trade between two countries on a single row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentPair {
    pub country_a: CountryCode,
    pub country_b: CountryCode,
    pub quantity_a_to_b: u64,
    pub quantity_b_to_a: u64,
}

impl ShipmentPair {
    pub fn new(
        country_a: impl Into<CountryCode>,
        country_b: impl Into<CountryCode>,
        quantity_a_to_b: u64,
        quantity_b_to_a: u64,
    ) -> Self {
        Self {
            country_a: country_a.into(),
            country_b: country_b.into(),
            quantity_a_to_b,
            quantity_b_to_a,
        }
    }
}

impl fmt::Display for ShipmentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.origin, self.destination, self.quantity)
    }
}

impl fmt::Display for ShipmentPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <-> {}: {} / {}",
            self.country_a, self.country_b, self.quantity_a_to_b, self.quantity_b_to_a
        )
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub source: Vec<ShipmentRecord>,
    pub export_only: Vec<ShipmentRecord>,
    pub shipment_pairs: Vec<ShipmentPair>,
    pub aggregated_pairs: Option<Vec<ShipmentPair>>,
}
