//! Packing Item
//!
//! A single packing-list entry. Only `packed` changes after creation.

use serde::{Deserialize, Serialize};
use super::error::{DomainError, DomainResult};

/// Opaque item identifier, unique within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How many of an item to pack, always within `Quantity::MIN..=Quantity::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quantity(u8);

impl Quantity {
    pub const MIN: Quantity = Quantity(1);
    pub const MAX: Quantity = Quantity(20);

    pub fn new(value: u8) -> DomainResult<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidInput(format!(
                "quantity {} outside {}..={}",
                value,
                Self::MIN.0,
                Self::MAX.0
            )))
        }
    }

    /// Parse a quantity from a form value such as `"5"`
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let value = raw
            .trim()
            .parse::<u8>()
            .map_err(|e| DomainError::InvalidInput(format!("quantity {:?}: {}", raw, e)))?;
        Self::new(value)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every selectable quantity from 1 up to `max`
    pub fn range_to(max: Quantity) -> impl Iterator<Item = Quantity> {
        (Self::MIN.0..=max.0).map(Quantity)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for Quantity {
    type Error = DomainError;

    fn try_from(value: u8) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<Quantity> for u8 {
    fn from(quantity: Quantity) -> u8 {
        quantity.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A packing-list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Free text, may be empty
    pub description: String,
    /// Number of units to pack
    pub quantity: Quantity,
    /// Whether the item is already in the luggage
    pub packed: bool,
}

impl Item {
    /// Create a new, unpacked item
    pub fn new(id: ItemId, description: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            packed: false,
        }
    }

    /// Copy of this item with `packed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            packed: !self.packed,
            ..self.clone()
        }
    }

    /// Text shown in the list row, e.g. `"5 Socks"`
    pub fn label(&self) -> String {
        format!("{} {}", self.quantity, self.description)
    }
}
