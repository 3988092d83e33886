use serde::{Deserialize, Serialize};

use satchel_core::ValueObject;

/// A named, countable unit held in an inventory.
///
/// Constructed only by [`Inventory::add`](crate::Inventory::add), which keeps
/// the quantity invariant: an `Item` inside an inventory always has a strictly
/// positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    quantity: i64,
}

impl Item {
    pub(crate) fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// Item name in its original (first-seen) casing.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub(crate) fn quantity_mut(&mut self) -> &mut i64 {
        &mut self.quantity
    }

    /// Case-insensitive name match (Unicode lowercase folding).
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl ValueObject for Item {}

/// Confirmation of a successful removal: the canonical (stored) item name and
/// the quantity taken out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Removed {
    name: String,
    quantity: i64,
}

impl Removed {
    pub(crate) fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}
