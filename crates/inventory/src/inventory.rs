use serde::{Deserialize, Serialize};

use satchel_core::{TransferError, TransferResult};

use crate::item::{Item, Removed};

/// The ordered collection of items owned by one actor.
///
/// Items are unique by case-insensitive name and keep insertion order. The
/// only mutation paths are [`add`](Self::add) and [`remove`](Self::remove);
/// neither may leave an item with a non-positive quantity in the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive exact lookup. No partial or fuzzy matching.
    pub fn find(&self, name: &str) -> Option<&Item> {
        let needle = name.to_lowercase();
        self.items.iter().find(|i| i.name().to_lowercase() == needle)
    }

    /// Add `quantity` units of `name`.
    ///
    /// Merges into an existing case-insensitive match, retaining the stored
    /// casing; otherwise appends a new item at the end. Rejects `quantity <= 0`
    /// with `InvalidQuantity` - that is this operation's only failure mode.
    pub fn add(&mut self, name: &str, quantity: i64) -> TransferResult<()> {
        if quantity <= 0 {
            return Err(TransferError::invalid_quantity(quantity));
        }

        match self.position(name) {
            Some(idx) => *self.items[idx].quantity_mut() += quantity,
            None => self.items.push(Item::new(name, quantity)),
        }

        Ok(())
    }

    /// Remove `quantity` units of `name`.
    ///
    /// Fails with `ItemNotFound` if no item matches, or with
    /// `InsufficientQuantity` (carrying held and requested amounts) if the
    /// stock is short; in either case the inventory is untouched. An item
    /// whose quantity reaches exactly zero is deleted, preserving the order of
    /// the remaining items. Returns the removed name/quantity for
    /// confirmation, in the stored casing.
    pub fn remove(&mut self, name: &str, quantity: i64) -> TransferResult<Removed> {
        if quantity <= 0 {
            return Err(TransferError::invalid_quantity(quantity));
        }

        let idx = self
            .position(name)
            .ok_or_else(|| TransferError::item_not_found(name))?;

        let held = self.items[idx].quantity();
        if held < quantity {
            return Err(TransferError::insufficient_quantity(
                self.items[idx].name(),
                held,
                quantity,
            ));
        }

        let removed = Removed::new(self.items[idx].name(), quantity);
        if held == quantity {
            self.items.remove(idx);
        } else {
            *self.items[idx].quantity_mut() -= quantity;
        }

        Ok(removed)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let needle = name.to_lowercase();
        self.items
            .iter()
            .position(|i| i.name().to_lowercase() == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_appends_new_items_in_insertion_order() {
        let mut inv = Inventory::new();
        inv.add("Health Potion", 5).unwrap();
        inv.add("Mana Potion", 3).unwrap();

        let names: Vec<&str> = inv.items().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Health Potion", "Mana Potion"]);
    }

    #[test]
    fn add_merges_case_insensitively_and_keeps_original_casing() {
        let mut inv = Inventory::new();
        inv.add("Potion", 1).unwrap();
        inv.add("potion", 1).unwrap();

        assert_eq!(inv.len(), 1);
        let item = inv.find("POTION").unwrap();
        assert_eq!(item.name(), "Potion");
        assert_eq!(item.quantity(), 2);
    }

    #[test]
    fn add_rejects_non_positive_quantity() {
        let mut inv = Inventory::new();
        assert!(matches!(
            inv.add("Gold", 0),
            Err(TransferError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            inv.add("Gold", -4),
            Err(TransferError::InvalidQuantity { .. })
        ));
        assert!(inv.is_empty());
    }

    #[test]
    fn find_is_exact_not_fuzzy() {
        let mut inv = Inventory::new();
        inv.add("Health Potion", 5).unwrap();

        assert!(inv.find("health potion").is_some());
        assert!(inv.find("Health").is_none());
    }

    #[test]
    fn remove_missing_item_fails_item_not_found() {
        let mut inv = Inventory::new();
        let err = inv.remove("Sword", 1).unwrap_err();
        assert_eq!(
            err,
            TransferError::ItemNotFound {
                item: "Sword".to_string()
            }
        );
    }

    #[test]
    fn remove_more_than_held_fails_with_held_and_requested() {
        let mut inv = Inventory::new();
        inv.add("Gold", 2).unwrap();

        let err = inv.remove("Gold", 5).unwrap_err();
        assert_eq!(
            err,
            TransferError::InsufficientQuantity {
                item: "Gold".to_string(),
                held: 2,
                requested: 5,
            }
        );
        // Untouched on failure.
        assert_eq!(inv.find("Gold").unwrap().quantity(), 2);
    }

    #[test]
    fn remove_to_zero_deletes_the_record_preserving_order() {
        let mut inv = Inventory::new();
        inv.add("Sword", 1).unwrap();
        inv.add("Health Potion", 5).unwrap();
        inv.add("Shield", 1).unwrap();

        let removed = inv.remove("health potion", 5).unwrap();
        assert_eq!(removed.name(), "Health Potion");
        assert_eq!(removed.quantity(), 5);

        assert!(inv.find("Health Potion").is_none());
        let names: Vec<&str> = inv.items().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Sword", "Shield"]);
    }

    #[test]
    fn partial_remove_decrements_quantity() {
        let mut inv = Inventory::new();
        inv.add("Health Potion", 5).unwrap();

        let removed = inv.remove("Health Potion", 3).unwrap();
        assert_eq!(removed.quantity(), 3);
        assert_eq!(inv.find("Health Potion").unwrap().quantity(), 2);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after any sequence of adds and removes, no item in the
        /// inventory has a non-positive quantity, and names stay unique
        /// case-insensitively.
        #[test]
        fn quantities_stay_strictly_positive(
            ops in prop::collection::vec(
                (prop::sample::select(vec!["Gold", "gold", "Rope", "Torch"]), 1i64..50, prop::bool::ANY),
                1..40,
            )
        ) {
            let mut inv = Inventory::new();

            for (name, qty, is_add) in ops {
                if is_add {
                    inv.add(name, qty).unwrap();
                } else {
                    // Removal may legitimately fail; the inventory must stay
                    // consistent either way.
                    let _ = inv.remove(name, qty);
                }

                for item in inv.items() {
                    prop_assert!(item.quantity() > 0);
                }

                let mut folded: Vec<String> =
                    inv.items().iter().map(|i| i.name().to_lowercase()).collect();
                folded.sort();
                folded.dedup();
                prop_assert_eq!(folded.len(), inv.len());
            }
        }
    }
}
