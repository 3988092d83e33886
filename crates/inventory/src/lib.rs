//! `satchel-inventory` — items and per-actor inventories.

pub mod inventory;
pub mod item;

pub use inventory::Inventory;
pub use item::{Item, Removed};
