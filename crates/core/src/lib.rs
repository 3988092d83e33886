//! `satchel-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns,
//! no logging).

pub mod entity;
pub mod error;
pub mod token;
pub mod value_object;

pub use entity::Entity;
pub use error::{TransferError, TransferResult};
pub use token::TokenId;
pub use value_object::ValueObject;
