//! Transfer error model.

use thiserror::Error;

use crate::token::TokenId;

/// Result type used across the transfer domain.
pub type TransferResult<T> = Result<T, TransferError>;

/// Domain-level transfer error.
///
/// Every variant is a user/input failure: the caller corrects the input and
/// retries. There is no internal/fatal class in this core, and nothing here
/// crosses the boundary as a panic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// A token identifier did not resolve to an actor via the registry.
    #[error("no actor found for token '{token}'")]
    ActorNotFound { token: TokenId },

    /// Giver and receiver resolved to the same actor.
    #[error("giver and receiver are the same actor (token '{token}')")]
    SameActor { token: TokenId },

    /// The item name was empty or whitespace-only.
    #[error("item name cannot be empty")]
    EmptyItemName,

    /// The quantity was non-numeric, zero, or negative.
    #[error("quantity must be a positive integer (got '{given}')")]
    InvalidQuantity { given: String },

    /// The named item is absent from the giver's inventory.
    #[error("item '{item}' not found in inventory")]
    ItemNotFound { item: String },

    /// The giver holds fewer units than requested.
    #[error("not enough '{item}' in inventory: has {held}, needs {requested}")]
    InsufficientQuantity {
        item: String,
        held: i64,
        requested: i64,
    },
}

impl TransferError {
    pub fn actor_not_found(token: impl Into<TokenId>) -> Self {
        Self::ActorNotFound {
            token: token.into(),
        }
    }

    pub fn same_actor(token: impl Into<TokenId>) -> Self {
        Self::SameActor {
            token: token.into(),
        }
    }

    pub fn empty_item_name() -> Self {
        Self::EmptyItemName
    }

    pub fn invalid_quantity(given: impl ToString) -> Self {
        Self::InvalidQuantity {
            given: given.to_string(),
        }
    }

    pub fn item_not_found(item: impl Into<String>) -> Self {
        Self::ItemNotFound { item: item.into() }
    }

    pub fn insufficient_quantity(item: impl Into<String>, held: i64, requested: i64) -> Self {
        Self::InsufficientQuantity {
            item: item.into(),
            held,
            requested,
        }
    }
}
