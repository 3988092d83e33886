//! Host-side input handling.
//!
//! The core accepts already-typed values; turning what the user typed into
//! those values happens here.

use satchel_core::{TokenId, TransferError, TransferResult};

/// Parse a user-typed quantity.
///
/// Non-numeric input and non-positive values both map to `InvalidQuantity`,
/// carrying the raw text for the error message.
pub fn parse_quantity(raw: &str) -> TransferResult<i64> {
    let trimmed = raw.trim();
    let quantity: i64 = trimmed
        .parse()
        .map_err(|_| TransferError::invalid_quantity(trimmed))?;
    if quantity <= 0 {
        return Err(TransferError::invalid_quantity(trimmed));
    }
    Ok(quantity)
}

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List registered tokens and display names.
    Actors,
    /// Show one actor's inventory.
    Inventory(TokenId),
    /// Give an item: `give <giver> <receiver> <qty> <item name...>`.
    Give {
        giver: TokenId,
        receiver: TokenId,
        quantity_raw: String,
        item: String,
    },
    Help,
    Quit,
}

impl Command {
    /// Parse a session line. Returns a usage message for malformed input.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err("empty line (try 'help')".to_string());
        };

        match verb {
            "actors" => Ok(Self::Actors),
            "inv" => {
                let token = words
                    .next()
                    .ok_or_else(|| "usage: inv <token>".to_string())?;
                Ok(Self::Inventory(TokenId::from(token)))
            }
            "give" => {
                let giver: TokenId = words.next().ok_or_else(Self::give_usage)?.into();
                let receiver: TokenId = words.next().ok_or_else(Self::give_usage)?.into();
                let quantity_raw = words.next().ok_or_else(Self::give_usage)?.to_string();
                let item = words.collect::<Vec<_>>().join(" ");
                if item.is_empty() {
                    return Err(Self::give_usage());
                }
                Ok(Self::Give {
                    giver,
                    receiver,
                    quantity_raw,
                    item,
                })
            }
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command '{other}' (try 'help')")),
        }
    }

    fn give_usage() -> String {
        "usage: give <giver> <receiver> <qty> <item name...>".to_string()
    }
}
