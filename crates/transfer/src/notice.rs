use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use satchel_core::TokenId;
use satchel_events::Event;

/// Event: a transfer completed.
///
/// Emitted exactly once per successful transfer, never on failure. Formatting
/// this into a chat message, log line, or UI toast is the host's job; the core
/// only guarantees the fields are populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferNotice {
    /// Unique id of this notice (UUIDv7, time-ordered).
    pub notice_id: Uuid,
    pub giver_name: String,
    pub giver_token: TokenId,
    pub receiver_name: String,
    pub receiver_token: TokenId,
    pub item_name: String,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

impl Event for TransferNotice {
    fn event_type(&self) -> &'static str {
        "transfer.completed"
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// Success result of a transfer, for the immediate caller.
///
/// Display names only; hosts that need the tokens subscribe to the
/// [`TransferNotice`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub giver: String,
    pub receiver: String,
    pub item: String,
    pub quantity: i64,
}
