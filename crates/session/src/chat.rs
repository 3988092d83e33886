//! Chat-line rendering for completed transfers.

use satchel_transfer::TransferNotice;

/// Render a notice as the session chat line.
pub fn chat_line(notice: &TransferNotice) -> String {
    format!(
        "Transfer successful: {} (token: {}) gave {} x '{}' to {} (token: {}).",
        notice.giver_name,
        notice.giver_token,
        notice.quantity,
        notice.item_name,
        notice.receiver_name,
        notice.receiver_token,
    )
}
