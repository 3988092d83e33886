use chrono::Utc;
use uuid::Uuid;

use satchel_actors::ActorRegistry;
use satchel_core::{TokenId, TransferError, TransferResult};

use crate::notice::{TransferNotice, TransferReceipt};
use crate::sink::{NotificationSink, NullSink};

/// Orchestrates a single give/receive operation across two actors'
/// inventories.
///
/// The registry handle always comes from the caller; there is no process-wide
/// actor set. One `transfer` call runs to completion synchronously - hosts
/// embedding this in a multi-session environment must serialize transfers that
/// touch the same actor.
#[derive(Debug, Default)]
pub struct TransferService<S = NullSink> {
    sink: S,
}

impl TransferService<NullSink> {
    /// Service without a notification sink.
    pub fn new() -> Self {
        Self { sink: NullSink }
    }
}

impl<S: NotificationSink> TransferService<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    /// Move `quantity` units of `item_name` from the giver's inventory to the
    /// receiver's.
    ///
    /// Preconditions are validated before any mutation, in order: both tokens
    /// resolve, giver != receiver, item name non-empty after trimming,
    /// quantity strictly positive. The giver's removal runs first; if it fails
    /// the whole operation fails and neither inventory has changed. On success
    /// one [`TransferNotice`] is emitted through the sink and a receipt is
    /// returned.
    pub fn transfer(
        &self,
        registry: &mut ActorRegistry,
        giver: &TokenId,
        receiver: &TokenId,
        item_name: &str,
        quantity: i64,
    ) -> TransferResult<TransferReceipt> {
        let giver_actor = registry
            .resolve(giver)
            .ok_or_else(|| TransferError::actor_not_found(giver))?;
        let receiver_actor = registry
            .resolve(receiver)
            .ok_or_else(|| TransferError::actor_not_found(receiver))?;

        if giver == receiver {
            return Err(TransferError::same_actor(giver));
        }

        let item = item_name.trim();
        if item.is_empty() {
            return Err(TransferError::empty_item_name());
        }

        if quantity <= 0 {
            return Err(TransferError::invalid_quantity(quantity));
        }

        let giver_name = giver_actor.display_name().to_string();
        let receiver_name = receiver_actor.display_name().to_string();

        // Giver first: a failed removal is the atomicity boundary, nothing has
        // been mutated anywhere.
        let removed = registry
            .resolve_mut(giver)
            .ok_or_else(|| TransferError::actor_not_found(giver))?
            .inventory_mut()
            .remove(item, quantity)?;

        // Under the current Inventory contract this add cannot fail (the
        // quantity was validated above). If its contract is ever widened, the
        // removed units go back to the giver before the error propagates, so
        // the total held across actors is conserved.
        if let Err(err) = registry
            .resolve_mut(receiver)
            .ok_or_else(|| TransferError::actor_not_found(receiver))?
            .inventory_mut()
            .add(removed.name(), quantity)
        {
            if let Some(actor) = registry.resolve_mut(giver) {
                let _ = actor.inventory_mut().add(removed.name(), quantity);
            }
            return Err(err);
        }

        let notice = TransferNotice {
            notice_id: Uuid::now_v7(),
            giver_name: giver_name.clone(),
            giver_token: giver.clone(),
            receiver_name: receiver_name.clone(),
            receiver_token: receiver.clone(),
            item_name: removed.name().to_string(),
            quantity,
            occurred_at: Utc::now(),
        };
        self.sink.notify(&notice);

        Ok(TransferReceipt {
            giver: giver_name,
            receiver: receiver_name,
            item: removed.name().to_string(),
            quantity,
        })
    }
}
