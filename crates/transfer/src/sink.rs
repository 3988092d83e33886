//! Notification seam between the transfer core and presentation collaborators.

use std::sync::Arc;

use satchel_events::EventBus;

use crate::notice::TransferNotice;

/// Receives the notice of a completed transfer.
///
/// `notify` is infallible by contract: a presentation collaborator that has
/// gone away must never fail the transfer that already happened.
pub trait NotificationSink {
    fn notify(&self, notice: &TransferNotice);
}

impl<S> NotificationSink for &S
where
    S: NotificationSink + ?Sized,
{
    fn notify(&self, notice: &TransferNotice) {
        (**self).notify(notice)
    }
}

impl<S> NotificationSink for Arc<S>
where
    S: NotificationSink + ?Sized,
{
    fn notify(&self, notice: &TransferNotice) {
        (**self).notify(notice)
    }
}

/// Discards every notice. Useful for hosts that only consume the receipt.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _notice: &TransferNotice) {}
}

/// Publishes each notice on an event bus for fan-out to subscribers.
#[derive(Debug)]
pub struct BusNotifier<B> {
    bus: B,
}

impl<B> BusNotifier<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }
}

impl<B> NotificationSink for BusNotifier<B>
where
    B: EventBus<TransferNotice>,
{
    fn notify(&self, notice: &TransferNotice) {
        // Fan-out is best effort; the notice stays available to the caller
        // through the receipt even if no subscriber hears it.
        let _ = self.bus.publish(notice.clone());
    }
}
