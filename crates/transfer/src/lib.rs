//! `satchel-transfer` — the transfer service and its notification seam.

pub mod notice;
pub mod service;
pub mod sink;

pub use notice::{TransferNotice, TransferReceipt};
pub use service::TransferService;
pub use sink::{BusNotifier, NotificationSink, NullSink};
