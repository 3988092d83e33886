//! `satchel-actors` — actors and the host-owned actor registry.

pub mod actor;
pub mod registry;

pub use actor::Actor;
pub use registry::ActorRegistry;
