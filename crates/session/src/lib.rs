//! `satchel-session` — host boundary for the transfer core.
//!
//! Everything the excluded presentation layer owes the core lives here:
//! resolving user input into typed values, a demo actor registry standing in
//! for the game scene, and chat-line rendering of transfer notices.

pub mod chat;
pub mod input;
pub mod scene;
