//! Networking modules for the notification endpoints and push stream.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the list and mark-read HTTP calls, `push_client` manages the
//! websocket lifecycle, and `types` defines the shared wire schema.

pub mod api;
pub mod push_client;
pub mod types;
