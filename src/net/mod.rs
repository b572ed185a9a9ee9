//! Networking for the chat websocket.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoint` derives the socket URL from the page location, `types` defines
//! the JSON wire schema, and `chat_socket` runs the websocket lifecycle in the
//! browser.

pub mod chat_socket;
pub mod endpoint;
pub mod types;
