//! UI components.
//!
//! `chat_widget` is the Leptos component wired to the socket and state;
//! `message_log` renders history to markup.

pub mod chat_widget;
pub mod message_log;
