//! Client-side widget state.
//!
//! DESIGN
//! ======
//! `chat` holds what the server told us (status, history); `composer` holds
//! what the user is typing. Neither touches the DOM, so both are tested
//! natively.

pub mod chat;
pub mod composer;
