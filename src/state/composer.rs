//! Text input draft and submit behavior.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use crate::net::types::OutboundMessage;

/// `KeyboardEvent.key` value that submits the draft.
pub const SUBMIT_KEY: &str = "Enter";

/// Draft text bound to the message input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composer {
    pub draft: String,
}

impl Composer {
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Take the draft as an outbound message and clear the input.
    ///
    /// Empty and whitespace-only drafts are sent unchanged.
    pub fn submit(&mut self) -> OutboundMessage {
        OutboundMessage::new(std::mem::take(&mut self.draft))
    }
}

/// Whether a key press in the input acts as the submit control.
pub fn is_submit_key(key: &str) -> bool {
    key == SUBMIT_KEY
}
