//! Wire DTOs for the chat websocket.
//!
//! DESIGN
//! ======
//! Outbound frames carry only `text`; the server decides who a reply is
//! attributed to, so `source` is read inbound but never sent. Inbound `text`
//! arrives either as a plain string next to `source`, or as the nested
//! `{"msg", "source"}` object the bot task emits. Both decode to the same
//! [`ChatMessage`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::error::ChatError;
use crate::state::chat::ChatMessage;

/// One user submission, client to server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    pub text: String,
}

impl OutboundMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Serialize to the JSON text frame sent over the socket.
    pub fn encode(&self) -> Result<String, ChatError> {
        serde_json::to_string(self).map_err(ChatError::Encode)
    }
}

/// One chat turn, server to client. Unknown fields are ignored.
#[derive(Clone, Debug, Deserialize)]
struct InboundMessage {
    text: InboundText,
    #[serde(default)]
    source: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum InboundText {
    Plain(String),
    Nested {
        msg: String,
        #[serde(default)]
        source: Option<String>,
    },
}

/// Decode an inbound text frame into a displayable message.
///
/// A `source` inside a nested `text` object wins over a top-level one.
pub fn decode_inbound(payload: &str) -> Result<ChatMessage, ChatError> {
    let inbound: InboundMessage = serde_json::from_str(payload).map_err(ChatError::Decode)?;
    let message = match inbound.text {
        InboundText::Plain(text) => ChatMessage::new(text, inbound.source),
        InboundText::Nested { msg, source } => ChatMessage::new(msg, source.or(inbound.source)),
    };
    Ok(message)
}
