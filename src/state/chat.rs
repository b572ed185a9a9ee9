//! Chat history and channel lifecycle.
//!
//! DESIGN
//! ======
//! One `ChatState` lives for the page, held in an `RwSignal` provided via
//! context. The socket task is its only writer for history and status; the
//! UI reads it to render. History is append-only: messages are never
//! reordered, edited, or removed.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Source tag the server uses for automated replies.
pub const BOT_SOURCE: &str = "bot";

/// Channel lifecycle. `Closed` is terminal; there is no way back to `Connected`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Socket created but not yet open.
    #[default]
    Disconnected,
    /// Handshake completed.
    Connected,
    /// Socket closed for any reason. The page must be reloaded.
    Closed,
}

/// State for the chat widget.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub status: ConnectionStatus,
    /// Header text; empty until the channel opens.
    pub header: String,
    /// Received messages in arrival order.
    pub messages: Vec<ChatMessage>,
}

/// A single received chat turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    /// Sender tag from the server, if any.
    pub source: Option<String>,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, source: Option<String>) -> Self {
        Self { text: text.into(), source }
    }

    pub fn is_bot(&self) -> bool {
        self.source.as_deref() == Some(BOT_SOURCE)
    }
}

impl ChatState {
    /// Mark the channel open and show the welcome header.
    ///
    /// Returns `false` (and changes nothing) once the channel has closed.
    pub fn on_open(&mut self, welcome: &str) -> bool {
        if self.status == ConnectionStatus::Closed {
            return false;
        }
        self.status = ConnectionStatus::Connected;
        welcome.clone_into(&mut self.header);
        true
    }

    /// Append a received message to history.
    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Mark the channel closed.
    ///
    /// Returns `true` only on the transition into `Closed`, so the caller
    /// raises the reload alert once per close.
    pub fn on_close(&mut self) -> bool {
        if self.status == ConnectionStatus::Closed {
            return false;
        }
        self.status = ConnectionStatus::Closed;
        true
    }

    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }
}
