//! Widget error type.
//!
//! Every fallible path in the crate (wire decoding, socket setup, sends, and
//! configuration) reports through [`ChatError`]. Each variant carries a stable
//! machine code so console diagnostics stay greppable.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("malformed inbound payload: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode outbound payload: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("websocket error: {0}")]
    Socket(String),
    #[error("channel is not connected")]
    NotConnected,
    #[error("invalid widget config: {0}")]
    Config(String),
}

impl ChatError {
    /// Stable code for log lines and tests.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Decode(_) => "E_DECODE",
            Self::Encode(_) => "E_ENCODE",
            Self::Socket(_) => "E_SOCKET",
            Self::NotConnected => "E_NOT_CONNECTED",
            Self::Config(_) => "E_CONFIG",
        }
    }
}
