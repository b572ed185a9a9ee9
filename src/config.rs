//! Widget configuration.
//!
//! Defaults match the page markup served by the chat backend. A page may
//! override the socket path and the user-facing strings through `data-*`
//! attributes on the mount element:
//!
//! - `data-socket-path`: websocket path, default `/ws/chat/`
//! - `data-welcome-text`: header text once the channel opens
//! - `data-close-alert`: alert text when the channel closes
//!
//! TRADE-OFFS
//! ==========
//! Reading attributes is browser-only; outside the `csr` build the lookup
//! yields defaults so native tests stay deterministic.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ChatError;

pub const DEFAULT_MOUNT_ID: &str = "chat-widget";
pub const DEFAULT_SOCKET_PATH: &str = "/ws/chat/";
pub const DEFAULT_WELCOME_TEXT: &str = "Welcome to Django Chatbot";
pub const DEFAULT_CLOSE_ALERT: &str = "Socket closed unexpectedly, please reload the page.";

/// Stable element ids the page and stylesheet rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomIds {
    pub header: &'static str,
    pub log: &'static str,
    pub input: &'static str,
    pub submit: &'static str,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            header: "chat-header",
            log: "chat-log",
            input: "chat-message-input",
            submit: "chat-message-submit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub socket_path: String,
    pub welcome_text: String,
    pub close_alert: String,
    pub ids: DomIds,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            socket_path: DEFAULT_SOCKET_PATH.to_owned(),
            welcome_text: DEFAULT_WELCOME_TEXT.to_owned(),
            close_alert: DEFAULT_CLOSE_ALERT.to_owned(),
            ids: DomIds::default(),
        }
    }
}

impl WidgetConfig {
    /// Build config from an attribute lookup, falling back to defaults.
    ///
    /// `attr` receives the full attribute name (e.g. `data-socket-path`).
    /// Blank values count as absent, except for the socket path, which must
    /// be an absolute path when given.
    pub fn from_attrs(attr: impl Fn(&str) -> Option<String>) -> Result<Self, ChatError> {
        let mut config = Self::default();

        if let Some(path) = attr("data-socket-path") {
            config.socket_path = parse_socket_path(&path)?;
        }
        if let Some(text) = non_blank(attr("data-welcome-text")) {
            config.welcome_text = text;
        }
        if let Some(text) = non_blank(attr("data-close-alert")) {
            config.close_alert = text;
        }

        Ok(config)
    }

    /// Read config from the mount element's `data-*` attributes.
    pub fn from_page(mount_id: &str) -> Result<Self, ChatError> {
        #[cfg(feature = "csr")]
        {
            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(mount_id))
            else {
                return Ok(Self::default());
            };
            Self::from_attrs(|name| el.get_attribute(name))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = mount_id;
            Ok(Self::default())
        }
    }
}

fn parse_socket_path(raw: &str) -> Result<String, ChatError> {
    let path = raw.trim();
    if path.is_empty() {
        return Err(ChatError::Config("data-socket-path is empty".into()));
    }
    if !path.starts_with('/') || path.contains("://") {
        return Err(ChatError::Config(format!("data-socket-path must be an absolute path, got '{path}'")));
    }
    Ok(path.to_owned())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
