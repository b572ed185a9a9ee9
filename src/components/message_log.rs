//! Message log markup.
//!
//! The log is rebuilt from the full history on every change and assigned via
//! `inner_html`, so the DOM always mirrors `ChatState::messages` exactly.
//! Rendering is a pure function of history: same input, same bytes.

#[cfg(test)]
#[path = "message_log_test.rs"]
mod message_log_test;

use std::fmt::Write as _;

use crate::state::chat::ChatMessage;
use crate::util::markup::escape_html;

/// Visual treatment for one log entry, chosen by sender.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Treatment {
    /// Left-aligned, neutral bubble.
    Bot,
    /// Right-aligned, accent bubble.
    User,
}

impl Treatment {
    pub fn for_message(message: &ChatMessage) -> Self {
        if message.is_bot() { Self::Bot } else { Self::User }
    }

    pub fn justify_class(self) -> &'static str {
        match self {
            Self::Bot => "justify-start",
            Self::User => "justify-end",
        }
    }

    pub fn bubble_class(self) -> &'static str {
        match self {
            Self::Bot => "text-gray-700 bg-white border border-gray-200",
            Self::User => "bg-blue-600 text-white",
        }
    }
}

/// Render the whole log as a `<ul>`.
pub fn render_log(messages: &[ChatMessage]) -> String {
    let mut html = String::from(r#"<ul class="space-y-2">"#);
    for message in messages {
        render_item(&mut html, message);
    }
    html.push_str("</ul>");
    html
}

fn render_item(out: &mut String, message: &ChatMessage) {
    let treatment = Treatment::for_message(message);
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        r#"<li class="flex {justify}"><div class="relative max-w-xl px-4 py-2 rounded-lg shadow-md {bubble}"><span class="block font-normal">{text}</span></div></li>"#,
        justify = treatment.justify_class(),
        bubble = treatment.bubble_class(),
        text = escape_html(&message.text),
    );
}
