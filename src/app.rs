//! Root component with context providers and socket startup.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::chat_widget::ChatWidget;
use crate::config::WidgetConfig;
use crate::net::chat_socket::ChatSender;
use crate::state::chat::ChatState;

/// Root application component.
///
/// Provides the widget's shared state and, in the browser, opens the chat
/// socket exactly once for the page.
#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::default());
    let sender = RwSignal::new(ChatSender::default());

    provide_context(chat);
    provide_context(sender);
    provide_context(config.clone());

    #[cfg(feature = "csr")]
    {
        use crate::net::chat_socket::{close_channel, spawn_chat_socket};
        use crate::net::endpoint::page_socket_url;

        match page_socket_url(&config.socket_path) {
            Ok(url) => sender.set(spawn_chat_socket(url, config, chat)),
            Err(e) => {
                leptos::logging::warn!("chat socket not started [{}]: {e}", e.error_code());
                close_channel(chat, &config);
            }
        }
    }

    view! {
        <Title text="Django Chatbot"/>
        <ChatWidget/>
    }
}
