//! The chat widget: header, message log, input, and submit button.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use leptos::prelude::*;

use crate::components::message_log::render_log;
use crate::config::WidgetConfig;
use crate::error::ChatError;
use crate::net::chat_socket::{ChatSender, prepare_outbound};
use crate::state::chat::ChatState;
use crate::state::composer::{Composer, is_submit_key};

/// Take the draft and encode it for sending.
///
/// The input is cleared even when the channel is not open, matching what a
/// user sees after pressing submit.
pub fn submit_draft(chat: &ChatState, composer: &mut Composer) -> Result<String, ChatError> {
    let message = composer.submit();
    prepare_outbound(chat, &message)
}

/// Chat widget bound to the page-wide `ChatState` and `ChatSender` contexts.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let sender = expect_context::<RwSignal<ChatSender>>();
    let config = expect_context::<WidgetConfig>();
    let ids = config.ids;

    let composer = RwSignal::new(Composer::default());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus the input once it is mounted.
    Effect::new(move || {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = input_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let do_send = move || {
        let Some(encoded) = composer.try_update(|c| chat.with_untracked(|state| submit_draft(state, c))) else {
            return;
        };
        if let Err(e) = encoded.and_then(|json| sender.with_untracked(|s| s.send(json))) {
            leptos::logging::warn!("chat send failed [{}]: {e}", e.error_code());
        }
    };

    let on_click = move |_| do_send();

    let on_keyup = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key()) {
            do_send();
        }
    };

    view! {
        <div class="chat-widget">
            <h2 id=ids.header class="chat-widget__header">{move || chat.with(|c| c.header.clone())}</h2>
            <div id=ids.log class="chat-widget__log" inner_html=move || chat.with(|c| render_log(&c.messages))></div>
            <div class="chat-widget__input-row">
                <input
                    id=ids.input
                    class="chat-widget__input"
                    type="text"
                    node_ref=input_ref
                    prop:value=move || composer.with(|c| c.draft.clone())
                    on:input=move |ev| composer.update(|c| c.set_draft(event_target_value(&ev)))
                    on:keyup=on_keyup
                />
                <button id=ids.submit class="btn btn--primary chat-widget__send" type="button" on:click=on_click>
                    "Send"
                </button>
            </div>
        </div>
    }
}
