//! Websocket lifecycle for the chat widget.
//!
//! One socket is opened per page and never reopened. The task spawned by
//! [`spawn_chat_socket`] owns it: the open event sets the welcome header,
//! each text frame is appended to history, and the end of the connection (for
//! any reason) moves the state to `Closed` and raises the reload alert once.
//!
//! Outbound frames reach the task through an unbounded queue held by
//! [`ChatSender`]. WASM is single-threaded, so socket events and UI handlers
//! never overlap and `ChatState` needs no locking.
//!
//! Browser-only code is gated behind `#[cfg(feature = "csr")]`.

#[cfg(test)]
#[path = "chat_socket_test.rs"]
mod chat_socket_test;

use crate::error::ChatError;
use crate::net::types::OutboundMessage;
use crate::state::chat::ChatState;
#[cfg(feature = "csr")]
use crate::{config::WidgetConfig, net::types::decode_inbound};

/// Encode `message` for the wire, refusing unless the channel is open.
pub fn prepare_outbound(state: &ChatState, message: &OutboundMessage) -> Result<String, ChatError> {
    if !state.is_connected() {
        return Err(ChatError::NotConnected);
    }
    message.encode()
}

/// Handle to the socket task's outbound queue.
///
/// The default handle has no task behind it and rejects every send.
#[derive(Clone, Debug, Default)]
pub struct ChatSender {
    #[cfg(feature = "csr")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl ChatSender {
    /// Queue an encoded frame for sending.
    pub fn send(&self, json: String) -> Result<(), ChatError> {
        #[cfg(feature = "csr")]
        {
            let tx = self.tx.as_ref().ok_or(ChatError::NotConnected)?;
            tx.unbounded_send(json).map_err(|_| ChatError::NotConnected)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = json;
            Err(ChatError::NotConnected)
        }
    }
}

/// Spawn the socket task for `url` as a local async task.
#[cfg(feature = "csr")]
pub fn spawn_chat_socket(
    url: String,
    config: WidgetConfig,
    chat: leptos::prelude::RwSignal<ChatState>,
) -> ChatSender {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();

    leptos::task::spawn_local(async move {
        if let Err(e) = run_socket(&url, &config, chat, rx).await {
            leptos::logging::warn!("chat socket error [{}]: {e}", e.error_code());
        }
        close_channel(chat, &config);
    });

    ChatSender { tx: Some(tx) }
}

/// Move the state to `Closed` and alert if this is the first close.
#[cfg(feature = "csr")]
pub fn close_channel(chat: leptos::prelude::RwSignal<ChatState>, config: &WidgetConfig) {
    use leptos::prelude::Update;

    if chat.try_update(ChatState::on_close).unwrap_or(false) {
        leptos::logging::log!("chat socket closed");
        crate::util::alert::blocking_alert(&config.close_alert);
    }
}

/// Open the socket, then pump frames both ways until either side ends.
#[cfg(feature = "csr")]
async fn run_socket(
    url: &str,
    config: &WidgetConfig,
    chat: leptos::prelude::RwSignal<ChatState>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
) -> Result<(), ChatError> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::futures::WebSocket;
    use gloo_net::websocket::{Message, State};
    use leptos::prelude::Update;
    use std::task::Poll;

    let mut ws = WebSocket::open(url).map_err(|e| ChatError::Socket(e.to_string()))?;

    // The sink becomes ready once the handshake settles; a failed handshake
    // only shows up on the stream, so watch both.
    let early: Option<Message> = futures::future::poll_fn(|cx| {
        if ws.poll_ready_unpin(cx).is_ready() {
            return Poll::Ready(Ok(None));
        }
        match ws.poll_next_unpin(cx) {
            Poll::Ready(Some(Ok(msg))) => Poll::Ready(Ok(Some(msg))),
            Poll::Ready(Some(Err(e))) => Poll::Ready(Err(ChatError::Socket(e.to_string()))),
            Poll::Ready(None) => Poll::Ready(Err(ChatError::Socket("closed during handshake".into()))),
            Poll::Pending => Poll::Pending,
        }
    })
    .await?;

    if early.is_none() && !matches!(ws.state(), State::Open) {
        return Err(ChatError::Socket("handshake failed".into()));
    }

    chat.update(|c| {
        c.on_open(&config.welcome_text);
    });
    leptos::logging::log!("chat socket open: {url}");

    if let Some(msg) = early {
        handle_frame(msg, chat);
    }

    let (mut ws_write, mut ws_read) = ws.split();

    let send_task = async {
        while let Some(json) = rx.next().await {
            if ws_write.send(Message::Text(json)).await.is_err() {
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(msg) => handle_frame(msg, chat),
                Err(e) => {
                    leptos::logging::warn!("chat socket recv: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

#[cfg(feature = "csr")]
fn handle_frame(msg: gloo_net::websocket::Message, chat: leptos::prelude::RwSignal<ChatState>) {
    use gloo_net::websocket::Message;
    use leptos::prelude::Update;

    let Message::Text(text) = msg else {
        return;
    };
    match decode_inbound(&text) {
        Ok(message) => chat.update(|c| c.push_message(message)),
        Err(e) => leptos::logging::warn!("dropping inbound frame [{}]: {e}", e.error_code()),
    }
}
