//! # chatbot-widget
//!
//! Leptos + WASM chat widget for the Django chatbot page. Opens one
//! websocket to `/ws/chat/` on the page's host, renders every received
//! message into the log, and sends what the user types.
//!
//! Wire decoding, state transitions, and markup rendering are plain Rust and
//! tested natively. Browser glue (socket, alert, focus, mounting) is compiled
//! only with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: mount the widget into `#chat-widget`, or the body when
/// the page has no mount element.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::App;
    use crate::config::{DEFAULT_MOUNT_ID, WidgetConfig};

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = WidgetConfig::from_page(DEFAULT_MOUNT_ID).unwrap_or_else(|e| {
        log::warn!("using default widget config [{}]: {e}", e.error_code());
        WidgetConfig::default()
    });

    let mount = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(DEFAULT_MOUNT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match mount {
        Some(el) => leptos::mount::mount_to(el, move || view! { <App config=config/> }).forget(),
        None => leptos::mount::mount_to_body(move || view! { <App config=config/> }),
    }
}
