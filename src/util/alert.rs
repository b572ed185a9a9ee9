//! Blocking user notifications.
//!
//! In the browser this is `window.alert`, which halts the page until the user
//! dismisses it. Outside the `csr` build it only logs, so state transitions
//! that trigger it can run under native tests.

/// Show `message` in a blocking alert.
pub fn blocking_alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        let shown = web_sys::window().is_some_and(|w| w.alert_with_message(message).is_ok());
        if !shown {
            leptos::logging::warn!("alert unavailable: {message}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        leptos::logging::log!("alert: {message}");
    }
}
