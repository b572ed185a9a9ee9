//! Websocket endpoint derivation from the page location.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

/// Build the websocket URL for `path` on the page's own host.
///
/// `page_protocol` is the `Location.protocol` value (`"https:"`, `"http:"`, ...).
/// Only a secure page selects `wss`; every other scheme gets plain `ws`.
pub fn socket_url(page_protocol: &str, host: &str, path: &str) -> String {
    let scheme = if page_protocol.eq_ignore_ascii_case("https:") { "wss" } else { "ws" };
    format!("{scheme}://{host}{path}")
}

/// Socket URL for the current page.
#[cfg(feature = "csr")]
pub fn page_socket_url(path: &str) -> Result<String, crate::error::ChatError> {
    use crate::error::ChatError;

    let location = web_sys::window()
        .map(|w| w.location())
        .ok_or_else(|| ChatError::Socket("no window".into()))?;
    let protocol = location
        .protocol()
        .map_err(|_| ChatError::Socket("location.protocol unavailable".into()))?;
    let host = location
        .host()
        .map_err(|_| ChatError::Socket("location.host unavailable".into()))?;
    Ok(socket_url(&protocol, &host, path))
}
