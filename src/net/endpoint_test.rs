use super::*;

#[test]
fn secure_page_uses_wss() {
    assert_eq!(socket_url("https:", "example.com", "/ws/chat/"), "wss://example.com/ws/chat/");
}

#[test]
fn plain_page_uses_ws() {
    assert_eq!(socket_url("http:", "localhost:8000", "/ws/chat/"), "ws://localhost:8000/ws/chat/");
}

#[test]
fn other_schemes_fall_back_to_ws() {
    assert_eq!(socket_url("file:", "", "/ws/chat/"), "ws:///ws/chat/");
    assert_eq!(socket_url("", "h", "/p"), "ws://h/p");
}

#[test]
fn protocol_match_is_case_insensitive() {
    assert_eq!(socket_url("HTTPS:", "h", "/ws/chat/"), "wss://h/ws/chat/");
}
