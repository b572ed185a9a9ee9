use super::*;

fn json_error() -> serde_json::Error {
    serde_json::from_str::<serde_json::Value>("{not json").unwrap_err()
}

#[test]
fn error_codes_are_stable() {
    assert_eq!(ChatError::Decode(json_error()).error_code(), "E_DECODE");
    assert_eq!(ChatError::Encode(json_error()).error_code(), "E_ENCODE");
    assert_eq!(ChatError::Socket("x".into()).error_code(), "E_SOCKET");
    assert_eq!(ChatError::NotConnected.error_code(), "E_NOT_CONNECTED");
    assert_eq!(ChatError::Config("x".into()).error_code(), "E_CONFIG");
}

#[test]
fn display_includes_context() {
    let err = ChatError::Socket("handshake refused".into());
    assert_eq!(err.to_string(), "websocket error: handshake refused");

    let err = ChatError::Decode(json_error());
    assert!(err.to_string().starts_with("malformed inbound payload: "));
}
