use super::*;
use crate::net::types::decode_inbound;

fn msg(text: &str, source: Option<&str>) -> ChatMessage {
    ChatMessage::new(text, source.map(str::to_owned))
}

// =============================================================
// Treatment
// =============================================================

#[test]
fn bot_messages_get_left_neutral_treatment() {
    let t = Treatment::for_message(&msg("hi", Some("bot")));
    assert_eq!(t, Treatment::Bot);
    assert_eq!(t.justify_class(), "justify-start");
    assert_eq!(t.bubble_class(), "text-gray-700 bg-white border border-gray-200");
}

#[test]
fn user_or_untagged_messages_get_right_accent_treatment() {
    for source in [Some("user"), Some("anything"), None] {
        let t = Treatment::for_message(&msg("hi", source));
        assert_eq!(t, Treatment::User, "source: {source:?}");
        assert_eq!(t.justify_class(), "justify-end");
        assert_eq!(t.bubble_class(), "bg-blue-600 text-white");
    }
}

// =============================================================
// render_log
// =============================================================

#[test]
fn empty_history_renders_empty_list() {
    assert_eq!(render_log(&[]), r#"<ul class="space-y-2"></ul>"#);
}

#[test]
fn single_bot_message_markup() {
    let html = render_log(&[msg("hi", Some("bot"))]);
    assert_eq!(
        html,
        concat!(
            r#"<ul class="space-y-2">"#,
            r#"<li class="flex justify-start">"#,
            r#"<div class="relative max-w-xl px-4 py-2 rounded-lg shadow-md text-gray-700 bg-white border border-gray-200">"#,
            r#"<span class="block font-normal">hi</span></div></li>"#,
            "</ul>"
        )
    );
}

#[test]
fn items_follow_history_order_with_per_item_treatment() {
    let history = [
        msg("first", Some("bot")),
        msg("second", Some("user")),
        msg("third", None),
        msg("fourth", Some("bot")),
    ];
    let html = render_log(&history);

    assert_eq!(html.matches("<li ").count(), history.len());

    let positions: Vec<usize> = ["first", "second", "third", "fourth"]
        .iter()
        .map(|t| html.find(&format!(">{t}<")).expect("text rendered"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let justify: Vec<&str> = html
        .split(r#"<li class="flex "#)
        .skip(1)
        .map(|rest| rest.split('"').next().unwrap_or_default())
        .collect();
    assert_eq!(justify, ["justify-start", "justify-end", "justify-end", "justify-start"]);
}

#[test]
fn render_is_idempotent() {
    let history = vec![msg("a", Some("bot")), msg("b", None)];
    assert_eq!(render_log(&history), render_log(&history));
}

#[test]
fn message_text_is_escaped() {
    let html = render_log(&[msg("<b>bold</b> & co", None)]);
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; co"));
    assert!(!html.contains("<b>"));
}

#[test]
fn full_rebuild_matches_incremental_history() {
    let payloads = [
        r#"{"text":"hello","source":"bot"}"#,
        r#"{"text":"hi","source":"user"}"#,
        r#"{"text":{"msg":"how can I help?","source":"bot"}}"#,
    ];

    let mut history = Vec::new();
    for payload in payloads {
        history.push(decode_inbound(payload).unwrap());
        let html = render_log(&history);
        assert_eq!(html.matches("<li ").count(), history.len());
        assert!(html.ends_with(&format!("{}</span></div></li></ul>", history[history.len() - 1].text)));
    }
}
