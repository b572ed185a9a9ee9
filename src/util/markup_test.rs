use super::*;

#[test]
fn plain_text_is_unchanged() {
    assert_eq!(escape_html("hello world"), "hello world");
    assert_eq!(escape_html(""), "");
}

#[test]
fn markup_characters_are_escaped() {
    assert_eq!(
        escape_html(r#"<script>alert("x & 'y'")</script>"#),
        "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
    );
}

#[test]
fn existing_entities_are_escaped_again() {
    assert_eq!(escape_html("&lt;"), "&amp;lt;");
}

#[test]
fn non_ascii_passes_through() {
    assert_eq!(escape_html("héllo 👋"), "héllo 👋");
}
