//! Literal scenarios for the HTML re-tokenizer and its siblings.

use typomark::html::{retokenize, to_text, typograph_inline};

#[test]
fn test_paragraph() {
    assert_eq!(retokenize("<p>s - s</p>").html, "<p>s&nbsp;&mdash; s</p>");
}

#[test]
fn test_word_hyphen() {
    assert_eq!(retokenize("<p>s- s</p>").html, "<p>s&nbsp;&mdash; s</p>");
}

#[test]
fn test_nbsp_entity() {
    assert_eq!(
        retokenize("<p>s -&nbsp;s</p>").html,
        "<p>s&nbsp;&mdash;\u{a0}s</p>"
    );
}

#[test]
fn test_minus() {
    assert_eq!(retokenize("<p>123-456</p>").html, "<p>123&minus;456</p>");
}

#[test]
fn test_fractions() {
    assert_eq!(
        retokenize("<p>1/2 and 3/4</p>").html,
        "<p>&frac12; and &frac34;</p>"
    );
}

#[test]
fn test_skip_zones() {
    assert_eq!(retokenize("<pre>s - s</pre>").html, "<pre>s - s</pre>");
    assert_eq!(
        retokenize("<pre><p>s - s</p></pre>").html,
        "<pre><p>s - s</p></pre>"
    );
    assert_eq!(
        retokenize("<pre>&lt;html&gt;___&lt;/html&gt;</pre>").html,
        "<pre>&lt;html&gt;___&lt;/html&gt;</pre>"
    );
    assert_eq!(
        retokenize(r#"<p>see <a href="/x">a - b</a> - c</p>"#).html,
        r#"<p>see <a href="/x">a - b</a>&nbsp;&mdash; c</p>"#
    );
}

#[test]
fn test_self_closing_not_expanded() {
    assert_eq!(retokenize("<p>a<br/></p>").html, "<p>a<br/></p>");
}

#[test]
fn test_retokenize_has_no_error() {
    assert!(retokenize("<p>unclosed <b>tags").is_ok());
}

#[test]
fn test_inline_fragment() {
    assert_eq!(
        typograph_inline("<i>a - b</i> <b>c -- d</b>").html,
        "<i>a&nbsp;&mdash; b</i> <b>c&nbsp;&mdash; d</b>"
    );
    assert_eq!(
        typograph_inline("<p>a - b</p><br/>").html,
        "<p>a&nbsp;&mdash; b</p><br/>"
    );
}

#[test]
fn test_text_extraction() {
    assert_eq!(to_text("<h1>a</h1>\n<p>b</p>\n"), "a b");
}

#[test]
fn test_script_body_escaped() {
    assert_eq!(retokenize("<script>a<b</script>").html, "<script>a&lt;b</script>");
}

#[test]
fn test_nested_pre_closes_zone_at_first_close() {
    assert_eq!(
        retokenize("<pre><pre>a</pre> - b</pre>").html,
        "<pre><pre>a</pre>&nbsp;&mdash; b</pre>"
    );
}

#[test]
fn test_inline_ignores_bare_text() {
    assert_eq!(typograph_inline("a - b").html, "a - b");
    assert_eq!(typograph_inline("<p>1/2</p>").html, "<p>1/2</p>");
}

#[test]
fn test_text_outside_elements_dropped() {
    assert_eq!(to_text("a<h1>b</h1>\n<p>c</p>d\n"), "b c");
}
