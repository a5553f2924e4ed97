use atlas_export::rich_text::{Inline, RichText};

#[test]
fn plain_text_strips_markup() {
    let text = RichText::new().bold("Peer Group:").text(" SaaS");
    assert_eq!(text.plain_text(), "Peer Group: SaaS");
}

#[test]
fn line_break_becomes_newline() {
    let text = RichText::new().bold("Expand").line_break().text("Impact: high");
    assert_eq!(text.plain_text(), "Expand\nImpact: high");
    assert_eq!(text.to_string(), "**Expand**<br>Impact: high");
}

#[test]
fn markup_characters_in_content_are_escaped() {
    let text = RichText::new().bold("a*b").text(" <br> \\ done");
    assert_eq!(text.to_string(), "**a\\*b** \\<br> \\\\ done");
    assert_eq!(text.plain_text(), "a*b <br> \\ done");
}

#[test]
fn empty_segments_are_skipped() {
    let text = RichText::new().bold("").text("");
    assert!(text.is_empty());
    assert_eq!(text.inlines(), &[] as &[Inline]);
}
