use kindlify::markdown_to_html;
use kindlify::pipeline::PAGE_SEPARATOR;

#[test]
fn empty_input_is_one_empty_paragraph() {
    assert_eq!(markdown_to_html(""), "<p></p>");
}

#[test]
fn plain_text_wraps_once() {
    assert_eq!(
        markdown_to_html("hello world\nsecond line"),
        "<p>hello world<br>second line</p>"
    );
}

#[test]
fn headers_map_to_levels() {
    assert!(markdown_to_html("# Title").contains("<h1>Title</h1>"));
    assert!(markdown_to_html("## Title").contains("<h2>Title</h2>"));
    assert!(markdown_to_html("### Title").contains("<h3>Title</h3>"));
}

#[test]
fn strong_and_emphasis() {
    assert!(markdown_to_html("**bold**").contains("<strong>bold</strong>"));
    assert!(markdown_to_html("__bold__").contains("<strong>bold</strong>"));
    assert!(markdown_to_html("*italic*").contains("<em>italic</em>"));
    assert!(markdown_to_html("_italic_").contains("<em>italic</em>"));
}

#[test]
fn doubled_markers_consumed_before_single() {
    let html = markdown_to_html("**bold** and *italic*");
    assert!(html.contains("<strong>bold</strong>"));
    assert!(html.contains("<em>italic</em>"));
}

#[test]
fn links_become_anchors() {
    assert!(markdown_to_html("[text](http://x)").contains(r#"<a href="http://x">text</a>"#));
}

#[test]
fn images_become_img_tags() {
    assert!(markdown_to_html("![alt](http://x)").contains(r#"<img src="http://x" alt="alt" />"#));
}

#[test]
fn consecutive_list_lines_collapse_into_one_list() {
    let html = markdown_to_html("- a\n- b\n- c");
    assert_eq!(html, "<ul><li>a</li><li>b</li><li>c</li></ul>");
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 3);
}

#[test]
fn ordered_list_lines_collapse_and_renumber() {
    let html = markdown_to_html("1. first\n2. second\n3. third");
    assert_eq!(html, "<ol><li>first</li><li>second</li><li>third</li></ol>");
}

#[test]
fn blank_line_between_items_keeps_lists_separate() {
    let html = markdown_to_html("- a\n\n- b");
    assert_eq!(html, "<ul><li>a</li></ul><ul><li>b</li></ul>");
}

#[test]
fn lone_dashes_become_a_rule() {
    assert_eq!(markdown_to_html("---"), "<hr>");
}

#[test]
fn conversion_is_not_idempotent() {
    let once = markdown_to_html("Hello");
    let twice = markdown_to_html(&once);
    assert_eq!(once, "<p>Hello</p>");
    // Re-application double-wraps; this is accepted behavior, not a bug.
    assert_ne!(once, twice);
    assert_eq!(twice, "<p><p>Hello</p></p>");
}

#[test]
fn page_separator_renders_as_rule_between_pages() {
    let pages = ["First page text", "# Chapter Two\nBody"];
    let joined = pages.join(PAGE_SEPARATOR);
    let html = markdown_to_html(&joined);
    assert_eq!(
        html,
        "<p>First page text</p><hr><p><h1>Chapter Two</h1><br>Body</p>"
    );
    assert!(!html.contains("<p></p>"));
}

#[test]
fn markdown_table_passes_through_as_text() {
    let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("| a | b |"));
    assert!(!html.contains("<table"));
}
