//! The conversion pipeline.
//!
//! Steps run in this order: headers, strong emphasis, emphasis, images,
//! links, paragraph wrapping, unordered lists, ordered lists, horizontal
//! rules. Each step is a pure `&str -> String` function so it can be
//! exercised on its own.

use regex_lite::Captures;

use super::patterns::{
    EM_ASTERISK_RE, EM_UNDERSCORE_RE, H1_RE, H2_RE, H3_RE, IMAGE_RE, LINK_RE, OL_BLOCK_RE,
    OL_ITEM_RE, STRONG_ASTERISK_RE, STRONG_UNDERSCORE_RE, UL_BLOCK_RE,
};

/// Convert one markdown text into one HTML fragment.
///
/// Total over all input: empty input yields `<p></p>`, and malformed
/// markdown yields degraded HTML rather than an error.
pub fn markdown_to_html(markdown: &str) -> String {
    let html = headers(markdown);
    let html = strong(&html);
    let html = emphasis(&html);
    let html = images(&html);
    let html = links(&html);
    let html = paragraphs(&html);
    let html = unordered_lists(&html);
    let html = ordered_lists(&html);
    horizontal_rules(&html)
}

/// `### `/`## `/`# ` lines become `<h3>`/`<h2>`/`<h1>`. Most-specific
/// prefix first, so a `#` pattern never swallows a `##` or `###` line.
fn headers(text: &str) -> String {
    let text = H3_RE.replace_all(text, "<h3>$1</h3>");
    let text = H2_RE.replace_all(&text, "<h2>$1</h2>");
    H1_RE.replace_all(&text, "<h1>$1</h1>").into_owned()
}

/// `**text**` and `__text__` become `<strong>text</strong>`.
fn strong(text: &str) -> String {
    let text = STRONG_ASTERISK_RE.replace_all(text, "<strong>$1</strong>");
    STRONG_UNDERSCORE_RE
        .replace_all(&text, "<strong>$1</strong>")
        .into_owned()
}

/// `*text*` and `_text_` become `<em>text</em>`. Runs after [`strong`] so
/// doubled markers are already consumed.
fn emphasis(text: &str) -> String {
    let text = EM_ASTERISK_RE.replace_all(text, "<em>$1</em>");
    EM_UNDERSCORE_RE
        .replace_all(&text, "<em>$1</em>")
        .into_owned()
}

/// `![alt](target)` becomes an `<img>` tag. Runs before [`links`]; the
/// link pattern would otherwise consume the `[alt](target)` tail of image
/// syntax.
fn images(text: &str) -> String {
    IMAGE_RE
        .replace_all(text, r#"<img src="$2" alt="$1" />"#)
        .into_owned()
}

/// `[label](target)` becomes an anchor tag.
fn links(text: &str) -> String {
    LINK_RE
        .replace_all(text, r#"<a href="$2">$1</a>"#)
        .into_owned()
}

/// Blank lines become paragraph boundaries, single newlines become line
/// breaks, and the whole text is wrapped in one paragraph pair. The net
/// effect is a sequence of paragraph blocks split at blank lines.
fn paragraphs(text: &str) -> String {
    let text = text.replace("\n\n", "</p><p>");
    let text = text.replace('\n', "<br>");
    format!("<p>{text}</p>")
}

/// A paragraph block beginning `- ` becomes unordered-list markup: each
/// `- `-prefixed line segment is wrapped as a single-item list, then
/// adjacent lists separated only by a line break are merged by collapsing
/// the closing/opening tag sequence between them. Blocks separated by a
/// blank line produce separate lists that do not merge.
fn unordered_lists(html: &str) -> String {
    let listed = UL_BLOCK_RE.replace_all(html, |caps: &Captures| {
        caps[1]
            .split("<br>- ")
            .map(|item| format!("<ul><li>{item}</li></ul>"))
            .collect::<Vec<_>>()
            .join("<br>")
    });
    listed.replace("</ul><br><ul>", "")
}

/// Ordered-list counterpart of [`unordered_lists`], keyed on a decimal
/// `N. ` prefix. Source numbering is dropped; the reader renumbers.
fn ordered_lists(html: &str) -> String {
    let listed = OL_BLOCK_RE.replace_all(html, |caps: &Captures| {
        OL_ITEM_RE
            .split(&caps[1])
            .map(|item| format!("<ol><li>{item}</li></ol>"))
            .collect::<Vec<_>>()
            .join("<br>")
    });
    listed.replace("</ol><br><ol>", "")
}

/// A paragraph block containing exactly `---` becomes a horizontal rule.
fn horizontal_rules(html: &str) -> String {
    html.replace("<p>---</p>", "<hr>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_by_level() {
        assert_eq!(headers("# One"), "<h1>One</h1>");
        assert_eq!(headers("## Two"), "<h2>Two</h2>");
        assert_eq!(headers("### Three"), "<h3>Three</h3>");
    }

    #[test]
    fn headers_only_at_line_start() {
        assert_eq!(headers("not # a header"), "not # a header");
        assert_eq!(headers("text\n## Sub"), "text\n<h2>Sub</h2>");
    }

    #[test]
    fn four_hashes_pass_through() {
        assert_eq!(headers("#### deep"), "#### deep");
    }

    #[test]
    fn strong_both_markers() {
        assert_eq!(strong("**a**"), "<strong>a</strong>");
        assert_eq!(strong("__b__"), "<strong>b</strong>");
    }

    #[test]
    fn strong_is_non_greedy() {
        assert_eq!(
            strong("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn emphasis_both_markers() {
        assert_eq!(emphasis("*a*"), "<em>a</em>");
        assert_eq!(emphasis("_b_"), "<em>b</em>");
    }

    #[test]
    fn image_with_empty_alt() {
        assert_eq!(
            images("![](http://x/i.png)"),
            r#"<img src="http://x/i.png" alt="" />"#
        );
    }

    #[test]
    fn link_basic() {
        assert_eq!(
            links("[text](http://x)"),
            r#"<a href="http://x">text</a>"#
        );
    }

    #[test]
    fn paragraphs_wrap_and_break() {
        assert_eq!(paragraphs("a\nb"), "<p>a<br>b</p>");
        assert_eq!(paragraphs("a\n\nb"), "<p>a</p><p>b</p>");
        assert_eq!(paragraphs(""), "<p></p>");
    }

    #[test]
    fn list_items_merge_across_line_breaks() {
        assert_eq!(
            unordered_lists("<p>- a<br>- b<br>- c</p>"),
            "<ul><li>a</li><li>b</li><li>c</li></ul>"
        );
    }

    #[test]
    fn lists_split_by_blank_lines_stay_separate() {
        assert_eq!(
            unordered_lists("<p>- a</p><p>- b</p>"),
            "<ul><li>a</li></ul><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn list_requires_block_start() {
        let html = "<p>hello<br>- world</p>";
        assert_eq!(unordered_lists(html), html);
    }

    #[test]
    fn ordered_items_drop_numbering() {
        assert_eq!(
            ordered_lists("<p>1. a<br>2. b<br>10. c</p>"),
            "<ol><li>a</li><li>b</li><li>c</li></ol>"
        );
    }

    #[test]
    fn rule_from_lone_dashes() {
        assert_eq!(horizontal_rules("<p>---</p>"), "<hr>");
        assert_eq!(horizontal_rules("<p>--- x</p>"), "<p>--- x</p>");
    }

    #[test]
    fn full_pipeline_smoke() {
        let html = markdown_to_html("# Title\n\nSome **bold** text.");
        assert_eq!(
            html,
            "<p><h1>Title</h1></p><p>Some <strong>bold</strong> text.</p>"
        );
    }
}
