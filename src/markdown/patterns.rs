//! Substitution patterns for the markdown converter.
//!
//! Uses LazyLock to compile patterns once on first use. The converter
//! applies them in a fixed order; see [`super::convert`].

use regex_lite::Regex;
use std::sync::LazyLock;

/// Matches `### text` header lines.
pub static H3_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());

/// Matches `## text` header lines.
pub static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());

/// Matches `# text` header lines.
pub static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());

/// Matches `**text**` strong emphasis (shortest span wins).
pub static STRONG_ASTERISK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Matches `__text__` strong emphasis.
pub static STRONG_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.*?)__").unwrap());

/// Matches `*text*` emphasis.
pub static EM_ASTERISK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

/// Matches `_text_` emphasis.
pub static EM_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());

/// Matches `![alt](target)` image syntax. Alt text may be empty.
pub static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

/// Matches `[label](target)` link syntax.
pub static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Matches a paragraph block whose content begins with `- `.
pub static UL_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>- (.*?)</p>").unwrap());

/// Matches a paragraph block whose content begins with `N. `.
pub static OL_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>\d+\. (.*?)</p>").unwrap());

/// Splits ordered-list block content at `<br>N. ` item boundaries.
pub static OL_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<br>\d+\. ").unwrap());
