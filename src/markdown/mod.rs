//! Markdown-to-HTML conversion for OCR output.
//!
//! OCR results come back as line-oriented markdown. This module converts
//! them to an HTML fragment suitable for an EPUB section body, using an
//! ordered pipeline of pure text substitutions - no parser, no AST, no
//! I/O. Each step consumes the previous step's output, and order matters:
//! strong emphasis runs before emphasis so doubled markers are consumed
//! first, and paragraph wrapping runs before list detection because the
//! list steps key off paragraph tags.
//!
//! The transform is total: empty input, plain text, and malformed markdown
//! all produce some HTML output. Malformed input degrades into literal
//! text or mis-wrapped tags rather than an error. It is NOT idempotent;
//! re-applying it to its own output will double-wrap already-converted
//! markup.
//!
//! Known limitations, kept on purpose: nested emphasis, nested lists, and
//! tables are not specially handled; emphasis matching is non-greedy and
//! can mis-nest around unmatched markers; angle brackets in the source
//! pass through unescaped.

mod convert;
mod patterns;

pub use convert::markdown_to_html;
