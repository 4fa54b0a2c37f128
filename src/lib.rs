//! # kindlify
//!
//! Convert scanned documents and images into EPUB ebooks via OCR.
//!
//! kindlify sends a document (a local file or a remote URL) to the Mistral
//! OCR API, reassembles the extracted per-page markdown into an HTML
//! fragment, and packages the result as a single-section EPUB.
//!
//! ## Quick Start
//!
//! ```no_run
//! use kindlify::config::Config;
//! use kindlify::pipeline::{DocumentSource, convert_to_epub};
//!
//! # async fn example() -> kindlify::Result<()> {
//! let config = Config::from_env()?;
//! let source = DocumentSource::Url("https://example.com/paper.pdf".into());
//! let epub = convert_to_epub(&config, source, "Paper").await?;
//! std::fs::write("paper.epub", epub)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Markdown conversion
//!
//! OCR output arrives as markdown. [`markdown_to_html`] turns it into an
//! HTML fragment with a fixed pipeline of text substitutions; it is total
//! over all input and never fails:
//!
//! ```
//! use kindlify::markdown_to_html;
//!
//! assert_eq!(markdown_to_html("# Title"), "<p><h1>Title</h1></p>");
//! ```
//!
//! ## Building EPUBs directly
//!
//! The [`Book`] model and [`write_epub`] can be used without the OCR
//! pipeline to package any HTML sections:
//!
//! ```no_run
//! use kindlify::{Book, Metadata, write_epub};
//!
//! let mut book = Book::new(Metadata::new("My Book").with_author("Me"));
//! book.add_section("Chapter 1", "<p>Hello.</p>");
//! write_epub(&book, "out.epub").unwrap();
//! ```

pub mod book;
pub mod config;
pub mod epub;
pub mod error;
pub mod markdown;
pub mod ocr;
pub mod pipeline;
pub mod server;

pub use book::{Book, Metadata, Section};
pub use epub::{write_epub, write_epub_to_writer};
pub use error::{Error, Result};
pub use markdown::markdown_to_html;
pub use ocr::OcrClient;
