//! End-to-end document conversion.
//!
//! Orchestrates the OCR client, the markdown converter, and the EPUB
//! writer: document in, EPUB bytes out.

use std::io::Cursor;

use tracing::info;

use crate::book::{Book, Metadata};
use crate::config::Config;
use crate::epub::write_epub_to_writer;
use crate::error::Result;
use crate::markdown::markdown_to_html;
use crate::ocr::{DocumentInput, OcrClient};

/// Separator inserted between OCR pages. Renders as a horizontal rule.
pub const PAGE_SEPARATOR: &str = "\n\n---\n\n";

/// A document to convert.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// A URL the OCR service fetches directly.
    Url(String),
    /// Local bytes, uploaded to the OCR service first.
    File { name: String, data: Vec<u8> },
}

/// Convert a document into EPUB bytes.
///
/// Uploaded files are deleted from the OCR service after processing;
/// deletion failures are logged and do not fail the conversion.
pub async fn convert_to_epub(
    config: &Config,
    source: DocumentSource,
    title: &str,
) -> Result<Vec<u8>> {
    let client = OcrClient::new(config);

    let (url, uploaded_id) = match source {
        DocumentSource::Url(url) => (url, None),
        DocumentSource::File { name, data } => {
            info!("uploading {} ({} bytes)", name, data.len());
            let uploaded = client.upload(&name, data).await?;
            let url = client.signed_url(&uploaded.id).await?;
            (url, Some(uploaded.id))
        }
    };

    let response = client.process(DocumentInput::from_url(url)).await?;

    if let Some(id) = uploaded_id {
        client.delete_file(&id).await;
    }

    info!("OCR returned {} page(s)", response.pages.len());

    let markdown = response
        .pages
        .iter()
        .map(|page| page.markdown.as_str())
        .collect::<Vec<_>>()
        .join(PAGE_SEPARATOR);
    let html = markdown_to_html(&markdown);

    let metadata = Metadata::new(title)
        .with_author(config.author.as_str())
        .with_language("en");
    let mut book = Book::new(metadata);
    book.add_section(title, html);

    let mut buffer = Cursor::new(Vec::new());
    write_epub_to_writer(&book, &mut buffer)?;
    Ok(buffer.into_inner())
}
