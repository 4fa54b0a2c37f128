//! Mistral API types.

use serde::{Deserialize, Serialize};

/// A document reference submitted for OCR.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentInput {
    DocumentUrl { document_url: String },
    ImageUrl { image_url: String },
}

impl DocumentInput {
    /// Classify a URL by extension: known image extensions go to image
    /// OCR, everything else (PDFs and other formats) to document OCR.
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        if is_image_url(&url) {
            Self::ImageUrl { image_url: url }
        } else {
            Self::DocumentUrl { document_url: url }
        }
    }
}

fn is_image_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    ["png", "jpg", "jpeg", "avif", "webp"]
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

/// OCR processing request.
#[derive(Debug, Serialize)]
pub struct OcrRequest {
    pub model: String,
    pub document: DocumentInput,
    pub table_format: String,
    pub include_image_base64: bool,
}

/// OCR processing response: per-page results in reading order.
#[derive(Debug, Deserialize)]
pub struct OcrResponse {
    pub pages: Vec<OcrPage>,
}

/// One page of OCR output.
#[derive(Debug, Deserialize)]
pub struct OcrPage {
    #[serde(default)]
    pub index: usize,
    pub markdown: String,
}

/// Handle for an uploaded file.
#[derive(Debug, Deserialize)]
pub struct UploadedFile {
    pub id: String,
}

/// Signed download URL for an uploaded file.
#[derive(Debug, Deserialize)]
pub struct SignedUrl {
    pub url: String,
}
