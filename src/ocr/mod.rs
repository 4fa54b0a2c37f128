//! Client for the Mistral files and OCR endpoints.
//!
//! The OCR service is a black box: given a document reference it returns
//! an ordered sequence of per-page markdown results. Local files are
//! first uploaded and exchanged for a signed URL the service can fetch.

mod client;
mod types;

pub use client::OcrClient;
pub use types::{DocumentInput, OcrPage, OcrRequest, OcrResponse, SignedUrl, UploadedFile};
