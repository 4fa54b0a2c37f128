//! HTTP client implementation.

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::ocr::types::{DocumentInput, OcrRequest, OcrResponse, SignedUrl, UploadedFile};

/// Mistral API client.
pub struct OcrClient {
    api_key: String,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OcrClient {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.api_base.trim_end_matches('/').to_string(),
            model: config.ocr_model.clone(),
            client: reqwest::Client::new(),
        }
    }

    /// Upload a document for OCR processing and return its file handle.
    pub async fn upload(&self, filename: &str, data: Vec<u8>) -> Result<UploadedFile> {
        let part = reqwest::multipart::Part::bytes(data).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new()
            .text("purpose", "ocr")
            .part("file", part);

        let response = self
            .client
            .post(format!("{}/v1/files", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// Exchange an uploaded file id for a signed URL the OCR endpoint can fetch.
    pub async fn signed_url(&self, file_id: &str) -> Result<String> {
        let response = self
            .client
            .get(format!("{}/v1/files/{}/url", self.base_url, file_id))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let signed: SignedUrl = Self::check(response).await?.json().await?;
        Ok(signed.url)
    }

    /// Run OCR over a document reference. Pages come back in reading order.
    pub async fn process(&self, document: DocumentInput) -> Result<OcrResponse> {
        let request = OcrRequest {
            model: self.model.clone(),
            document,
            table_format: "markdown".to_string(),
            include_image_base64: false,
        };

        let response = self
            .client
            .post(format!("{}/v1/ocr", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// Delete an uploaded file. Best-effort: failures are logged, never returned.
    pub async fn delete_file(&self, file_id: &str) {
        let result = self
            .client
            .delete(format!("{}/v1/files/{}", self.base_url, file_id))
            .bearer_auth(&self.api_key)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                debug!("deleted uploaded file {}", file_id);
            }
            Ok(response) => {
                warn!(
                    "failed to delete uploaded file {}: {}",
                    file_id,
                    response.status()
                );
            }
            Err(e) => warn!("failed to delete uploaded file {}: {}", file_id, e),
        }
    }

    /// Map a non-success response to [`Error::Ocr`], pulling the message
    /// out of the API's JSON error envelope when present.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v["message"].as_str().map(String::from))
            .unwrap_or(body);

        Err(Error::Ocr { status, message })
    }
}
