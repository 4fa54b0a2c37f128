//! Process configuration.
//!
//! The OCR API key is required and checked at startup; everything else has
//! defaults.

use std::env;

use crate::error::{Error, Result};

pub const DEFAULT_API_BASE: &str = "https://api.mistral.ai";
pub const DEFAULT_OCR_MODEL: &str = "mistral-ocr-latest";

const DEFAULT_AUTHOR: &str = "Kindlify";

/// Runtime configuration, resolved from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Mistral API key (`MISTRAL_API_KEY`, required).
    pub api_key: String,
    /// API base URL (`MISTRAL_API_BASE`).
    pub api_base: String,
    /// OCR model name (`MISTRAL_OCR_MODEL`).
    pub ocr_model: String,
    /// Author written into EPUB metadata (`KINDLIFY_AUTHOR`).
    pub author: String,
}

impl Config {
    /// Resolve configuration from the environment.
    ///
    /// Returns a descriptive error when `MISTRAL_API_KEY` is unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = get("MISTRAL_API_KEY").ok_or_else(|| {
            Error::Config("MISTRAL_API_KEY is not set in environment variables".to_string())
        })?;

        Ok(Self {
            api_key,
            api_base: get("MISTRAL_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            ocr_model: get("MISTRAL_OCR_MODEL").unwrap_or_else(|| DEFAULT_OCR_MODEL.to_string()),
            author: get("KINDLIFY_AUTHOR").unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        })
    }
}
