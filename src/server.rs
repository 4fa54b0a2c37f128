//! HTTP conversion service.
//!
//! Exposes the pipeline at `POST /api/convert`. The endpoint accepts
//! either a `multipart/form-data` upload (`file` and `title` fields) or a
//! JSON body (`url` and `title`), and responds with the EPUB bytes as an
//! attachment.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, RequestExt, Router,
    extract::{Multipart, Request, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::pipeline::{DocumentSource, convert_to_epub};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub host: String,
    pub port: u16,
}

impl ServeConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Shared application state.
pub struct AppState {
    pub config: Config,
}

/// JSON body for URL-based conversion requests.
#[derive(Debug, Deserialize)]
struct ConvertUrlRequest {
    url: Option<String>,
    title: Option<String>,
}

/// JSON error payload.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/convert", post(convert))
        .route("/health", get(health))
        .with_state(state)
}

/// Run the server until shutdown.
pub async fn serve(config: ServeConfig, state: Arc<AppState>) -> Result<()> {
    let app = router(state);

    let addr: SocketAddr = config
        .addr()
        .parse()
        .map_err(|e| Error::Config(format!("invalid listen address {}: {}", config.addr(), e)))?;
    let listener = TcpListener::bind(addr).await?;

    info!("kindlify listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn convert(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("multipart/form-data"));

    let parsed = if is_multipart {
        read_multipart(request).await
    } else {
        read_json(request).await
    };
    let (source, title) = match parsed {
        Ok(parts) => parts,
        Err(response) => return response,
    };

    match convert_to_epub(&state.config, source, &title).await {
        Ok(bytes) => epub_response(&title, bytes),
        Err(e) => {
            error!("conversion failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn read_multipart(request: Request) -> std::result::Result<(DocumentSource, String), Response> {
    let mut multipart = request
        .extract::<Multipart, _>()
        .await
        .map_err(|e| bad_request(e.to_string()))?;

    let mut file: Option<(String, Vec<u8>)> = None;
    let mut title: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(e.to_string()))?
    {
        // Field::bytes/text consume the field, so copy the name out first.
        let field_name = field.name().map(|name| name.to_string());
        match field_name.as_deref() {
            Some("file") => {
                let name = field.file_name().unwrap_or("document").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| bad_request(e.to_string()))?;
                file = Some((name, data.to_vec()));
            }
            Some("title") => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| bad_request(e.to_string()))?,
                );
            }
            _ => {}
        }
    }

    let (name, data) = file.ok_or_else(|| bad_request("File is required"))?;
    Ok((DocumentSource::File { name, data }, default_title(title)))
}

async fn read_json(request: Request) -> std::result::Result<(DocumentSource, String), Response> {
    let Json(body) = request
        .extract::<Json<ConvertUrlRequest>, _>()
        .await
        .map_err(|e| bad_request(e.to_string()))?;

    let url = body
        .url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| bad_request("URL is required"))?;
    Ok((DocumentSource::Url(url), default_title(body.title)))
}

fn default_title(title: Option<String>) -> String {
    title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Document".to_string())
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

fn epub_response(title: &str, bytes: Vec<u8>) -> Response {
    let filename = utf8_percent_encode(title, NON_ALPHANUMERIC).to_string();
    (
        [
            (header::CONTENT_TYPE, "application/epub+zip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}.epub\"", filename),
            ),
        ],
        bytes,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use tower::ServiceExt;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState {
            config: Config {
                api_key: "test-key".to_string(),
                api_base: "http://127.0.0.1:9".to_string(),
                ocr_model: "mistral-ocr-latest".to_string(),
                author: "Kindlify".to_string(),
            },
        })
    }

    #[test]
    fn serve_config_default() {
        let config = ServeConfig::default();
        assert_eq!(config.addr(), "127.0.0.1:3000");
    }

    #[test]
    fn serve_config_new() {
        let config = ServeConfig::new("0.0.0.0", 8080);
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[tokio::test]
    async fn health_endpoint() {
        let app = router(test_state());
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_url_is_bad_request() {
        let app = router(test_state());
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/api/convert")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"title": "x"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_url_is_bad_request() {
        let app = router(test_state());
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/api/convert")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"url": ""}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn attachment_filename_is_encoded() {
        let response = epub_response("My Doc", vec![1, 2, 3]);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(disposition, "attachment; filename=\"My%20Doc.epub\"");
    }
}
