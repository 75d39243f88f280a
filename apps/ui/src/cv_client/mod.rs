/// CV client: fetches the CV document from the CV API.
///
/// One GET per page render, bounded by the configured timeout. No retries:
/// any failure is surfaced to the visitor as-is.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::RenderError;
use crate::models::cv::CvDocument;

/// Source of the CV document. `HttpCvSource` talks to the API; tests plug in fixtures.
#[async_trait]
pub trait CvSource: Send + Sync {
    async fn fetch(&self) -> Result<CvDocument, RenderError>;
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct HttpCvSource {
    client: Client,
    url: String,
}

impl HttpCvSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url: format!("{}/cv", base_url.trim_end_matches('/')),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CvSource for HttpCvSource {
    async fn fetch(&self) -> Result<CvDocument, RenderError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| transport_error(&self.url, e))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // The API answers with {"error": {"code", "message"}}; fall back to the raw body.
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!("CV API returned {status}: {message}");

            return Err(if status == StatusCode::NOT_FOUND {
                RenderError::NotFound(message)
            } else if status == StatusCode::INTERNAL_SERVER_ERROR {
                RenderError::InvalidData(message)
            } else {
                RenderError::Transport(format!("unexpected status {status}: {message}"))
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(&self.url, e))?;

        debug!("Fetched {} bytes from {}", bytes.len(), self.url);

        serde_json::from_slice(&bytes).map_err(|e| RenderError::InvalidData(e.to_string()))
    }
}

fn transport_error(url: &str, e: reqwest::Error) -> RenderError {
    if e.is_timeout() {
        RenderError::Transport(format!("request to {url} timed out"))
    } else {
        RenderError::Transport(format!("request to {url} failed: {e}"))
    }
}
