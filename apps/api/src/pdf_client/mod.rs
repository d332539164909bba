//! PDF client: the single point of entry for calls to the external PDF service.
//!
//! The service receives the full résumé as JSON and answers with the rendered
//! document. Calls are made once: no retries, no streaming, no partial results.
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::resume::Resume;

const GENERATE_PATH: &str = "/generate-pdf";

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("PDF service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("PDF service returned an empty document")]
    EmptyDocument,
}

/// Renders a résumé into a PDF. Carried in `AppState` as `Arc<dyn PdfRenderer>`.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, resume: &Resume) -> Result<Bytes, PdfError>;
}

/// Talks to the PDF service over HTTP.
#[derive(Clone)]
pub struct HttpPdfRenderer {
    client: Client,
    endpoint: String,
}

impl HttpPdfRenderer {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PdfError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), GENERATE_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PdfRenderer for HttpPdfRenderer {
    async fn render(&self, resume: &Resume) -> Result<Bytes, PdfError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(resume)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("PDF service returned {}: {}", status, message);
            return Err(PdfError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let document = response.bytes().await?;
        if document.is_empty() {
            return Err(PdfError::EmptyDocument);
        }

        debug!("PDF rendered: {} bytes", document.len());
        Ok(document)
    }
}
