//! HTTP client for submitting document batches to an analysis endpoint.
//!
//! One submission is one POST: no retries, no partial results. Transport
//! failures are classified into a small taxonomy so the caller can show a
//! single meaningful error line.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::models::{normalize, AnalysisResponse, SubmissionRequest};

/// Default time to wait for an analysis response.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Why a submission attempt failed.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// No response arrived within the configured deadline.
    #[error("Request timeout - the analyzer took too long to respond")]
    Timeout,
    /// The endpoint could not be reached at all.
    #[error("Cannot connect to the analyzer: {0}")]
    Unreachable(String),
    /// The endpoint answered with a non-success status.
    #[error("Analyzer responded with status: {status} - {body}")]
    UpstreamStatus { status: u16, body: String },
    /// The endpoint answered 2xx but the body was not valid JSON.
    #[error("Analyzer returned a response that could not be parsed")]
    InvalidResponse,
}

/// Client for the batch analysis endpoint.
pub struct AnalysisClient {
    endpoint: String,
    client: Client,
}

impl AnalysisClient {
    /// Create a client for the given endpoint with a request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    /// Endpoint this client submits to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit an encoded batch for analysis.
    ///
    /// All-or-nothing: either the full normalized response comes back or a
    /// single classified error. Normalization itself never fails; any 2xx
    /// body that parses as JSON yields a response.
    pub async fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<AnalysisResponse, SubmissionError> {
        debug!(
            "Submitting {} files to {}",
            request.files.len(),
            self.endpoint
        );

        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(classify_send_error)?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SubmissionError::UpstreamStatus { status, body });
        }

        let raw: Value = resp
            .json()
            .await
            .map_err(|_| SubmissionError::InvalidResponse)?;
        Ok(normalize(&raw))
    }
}

fn classify_send_error(e: reqwest::Error) -> SubmissionError {
    if e.is_timeout() {
        SubmissionError::Timeout
    } else {
        SubmissionError::Unreachable(e.to_string())
    }
}
