use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the hiring.cafe search API
#[derive(Debug, Error)]
pub enum HiringCafeError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {body}")]
    UpstreamError { status: u16, body: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

/// hiring.cafe search client
///
/// Forwards a caller-supplied search payload to the upstream search API
/// and passes the JSON result through untouched, so the scraper side of
/// the frontend keeps working against upstream schema changes.
pub struct HiringCafeClient {
    base_url: String,
    client: Client,
}

impl HiringCafeClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("JobWatcherProxy/1.0")
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Forward a search payload to the upstream search endpoint
    ///
    /// Upstream non-success statuses become `UpstreamError` with the body
    /// preserved for the caller; an empty success body becomes an empty
    /// result list instead of a parse failure.
    pub async fn search_jobs(&self, payload: &Value) -> Result<Value, HiringCafeError> {
        let url = format!(
            "{}/api/search-jobs",
            self.base_url.trim_end_matches('/')
        );

        tracing::debug!("Forwarding search request to {}", url);

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json, text/plain, */*")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(HiringCafeError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(serde_json::json!({ "results": [] }));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
