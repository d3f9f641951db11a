//! HTTP client for the submission endpoint
//!
//! Sends the form data as a JSON object whose keys exactly match the form
//! field names and decodes the tri-state response body.

use super::protocol::SubmitResponse;
use super::traits::SubmitTransport;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;

/// Client for the form submission endpoint
pub struct HttpSubmitClient {
    http: reqwest::Client,
    /// Destination address, taken from the form configuration
    endpoint: String,
}

impl HttpSubmitClient {
    /// Create a new submission client for the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The configured destination address
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitTransport for HttpSubmitClient {
    async fn send(&self, data: &HashMap<String, String>) -> Result<SubmitResponse> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(data)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach {}: {}", self.endpoint, e))?;

        response
            .json::<SubmitResponse>()
            .await
            .map_err(|e| anyhow!("Failed to decode response: {}", e))
    }
}
