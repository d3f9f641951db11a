//! Trait abstraction for the submission transport to enable mocking in tests

use super::protocol::SubmitResponse;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Transport performing one submission exchange per call
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// POST the form data to the configured endpoint and decode the raw
    /// response body. Any transport-level failure (network error, non-JSON
    /// body) is returned as an error for the caller to surface.
    async fn send(&self, data: &HashMap<String, String>) -> Result<SubmitResponse>;
}
