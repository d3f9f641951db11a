//! Submission wire protocol
//!
//! The remote endpoint answers every submission with a JSON object carrying
//! a `status` of `success`, `progress` or `error`. `progress` adds a
//! `timeout` in milliseconds (number or numeric string), `error` adds a
//! human-readable `reason`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw response body of the submission endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub status: String,
    /// Progress delay in milliseconds; the wire allows both a number and a
    /// numeric string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Decoded outcome of one submission exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Terminal: the submission was accepted
    Success,
    /// Deferred: resubmit after the server-directed delay
    Progress { timeout_ms: u64 },
    /// Terminal: the server rejected the submission
    Error { reason: String },
}

impl SubmissionOutcome {
    /// Decode a well-formed response into an outcome.
    ///
    /// An unrecognized `status` value fails closed into `Error` so the
    /// submission cycle terminates visibly instead of hanging.
    pub fn decode(response: SubmitResponse) -> Self {
        match response.status.as_str() {
            "success" => Self::Success,
            "progress" => Self::Progress {
                timeout_ms: parse_timeout(response.timeout.as_ref()),
            },
            "error" => Self::Error {
                reason: response
                    .reason
                    .unwrap_or_else(|| "Unknown error".to_string()),
            },
            other => Self::Error {
                reason: format!("Unrecognized response status: {other}"),
            },
        }
    }

    /// Map a transport failure (network error, non-JSON body) to a terminal
    /// error outcome carrying the failure's textual description.
    pub fn transport_error(err: &anyhow::Error) -> Self {
        Self::Error {
            reason: err.to_string(),
        }
    }
}

/// Parse the progress delay; non-numeric or missing values become 0.
fn parse_timeout(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
