//! Form controller and submission cycle
//!
//! `FormApp` owns a `FormSession` and a submission transport and drives the
//! validate → send → interpret cycle, including the server-directed
//! progress countdown and automatic resubmission.

use crate::config::FormConfig;
use crate::state::{FormSession, SubmitStatus, ValidationResult};
use crate::submit::{HttpSubmitClient, SubmissionOutcome, SubmitTransport};
use anyhow::Result;
use std::collections::HashMap;
use std::time::Duration;

/// Main controller for one form session
pub struct FormApp {
    /// Current session state
    pub session: FormSession,
    /// Transport performing the network exchanges
    transport: Box<dyn SubmitTransport>,
}

impl FormApp {
    /// Create a controller with a fresh session and an HTTP transport
    /// pointed at the configured submission endpoint
    pub fn new(config: &FormConfig) -> Self {
        Self::with_transport(
            FormSession::new(),
            Box::new(HttpSubmitClient::new(config.submit_endpoint())),
        )
    }

    /// Create a controller over an existing session and transport
    pub fn with_transport(session: FormSession, transport: Box<dyn SubmitTransport>) -> Self {
        Self { session, transport }
    }

    /// Validate all fields without touching any state
    pub fn validate(&self) -> ValidationResult {
        self.session.validate()
    }

    /// Snapshot of the current form data
    pub fn get_data(&self) -> HashMap<String, String> {
        self.session.data()
    }

    /// Apply values for known field names; unknown keys are ignored
    pub fn set_data(&mut self, data: &HashMap<String, String>) {
        self.session.set_data(data);
    }

    /// Record a field edit from the UI layer
    pub fn field_changed(&mut self, name: &str, value: &str) {
        self.session.field_changed(name, value);
    }

    /// Run the full submission cycle to a terminal state.
    ///
    /// Validation failure marks the failing fields, arms them for
    /// revalidation-on-change and stops. On success the data is sent and the
    /// outcome interpreted: success and error are terminal, progress waits
    /// the server-directed delay and repeats the entire cycle (re-validate,
    /// re-send). The submit trigger stays disabled while a network call or a
    /// countdown is active, so at most one cycle per session is in flight.
    pub async fn submit(&mut self) -> Result<()> {
        if !self.session.submit_enabled {
            tracing::debug!(session = %self.session.id(), "submit ignored while disabled");
            return Ok(());
        }

        loop {
            let result = self.session.validate();
            self.session.clear_errors();

            if !result.is_valid {
                tracing::info!(
                    session = %self.session.id(),
                    fields = ?result.error_fields,
                    "validation failed"
                );
                self.session.mark_errors(&result.error_fields);
                self.session.watch(&result.error_fields);
                return Ok(());
            }

            self.session.submit_enabled = false;
            let data = self.session.data();

            let outcome = match self.transport.send(&data).await {
                Ok(response) => SubmissionOutcome::decode(response),
                Err(err) => {
                    tracing::warn!(session = %self.session.id(), error = %err, "transport failure");
                    SubmissionOutcome::transport_error(&err)
                }
            };

            match outcome {
                SubmissionOutcome::Success => {
                    tracing::info!(session = %self.session.id(), "submission accepted");
                    self.session.status = SubmitStatus::Success;
                    self.session.submit_enabled = true;
                    return Ok(());
                }
                SubmissionOutcome::Error { reason } => {
                    tracing::info!(session = %self.session.id(), %reason, "submission failed");
                    self.session.status = SubmitStatus::Error(reason);
                    self.session.submit_enabled = true;
                    return Ok(());
                }
                SubmissionOutcome::Progress { timeout_ms } => {
                    tracing::info!(
                        session = %self.session.id(),
                        timeout_ms,
                        "submission deferred, retrying after delay"
                    );
                    run_countdown(&mut self.session, timeout_ms).await;
                    self.session.submit_enabled = true;
                }
            }
        }
    }
}

/// Display a countdown for a progress delay and return once exactly
/// `timeout_ms` milliseconds have elapsed.
///
/// The displayed value starts at the delay in whole seconds and decrements
/// once per second down to 1; the last shown value is held until the next
/// outcome replaces the status.
async fn run_countdown(session: &mut FormSession, timeout_ms: u64) {
    let mut shown = timeout_ms / 1000;
    session.status = SubmitStatus::Countdown(shown);

    let mut remaining = timeout_ms;
    while remaining > 0 {
        let step = remaining.min(1000);
        tokio::time::sleep(Duration::from_millis(step)).await;
        remaining -= step;

        if shown > 1 {
            shown -= 1;
            session.status = SubmitStatus::Countdown(shown);
        }
    }
}
