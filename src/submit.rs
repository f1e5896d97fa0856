//! Lead submission workflow
//!
//! One attempt runs validate, then serialize, then a single authenticated
//! POST, and finally interprets the response. The caller applies the
//! outcome to the form with [`apply_outcome`].

use crate::intake::{IntakeClientTrait, LeadPayload, TransportError};
use crate::state::{ContactFields, ContactForm, FieldErrors};
use crate::validation::validate;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

pub const SUCCESS_MESSAGE: &str = "Thank you for your submission! We will get back to you soon.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error: Unable to connect to the server. Please check your connection and try again.";
pub const GENERIC_ERROR_MESSAGE: &str =
    "There was an error submitting your form. Please try again.";

/// Terminal result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid(FieldErrors),
    /// The endpoint accepted the lead
    Succeeded,
    /// The endpoint answered with a non-success status
    Rejected { status: u16 },
    /// No response was obtained
    NetworkFailed(TransportError),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded)
    }

    /// Message to show the user, if the outcome calls for one.
    /// Validation failures are shown inline instead.
    pub fn user_message(&self) -> Option<String> {
        match self {
            SubmitOutcome::Invalid(_) => None,
            SubmitOutcome::Succeeded => Some(SUCCESS_MESSAGE.to_string()),
            SubmitOutcome::Rejected { status } => Some(format!(
                "There was an error submitting your form ({status}). Please try again."
            )),
            SubmitOutcome::NetworkFailed(err) if err.is_unreachable() => {
                Some(NETWORK_ERROR_MESSAGE.to_string())
            }
            SubmitOutcome::NetworkFailed(_) => Some(GENERIC_ERROR_MESSAGE.to_string()),
        }
    }
}

/// Reasons a submission could not be started
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in progress")]
    AlreadyInFlight,
}

/// Releases the in-flight flag when the attempt ends
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Sends leads to the intake endpoint, one attempt at a time
pub struct Submitter {
    client: Arc<dyn IntakeClientTrait>,
    in_flight: AtomicBool,
}

impl Submitter {
    pub fn new(client: Arc<dyn IntakeClientTrait>) -> Self {
        Self {
            client,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether an attempt is currently outstanding
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn begin(&self) -> Result<InFlightGuard<'_>, SubmitError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InFlightGuard(&self.in_flight))
            .map_err(|_| SubmitError::AlreadyInFlight)
    }

    /// Run one submission attempt for the given field values
    pub async fn submit(&self, fields: &ContactFields) -> Result<SubmitOutcome, SubmitError> {
        let _guard = self.begin()?;
        let attempt_id = Uuid::new_v4();

        let outcome = self
            .run_attempt(fields)
            .instrument(tracing::info_span!("submit", %attempt_id))
            .await;
        Ok(outcome)
    }

    async fn run_attempt(&self, fields: &ContactFields) -> SubmitOutcome {
        let errors = validate(fields);
        if !errors.is_empty() {
            let failing: Vec<_> = errors.fields().map(|f| f.key()).collect();
            tracing::info!(?failing, "validation failed, nothing sent");
            return SubmitOutcome::Invalid(errors);
        }

        let payload = LeadPayload::from(fields);
        tracing::info!("sending lead to intake endpoint");

        match self.client.post_lead(&payload).await {
            Ok(response) if response.is_success() => {
                tracing::info!(status = response.status, "lead accepted");
                SubmitOutcome::Succeeded
            }
            Ok(response) => {
                tracing::error!(
                    status = response.status,
                    body = response.body.as_deref().unwrap_or_default(),
                    "intake endpoint rejected the lead"
                );
                SubmitOutcome::Rejected {
                    status: response.status,
                }
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    unreachable = err.is_unreachable(),
                    "error submitting lead"
                );
                SubmitOutcome::NetworkFailed(err)
            }
        }
    }
}

/// Apply an outcome to the form: reset on success, show field errors on
/// validation failure, keep everything otherwise.
pub fn apply_outcome(form: &mut ContactForm, outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Succeeded => form.reset(),
        SubmitOutcome::Invalid(errors) => form.apply_validation(errors.clone()),
        SubmitOutcome::Rejected { .. } | SubmitOutcome::NetworkFailed(_) => {}
    }
}
