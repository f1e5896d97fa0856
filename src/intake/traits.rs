//! Trait abstraction for the intake client to enable mocking in tests

use super::payload::LeadPayload;
use async_trait::async_trait;

/// Response from the intake endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, only read when the status is not a success
    pub body: Option<String>,
}

impl IntakeResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure to obtain any response from the intake endpoint
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// DNS or connection failure
    #[error("unable to connect to the intake endpoint: {0}")]
    Unreachable(String),
    /// Any other transport failure
    #[error("intake request failed: {0}")]
    Other(String),
}

impl TransportError {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, TransportError::Unreachable(_))
    }
}

/// Trait for intake client operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IntakeClientTrait: Send + Sync {
    /// POST one lead to the intake endpoint
    async fn post_lead(&self, payload: &LeadPayload) -> Result<IntakeResponse, TransportError>;
}
