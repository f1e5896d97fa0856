//! Intake client module for HTTP communication with the lead webhook

mod client;
mod payload;
mod traits;

pub use client::IntakeClient;
pub use payload::LeadPayload;
pub use traits::{IntakeClientTrait, IntakeResponse, TransportError};

#[cfg(test)]
pub use traits::MockIntakeClientTrait;
