//! HTTP client for the lead intake webhook
//!
//! Sends one authenticated JSON POST per lead. The response body is only
//! read when the endpoint rejects the lead, so it can be logged.

use super::payload::LeadPayload;
use super::traits::{IntakeClientTrait, IntakeResponse, TransportError};
use crate::config::{ConfigProvider, Credentials};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

/// Client for posting leads to the intake endpoint
pub struct IntakeClient {
    /// The HTTP client
    http: reqwest::Client,
    /// Intake endpoint URL
    endpoint: String,
    /// Basic-auth credentials
    credentials: Credentials,
}

impl IntakeClient {
    /// Create a client from the configured endpoint and credentials
    pub fn from_provider(provider: &dyn ConfigProvider) -> Result<Self> {
        let endpoint = provider
            .endpoint()
            .context("intake endpoint is not configured")?;
        let credentials = provider
            .credentials()
            .context("intake credentials are not configured")?;
        let http = reqwest::Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self::with_http_client(http, endpoint, credentials))
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_http_client(
        http: reqwest::Client,
        endpoint: String,
        credentials: Credentials,
    ) -> Self {
        Self {
            http,
            endpoint,
            credentials,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the POST request for a lead without sending it
    pub fn build_request(&self, payload: &LeadPayload) -> reqwest::Result<reqwest::Request> {
        self.http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .json(payload)
            .build()
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_connect() {
        TransportError::Unreachable(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}

#[async_trait]
impl IntakeClientTrait for IntakeClient {
    async fn post_lead(&self, payload: &LeadPayload) -> Result<IntakeResponse, TransportError> {
        let request = self.build_request(payload).map_err(classify)?;
        let response = self.http.execute(request).await.map_err(classify)?;

        let status = response.status();
        tracing::info!(
            status = status.as_u16(),
            reason = status.canonical_reason().unwrap_or_default(),
            "intake endpoint responded"
        );

        if status.is_success() {
            return Ok(IntakeResponse {
                status: status.as_u16(),
                body: None,
            });
        }

        let body = match response.text().await {
            Ok(body) => Some(body),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read rejection body");
                None
            }
        };
        Ok(IntakeResponse {
            status: status.as_u16(),
            body,
        })
    }
}
