use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::Config;
use super::form::ContactForm;

/// Body posted to the form relay.
#[derive(Debug, Serialize)]
pub struct SubmissionRequest<'a> {
    pub access_key: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub subject: &'a str,
}

/// Relay reply. `success` is kept loose because relays disagree on whether
/// it is a bool, a string, or a number.
#[derive(Debug, Deserialize)]
pub struct SubmissionResponse {
    #[serde(default)]
    pub success: serde_json::Value,
    #[serde(default)]
    pub message: Option<String>,
}

impl SubmissionResponse {
    pub fn is_success(&self) -> bool {
        match &self.success {
            serde_json::Value::Bool(b) => *b,
            serde_json::Value::String(s) => s.eq_ignore_ascii_case("true") || s == "1",
            serde_json::Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("contact request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("contact relay rejected the message ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("contact relay sent an unreadable response ({status}): {reason}")]
    MalformedResponse { status: u16, reason: String },
}

/// HTTP client for the contact form relay.
#[derive(Debug, Clone)]
pub struct ContactClient {
    client: reqwest::Client,
    endpoint: String,
    access_key: String,
    subject: String,
}

impl ContactClient {
    pub fn new(config: &Config) -> Result<Self> {
        let access_key = config
            .contact_access_key
            .clone()
            .context("CONTACT_ACCESS_KEY not set")?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.contact_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.contact_endpoint.clone(),
            access_key,
            subject: config.contact_subject.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post the form to the relay. Exactly one request, no retries.
    pub async fn send(&self, form: &ContactForm) -> Result<(), SubmissionError> {
        let request = SubmissionRequest {
            access_key: &self.access_key,
            name: &form.name,
            email: &form.email,
            message: &form.message,
            subject: &self.subject,
        };

        tracing::debug!("Posting contact form to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        let reply: SubmissionResponse =
            serde_json::from_str(&body).map_err(|e| SubmissionError::MalformedResponse {
                status,
                reason: e.to_string(),
            })?;

        if reply.is_success() {
            tracing::info!("Contact relay accepted the message ({})", status);
            Ok(())
        } else {
            Err(SubmissionError::Rejected {
                status,
                message: reply
                    .message
                    .unwrap_or_else(|| "no reason given".to_string()),
            })
        }
    }
}
