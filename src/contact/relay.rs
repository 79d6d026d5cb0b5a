//! Mail relay abstraction
//!
//! The contact form never talks HTTP itself. It hands a [`ContactSubmission`]
//! to a [`MailRelay`] and waits for exactly one outcome.
//!
//! ```text
//! MailRelay trait
//! ├── EmailJsRelay (EmailJS REST API over reqwest)
//! └── test doubles (counting / failing relays)
//! ```

use super::ContactSubmission;
use crate::config::RelayConfig;
use serde::Serialize;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Errors a relay call can end with
#[derive(Debug)]
pub enum RelayError {
    /// The relay answered with a non-success status
    Rejected { status: u16, message: String },
    /// Request never got an answer (DNS, TLS, connection reset...)
    Network(String),
    /// HTTP client could not be constructed
    Client(String),
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected { status, message } => {
                write!(f, "Relay rejected the message ({}): {}", status, message)
            }
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Client(msg) => write!(f, "HTTP client error: {}", msg),
        }
    }
}

impl std::error::Error for RelayError {}

/// Boxed future returned by [`MailRelay::send`]
pub type RelayFuture<'a> = Pin<Box<dyn Future<Output = Result<(), RelayError>> + Send + 'a>>;

/// Transport that delivers one contact submission
pub trait MailRelay: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Deliver the submission. Resolves once with the relay's verdict.
    fn send<'a>(&'a self, submission: &'a ContactSubmission) -> RelayFuture<'a>;
}

// ─────────────────────────────────────────────────────────────────────────────
// EmailJS
// ─────────────────────────────────────────────────────────────────────────────

/// Request body accepted by `POST /api/v1.0/email/send`
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Template variables; names match the form's field names
#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// EmailJS REST relay
///
/// No local timeout or retry: the call resolves when the relay answers or
/// the transport fails.
pub struct EmailJsRelay {
    client: reqwest::Client,
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("termfolio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RelayError::Client(format!("Failed to create HTTP client: {}", e)))?;

        tracing::debug!(
            "Initialized EmailJS relay: {} (service: {}, template: {})",
            config.endpoint,
            config.service_id,
            config.template_id
        );

        Ok(Self { client, config })
    }

    fn request_body<'a>(&'a self, submission: &'a ContactSubmission) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                name: &submission.name,
                email: &submission.email,
                message: &submission.message,
            },
            access_token: self.config.access_token.as_deref(),
        }
    }

    async fn post(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&self.request_body(submission))
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // EmailJS answers errors with a plain-text reason
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(RelayError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

impl MailRelay for EmailJsRelay {
    fn name(&self) -> &'static str {
        "emailjs"
    }

    fn send<'a>(&'a self, submission: &'a ContactSubmission) -> RelayFuture<'a> {
        Box::pin(self.post(submission))
    }
}
