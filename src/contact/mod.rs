//! Contact form: field values, validation and the submission status machine
//!
//! ```text
//!            submit                 relay Ok
//!   Idle ───────────▶ Sending ─────────────────▶ Success (fields cleared)
//!    ▲                   │  relay Err
//!    │                   └─────────────────────▶ Error (fields kept)
//!    └── Success / Error re-enter Sending on the next submit
//! ```
//!
//! At most one relay call is in flight per form: a submit while `Sending`
//! is ignored. The status is published on a `tokio::sync::watch` channel so
//! any number of observers can follow it.

pub mod relay;
mod submitter;

#[cfg(test)]
mod tests;

pub use relay::{EmailJsRelay, MailRelay, RelayError};
pub use submitter::ContactSubmitter;

use std::fmt;
use tokio::sync::watch;

/// The three values sent to the relay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Finite status of the current (or last) submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Submit button text for this status
    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Sending => "Sending...",
            Self::Success => "Message Sent!",
            Self::Error => "Error. Try again.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sending => "sending",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Focusable parts of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Email,
    Message,
    Submit,
}

impl Field {
    pub const INPUTS: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Submit,
            Field::Submit => Field::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Submit,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
            Field::Submit => Field::Message,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
            Field::Submit => "Submit",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "john@example.com",
            Field::Message => "Hi, I'd like to discuss a project...",
            Field::Submit => "",
        }
    }

    pub fn is_multiline(&self) -> bool {
        *self == Field::Message
    }
}

/// Required-field checks that gate the submitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Missing(Field),
    InvalidEmail,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(field) => write!(f, "Please fill in the {} field", field.label()),
            Self::InvalidEmail => write!(f, "Please enter a valid email address"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// `local@domain`, no whitespace
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Form state owned by the UI loop (or the headless `send` command)
#[derive(Debug)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    status: watch::Sender<SubmissionStatus>,
}

impl ContactForm {
    pub fn new() -> Self {
        let (status, _) = watch::channel(SubmissionStatus::Idle);
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            status,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        *self.status.borrow()
    }

    /// Observe status changes
    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    fn set_status(&self, status: SubmissionStatus) {
        // send_replace works with zero receivers
        self.status.send_replace(status);
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
            Field::Submit => "",
        }
    }

    fn value_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Message => Some(&mut self.message),
            Field::Submit => None,
        }
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        if let Some(slot) = self.value_mut(field) {
            *slot = value.into();
        }
    }

    /// Append a typed character. Newlines only land in the message.
    pub fn push_char(&mut self, field: Field, c: char) {
        if c == '\n' && !field.is_multiline() {
            return;
        }
        if let Some(slot) = self.value_mut(field) {
            slot.push(c);
        }
    }

    pub fn pop_char(&mut self, field: Field) {
        if let Some(slot) = self.value_mut(field) {
            slot.pop();
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::INPUTS.iter().all(|f| self.value(*f).is_empty())
    }

    /// Required-field and email-shape checks, first failure wins
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(field) = Field::INPUTS
            .into_iter()
            .find(|f| self.value(*f).trim().is_empty())
        {
            return Err(ValidationError::Missing(field));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    /// Enter `Sending` and snapshot the fields for the relay.
    ///
    /// Returns `None` (and changes nothing) while a call is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.status() == SubmissionStatus::Sending {
            tracing::debug!("Submit ignored: a message is already sending");
            return None;
        }

        self.set_status(SubmissionStatus::Sending);
        Some(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Apply the relay's single outcome
    pub fn complete(&mut self, outcome: Result<(), RelayError>) {
        if self.status() != SubmissionStatus::Sending {
            tracing::warn!("Relay outcome arrived with no submission in flight, ignoring");
            return;
        }

        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                tracing::info!("Contact message delivered");
                self.set_status(SubmissionStatus::Success);
            }
            Err(e) => {
                // Operator channel only; the page shows a generic retry prompt
                tracing::error!("Contact relay call failed: {}", e);
                self.set_status(SubmissionStatus::Error);
            }
        }
    }

    /// Run a whole submission inline and return the final status.
    /// Used where no UI loop exists to receive the outcome.
    pub async fn submit_with(&mut self, relay: &dyn MailRelay) -> SubmissionStatus {
        let Some(submission) = self.begin_submit() else {
            return self.status();
        };
        tracing::info!("Sending contact message via {}", relay.name());
        let outcome = relay.send(&submission).await;
        self.complete(outcome);
        self.status()
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
