//! Contact form workflow tests
//!
//! Relays here are in-process doubles: one that records every call and
//! answers with a canned outcome, and one that holds its answer until the
//! test releases it so a call can be observed while in flight.

use super::relay::RelayFuture;
use super::*;
use crate::logging::{CaptureLayer, LogBuffer, LogLevel};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, Notify};
use tracing_subscriber::layer::SubscriberExt;

// ─────────────────────────────────────────────────────────────────────────────
// Test doubles
// ─────────────────────────────────────────────────────────────────────────────

/// Answers every call with the same outcome and records what it was sent
struct ScriptedRelay {
    reject_with: Option<String>,
    sent: Mutex<Vec<ContactSubmission>>,
}

impl ScriptedRelay {
    fn accepting() -> Self {
        Self {
            reject_with: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    fn rejecting(text: &str) -> Self {
        Self {
            reject_with: Some(text.to_string()),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl MailRelay for ScriptedRelay {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn send<'a>(&'a self, submission: &'a ContactSubmission) -> RelayFuture<'a> {
        self.sent.lock().unwrap().push(submission.clone());
        let outcome = match &self.reject_with {
            None => Ok(()),
            Some(text) => Err(RelayError::Rejected {
                status: 429,
                message: text.clone(),
            }),
        };
        Box::pin(async move { outcome })
    }
}

/// Counts calls and resolves only after `release`
#[derive(Default)]
struct GatedRelay {
    calls: AtomicUsize,
    gate: Notify,
}

impl GatedRelay {
    fn release(&self) {
        self.gate.notify_one();
    }
}

impl MailRelay for GatedRelay {
    fn name(&self) -> &'static str {
        "gated"
    }

    fn send<'a>(&'a self, _submission: &'a ContactSubmission) -> RelayFuture<'a> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            self.gate.notified().await;
            Ok(())
        })
    }
}

fn filled(name: &str, email: &str, message: &str) -> ContactForm {
    let mut form = ContactForm::new();
    form.set_value(Field::Name, name);
    form.set_value(Field::Email, email);
    form.set_value(Field::Message, message);
    form
}

fn jane() -> ContactForm {
    filled("Jane Doe", "jane@example.com", "Hello")
}

fn values(form: &ContactForm) -> (String, String, String) {
    (
        form.value(Field::Name).to_string(),
        form.value(Field::Email).to_string(),
        form.value(Field::Message).to_string(),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn successful_submission_clears_fields() {
    let relay = ScriptedRelay::accepting();
    let mut form = jane();
    let mut seen = vec![form.status()];

    let submission = form.begin_submit().unwrap();
    seen.push(form.status());
    form.complete(relay.send(&submission).await);
    seen.push(form.status());

    assert_eq!(
        seen,
        vec![
            SubmissionStatus::Idle,
            SubmissionStatus::Sending,
            SubmissionStatus::Success
        ]
    );
    assert!(form.is_empty());
    assert_eq!(
        relay.sent.lock().unwrap()[0],
        ContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello".to_string(),
        }
    );
}

#[tokio::test]
async fn rejected_submission_keeps_fields_and_logs_once() {
    let buffer = LogBuffer::new();
    let subscriber = tracing_subscriber::registry().with(CaptureLayer::new(buffer.clone()));
    let _guard = tracing::subscriber::set_default(subscriber);

    let relay = ScriptedRelay::rejecting("rate limited");
    let mut form = jane();
    let before = values(&form);
    let mut seen = vec![form.status()];

    let submission = form.begin_submit().unwrap();
    seen.push(form.status());
    form.complete(relay.send(&submission).await);
    seen.push(form.status());

    assert_eq!(
        seen,
        vec![
            SubmissionStatus::Idle,
            SubmissionStatus::Sending,
            SubmissionStatus::Error
        ]
    );
    assert_eq!(values(&form), before);

    let errors = buffer.at_level(LogLevel::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("rate limited"), "{:?}", errors);
}

// ─────────────────────────────────────────────────────────────────────────────
// Status machine
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn each_attempt_passes_through_sending() {
    let relay = ScriptedRelay::rejecting("down");
    let mut form = jane();

    assert_eq!(form.submit_with(&relay).await, SubmissionStatus::Error);

    // Retry from error re-enters sending and can succeed
    let ok = ScriptedRelay::accepting();
    let mut rx = form.subscribe();
    assert!(form.begin_submit().is_some());
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), SubmissionStatus::Sending);

    let submission = ContactSubmission {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        message: "Hello".to_string(),
    };
    form.complete(ok.send(&submission).await);
    assert_eq!(*rx.borrow_and_update(), SubmissionStatus::Success);

    // And a fresh submit from success enters sending again
    form.set_value(Field::Name, "Again");
    assert!(form.begin_submit().is_some());
    assert_eq!(form.status(), SubmissionStatus::Sending);
}

#[tokio::test]
async fn second_submit_while_sending_is_ignored() {
    let relay = Arc::new(GatedRelay::default());
    let (tx, mut rx) = mpsc::channel(4);
    let submitter = ContactSubmitter::new(relay.clone(), tx);
    let mut form = jane();

    assert!(submitter.submit(&mut form));
    assert!(!submitter.submit(&mut form));
    assert_eq!(form.status(), SubmissionStatus::Sending);

    relay.release();
    let outcome = rx.recv().await.unwrap();
    form.complete(outcome);

    assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
    assert_eq!(form.status(), SubmissionStatus::Success);
}

#[tokio::test]
async fn submitter_delivers_failure_to_the_loop() {
    let relay = Arc::new(ScriptedRelay::rejecting("bad template"));
    let (tx, mut rx) = mpsc::channel(1);
    let submitter = ContactSubmitter::new(relay.clone(), tx);
    let mut form = jane();

    assert!(submitter.submit(&mut form));
    form.complete(rx.recv().await.unwrap());

    assert_eq!(form.status(), SubmissionStatus::Error);
    assert_eq!(form.value(Field::Name), "Jane Doe");
    assert_eq!(relay.calls(), 1);
}

#[test]
fn late_outcome_without_submission_is_ignored() {
    let mut form = jane();
    form.complete(Ok(()));
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.value(Field::Email), "jane@example.com");
}

#[test]
fn button_label_follows_status() {
    assert_eq!(SubmissionStatus::Idle.button_label(), "Send Message");
    assert_eq!(SubmissionStatus::Sending.button_label(), "Sending...");
    assert_eq!(SubmissionStatus::Success.button_label(), "Message Sent!");
    assert_eq!(SubmissionStatus::Error.button_label(), "Error. Try again.");
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation and editing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn validation_reports_first_missing_field() {
    assert_eq!(
        filled("", "jane@example.com", "Hi").validate(),
        Err(ValidationError::Missing(Field::Name))
    );
    assert_eq!(
        filled("Jane", "jane@example.com", "   ").validate(),
        Err(ValidationError::Missing(Field::Message))
    );
    assert_eq!(
        filled("Jane", "not-an-email", "Hi").validate(),
        Err(ValidationError::InvalidEmail)
    );
    assert_eq!(
        filled("Jane", "a@b@c", "Hi").validate(),
        Err(ValidationError::InvalidEmail)
    );
    assert_eq!(jane().validate(), Ok(()));
}

#[test]
fn newlines_only_go_into_the_message() {
    let mut form = ContactForm::new();
    form.push_char(Field::Name, 'A');
    form.push_char(Field::Name, '\n');
    form.push_char(Field::Message, 'x');
    form.push_char(Field::Message, '\n');
    form.push_char(Field::Submit, 'z');

    assert_eq!(form.value(Field::Name), "A");
    assert_eq!(form.value(Field::Message), "x\n");

    form.pop_char(Field::Message);
    assert_eq!(form.value(Field::Message), "x");
}

#[test]
fn tab_order_cycles_through_submit() {
    let mut field = Field::Name;
    for expected in [Field::Email, Field::Message, Field::Submit, Field::Name] {
        field = field.next();
        assert_eq!(field, expected);
    }
    assert_eq!(Field::Name.prev(), Field::Submit);
}
