//! Background relay calls for the UI loop
//!
//! The UI never awaits the relay. `submit` flips the form to `Sending`,
//! spawns the call and returns; the outcome comes back over an mpsc
//! channel that the event loop selects on and feeds to
//! [`ContactForm::complete`].

use super::{ContactForm, MailRelay, RelayError};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct ContactSubmitter {
    relay: Arc<dyn MailRelay>,
    outcomes: mpsc::Sender<Result<(), RelayError>>,
}

impl ContactSubmitter {
    pub fn new(relay: Arc<dyn MailRelay>, outcomes: mpsc::Sender<Result<(), RelayError>>) -> Self {
        Self { relay, outcomes }
    }

    /// Start a submission. Returns false when one is already in flight.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&self, form: &mut ContactForm) -> bool {
        let Some(submission) = form.begin_submit() else {
            return false;
        };

        let relay = Arc::clone(&self.relay);
        let outcomes = self.outcomes.clone();
        tracing::info!("Sending contact message via {}", relay.name());

        tokio::spawn(async move {
            let outcome = relay.send(&submission).await;
            // A closed channel means the UI has quit; the outcome is dropped
            let _ = outcomes.send(outcome).await;
        });
        true
    }
}
