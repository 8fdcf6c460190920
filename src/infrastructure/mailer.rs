use crate::domain::ports::ThankYouNotifier;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// The confirmation-notification collaborator.
///
/// Message content and delivery are outside the charge flow's concern;
/// this implementation emits a structured event for the delivery pipeline
/// to pick up.
#[derive(Default)]
pub struct ThankYouMailer;

impl ThankYouMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ThankYouNotifier for ThankYouMailer {
    async fn send(&self, email: &str, name: &str) {
        tracing::info!(email, name, "sending thank-you notification");
    }
}

/// In-memory notifier that records every invocation. Used by tests to
/// assert the notification fires exactly once and only on success.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().expect("notifier mutex poisoned").clone()
    }
}

#[async_trait]
impl ThankYouNotifier for RecordingNotifier {
    async fn send(&self, email: &str, name: &str) {
        self.sent
            .lock()
            .expect("notifier mutex poisoned")
            .push((email.to_string(), name.to_string()));
    }
}
