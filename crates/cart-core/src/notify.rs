//! # Notifier Trait
//!
//! Fire-and-forget side channel for user-facing error messages. Never
//! awaited, never fails, and never affects control flow beyond being
//! invoked; callers who need error detail observe this channel instead of
//! a returned error value.

use std::sync::{Arc, Mutex};
use tracing::error;

/// Sink for user-facing error messages
pub trait Notifier: Send + Sync {
    /// Report a human-readable error message.
    fn error(&self, message: &str);
}

/// Type alias for a shared notifier (dynamic dispatch)
pub type BoxedNotifier = Arc<dyn Notifier>;

/// Notifier that routes messages to the tracing subscriber.
///
/// The stand-in for a toast/UI channel in headless contexts.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        error!(target: "cart_notify", "{message}");
    }
}

/// Notifier that records every message, for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, in order
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    /// Drain and return the recorded messages
    pub fn take(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|mut m| std::mem::take(&mut *m))
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
