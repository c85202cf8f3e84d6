//! Diagnostics Sink
//!
//! The binding engine occasionally needs to tell somebody something without
//! failing: a bound property that also declares two-way notification, or a
//! listener run that failed inside a store callback where no `Result` can
//! travel. Rather than writing to a hidden global, those messages go through
//! an injectable [`Diagnostics`] sink, so tests can assert on them
//! deterministically.
//!
//! The default sink forwards to `tracing`.

use std::sync::RwLock;

/// Receiver for non-fatal warnings and for errors that have no return
/// channel to a caller.
pub trait Diagnostics: Send + Sync {
    /// A non-fatal condition worth telling the developer about.
    fn warn(&self, message: &str);

    /// A failure surfaced from a context with no caller to return to, such
    /// as a listener invoked by the store.
    fn error(&self, message: &str);
}

/// Default sink backed by `tracing`.
#[derive(Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "tether", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "tether", "{message}");
    }
}

/// Sink that records every message, for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    warnings: RwLock<Vec<String>>,
    errors: RwLock<Vec<String>>,
}

impl RecordingDiagnostics {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings recorded so far, in emission order.
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.read().expect("warnings lock poisoned").clone()
    }

    /// Errors recorded so far, in emission order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.read().expect("errors lock poisoned").clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, message: &str) {
        self.warnings
            .write()
            .expect("warnings lock poisoned")
            .push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors
            .write()
            .expect("errors lock poisoned")
            .push(message.to_string());
    }
}
