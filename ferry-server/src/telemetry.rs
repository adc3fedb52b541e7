//! Observability event sink.
//!
//! Handlers and the refresh loop hand events to the sink and move on;
//! delivery happens on a background task. The sink must never block or fail
//! its caller, so sends go over an unbounded channel and a closed channel is
//! ignored.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

/// An observability event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// An API request resolved successfully.
    Request { path: String },

    /// A scheduled refresh attempt failed.
    RefreshFailed { error: String },
}

/// Handle for emitting observability events.
///
/// Cheap to clone; all clones feed the same sink.
#[derive(Debug, Clone, Default)]
pub struct Telemetry {
    tx: Option<UnboundedSender<Event>>,
}

impl Telemetry {
    /// Create a sink draining to the log on a background task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn() -> Self {
        let (telemetry, mut rx) = Self::channel();

        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                match event {
                    Event::Request { path } => info!(%path, "api request"),
                    Event::RefreshFailed { error } => warn!(%error, "refresh failure reported"),
                }
            }
        });

        telemetry
    }

    /// Create a sink wired to a caller-owned receiver.
    ///
    /// Tests use this to observe exactly which events were emitted.
    pub fn channel() -> (Self, UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx: Some(tx) }, rx)
    }

    /// Create a sink that discards every event.
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// Report a successfully served API request.
    pub fn request(&self, path: impl Into<String>) {
        self.send(Event::Request { path: path.into() });
    }

    /// Report a failed refresh attempt.
    pub fn refresh_failed(&self, error: impl std::fmt::Display) {
        self.send(Event::RefreshFailed {
            error: error.to_string(),
        });
    }

    fn send(&self, event: Event) {
        let Some(tx) = &self.tx else {
            return;
        };
        // The receiver may already be gone during shutdown; that is fine
        let _ = tx.send(event);
    }
}
