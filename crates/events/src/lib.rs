#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Event stream for sumcheck verification runs
//!
//! The verifier never prints. It reports every step as a [`VerifyEvent`]
//! through an [`EventSink`], and the CLI decides how to render it. Events
//! are delivered synchronously, in the order the work happens.

pub mod verify;

pub use verify::VerifyEvent;

use std::sync::mpsc;
use tracing::Level;

/// Receiver of verification events
pub trait EventSink {
    /// Deliver one event. Implementations must not block on the verifier.
    fn send(&mut self, event: VerifyEvent);
}

/// Collecting sink, mostly useful for tests and buffered rendering
impl EventSink for Vec<VerifyEvent> {
    fn send(&mut self, event: VerifyEvent) {
        self.push(event);
    }
}

/// Forward into a channel; a dropped receiver is ignored
impl EventSink for mpsc::Sender<VerifyEvent> {
    fn send(&mut self, event: VerifyEvent) {
        let _ = mpsc::Sender::send(self, event);
    }
}

/// Sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn send(&mut self, _event: VerifyEvent) {}
}

/// Severity used when mirroring events into tracing
#[must_use]
pub fn tracing_level(event: &VerifyEvent) -> Level {
    match event {
        VerifyEvent::NoManifestsFound { .. } | VerifyEvent::ManifestUnreadable { .. } => {
            Level::WARN
        }
        VerifyEvent::EntryVerified { result, .. } if result.is_issue() => Level::WARN,
        VerifyEvent::EntryVerified { .. } => Level::DEBUG,
        _ => Level::INFO,
    }
}
