//! Structured logging integration for events
//!
//! Mirrors each verification event into tracing with structured fields, at
//! the severity the event stream assigns to it.

use sumcheck_events::{tracing_level, VerifyEvent};
use tracing::Level;

macro_rules! log_at {
    ($level:expr, $($arg:tt)+) => {
        if $level == Level::ERROR {
            tracing::error!($($arg)+);
        } else if $level == Level::WARN {
            tracing::warn!($($arg)+);
        } else if $level == Level::INFO {
            tracing::info!($($arg)+);
        } else if $level == Level::DEBUG {
            tracing::debug!($($arg)+);
        } else {
            tracing::trace!($($arg)+);
        }
    };
}

/// Log a `VerifyEvent` using the tracing infrastructure with structured fields
pub fn log_event_with_tracing(event: &VerifyEvent) {
    let level = tracing_level(event);
    match event {
        VerifyEvent::DiscoveryStarted { root, pattern } => {
            log_at!(level, root = %root.display(), pattern = %pattern, "Discovery started");
        }
        VerifyEvent::ManifestsDiscovered { count } => {
            log_at!(level, count = count, "Manifests discovered");
        }
        VerifyEvent::NoManifestsFound { root, pattern } => {
            log_at!(level, root = %root.display(), pattern = %pattern, "No manifests found");
        }
        VerifyEvent::ManifestStarted { path } => {
            log_at!(level, manifest = %path.display(), "Manifest started");
        }
        VerifyEvent::ManifestUnreadable { path, message } => {
            log_at!(
                level,
                manifest = %path.display(),
                message = %message,
                "Manifest unreadable"
            );
        }
        VerifyEvent::EntryVerified {
            manifest,
            line,
            file_name,
            path,
            result,
        } => {
            log_at!(
                level,
                manifest = %manifest.display(),
                line = line,
                file_name = %file_name,
                path = %path.display(),
                status = result.label(),
                "Entry verified"
            );
        }
        VerifyEvent::ManifestCompleted {
            path,
            name,
            summary,
        } => {
            log_at!(
                level,
                manifest = %path.display(),
                name = %name,
                total = summary.total,
                correct = summary.correct,
                incorrect = summary.incorrect,
                not_found = summary.not_found,
                errors = summary.errors,
                "Manifest completed"
            );
        }
        VerifyEvent::RunCompleted { manifests, totals } => {
            log_at!(
                level,
                manifests = manifests,
                total = totals.total,
                correct = totals.correct,
                incorrect = totals.incorrect,
                not_found = totals.not_found,
                errors = totals.errors,
                "Run completed"
            );
        }
    }
}
