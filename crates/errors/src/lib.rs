#![warn(mismatched_lifetime_syntaxes)]
#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error types for sumcheck
//!
//! This crate provides fine-grained error types organized by domain.
//! All error types implement Clone so they can travel inside reports.

use std::borrow::Cow;

use thiserror::Error;

pub mod config;
pub mod manifest;
pub mod storage;

// Re-export all error types at the root
pub use config::ConfigError;
pub use manifest::ManifestError;
pub use storage::StorageError;

/// Generic error type for cross-crate boundaries
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Minimal interface for rendering user-facing error information without
/// requiring heavyweight envelopes.
pub trait UserFacingError {
    /// Short message suitable for CLI output.
    fn user_message(&self) -> Cow<'_, str>;

    /// Optional remediation hint.
    fn user_hint(&self) -> Option<&'static str> {
        None
    }

    /// Stable error code for structured reporting.
    fn user_code(&self) -> Option<&'static str> {
        None
    }
}

impl UserFacingError for Error {
    fn user_message(&self) -> Cow<'_, str> {
        match self {
            Error::Storage(err) => err.user_message(),
            Error::Manifest(err) => err.user_message(),
            Error::Config(err) => err.user_message(),
        }
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Error::Storage(err) => err.user_hint(),
            Error::Manifest(err) => err.user_hint(),
            Error::Config(err) => err.user_hint(),
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Error::Storage(err) => err.user_code(),
            Error::Manifest(err) => err.user_code(),
            Error::Config(err) => err.user_code(),
        }
    }
}
