//! Manifest discovery and parsing error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ManifestError {
    #[error("invalid manifest pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("failed to read manifest {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("invalid hash '{value}': {message}")]
    InvalidHash { value: String, message: String },

    #[error("scan root is not usable: {path}: {message}")]
    InvalidRoot { path: String, message: String },
}

impl UserFacingError for ManifestError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidPattern { .. } => {
                Some("Use a shell-style glob such as 'md5sum*.txt' for --pattern.")
            }
            Self::Unreadable { .. } => Some("Check that the manifest file is readable."),
            _ => None,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::InvalidPattern { .. } => "manifest.invalid_pattern",
            Self::Unreadable { .. } => "manifest.unreadable",
            Self::InvalidHash { .. } => "manifest.invalid_hash",
            Self::InvalidRoot { .. } => "manifest.invalid_root",
        };
        Some(code)
    }
}
