use serde::Serialize;
use std::path::PathBuf;
use sumcheck_types::{ManifestSummary, VerificationResult};

/// Steps of a verification run, in emission order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VerifyEvent {
    /// Directory walk is about to begin
    DiscoveryStarted { root: PathBuf, pattern: String },

    /// Directory walk finished with at least one manifest
    ManifestsDiscovered { count: usize },

    /// Directory walk finished empty; nothing else follows
    NoManifestsFound { root: PathBuf, pattern: String },

    /// A manifest is about to be read
    ManifestStarted { path: PathBuf },

    /// A manifest could not be read and was skipped
    ManifestUnreadable { path: PathBuf, message: String },

    /// One manifest entry was checked
    EntryVerified {
        manifest: PathBuf,
        line: usize,
        file_name: String,
        path: PathBuf,
        result: VerificationResult,
    },

    /// All entries of a manifest were checked
    ManifestCompleted {
        path: PathBuf,
        name: String,
        summary: ManifestSummary,
    },

    /// Every manifest was processed
    RunCompleted {
        manifests: usize,
        totals: ManifestSummary,
    },
}
