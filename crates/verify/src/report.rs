use serde::Serialize;
use std::path::PathBuf;
use sumcheck_types::{ManifestSummary, VerificationResult};

/// Outcome for one manifest line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    pub line: usize,
    pub file_name: String,
    pub path: PathBuf,
    pub result: VerificationResult,
}

/// Everything learned from one manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestReport {
    pub path: PathBuf,
    pub name: String,
    pub entries: Vec<EntryReport>,
    pub summary: ManifestSummary,
    /// Set when the manifest itself could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ManifestReport {
    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.error.is_some() || self.summary.has_issues()
    }
}

/// Result of a full verification run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub pattern: String,
    pub manifests: Vec<ManifestReport>,
    pub totals: ManifestSummary,
    pub duration_ms: u64,
}

impl RunReport {
    #[must_use]
    pub fn new(root: PathBuf, pattern: String) -> Self {
        Self {
            root,
            pattern,
            manifests: Vec::new(),
            totals: ManifestSummary::default(),
            duration_ms: 0,
        }
    }

    /// Append a manifest and fold its counters into the totals
    pub fn push(&mut self, manifest: ManifestReport) {
        self.totals.absorb(&manifest.summary);
        self.manifests.push(manifest);
    }

    /// True when no manifest was found under the root
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.manifests.is_empty()
    }

    /// Any mismatch, missing file, hash error or unreadable manifest
    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.manifests.iter().any(ManifestReport::has_issues)
    }
}
