//! Per-entry verification outcomes and per-manifest tallies

use serde::{Deserialize, Serialize};
use sumcheck_hash::Hash;

/// Outcome of checking one manifest entry against the filesystem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerificationResult {
    /// Computed digest equals the recorded one
    Match,
    /// File exists but its digest differs
    Mismatch { expected: Hash, actual: Hash },
    /// Referenced file does not exist; it was never hashed
    NotFound,
    /// File exists but could not be opened or read
    HashError { message: String },
}

impl VerificationResult {
    /// Whether this outcome counts against the manifest
    #[must_use]
    pub fn is_issue(&self) -> bool {
        !matches!(self, Self::Match)
    }

    /// Short label used in logs and JSON consumers
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Match => "ok",
            Self::Mismatch { .. } => "fail",
            Self::NotFound => "not_found",
            Self::HashError { .. } => "error",
        }
    }
}

/// Running counters for one manifest.
///
/// `total` always equals `correct + incorrect + not_found + errors`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestSummary {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub not_found: usize,
    pub errors: usize,
}

impl ManifestSummary {
    /// Count one verified entry
    pub fn record(&mut self, result: &VerificationResult) {
        self.total += 1;
        match result {
            VerificationResult::Match => self.correct += 1,
            VerificationResult::Mismatch { .. } => self.incorrect += 1,
            VerificationResult::NotFound => self.not_found += 1,
            VerificationResult::HashError { .. } => self.errors += 1,
        }
    }

    /// Fold another manifest's counters into this one
    pub fn absorb(&mut self, other: &ManifestSummary) {
        self.total += other.total;
        self.correct += other.correct;
        self.incorrect += other.incorrect;
        self.not_found += other.not_found;
        self.errors += other.errors;
    }

    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.incorrect > 0 || self.not_found > 0 || self.errors > 0
    }

    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.total == self.correct + self.incorrect + self.not_found + self.errors
    }
}
