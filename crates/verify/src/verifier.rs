use crate::report::{EntryReport, ManifestReport, RunReport};
use std::path::{Path, PathBuf};
use std::time::Instant;
use sumcheck_errors::{Error, UserFacingError};
use sumcheck_events::{EventSink, VerifyEvent};
use sumcheck_hash::Hash;
use sumcheck_manifest::{discover_manifests, ManifestEntry, ManifestFile, ManifestParser};
use sumcheck_types::{ManifestSummary, VerificationResult};
use tracing::{debug, info};

/// Where to look and what to look for.
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    pub root: PathBuf,
    pub pattern: String,
}

/// Sequential verifier: one manifest at a time, one entry at a time.
#[derive(Debug)]
pub struct Verifier {
    options: VerifyOptions,
    parser: ManifestParser,
}

impl Verifier {
    /// # Errors
    /// Returns an error if the manifest line parser cannot be built.
    pub fn new(options: VerifyOptions) -> Result<Self, Error> {
        Ok(Self {
            options,
            parser: ManifestParser::new()?,
        })
    }

    /// Discover every manifest under the root and verify each in turn.
    ///
    /// Per-entry and per-manifest failures are reported through `sink` and
    /// recorded in the report; they never stop the run.
    ///
    /// # Errors
    /// Returns an error only if discovery itself cannot start (bad pattern or root).
    pub fn run(&self, sink: &mut dyn EventSink) -> Result<RunReport, Error> {
        let start = Instant::now();
        let VerifyOptions { root, pattern } = &self.options;

        sink.send(VerifyEvent::DiscoveryStarted {
            root: root.clone(),
            pattern: pattern.clone(),
        });

        let manifests = discover_manifests(root, pattern)?;
        let mut report = RunReport::new(root.clone(), pattern.clone());

        if manifests.is_empty() {
            info!(root = %root.display(), pattern = %pattern, "no manifests found");
            sink.send(VerifyEvent::NoManifestsFound {
                root: root.clone(),
                pattern: pattern.clone(),
            });
            report.duration_ms = elapsed_ms(start);
            return Ok(report);
        }

        info!(count = manifests.len(), "manifests discovered");
        sink.send(VerifyEvent::ManifestsDiscovered {
            count: manifests.len(),
        });

        for manifest in &manifests {
            report.push(self.verify_manifest(manifest, sink));
        }

        sink.send(VerifyEvent::RunCompleted {
            manifests: report.manifests.len(),
            totals: report.totals,
        });
        report.duration_ms = elapsed_ms(start);
        Ok(report)
    }

    /// Verify a single manifest. Counters start from zero for every call.
    pub fn verify_manifest(
        &self,
        manifest: &ManifestFile,
        sink: &mut dyn EventSink,
    ) -> ManifestReport {
        let path = manifest.path().to_path_buf();
        let name = manifest.display_name();

        info!(manifest = %path.display(), "verifying manifest");
        sink.send(VerifyEvent::ManifestStarted { path: path.clone() });

        let entries = match manifest.read_entries(&self.parser) {
            Ok(entries) => entries,
            Err(e) => {
                let message = e.user_message().into_owned();
                debug!(manifest = %path.display(), error = %message, "skipping unreadable manifest");
                sink.send(VerifyEvent::ManifestUnreadable {
                    path: path.clone(),
                    message: message.clone(),
                });
                return ManifestReport {
                    path,
                    name,
                    entries: Vec::new(),
                    summary: ManifestSummary::default(),
                    error: Some(message),
                };
            }
        };

        let mut summary = ManifestSummary::default();
        let mut reports = Vec::with_capacity(entries.len());

        for entry in &entries {
            let target = entry.resolve(manifest.base_dir());
            let result = check_file(&target, &entry.expected);
            summary.record(&result);

            sink.send(VerifyEvent::EntryVerified {
                manifest: path.clone(),
                line: entry.line,
                file_name: entry.file_name.clone(),
                path: target.clone(),
                result: result.clone(),
            });

            reports.push(EntryReport {
                line: entry.line,
                file_name: entry.file_name.clone(),
                path: target,
                result,
            });
        }

        info!(
            manifest = %path.display(),
            total = summary.total,
            correct = summary.correct,
            incorrect = summary.incorrect,
            not_found = summary.not_found,
            errors = summary.errors,
            "manifest verified"
        );
        sink.send(VerifyEvent::ManifestCompleted {
            path: path.clone(),
            name: name.clone(),
            summary,
        });

        ManifestReport {
            path,
            name,
            entries: reports,
            summary,
            error: None,
        }
    }
}

/// Check one entry against the file it names under `base_dir`.
///
/// A missing file is never hashed. A file that exists but cannot be read
/// yields [`VerificationResult::HashError`] instead of failing the caller.
#[must_use]
pub fn verify_entry(entry: &ManifestEntry, base_dir: &Path) -> VerificationResult {
    check_file(&entry.resolve(base_dir), &entry.expected)
}

fn check_file(path: &Path, expected: &Hash) -> VerificationResult {
    if !path.exists() {
        debug!(path = %path.display(), "referenced file missing");
        return VerificationResult::NotFound;
    }

    match Hash::hash_file(path) {
        Ok(actual) if actual == *expected => VerificationResult::Match,
        Ok(actual) => {
            debug!(
                path = %path.display(),
                expected = %expected,
                actual = %actual,
                "digest mismatch"
            );
            VerificationResult::Mismatch {
                expected: *expected,
                actual,
            }
        }
        Err(e) => {
            let message = e.user_message().into_owned();
            debug!(path = %path.display(), error = %message, "failed to hash file");
            VerificationResult::HashError { message }
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
