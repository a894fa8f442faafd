//! Recursive manifest discovery

use crate::ManifestFile;
use globset::{Glob, GlobMatcher};
use std::path::Path;
use sumcheck_errors::{Error, ManifestError};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Find every regular file under `root` whose file name matches `pattern`.
///
/// Entries within a directory are visited in file-name order, so the result
/// is stable across runs. Symlinks are not followed and unreadable
/// directories are skipped. A missing root yields an empty list.
///
/// # Errors
/// Returns an error if `pattern` is not a valid glob or `root` cannot be made absolute.
pub fn discover_manifests(root: &Path, pattern: &str) -> Result<Vec<ManifestFile>, Error> {
    let matcher = compile_pattern(pattern)?;
    let root = std::path::absolute(root).map_err(|e| ManifestError::InvalidRoot {
        path: root.display().to_string(),
        message: e.to_string(),
    })?;

    let mut manifests = Vec::new();
    for entry in WalkDir::new(&root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                if e.depth() == 0 {
                    debug!(root = %root.display(), error = %e, "scan root not readable");
                } else {
                    warn!(error = %e, "skipping unreadable path during discovery");
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if matcher.is_match(entry.file_name()) {
            debug!(path = %entry.path().display(), "found manifest");
            manifests.push(ManifestFile::new(entry.into_path()));
        }
    }

    Ok(manifests)
}

fn compile_pattern(pattern: &str) -> Result<GlobMatcher, Error> {
    Glob::new(pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|e| {
            ManifestError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            }
            .into()
        })
}
