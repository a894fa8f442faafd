#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Checksum manifest handling for sumcheck
//!
//! A manifest is a text file of `<md5>  <file name>` lines. This crate finds
//! manifests under a directory tree and turns their text into entries.

mod discover;
mod parser;

pub use discover::discover_manifests;
pub use parser::ManifestParser;

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use sumcheck_errors::{Error, ManifestError};
use sumcheck_hash::Hash;

/// A manifest file found during discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestFile {
    path: PathBuf,
    base_dir: PathBuf,
}

impl ManifestFile {
    /// Wrap an absolute manifest path; entries resolve against its parent
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let base_dir = path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Self { path, base_dir }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory that relative entry names resolve against
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// File name for display, falling back to the full path
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        )
    }

    /// Read the manifest once and parse its entries
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn read_entries(&self, parser: &ManifestParser) -> Result<Vec<ManifestEntry>, Error> {
        let raw = fs::read(&self.path).map_err(|e| ManifestError::Unreadable {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        let text = String::from_utf8_lossy(&raw);
        Ok(parser.parse(&text))
    }
}

/// One `<hash>  <name>` line of a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    /// 1-based line number within the manifest
    pub line: usize,
    pub expected: Hash,
    /// Name relative to the manifest's directory, as written
    pub file_name: String,
}

impl ManifestEntry {
    /// Path of the referenced file, joined onto `base_dir` without normalization
    #[must_use]
    pub fn resolve(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.file_name)
    }
}
