#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Manifest verification for sumcheck
//!
//! Walks a tree for checksum manifests and checks every listed file,
//! one manifest and one entry at a time.

mod report;
mod verifier;

pub use report::{EntryReport, ManifestReport, RunReport};
pub use verifier::{verify_entry, Verifier, VerifyOptions};
