#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! MD5 content hashing for sumcheck
//!
//! This crate provides the digest value type used by manifests and the
//! streaming file hasher used during verification.

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use sumcheck_errors::{Error, ManifestError, StorageError};

/// Size of chunks for streaming hash computation
const CHUNK_SIZE: usize = 64 * 1024; // 64KB

/// Length of an MD5 digest in bytes
pub const DIGEST_LEN: usize = 16;

/// Length of an MD5 digest rendered as hex
pub const HEX_LEN: usize = DIGEST_LEN * 2;

/// An MD5 hash value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash {
    bytes: [u8; DIGEST_LEN],
}

impl Hash {
    /// Create a hash from raw bytes
    #[must_use]
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self { bytes }
    }

    /// Convert to lower-case hex string
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parse from hex string. Upper- and lower-case digits are accepted.
    ///
    /// # Errors
    /// Returns an error if the input string is not valid hexadecimal or is not exactly 32 characters (16 bytes).
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let bytes = hex::decode(s).map_err(|e| ManifestError::InvalidHash {
            value: s.to_string(),
            message: e.to_string(),
        })?;

        if bytes.len() != DIGEST_LEN {
            return Err(ManifestError::InvalidHash {
                value: s.to_string(),
                message: format!("hash must be {DIGEST_LEN} bytes, got {}", bytes.len()),
            }
            .into());
        }

        let mut array = [0u8; DIGEST_LEN];
        array.copy_from_slice(&bytes);
        Ok(Self::from_bytes(array))
    }

    /// Compute hash of a byte slice
    #[must_use]
    pub fn from_data(data: &[u8]) -> Self {
        Self::from_bytes(Md5::digest(data).into())
    }

    /// Compute hash of a file
    ///
    /// The file handle is released before this returns, on success or error.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, read, or if any I/O operation fails.
    pub fn hash_file(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| StorageError::from_io_with_path(&e, path))?;
        let bytes = digest_reader(file).map_err(|e| StorageError::from_io_with_path(&e, path))?;
        Ok(Self::from_bytes(bytes))
    }
}

/// Stream a reader through MD5 in fixed-size chunks
fn digest_reader<R: Read>(mut reader: R) -> std::io::Result<[u8; DIGEST_LEN]> {
    let mut hasher = Md5::new();
    let mut buffer = vec![0; CHUNK_SIZE];

    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hasher.finalize().into())
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
