// crates/vehicle-registry-core/src/core/hashing.rs
// ============================================================================
// Module: Registry State and Block Hashing
// Description: Canonical JSON encoding and digests for snapshots and blocks.
// Purpose: Give every committed height a reproducible state hash and block hash.
// Dependencies: serde, serde_jcs, sha2, thiserror
// ============================================================================

//! ## Overview
//! The chain host hashes two things: the [`RegistryState`] snapshot stored at
//! each height, and the block header that links that snapshot to its parent.
//! Both are encoded as RFC 8785 canonical JSON first, so vehicle and operator
//! maps hash the same no matter how they were built.
//!
//! The genesis block's parent is [`HashDigest::zero`].
//!
//! [`RegistryState`]: crate::core::RegistryState

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::fmt::Write as _;

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;
use thiserror::Error;

// ============================================================================
// SECTION: Hash Algorithm
// ============================================================================

/// Digest function used for state and block hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    /// SHA-256.
    Sha256,
}

impl HashAlgorithm {
    /// Digest length in bytes.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha256 => 32,
        }
    }

    /// Digests raw bytes.
    #[must_use]
    pub fn digest(self, bytes: &[u8]) -> HashDigest {
        match self {
            Self::Sha256 => HashDigest::new(self, &Sha256::digest(bytes)),
        }
    }
}

/// Algorithm a chain uses unless its config picks another.
pub const DEFAULT_HASH_ALGORITHM: HashAlgorithm = HashAlgorithm::Sha256;

// ============================================================================
// SECTION: Hash Digest
// ============================================================================

/// Hex digest tagged with the algorithm that produced it.
///
/// Appears on every [`Block`](crate::runtime::Block) as its `state_hash`,
/// `parent_hash` and `block_hash`. Serializes as
/// `{"algorithm": "sha256", "value": "<hex>"}` and displays as the bare hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashDigest {
    /// Producing algorithm.
    pub algorithm: HashAlgorithm,
    /// Lowercase hex.
    pub value: String,
}

impl HashDigest {
    /// Wraps already-computed digest bytes.
    #[must_use]
    pub fn new(algorithm: HashAlgorithm, bytes: &[u8]) -> Self {
        let mut value = String::with_capacity(bytes.len() * 2);
        for byte in bytes {
            // Writing to a String cannot fail.
            let _ = write!(value, "{byte:02x}");
        }
        Self {
            algorithm,
            value,
        }
    }

    /// All-zero digest, the parent hash of the genesis block.
    #[must_use]
    pub fn zero(algorithm: HashAlgorithm) -> Self {
        Self::new(algorithm, &vec![0_u8; algorithm.output_len()])
    }
}

impl fmt::Display for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// A snapshot or block header could not be hashed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Value has no canonical JSON form.
    #[error("failed to canonicalize json: {0}")]
    Canonicalization(String),
}

// ============================================================================
// SECTION: Canonical Encoding
// ============================================================================

/// Encodes a value as RFC 8785 canonical JSON.
///
/// Also used for script output lines, which must be byte-stable.
///
/// # Errors
///
/// Returns [`HashError::Canonicalization`] when the value cannot be serialized.
pub fn canonical_json_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, HashError> {
    serde_jcs::to_vec(value).map_err(|err| HashError::Canonicalization(err.to_string()))
}

/// Digests the canonical JSON encoding of a value.
///
/// # Errors
///
/// Returns [`HashError::Canonicalization`] when the value cannot be serialized.
pub fn hash_canonical_json<T: Serialize + ?Sized>(
    algorithm: HashAlgorithm,
    value: &T,
) -> Result<HashDigest, HashError> {
    Ok(algorithm.digest(&canonical_json_bytes(value)?))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
