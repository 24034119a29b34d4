// crates/vehicle-registry-core/src/core/identifiers.rs
// ============================================================================
// Module: Vehicle Registry Identifiers
// Description: Canonical identifiers for principals, vehicles, and blocks.
// Purpose: Provide strongly typed, serializable IDs with stable string forms.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Identifiers serialize as plain strings (or integers for block heights).
//! Construction is unchecked; syntax validation happens at the chain and CLI
//! boundaries through the `validate` helpers so malformed payloads are
//! rejected before any registry call executes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum principal length in characters.
pub const MAX_PRINCIPAL_LENGTH: usize = 128;
/// Maximum vehicle identifier length in characters.
pub const MAX_VEHICLE_ID_LENGTH: usize = 32;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Identifier syntax errors raised at validation boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// Identifier was empty.
    #[error("{kind} must be non-empty")]
    Empty {
        /// Identifier kind label.
        kind: &'static str,
    },
    /// Identifier exceeded its maximum length.
    #[error("{kind} exceeds {max} characters")]
    TooLong {
        /// Identifier kind label.
        kind: &'static str,
        /// Maximum allowed length.
        max: usize,
    },
    /// Identifier contained a disallowed character.
    #[error("{kind} contains invalid character '{found}'")]
    InvalidCharacter {
        /// Identifier kind label.
        kind: &'static str,
        /// Offending character.
        found: char,
    },
}

// ============================================================================
// SECTION: Principal
// ============================================================================

/// Caller identity (transaction sender or operator address).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Creates a new principal.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the principal as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validates principal syntax.
    ///
    /// Standard addresses are alphanumeric; contract principals append
    /// `.contract-name`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when the principal is empty, too long, or
    /// contains characters outside `[A-Za-z0-9._-]`.
    pub fn validate(&self) -> Result<(), IdentifierError> {
        validate_token("principal", &self.0, MAX_PRINCIPAL_LENGTH, |ch| {
            ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '_')
        })
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Principal {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Principal {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Vehicle Identifier
// ============================================================================

/// Vehicle identifier assigned at registration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(String);

impl VehicleId {
    /// Creates a new vehicle identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validates vehicle identifier syntax.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when the identifier is empty, longer than
    /// [`MAX_VEHICLE_ID_LENGTH`], or contains characters outside
    /// `[A-Za-z0-9_-]`.
    pub fn validate(&self) -> Result<(), IdentifierError> {
        validate_token("vehicle id", &self.0, MAX_VEHICLE_ID_LENGTH, |ch| {
            ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_')
        })
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for VehicleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VehicleId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Block Height
// ============================================================================

/// Block height of the simulated chain. Genesis is height 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BlockHeight(u64);

impl BlockHeight {
    /// Height assigned to the deployment block.
    pub const GENESIS: Self = Self(1);

    /// Creates a block height from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw height value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the following height, or `None` on overflow.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates a bounded ASCII token against a character predicate.
fn validate_token(
    kind: &'static str,
    value: &str,
    max: usize,
    allowed: impl Fn(char) -> bool,
) -> Result<(), IdentifierError> {
    if value.is_empty() {
        return Err(IdentifierError::Empty {
            kind,
        });
    }
    if value.chars().count() > max {
        return Err(IdentifierError::TooLong {
            kind,
            max,
        });
    }
    if let Some(found) = value.chars().find(|ch| !allowed(*ch)) {
        return Err(IdentifierError::InvalidCharacter {
            kind,
            found,
        });
    }
    Ok(())
}
