// crates/vehicle-registry-core/src/interfaces/mod.rs
// ============================================================================
// Module: Vehicle Registry Interfaces
// Description: Backend-agnostic state storage interface.
// Purpose: Define the storage contract used by the chain host.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The chain host snapshots registry state after every block through
//! [`RegistryStateStore`]. Implementations must return exactly what was
//! saved and fail closed on internal errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::BlockHeight;
use crate::core::RegistryState;

// ============================================================================
// SECTION: State Store
// ============================================================================

/// State store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Store backend failure.
    #[error("registry state store error: {0}")]
    Store(String),
    /// A snapshot already exists for the height.
    #[error("registry state already stored for height {0}")]
    Conflict(BlockHeight),
}

/// Persistence for per-height registry state snapshots.
pub trait RegistryStateStore {
    /// Loads the snapshot saved for `height`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    fn load(&self, height: BlockHeight) -> Result<Option<RegistryState>, StoreError>;

    /// Saves the snapshot for `height`. Heights are write-once.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] when a snapshot already exists for
    /// `height`, or [`StoreError::Store`] when the backend fails.
    fn save(&self, height: BlockHeight, state: &RegistryState) -> Result<(), StoreError>;
}
