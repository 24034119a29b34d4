// crates/vehicle-registry-core/src/runtime/store.rs
// ============================================================================
// Module: Vehicle Registry In-Memory Store
// Description: In-memory per-height state snapshots.
// Purpose: Provide a deterministic store implementation without external deps.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! [`InMemoryRegistryStateStore`] keeps one snapshot per block height behind
//! a mutex. Clones share the same map. Heights are write-once.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use crate::core::BlockHeight;
use crate::core::RegistryState;
use crate::interfaces::RegistryStateStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory registry state store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRegistryStateStore {
    /// Snapshots keyed by block height.
    snapshots: Arc<Mutex<BTreeMap<BlockHeight, RegistryState>>>,
}

impl InMemoryRegistryStateStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the highest stored height, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Store`] when the mutex is poisoned.
    pub fn latest_height(&self) -> Result<Option<BlockHeight>, StoreError> {
        let guard = self
            .snapshots
            .lock()
            .map_err(|_| StoreError::Store("registry state store mutex poisoned".to_string()))?;
        Ok(guard.keys().next_back().copied())
    }
}

impl RegistryStateStore for InMemoryRegistryStateStore {
    fn load(&self, height: BlockHeight) -> Result<Option<RegistryState>, StoreError> {
        let guard = self
            .snapshots
            .lock()
            .map_err(|_| StoreError::Store("registry state store mutex poisoned".to_string()))?;
        Ok(guard.get(&height).cloned())
    }

    fn save(&self, height: BlockHeight, state: &RegistryState) -> Result<(), StoreError> {
        let mut guard = self
            .snapshots
            .lock()
            .map_err(|_| StoreError::Store("registry state store mutex poisoned".to_string()))?;
        if guard.contains_key(&height) {
            return Err(StoreError::Conflict(height));
        }
        guard.insert(height, state.clone());
        drop(guard);
        Ok(())
    }
}
