// crates/vehicle-registry-core/src/core/state.rs
// ============================================================================
// Module: Vehicle Registry State
// Description: Vehicle, operator, and global registry state records.
// Purpose: Hold the explicit state store that every registry call mutates.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! [`RegistryState`] is the single explicit state store owned by the
//! execution context. Tables are ordered maps so serialization and hashing
//! are deterministic.
//!
//! # Invariants
//! - `admin` is fixed at genesis and never reassigned by registry calls.
//! - There is at most one operator record per principal and one vehicle
//!   record per vehicle id.
//! - Records are never deleted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::hashing::HashAlgorithm;
use crate::core::hashing::HashDigest;
use crate::core::hashing::HashError;
use crate::core::hashing::hash_canonical_json;
use crate::core::identifiers::BlockHeight;
use crate::core::identifiers::Principal;
use crate::core::identifiers::VehicleId;
use crate::core::status::VehicleStatus;

// ============================================================================
// SECTION: Records
// ============================================================================

/// Registered vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Vehicle identifier (immutable after registration).
    pub vehicle_id: VehicleId,
    /// Current status.
    pub status: VehicleStatus,
    /// Principal that registered the vehicle.
    pub registered_by: Principal,
    /// Height of the block that registered the vehicle.
    pub registered_at: BlockHeight,
    /// Height of the block that last changed the status.
    pub updated_at: BlockHeight,
}

/// Registered operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorRecord {
    /// Clearance rank.
    pub clearance_level: u32,
    /// Whether the operator may currently act.
    pub is_active: bool,
    /// Height of the block that last (re)registered the operator.
    pub registered_at: BlockHeight,
}

/// Read-only operator view returned by `get-operator-details`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorDetails {
    /// Clearance rank.
    #[serde(rename = "clearance-level")]
    pub clearance_level: u32,
    /// Whether the operator may currently act.
    #[serde(rename = "is-active")]
    pub is_active: bool,
}

impl From<&OperatorRecord> for OperatorDetails {
    fn from(record: &OperatorRecord) -> Self {
        Self {
            clearance_level: record.clearance_level,
            is_active: record.is_active,
        }
    }
}

// ============================================================================
// SECTION: Registry State
// ============================================================================

/// Complete registry state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryState {
    /// Deployer-derived admin principal.
    pub admin: Principal,
    /// Global emergency flag.
    pub emergency_mode: bool,
    /// Operator table keyed by principal.
    pub operators: BTreeMap<Principal, OperatorRecord>,
    /// Vehicle table keyed by vehicle id.
    pub vehicles: BTreeMap<VehicleId, VehicleRecord>,
}

impl RegistryState {
    /// Creates the deployment state: `deployer` is admin, emergency off, no records.
    #[must_use]
    pub const fn genesis(deployer: Principal) -> Self {
        Self {
            admin: deployer,
            emergency_mode: false,
            operators: BTreeMap::new(),
            vehicles: BTreeMap::new(),
        }
    }

    /// Returns true when `principal` holds admin rights.
    #[must_use]
    pub fn is_admin(&self, principal: &Principal) -> bool {
        self.admin == *principal
    }

    /// Returns the operator record for `principal`, if any.
    #[must_use]
    pub fn operator(&self, principal: &Principal) -> Option<&OperatorRecord> {
        self.operators.get(principal)
    }

    /// Returns the vehicle record for `vehicle_id`, if any.
    #[must_use]
    pub fn vehicle(&self, vehicle_id: &VehicleId) -> Option<&VehicleRecord> {
        self.vehicles.get(vehicle_id)
    }

    /// Computes the canonical hash of the full state.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when canonicalization fails.
    pub fn canonical_hash_with(&self, algorithm: HashAlgorithm) -> Result<HashDigest, HashError> {
        hash_canonical_json(algorithm, self)
    }
}
