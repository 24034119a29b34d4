// crates/vehicle-registry-core/src/core/mod.rs
// ============================================================================
// Module: Vehicle Registry Core Types
// Description: Canonical registry identifiers, records, calls, and errors.
// Purpose: Provide stable, serializable types for registry state and receipts.
// Dependencies: serde, serde_jcs, sha2, thiserror
// ============================================================================

//! ## Overview
//! Core types define registry state, the fixed vehicle status set, the call
//! surface, and the numeric error taxonomy. These types are the canonical
//! source of truth for every derived surface (chain receipts, CLI output).

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod call;
pub mod error;
pub mod hashing;
pub mod identifiers;
pub mod state;
pub mod status;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use call::CallResult;
pub use call::CallValue;
pub use call::ContractCall;
pub use call::ReadOnlyCall;
pub use call::Receipt;
pub use error::RegistryError;
pub use hashing::DEFAULT_HASH_ALGORITHM;
pub use hashing::HashAlgorithm;
pub use hashing::HashDigest;
pub use hashing::HashError;
pub use identifiers::BlockHeight;
pub use identifiers::IdentifierError;
pub use identifiers::Principal;
pub use identifiers::VehicleId;
pub use state::OperatorDetails;
pub use state::OperatorRecord;
pub use state::RegistryState;
pub use state::VehicleRecord;
pub use status::InvalidStatusError;
pub use status::VehicleStatus;
