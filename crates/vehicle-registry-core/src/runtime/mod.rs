// crates/vehicle-registry-core/src/runtime/mod.rs
// ============================================================================
// Module: Vehicle Registry Runtime
// Description: Access resolution, contract handlers, stores, and chain host.
// Purpose: Execute registry calls against explicit state.
// Dependencies: crate::{audit, core, interfaces}
// ============================================================================

//! ## Overview
//! [`VehicleRegistry`] is the single canonical execution path for registry
//! calls. [`SimulatedChain`] hosts it: it sequences calls into blocks,
//! snapshots state through a [`crate::RegistryStateStore`], and emits
//! receipts and audit events.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod access;
pub mod chain;
pub mod contract;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use access::Access;
pub use access::DenyReason;
pub use access::resolve_access;
pub use chain::Block;
pub use chain::ChainError;
pub use chain::SimulatedChain;
pub use chain::Transaction;
pub use contract::DEFAULT_MIN_VEHICLE_CLEARANCE;
pub use contract::RegistryPolicy;
pub use contract::VehicleRegistry;
pub use store::InMemoryRegistryStateStore;
