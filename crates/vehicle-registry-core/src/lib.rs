// crates/vehicle-registry-core/src/lib.rs
// ============================================================================
// Module: Vehicle Registry Core Library
// Description: Public API surface for the Vehicle Registry core.
// Purpose: Expose registry types, interfaces, audit sinks, and runtime helpers.
// Dependencies: crate::{audit, core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Vehicle Registry core implements an access-controlled registry of vehicles
//! and operators with a global emergency flag, plus a deterministic
//! in-process chain host that executes registry calls block by block.
//! Registry state is explicit and passed by reference into every handler;
//! the calling principal is an explicit argument rather than ambient context.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use audit::NoopAuditSink;
pub use audit::RegistryAuditEvent;
pub use audit::RegistryAuditSink;
pub use interfaces::RegistryStateStore;
pub use interfaces::StoreError;
pub use runtime::Access;
pub use runtime::Block;
pub use runtime::ChainError;
pub use runtime::InMemoryRegistryStateStore;
pub use runtime::RegistryPolicy;
pub use runtime::SimulatedChain;
pub use runtime::Transaction;
pub use runtime::VehicleRegistry;
