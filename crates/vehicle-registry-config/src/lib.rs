// crates/vehicle-registry-config/src/lib.rs
// ============================================================================
// Module: Vehicle Registry Config Library
// Description: Canonical config model, validation, and example generation.
// Purpose: Single source of truth for vehicle-registry.toml semantics.
// Dependencies: vehicle-registry-core, serde, toml
// ============================================================================

//! ## Overview
//! `vehicle-registry-config` defines the configuration model used to deploy
//! the registry on the simulated chain: the deployer, the operator clearance
//! threshold, emergency lockdown, and audit output. Validation is strict and
//! fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
