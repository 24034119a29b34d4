// crates/vehicle-registry-core/tests/common/mod.rs
// =============================================================================
// Module: Registry Test Helpers
// Description: Shared accounts and chain builders for registry tests.
// Purpose: Reduce duplication across integration tests for vehicle-registry-core.
// =============================================================================

#![allow(
    dead_code,
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    reason = "Test helpers are selectively used across suites and may panic on setup failure."
)]

use std::sync::Arc;
use std::sync::Mutex;

use vehicle_registry_core::ContractCall;
use vehicle_registry_core::InMemoryRegistryStateStore;
use vehicle_registry_core::Principal;
use vehicle_registry_core::RegistryAuditEvent;
use vehicle_registry_core::RegistryAuditSink;
use vehicle_registry_core::RegistryPolicy;
use vehicle_registry_core::SimulatedChain;
use vehicle_registry_core::Transaction;
use vehicle_registry_core::VehicleId;

/// Deployer account address (admin).
pub const DEPLOYER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
/// Secondary wallet address (non-admin).
pub const WALLET_1: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";
/// Tertiary wallet address (non-admin).
pub const WALLET_2: &str = "ST2JHG361ZXG51QTKY2NQCVBPPRRE2KZB1HR05NNC";

/// Returns the deployer principal.
pub fn deployer() -> Principal {
    Principal::new(DEPLOYER)
}

/// Returns the first wallet principal.
pub fn wallet_1() -> Principal {
    Principal::new(WALLET_1)
}

/// Returns the second wallet principal.
pub fn wallet_2() -> Principal {
    Principal::new(WALLET_2)
}

/// Builds a `register-vehicle` transaction.
pub fn register_vehicle(sender: &str, vehicle_id: &str) -> Transaction {
    Transaction::new(sender, ContractCall::RegisterVehicle {
        vehicle_id: VehicleId::new(vehicle_id),
    })
}

/// Builds an `update-status` transaction.
pub fn update_status(sender: &str, vehicle_id: &str, status: &str) -> Transaction {
    Transaction::new(sender, ContractCall::UpdateStatus {
        vehicle_id: VehicleId::new(vehicle_id),
        new_status: status.to_string(),
    })
}

/// Builds a `register-operator` transaction.
pub fn register_operator(sender: &str, operator: &str, clearance_level: u32) -> Transaction {
    Transaction::new(sender, ContractCall::RegisterOperator {
        principal: Principal::new(operator),
        clearance_level,
    })
}

/// Audit sink that keeps events in memory.
#[derive(Default)]
pub struct RecordingAuditSink {
    /// Recorded events.
    pub events: Mutex<Vec<RegistryAuditEvent>>,
}

impl RegistryAuditSink for RecordingAuditSink {
    fn record(&self, event: &RegistryAuditEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// Deploys a chain with a custom policy and a recording audit sink.
pub fn chain_with_policy(
    policy: RegistryPolicy,
) -> (SimulatedChain<InMemoryRegistryStateStore>, Arc<RecordingAuditSink>) {
    let audit = Arc::new(RecordingAuditSink::default());
    let chain = SimulatedChain::deploy(
        deployer(),
        policy,
        InMemoryRegistryStateStore::new(),
        audit.clone(),
    )
    .expect("deploy chain");
    (chain, audit)
}
