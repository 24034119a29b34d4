// crates/vehicle-registry-core/tests/proptest_registry.rs
// ============================================================================
// Module: Registry Property-Based Tests
// Description: Authorization and status invariants over generated callers.
// Purpose: Hold access-control invariants across wide input ranges.
// ============================================================================

//! Property-based tests for registry authorization invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

mod common;

use common::DEPLOYER;
use proptest::prelude::*;
use vehicle_registry_core::BlockHeight;
use vehicle_registry_core::ContractCall;
use vehicle_registry_core::DEFAULT_HASH_ALGORITHM;
use vehicle_registry_core::Principal;
use vehicle_registry_core::RegistryState;
use vehicle_registry_core::SimulatedChain;
use vehicle_registry_core::Transaction;
use vehicle_registry_core::VehicleId;
use vehicle_registry_core::VehicleRegistry;
use vehicle_registry_core::VehicleStatus;

/// Generates well-formed principals other than the deployer.
fn non_admin_strategy() -> impl Strategy<Value = Principal> {
    "[A-Z0-9]{1,40}"
        .prop_filter("must not be the deployer", |value| value != DEPLOYER)
        .prop_map(Principal::new)
}

/// Generates well-formed vehicle identifiers.
fn vehicle_id_strategy() -> impl Strategy<Value = VehicleId> {
    "[A-Za-z0-9_-]{1,32}".prop_map(VehicleId::new)
}

/// Generates status text outside the allowed set.
fn invalid_status_strategy() -> impl Strategy<Value = String> {
    ".{0,24}".prop_filter("must not be an allowed status", |value| {
        VehicleStatus::parse(value).is_err()
    })
}

/// Generates mutating calls with well-formed arguments.
fn mutating_call_strategy() -> impl Strategy<Value = ContractCall> {
    prop_oneof![
        vehicle_id_strategy().prop_map(|vehicle_id| ContractCall::RegisterVehicle {
            vehicle_id,
        }),
        vehicle_id_strategy().prop_map(|vehicle_id| ContractCall::UpdateStatus {
            vehicle_id,
            new_status: "idle".to_string(),
        }),
        Just(ContractCall::TriggerEmergencyMode),
        Just(ContractCall::ClearEmergencyMode),
        (non_admin_strategy(), 0_u32 .. 10).prop_map(|(principal, clearance_level)| {
            ContractCall::RegisterOperator {
                principal,
                clearance_level,
            }
        }),
    ]
}

proptest! {
    #[test]
    fn strangers_cannot_register_vehicles(
        caller in non_admin_strategy(),
        vehicle_id in vehicle_id_strategy(),
    ) {
        let registry = VehicleRegistry::default();
        let mut state = RegistryState::genesis(common::deployer());
        let before = state.clone();

        let err = registry
            .register_vehicle(&mut state, &caller, BlockHeight::new(2), vehicle_id)
            .unwrap_err();

        prop_assert_eq!(err.code(), 100);
        prop_assert_eq!(state, before);
    }

    #[test]
    fn only_admin_toggles_emergency_mode(caller in non_admin_strategy(), start in any::<bool>()) {
        let mut state = RegistryState::genesis(common::deployer());
        state.emergency_mode = start;

        let trigger = VehicleRegistry::trigger_emergency_mode(&mut state, &caller).unwrap_err();
        let clear = VehicleRegistry::clear_emergency_mode(&mut state, &caller).unwrap_err();
        prop_assert_eq!(trigger.code(), 100);
        prop_assert_eq!(clear.code(), 100);
        prop_assert_eq!(state.emergency_mode, start);

        VehicleRegistry::trigger_emergency_mode(&mut state, &common::deployer()).unwrap();
        prop_assert!(state.emergency_mode);
        VehicleRegistry::clear_emergency_mode(&mut state, &common::deployer()).unwrap();
        prop_assert!(!state.emergency_mode);
    }

    #[test]
    fn invalid_status_fails_for_any_caller(
        caller in prop_oneof![Just(common::deployer()), non_admin_strategy()],
        raw in invalid_status_strategy(),
    ) {
        let registry = VehicleRegistry::default();
        let mut state = RegistryState::genesis(common::deployer());
        let vehicle_id = VehicleId::new("TEST001");
        registry
            .register_vehicle(&mut state, &common::deployer(), BlockHeight::new(2), vehicle_id.clone())
            .unwrap();

        let err = registry
            .update_status(&mut state, &caller, BlockHeight::new(3), &vehicle_id, &raw)
            .unwrap_err();

        prop_assert_eq!(err.code(), 104);
        prop_assert_eq!(state.vehicle(&vehicle_id).unwrap().status, VehicleStatus::Active);
    }

    #[test]
    fn repeated_calls_keep_authorization_outcome(
        caller in prop_oneof![Just(common::deployer()), non_admin_strategy()],
        call in mutating_call_strategy(),
    ) {
        let mut chain = SimulatedChain::deploy_in_memory(DEPLOYER).unwrap();
        let tx = Transaction::new(caller, call);

        let block = chain.mine_block(vec![tx.clone(), tx]).unwrap();

        let first = block.receipts[0].result.error_code() == Some(100);
        let second = block.receipts[1].result.error_code() == Some(100);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn failed_blocks_keep_state_hash(
        callers in prop::collection::vec(non_admin_strategy(), 1 .. 6),
        vehicle_id in vehicle_id_strategy(),
    ) {
        let mut chain = SimulatedChain::deploy_in_memory(DEPLOYER).unwrap();
        let before = chain.state().unwrap().canonical_hash_with(DEFAULT_HASH_ALGORITHM).unwrap();
        let transactions = callers
            .into_iter()
            .map(|caller| {
                Transaction::new(caller, ContractCall::RegisterVehicle {
                    vehicle_id: vehicle_id.clone(),
                })
            })
            .collect();

        let block = chain.mine_block(transactions).unwrap();

        prop_assert!(block.receipts.iter().all(|receipt| !receipt.result.is_ok()));
        prop_assert_eq!(block.state_hash, before);
    }
}
