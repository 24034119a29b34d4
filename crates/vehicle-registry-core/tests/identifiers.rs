// crates/vehicle-registry-core/tests/identifiers.rs
// ============================================================================
// Module: Identifier Tests
// Description: Syntax checks for principals, vehicle ids, heights, and statuses.
// Purpose: Pin the boundary validation applied before calls execute.
// Dependencies: vehicle-registry-core
// ============================================================================
//! ## Overview
//! Identifier validation rejects malformed payloads at the chain boundary;
//! status parsing is exact and case sensitive.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

use vehicle_registry_core::BlockHeight;
use vehicle_registry_core::IdentifierError;
use vehicle_registry_core::Principal;
use vehicle_registry_core::VehicleId;
use vehicle_registry_core::VehicleStatus;
use vehicle_registry_core::core::identifiers::MAX_PRINCIPAL_LENGTH;
use vehicle_registry_core::core::identifiers::MAX_VEHICLE_ID_LENGTH;

/// Verifies typical wallet addresses validate.
#[test]
fn principal_accepts_wallet_addresses() {
    Principal::new("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM").validate().unwrap();
    Principal::new("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.vehicle-registry").validate().unwrap();
}

/// Verifies empty, oversized, and malformed principals are rejected.
#[test]
fn principal_rejects_malformed_values() {
    assert_eq!(Principal::new("").validate(), Err(IdentifierError::Empty {
        kind: "principal"
    }));
    assert_eq!(
        Principal::new("a".repeat(MAX_PRINCIPAL_LENGTH + 1)).validate(),
        Err(IdentifierError::TooLong {
            kind: "principal",
            max: MAX_PRINCIPAL_LENGTH,
        })
    );
    assert_eq!(Principal::new("ST1 X").validate(), Err(IdentifierError::InvalidCharacter {
        kind: "principal",
        found: ' ',
    }));
}

/// Verifies vehicle identifiers allow alphanumerics, dash, and underscore only.
#[test]
fn vehicle_id_character_set() {
    VehicleId::new("TEST001").validate().unwrap();
    VehicleId::new("fleet_7-B").validate().unwrap();
    VehicleId::new("a".repeat(MAX_VEHICLE_ID_LENGTH)).validate().unwrap();

    assert!(VehicleId::new("a".repeat(MAX_VEHICLE_ID_LENGTH + 1)).validate().is_err());
    assert!(matches!(
        VehicleId::new("car.1").validate(),
        Err(IdentifierError::InvalidCharacter { found: '.', .. })
    ));
    assert!(VehicleId::new("").validate().is_err());
}

/// Verifies identifiers serialize as bare strings.
#[test]
fn identifiers_serialize_transparently() {
    let json = serde_json::to_string(&VehicleId::new("TEST001")).unwrap();
    assert_eq!(json, "\"TEST001\"");
    let height: BlockHeight = serde_json::from_str("7").unwrap();
    assert_eq!(height, BlockHeight::new(7));
}

/// Verifies height arithmetic.
#[test]
fn block_height_next() {
    assert_eq!(BlockHeight::GENESIS.get(), 1);
    assert_eq!(BlockHeight::GENESIS.next(), Some(BlockHeight::new(2)));
    assert_eq!(BlockHeight::new(u64::MAX).next(), None);
    assert_eq!(BlockHeight::new(12).to_string(), "12");
}

/// Verifies status parsing is exact.
#[test]
fn status_parsing_is_exact() {
    for status in VehicleStatus::ALL {
        assert_eq!(VehicleStatus::parse(status.as_str()).unwrap(), status);
        assert_eq!(status.to_string(), status.as_str());
    }
    assert_eq!("in_transit".parse::<VehicleStatus>().unwrap(), VehicleStatus::InTransit);
    for raw in ["", "Active", "ACTIVE", " active", "in-transit", "invalid_status"] {
        let err = VehicleStatus::parse(raw).unwrap_err();
        assert_eq!(err.0, raw);
    }
}

/// Verifies statuses serialize as their canonical text.
#[test]
fn status_serializes_as_text() {
    let json = serde_json::to_string(&VehicleStatus::InTransit).unwrap();
    assert_eq!(json, "\"in_transit\"");
}
