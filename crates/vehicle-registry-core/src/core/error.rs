// crates/vehicle-registry-core/src/core/error.rs
// ============================================================================
// Module: Vehicle Registry Errors
// Description: Registry call failures with stable numeric codes.
// Purpose: Return explicit error results to callers instead of faults.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every registry call fails with a [`RegistryError`]. Codes are stable and
//! surface in receipts as `err(code)`; names are stable labels for audit
//! logs. Failures are always detected before state is mutated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::identifiers::Principal;
use crate::core::identifiers::VehicleId;

// ============================================================================
// SECTION: Error Codes
// ============================================================================

/// Caller lacks the required role.
pub const ERR_NOT_AUTHORIZED: u32 = 100;
/// Vehicle identifier is already registered.
pub const ERR_VEHICLE_EXISTS: u32 = 101;
/// Vehicle identifier is not registered.
pub const ERR_VEHICLE_NOT_FOUND: u32 = 102;
/// Principal has no operator record.
pub const ERR_OPERATOR_NOT_FOUND: u32 = 103;
/// Status text is outside the allowed set.
pub const ERR_INVALID_STATUS: u32 = 104;
/// Operator mutation attempted while emergency lockdown is in force.
pub const ERR_EMERGENCY_MODE_ACTIVE: u32 = 105;

// ============================================================================
// SECTION: Registry Error
// ============================================================================

/// Registry call failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Caller lacks the required role.
    #[error("caller {caller} is not authorized")]
    NotAuthorized {
        /// Rejected caller.
        caller: Principal,
    },
    /// Vehicle identifier is already registered.
    #[error("vehicle {0} already registered")]
    VehicleExists(VehicleId),
    /// Vehicle identifier is not registered.
    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),
    /// Principal has no operator record.
    #[error("operator {0} not found")]
    OperatorNotFound(Principal),
    /// Status text is outside the allowed set.
    #[error("invalid vehicle status: {0}")]
    InvalidStatus(String),
    /// Operator mutation attempted while emergency lockdown is in force.
    #[error("emergency mode active; operator mutations are suspended")]
    EmergencyModeActive,
}

impl RegistryError {
    /// Returns the stable numeric error code.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::NotAuthorized {
                ..
            } => ERR_NOT_AUTHORIZED,
            Self::VehicleExists(_) => ERR_VEHICLE_EXISTS,
            Self::VehicleNotFound(_) => ERR_VEHICLE_NOT_FOUND,
            Self::OperatorNotFound(_) => ERR_OPERATOR_NOT_FOUND,
            Self::InvalidStatus(_) => ERR_INVALID_STATUS,
            Self::EmergencyModeActive => ERR_EMERGENCY_MODE_ACTIVE,
        }
    }

    /// Returns the stable error name for a numeric code, if known.
    #[must_use]
    pub const fn name_for_code(code: u32) -> Option<&'static str> {
        match code {
            ERR_NOT_AUTHORIZED => Some("ERR-NOT-AUTHORIZED"),
            ERR_VEHICLE_EXISTS => Some("ERR-VEHICLE-EXISTS"),
            ERR_VEHICLE_NOT_FOUND => Some("ERR-VEHICLE-NOT-FOUND"),
            ERR_OPERATOR_NOT_FOUND => Some("ERR-OPERATOR-NOT-FOUND"),
            ERR_INVALID_STATUS => Some("ERR-INVALID-STATUS"),
            ERR_EMERGENCY_MODE_ACTIVE => Some("ERR-EMERGENCY-MODE-ACTIVE"),
            _ => None,
        }
    }

    /// Returns the stable error name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match Self::name_for_code(self.code()) {
            Some(name) => name,
            None => "ERR-UNKNOWN",
        }
    }
}
