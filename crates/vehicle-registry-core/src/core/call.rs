// crates/vehicle-registry-core/src/core/call.rs
// ============================================================================
// Module: Vehicle Registry Call Surface
// Description: Mutating and read-only calls, call values, and receipts.
// Purpose: Provide the serializable call/receipt model used by the chain host.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! Calls are tagged by their kebab-case method name, e.g.
//! `{"method":"register-vehicle","vehicle_id":"TEST001"}`. Results are
//! `{"ok": <value>}` or `{"err": <code>}` so receipts stay comparable with
//! the numeric error taxonomy.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::error::RegistryError;
use crate::core::identifiers::IdentifierError;
use crate::core::identifiers::Principal;
use crate::core::identifiers::VehicleId;
use crate::core::state::OperatorDetails;
use crate::core::state::VehicleRecord;

// ============================================================================
// SECTION: Mutating Calls
// ============================================================================

/// State-mutating registry call, executed inside a mined block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum ContractCall {
    /// Register a new vehicle.
    RegisterVehicle {
        /// Vehicle identifier to register.
        vehicle_id: VehicleId,
    },
    /// Change the status of a registered vehicle.
    UpdateStatus {
        /// Target vehicle.
        vehicle_id: VehicleId,
        /// Raw status text; validated against the allowed set.
        new_status: String,
    },
    /// Turn the emergency flag on.
    TriggerEmergencyMode,
    /// Turn the emergency flag off.
    ClearEmergencyMode,
    /// Create or update an operator record.
    RegisterOperator {
        /// Operator principal.
        principal: Principal,
        /// Clearance rank to assign.
        clearance_level: u32,
    },
    /// Mark an operator inactive.
    DeactivateOperator {
        /// Operator principal.
        principal: Principal,
    },
}

impl ContractCall {
    /// Returns the kebab-case method name.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::RegisterVehicle {
                ..
            } => "register-vehicle",
            Self::UpdateStatus {
                ..
            } => "update-status",
            Self::TriggerEmergencyMode => "trigger-emergency-mode",
            Self::ClearEmergencyMode => "clear-emergency-mode",
            Self::RegisterOperator {
                ..
            } => "register-operator",
            Self::DeactivateOperator {
                ..
            } => "deactivate-operator",
        }
    }

    /// Validates identifier arguments. Status text is left to the contract.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when an identifier argument is malformed.
    pub fn validate(&self) -> Result<(), IdentifierError> {
        match self {
            Self::RegisterVehicle {
                vehicle_id,
            }
            | Self::UpdateStatus {
                vehicle_id,
                ..
            } => vehicle_id.validate(),
            Self::RegisterOperator {
                principal,
                ..
            }
            | Self::DeactivateOperator {
                principal,
            } => principal.validate(),
            Self::TriggerEmergencyMode | Self::ClearEmergencyMode => Ok(()),
        }
    }
}

// ============================================================================
// SECTION: Read-Only Calls
// ============================================================================

/// Read-only registry call, evaluated without mining.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum ReadOnlyCall {
    /// Fetch `{clearance-level, is-active}` for an operator.
    GetOperatorDetails {
        /// Operator principal.
        principal: Principal,
    },
    /// Fetch a vehicle record.
    GetVehicle {
        /// Vehicle identifier.
        vehicle_id: VehicleId,
    },
    /// Fetch the emergency flag.
    IsEmergencyMode,
    /// Fetch the admin principal.
    GetAdmin,
}

impl ReadOnlyCall {
    /// Returns the kebab-case method name.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::GetOperatorDetails {
                ..
            } => "get-operator-details",
            Self::GetVehicle {
                ..
            } => "get-vehicle",
            Self::IsEmergencyMode => "is-emergency-mode",
            Self::GetAdmin => "get-admin",
        }
    }

    /// Validates identifier arguments.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when an identifier argument is malformed.
    pub fn validate(&self) -> Result<(), IdentifierError> {
        match self {
            Self::GetOperatorDetails {
                principal,
            } => principal.validate(),
            Self::GetVehicle {
                vehicle_id,
            } => vehicle_id.validate(),
            Self::IsEmergencyMode | Self::GetAdmin => Ok(()),
        }
    }
}

// ============================================================================
// SECTION: Results
// ============================================================================

/// Successful call value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallValue {
    /// Boolean value.
    Bool(bool),
    /// Operator details tuple.
    Operator(OperatorDetails),
    /// Vehicle record.
    Vehicle(VehicleRecord),
    /// Principal value.
    Principal(Principal),
}

/// Call outcome as recorded in receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallResult {
    /// Call succeeded.
    Ok(CallValue),
    /// Call failed with a registry error code.
    Err(u32),
}

impl CallResult {
    /// Returns true for successful calls.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns the success value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&CallValue> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Returns the boolean success value, if the call returned one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Ok(CallValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns the error code, if the call failed.
    #[must_use]
    pub const fn error_code(&self) -> Option<u32> {
        match self {
            Self::Ok(_) => None,
            Self::Err(code) => Some(*code),
        }
    }
}

impl From<Result<CallValue, RegistryError>> for CallResult {
    fn from(outcome: Result<CallValue, RegistryError>) -> Self {
        match outcome {
            Ok(value) => Self::Ok(value),
            Err(err) => Self::Err(err.code()),
        }
    }
}

/// Per-transaction receipt within a mined block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Zero-based position of the transaction in its block.
    pub index: usize,
    /// Transaction sender.
    pub sender: Principal,
    /// Method name of the executed call.
    pub method: String,
    /// Call outcome.
    pub result: CallResult,
}
