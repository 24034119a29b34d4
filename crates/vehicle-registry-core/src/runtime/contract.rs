// crates/vehicle-registry-core/src/runtime/contract.rs
// ============================================================================
// Module: Vehicle Registry Contract
// Description: Authorization and state-transition handlers for registry calls.
// Purpose: Validate caller and input domain, then mutate explicit state.
// Dependencies: crate::core, crate::runtime::access
// ============================================================================

//! ## Overview
//! Every handler receives the registry state by reference and the calling
//! principal as an explicit argument. Handlers run all checks before the
//! first write, so a failed call never leaves partial state behind.
//!
//! Check order:
//! 1. input domain (`update-status` only: status text against the allowed set)
//! 2. authorization
//! 3. emergency lockdown (operators only)
//! 4. record existence

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::BlockHeight;
use crate::core::CallValue;
use crate::core::ContractCall;
use crate::core::OperatorDetails;
use crate::core::OperatorRecord;
use crate::core::Principal;
use crate::core::ReadOnlyCall;
use crate::core::RegistryError;
use crate::core::RegistryState;
use crate::core::VehicleId;
use crate::core::VehicleRecord;
use crate::core::VehicleStatus;
use crate::runtime::access::Access;
use crate::runtime::access::resolve_access;

// ============================================================================
// SECTION: Policy
// ============================================================================

/// Default clearance an operator needs to write vehicle records.
pub const DEFAULT_MIN_VEHICLE_CLEARANCE: u32 = 1;

/// Configurable registry authorization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryPolicy {
    /// Minimum operator clearance for `register-vehicle` and `update-status`.
    pub min_vehicle_clearance: u32,
    /// When true, emergency mode suspends operator vehicle writes.
    pub emergency_lockdown: bool,
}

impl Default for RegistryPolicy {
    fn default() -> Self {
        Self {
            min_vehicle_clearance: DEFAULT_MIN_VEHICLE_CLEARANCE,
            emergency_lockdown: true,
        }
    }
}

// ============================================================================
// SECTION: Contract
// ============================================================================

/// Vehicle registry contract handlers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VehicleRegistry {
    /// Authorization rules.
    policy: RegistryPolicy,
}

impl VehicleRegistry {
    /// Creates a registry with the given policy.
    #[must_use]
    pub const fn new(policy: RegistryPolicy) -> Self {
        Self {
            policy,
        }
    }

    /// Returns the active policy.
    #[must_use]
    pub const fn policy(&self) -> RegistryPolicy {
        self.policy
    }

    /// Dispatches a mutating call. Successful calls return `Bool(true)`.
    ///
    /// # Errors
    ///
    /// Returns the handler's [`RegistryError`].
    pub fn execute(
        &self,
        state: &mut RegistryState,
        caller: &Principal,
        height: BlockHeight,
        call: &ContractCall,
    ) -> Result<CallValue, RegistryError> {
        match call {
            ContractCall::RegisterVehicle {
                vehicle_id,
            } => self.register_vehicle(state, caller, height, vehicle_id.clone()),
            ContractCall::UpdateStatus {
                vehicle_id,
                new_status,
            } => self.update_status(state, caller, height, vehicle_id, new_status),
            ContractCall::TriggerEmergencyMode => Self::trigger_emergency_mode(state, caller),
            ContractCall::ClearEmergencyMode => Self::clear_emergency_mode(state, caller),
            ContractCall::RegisterOperator {
                principal,
                clearance_level,
            } => Self::register_operator(state, caller, height, principal.clone(), *clearance_level),
            ContractCall::DeactivateOperator {
                principal,
            } => Self::deactivate_operator(state, caller, principal),
        }?;
        Ok(CallValue::Bool(true))
    }

    /// Evaluates a read-only call.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the queried record does not exist.
    pub fn query(state: &RegistryState, call: &ReadOnlyCall) -> Result<CallValue, RegistryError> {
        match call {
            ReadOnlyCall::GetOperatorDetails {
                principal,
            } => Self::get_operator_details(state, principal).map(CallValue::Operator),
            ReadOnlyCall::GetVehicle {
                vehicle_id,
            } => Self::get_vehicle(state, vehicle_id).cloned().map(CallValue::Vehicle),
            ReadOnlyCall::IsEmergencyMode => Ok(CallValue::Bool(state.emergency_mode)),
            ReadOnlyCall::GetAdmin => Ok(CallValue::Principal(state.admin.clone())),
        }
    }

    // ------------------------------------------------------------------------
    // Vehicle handlers
    // ------------------------------------------------------------------------

    /// Registers a vehicle with status `active`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotAuthorized`] unless the caller is admin or an
    ///   active operator with sufficient clearance.
    /// - [`RegistryError::EmergencyModeActive`] for operators under lockdown.
    /// - [`RegistryError::VehicleExists`] when the id is taken.
    pub fn register_vehicle(
        &self,
        state: &mut RegistryState,
        caller: &Principal,
        height: BlockHeight,
        vehicle_id: VehicleId,
    ) -> Result<(), RegistryError> {
        self.authorize_vehicle_write(state, caller)?;
        if state.vehicles.contains_key(&vehicle_id) {
            return Err(RegistryError::VehicleExists(vehicle_id));
        }
        let record = VehicleRecord {
            vehicle_id: vehicle_id.clone(),
            status: VehicleStatus::Active,
            registered_by: caller.clone(),
            registered_at: height,
            updated_at: height,
        };
        state.vehicles.insert(vehicle_id, record);
        Ok(())
    }

    /// Sets a vehicle's status.
    ///
    /// The status text is checked before the caller, so an unrecognized
    /// status fails with [`RegistryError::InvalidStatus`] for every caller.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidStatus`] for text outside the allowed set.
    /// - [`RegistryError::NotAuthorized`] / [`RegistryError::EmergencyModeActive`]
    ///   as for [`Self::register_vehicle`].
    /// - [`RegistryError::VehicleNotFound`] when the vehicle is unknown.
    pub fn update_status(
        &self,
        state: &mut RegistryState,
        caller: &Principal,
        height: BlockHeight,
        vehicle_id: &VehicleId,
        new_status: &str,
    ) -> Result<(), RegistryError> {
        let status = VehicleStatus::parse(new_status)
            .map_err(|err| RegistryError::InvalidStatus(err.0))?;
        self.authorize_vehicle_write(state, caller)?;
        let record = state
            .vehicles
            .get_mut(vehicle_id)
            .ok_or_else(|| RegistryError::VehicleNotFound(vehicle_id.clone()))?;
        record.status = status;
        record.updated_at = height;
        Ok(())
    }

    /// Returns a vehicle record.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::VehicleNotFound`] when the vehicle is unknown.
    pub fn get_vehicle<'a>(
        state: &'a RegistryState,
        vehicle_id: &VehicleId,
    ) -> Result<&'a VehicleRecord, RegistryError> {
        state.vehicle(vehicle_id).ok_or_else(|| RegistryError::VehicleNotFound(vehicle_id.clone()))
    }

    // ------------------------------------------------------------------------
    // Emergency handlers
    // ------------------------------------------------------------------------

    /// Turns emergency mode on. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotAuthorized`] for non-admin callers.
    pub fn trigger_emergency_mode(
        state: &mut RegistryState,
        caller: &Principal,
    ) -> Result<(), RegistryError> {
        require_admin(state, caller)?;
        state.emergency_mode = true;
        Ok(())
    }

    /// Turns emergency mode off. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotAuthorized`] for non-admin callers.
    pub fn clear_emergency_mode(
        state: &mut RegistryState,
        caller: &Principal,
    ) -> Result<(), RegistryError> {
        require_admin(state, caller)?;
        state.emergency_mode = false;
        Ok(())
    }

    /// Returns the emergency flag.
    #[must_use]
    pub const fn is_emergency_mode(state: &RegistryState) -> bool {
        state.emergency_mode
    }

    // ------------------------------------------------------------------------
    // Operator handlers
    // ------------------------------------------------------------------------

    /// Creates or replaces an operator record with `is_active = true`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotAuthorized`] for non-admin callers.
    pub fn register_operator(
        state: &mut RegistryState,
        caller: &Principal,
        height: BlockHeight,
        principal: Principal,
        clearance_level: u32,
    ) -> Result<(), RegistryError> {
        require_admin(state, caller)?;
        state.operators.insert(
            principal,
            OperatorRecord {
                clearance_level,
                is_active: true,
                registered_at: height,
            },
        );
        Ok(())
    }

    /// Marks an operator inactive, keeping its clearance.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotAuthorized`] for non-admin callers.
    /// - [`RegistryError::OperatorNotFound`] when no record exists.
    pub fn deactivate_operator(
        state: &mut RegistryState,
        caller: &Principal,
        principal: &Principal,
    ) -> Result<(), RegistryError> {
        require_admin(state, caller)?;
        let record = state
            .operators
            .get_mut(principal)
            .ok_or_else(|| RegistryError::OperatorNotFound(principal.clone()))?;
        record.is_active = false;
        Ok(())
    }

    /// Returns `{clearance-level, is-active}` for an operator.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::OperatorNotFound`] when no record exists.
    pub fn get_operator_details(
        state: &RegistryState,
        principal: &Principal,
    ) -> Result<OperatorDetails, RegistryError> {
        state
            .operator(principal)
            .map(OperatorDetails::from)
            .ok_or_else(|| RegistryError::OperatorNotFound(principal.clone()))
    }

    // ------------------------------------------------------------------------
    // Authorization
    // ------------------------------------------------------------------------

    /// Authorizes a vehicle write for `caller`.
    fn authorize_vehicle_write(
        &self,
        state: &RegistryState,
        caller: &Principal,
    ) -> Result<(), RegistryError> {
        match resolve_access(state, caller, self.policy.min_vehicle_clearance) {
            Access::Admin => Ok(()),
            Access::Operator {
                ..
            } if state.emergency_mode && self.policy.emergency_lockdown => {
                Err(RegistryError::EmergencyModeActive)
            }
            Access::Operator {
                ..
            } => Ok(()),
            Access::Denied(_) => Err(RegistryError::NotAuthorized {
                caller: caller.clone(),
            }),
        }
    }
}

/// Fails unless `caller` is the admin.
fn require_admin(state: &RegistryState, caller: &Principal) -> Result<(), RegistryError> {
    if state.is_admin(caller) {
        Ok(())
    } else {
        Err(RegistryError::NotAuthorized {
            caller: caller.clone(),
        })
    }
}
