// crates/vehicle-registry-core/src/runtime/access.rs
// ============================================================================
// Module: Registry Access Resolution
// Description: Maps a calling principal to its registry role.
// Purpose: Provide one fail-closed authorization decision for vehicle writes.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Callers resolve to exactly one [`Access`] decision. The admin always
//! resolves to [`Access::Admin`], even when it also holds an operator record.
//! Any principal without an active operator record at or above the
//! clearance threshold is denied.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::Principal;
use crate::core::RegistryState;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Reason a caller was denied vehicle-write access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// Caller has no operator record.
    NotOperator,
    /// Caller's operator record is inactive.
    Inactive,
    /// Caller's clearance is below the required level.
    InsufficientClearance {
        /// Caller clearance.
        clearance_level: u32,
        /// Required clearance.
        required: u32,
    },
}

impl DenyReason {
    /// Returns a stable label for the reason.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotOperator => "not_operator",
            Self::Inactive => "operator_inactive",
            Self::InsufficientClearance {
                ..
            } => "insufficient_clearance",
        }
    }
}

/// Resolved registry role for a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Deployer-derived admin.
    Admin,
    /// Active operator with sufficient clearance.
    Operator {
        /// Operator clearance.
        clearance_level: u32,
    },
    /// No vehicle-write access.
    Denied(DenyReason),
}

impl Access {
    /// Returns true when the caller may write vehicle records.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        !matches!(self, Self::Denied(_))
    }
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Resolves the caller's vehicle-write access.
#[must_use]
pub fn resolve_access(state: &RegistryState, caller: &Principal, min_clearance: u32) -> Access {
    if state.is_admin(caller) {
        return Access::Admin;
    }
    let Some(operator) = state.operator(caller) else {
        return Access::Denied(DenyReason::NotOperator);
    };
    if !operator.is_active {
        return Access::Denied(DenyReason::Inactive);
    }
    if operator.clearance_level < min_clearance {
        return Access::Denied(DenyReason::InsufficientClearance {
            clearance_level: operator.clearance_level,
            required: min_clearance,
        });
    }
    Access::Operator {
        clearance_level: operator.clearance_level,
    }
}
