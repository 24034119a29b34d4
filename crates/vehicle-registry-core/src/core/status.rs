// crates/vehicle-registry-core/src/core/status.rs
// ============================================================================
// Module: Vehicle Status
// Description: Fixed vehicle status set and text parsing.
// Purpose: Reject status values outside the allowed set before any mutation.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Vehicle status is a closed enumeration. Status updates arrive as raw text
//! and are parsed with [`VehicleStatus::parse`]; anything outside
//! [`VehicleStatus::ALL`] is an invalid status. Transitions are unrestricted
//! within the set.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Operational status of a registered vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    /// Vehicle is in service. Initial status after registration.
    Active,
    /// Vehicle is parked and available.
    Idle,
    /// Vehicle is moving between locations.
    InTransit,
    /// Vehicle is out of service for maintenance.
    Maintenance,
    /// Vehicle has been retired.
    Decommissioned,
}

/// Raised when status text is not a member of the allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized vehicle status: {0}")]
pub struct InvalidStatusError(pub String);

impl VehicleStatus {
    /// Every allowed status, in canonical order.
    pub const ALL: [Self; 5] =
        [Self::Active, Self::Idle, Self::InTransit, Self::Maintenance, Self::Decommissioned];

    /// Returns the canonical text form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Idle => "idle",
            Self::InTransit => "in_transit",
            Self::Maintenance => "maintenance",
            Self::Decommissioned => "decommissioned",
        }
    }

    /// Parses status text. Matching is exact; no case folding.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStatusError`] when the text is not an allowed status.
    pub fn parse(value: &str) -> Result<Self, InvalidStatusError> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| InvalidStatusError(value.to_string()))
    }
}

impl FromStr for VehicleStatus {
    type Err = InvalidStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
