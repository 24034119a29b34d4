// crates/vehicle-registry-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example `vehicle-registry.toml`. The example must always pass
//! validation; a test enforces this.

/// Returns a canonical example `vehicle-registry.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[registry]
deployer = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"
min_vehicle_clearance = 1
emergency_lockdown = true

[audit]
sink = "stderr"
# sink = "file"
# path = "registry-audit.jsonl"
"#,
    )
}
