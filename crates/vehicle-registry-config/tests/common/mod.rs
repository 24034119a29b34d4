// crates/vehicle-registry-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for vehicle-registry-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use vehicle_registry_config::ConfigError;
use vehicle_registry_config::RegistryConfig;

/// Deployer address used by config fixtures.
pub const DEPLOYER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

/// Returns a minimal valid TOML document.
pub fn minimal_toml() -> String {
    format!("[registry]\ndeployer = \"{DEPLOYER}\"\n")
}

/// Parses and validates a TOML string.
pub fn config_from_toml(toml_str: &str) -> Result<RegistryConfig, ConfigError> {
    RegistryConfig::from_toml_str(toml_str)
}

/// Checks that `result` failed with a message containing `needle`.
pub fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> Result<(), String> {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
