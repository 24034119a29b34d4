//! Config defaults and validation tests for vehicle-registry-config.
// crates/vehicle-registry-config/tests/config_validation.rs
// =============================================================================
// Module: Config Defaults and Validation Tests
// Description: Validate default behavior and fail-closed config invariants.
// Purpose: Ensure minimal config is valid and invalid values are rejected.
// =============================================================================

use vehicle_registry_config::AuditSinkKind;
use vehicle_registry_config::MAX_MIN_VEHICLE_CLEARANCE;
use vehicle_registry_config::config_toml_example;
use vehicle_registry_core::RegistryPolicy;

mod common;

type TestResult = Result<(), String>;

#[test]
fn minimal_config_uses_defaults() -> TestResult {
    let config = common::config_from_toml(&common::minimal_toml()).map_err(|err| err.to_string())?;
    if config.policy() != RegistryPolicy::default() {
        return Err("minimal config should yield the default policy".to_string());
    }
    if config.audit.sink != AuditSinkKind::Stderr || config.audit.path.is_some() {
        return Err("audit should default to stderr without a path".to_string());
    }
    if config.deployer().as_str() != common::DEPLOYER {
        return Err("deployer mismatch".to_string());
    }
    Ok(())
}

#[test]
fn example_config_validates() -> TestResult {
    common::config_from_toml(&config_toml_example()).map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn policy_reflects_registry_section() -> TestResult {
    let toml = format!(
        "[registry]\ndeployer = \"{}\"\nmin_vehicle_clearance = 3\nemergency_lockdown = false\n",
        common::DEPLOYER
    );
    let config = common::config_from_toml(&toml).map_err(|err| err.to_string())?;
    let expected = RegistryPolicy {
        min_vehicle_clearance: 3,
        emergency_lockdown: false,
    };
    if config.policy() != expected {
        return Err("policy should mirror the registry section".to_string());
    }
    Ok(())
}

#[test]
fn missing_registry_section_is_rejected() -> TestResult {
    common::assert_invalid(common::config_from_toml(""), "config parse error")
}

#[test]
fn malformed_deployer_is_rejected() -> TestResult {
    common::assert_invalid(
        common::config_from_toml("[registry]\ndeployer = \"not a principal\"\n"),
        "registry.deployer",
    )?;
    common::assert_invalid(common::config_from_toml("[registry]\ndeployer = \"\"\n"), "non-empty")
}

#[test]
fn clearance_threshold_is_bounded() -> TestResult {
    let toml = format!(
        "{}min_vehicle_clearance = {}\n",
        common::minimal_toml(),
        MAX_MIN_VEHICLE_CLEARANCE + 1
    );
    common::assert_invalid(common::config_from_toml(&toml), "min_vehicle_clearance")
}

#[test]
fn unknown_fields_are_rejected() -> TestResult {
    let toml = format!("{}admin_override = true\n", common::minimal_toml());
    common::assert_invalid(common::config_from_toml(&toml), "unknown field")?;
    let toml = format!("{}\n[server]\nbind = \"127.0.0.1:0\"\n", common::minimal_toml());
    common::assert_invalid(common::config_from_toml(&toml), "unknown field")
}

#[test]
fn file_sink_requires_path() -> TestResult {
    let toml = format!("{}\n[audit]\nsink = \"file\"\n", common::minimal_toml());
    common::assert_invalid(common::config_from_toml(&toml), "audit.path is required")?;
    let toml = format!("{}\n[audit]\nsink = \"file\"\npath = \"  \"\n", common::minimal_toml());
    common::assert_invalid(common::config_from_toml(&toml), "audit.path must be non-empty")
}

#[test]
fn path_is_forbidden_for_non_file_sinks() -> TestResult {
    for sink in ["none", "stderr"] {
        let toml = format!(
            "{}\n[audit]\nsink = \"{sink}\"\npath = \"audit.jsonl\"\n",
            common::minimal_toml()
        );
        common::assert_invalid(common::config_from_toml(&toml), "only allowed for the file sink")?;
    }
    Ok(())
}

#[test]
fn unknown_sink_is_rejected() -> TestResult {
    let toml = format!("{}\n[audit]\nsink = \"syslog\"\n", common::minimal_toml());
    common::assert_invalid(common::config_from_toml(&toml), "config parse error")
}
