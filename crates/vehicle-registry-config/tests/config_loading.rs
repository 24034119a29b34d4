//! Config file loading tests for vehicle-registry-config.
// crates/vehicle-registry-config/tests/config_loading.rs
// =============================================================================
// Module: Config Loading Tests
// Description: Validate on-disk loading limits and audit sink construction.
// Purpose: Ensure file inputs are bounded and sinks are built from config.
// =============================================================================

use std::fs;

use vehicle_registry_config::ConfigError;
use vehicle_registry_config::MAX_CONFIG_FILE_SIZE;
use vehicle_registry_config::RegistryConfig;

mod common;

type TestResult = Result<(), String>;

#[test]
fn load_reads_explicit_path() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("vehicle-registry.toml");
    fs::write(&path, common::minimal_toml()).map_err(|err| err.to_string())?;

    let config = RegistryConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    if config.registry.deployer != common::DEPLOYER {
        return Err("deployer mismatch".to_string());
    }
    Ok(())
}

#[test]
fn load_missing_file_is_io_error() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    match RegistryConfig::load(Some(&dir.path().join("absent.toml"))) {
        Err(ConfigError::Io(_)) => Ok(()),
        Err(other) => Err(format!("expected io error, got {other}")),
        Ok(_) => Err("expected missing file to fail".to_string()),
    }
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("big.toml");
    let mut content = common::minimal_toml();
    content.push_str(&"#".repeat(MAX_CONFIG_FILE_SIZE));
    fs::write(&path, content).map_err(|err| err.to_string())?;

    common::assert_invalid(RegistryConfig::load(Some(&path)), "exceeds size limit")
}

#[test]
fn load_rejects_non_utf8() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("binary.toml");
    fs::write(&path, [0xff_u8, 0xfe, 0x00]).map_err(|err| err.to_string())?;

    common::assert_invalid(RegistryConfig::load(Some(&path)), "utf-8")
}

#[test]
fn file_sink_is_built_and_created() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let log_path = dir.path().join("audit.jsonl");
    let toml = format!(
        "{}\n[audit]\nsink = \"file\"\npath = \"{}\"\n",
        common::minimal_toml(),
        log_path.display()
    );
    let config = common::config_from_toml(&toml).map_err(|err| err.to_string())?;

    config.build_audit_sink().map_err(|err| err.to_string())?;

    if !log_path.exists() {
        return Err("audit log file should be created".to_string());
    }
    Ok(())
}

#[test]
fn file_sink_in_missing_directory_fails() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let log_path = dir.path().join("missing").join("audit.jsonl");
    let toml = format!(
        "{}\n[audit]\nsink = \"file\"\npath = \"{}\"\n",
        common::minimal_toml(),
        log_path.display()
    );
    let config = common::config_from_toml(&toml).map_err(|err| err.to_string())?;

    match config.build_audit_sink() {
        Err(ConfigError::Io(_)) => Ok(()),
        Err(other) => Err(format!("expected io error, got {other}")),
        Ok(_) => Err("expected sink construction to fail".to_string()),
    }
}
