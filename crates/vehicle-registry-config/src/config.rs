// crates/vehicle-registry-config/src/config.rs
// ============================================================================
// Module: Vehicle Registry Configuration
// Description: Configuration loading and validation for the vehicle registry.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: vehicle-registry-core, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! The path comes from the caller, then `VEHICLE_REGISTRY_CONFIG`, then
//! `vehicle-registry.toml` in the working directory. Unknown keys and invalid
//! values fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use vehicle_registry_core::NoopAuditSink;
use vehicle_registry_core::Principal;
use vehicle_registry_core::RegistryAuditSink;
use vehicle_registry_core::RegistryPolicy;
use vehicle_registry_core::audit::FileAuditSink;
use vehicle_registry_core::audit::StderrAuditSink;
use vehicle_registry_core::runtime::DEFAULT_MIN_VEHICLE_CLEARANCE;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "vehicle-registry.toml";
/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "VEHICLE_REGISTRY_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Upper bound for `registry.min_vehicle_clearance`.
pub const MAX_MIN_VEHICLE_CLEARANCE: u32 = 1000;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Vehicle registry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Deployment and authorization settings.
    pub registry: RegistrySection,
    /// Audit output settings.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl RegistryConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.registry.validate()?;
        self.audit.validate()?;
        Ok(())
    }

    /// Returns the deployer principal.
    #[must_use]
    pub fn deployer(&self) -> Principal {
        Principal::new(self.registry.deployer.clone())
    }

    /// Returns the registry authorization policy.
    #[must_use]
    pub const fn policy(&self) -> RegistryPolicy {
        RegistryPolicy {
            min_vehicle_clearance: self.registry.min_vehicle_clearance,
            emergency_lockdown: self.registry.emergency_lockdown,
        }
    }

    /// Builds the configured audit sink.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the audit log file cannot be opened.
    pub fn build_audit_sink(&self) -> Result<Arc<dyn RegistryAuditSink>, ConfigError> {
        self.audit.build_sink()
    }
}

/// Registry deployment settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrySection {
    /// Principal that deploys the registry and becomes admin.
    pub deployer: String,
    /// Minimum operator clearance for vehicle writes.
    #[serde(default = "default_min_vehicle_clearance")]
    pub min_vehicle_clearance: u32,
    /// Whether emergency mode suspends operator vehicle writes.
    #[serde(default = "default_emergency_lockdown")]
    pub emergency_lockdown: bool,
}

impl RegistrySection {
    /// Validates registry settings.
    fn validate(&self) -> Result<(), ConfigError> {
        Principal::new(self.deployer.clone())
            .validate()
            .map_err(|err| ConfigError::Invalid(format!("registry.deployer: {err}")))?;
        if self.min_vehicle_clearance > MAX_MIN_VEHICLE_CLEARANCE {
            return Err(ConfigError::Invalid(format!(
                "registry.min_vehicle_clearance must be <= {MAX_MIN_VEHICLE_CLEARANCE}"
            )));
        }
        Ok(())
    }
}

/// Audit sink selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSinkKind {
    /// Discard audit events.
    None,
    /// JSON lines on stderr.
    #[default]
    Stderr,
    /// JSON lines appended to `audit.path`.
    File,
}

/// Audit output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Sink selection.
    #[serde(default)]
    pub sink: AuditSinkKind,
    /// Log path for the file sink.
    #[serde(default)]
    pub path: Option<String>,
}

impl AuditConfig {
    /// Validates audit settings.
    fn validate(&self) -> Result<(), ConfigError> {
        match (self.sink, &self.path) {
            (AuditSinkKind::File, Some(path)) => validate_path_string("audit.path", path),
            (AuditSinkKind::File, None) => {
                Err(ConfigError::Invalid("audit.path is required for the file sink".to_string()))
            }
            (AuditSinkKind::None | AuditSinkKind::Stderr, Some(_)) => Err(ConfigError::Invalid(
                "audit.path is only allowed for the file sink".to_string(),
            )),
            (AuditSinkKind::None | AuditSinkKind::Stderr, None) => Ok(()),
        }
    }

    /// Builds the sink described by this config.
    fn build_sink(&self) -> Result<Arc<dyn RegistryAuditSink>, ConfigError> {
        match (self.sink, &self.path) {
            (AuditSinkKind::None, _) => Ok(Arc::new(NoopAuditSink)),
            (AuditSinkKind::Stderr, _) => Ok(Arc::new(StderrAuditSink)),
            (AuditSinkKind::File, Some(path)) => {
                let sink = FileAuditSink::new(Path::new(path.trim()))
                    .map_err(|err| ConfigError::Io(err.to_string()))?;
                Ok(Arc::new(sink))
            }
            (AuditSinkKind::File, None) => {
                Err(ConfigError::Invalid("audit.path is required for the file sink".to_string()))
            }
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    resolve_path_from(path, env::var(CONFIG_ENV_VAR).ok())
}

/// Resolves the config path given the value of [`CONFIG_ENV_VAR`], if set.
fn resolve_path_from(path: Option<&Path>, env_path: Option<String>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Some(env_path) = env_path {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a configured path string.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        if component.as_os_str().to_string_lossy().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Default for `registry.min_vehicle_clearance`.
const fn default_min_vehicle_clearance() -> u32 {
    DEFAULT_MIN_VEHICLE_CLEARANCE
}

/// Default for `registry.emergency_lockdown`.
const fn default_emergency_lockdown() -> bool {
    true
}

// ============================================================================
// SECTION: Tests
// ============================================================================
