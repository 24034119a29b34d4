// crates/vehicle-registry-core/src/audit.rs
// ============================================================================
// Module: Registry Audit Logging
// Description: Structured audit events for executed registry calls.
// Purpose: Emit JSON-line audit records without a hard logging dependency.
// Dependencies: crate::core, serde, serde_json
// ============================================================================

//! ## Overview
//! Every call the chain host executes (mined or read-only) produces one
//! [`RegistryAuditEvent`]. Sinks serialize events as JSON lines; a sink
//! failure drops the line and never changes the call outcome.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::core::BlockHeight;
use crate::core::CallResult;
use crate::core::Principal;
use crate::core::RegistryError;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Audit outcome classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    /// Call succeeded.
    Ok,
    /// Call returned a registry error.
    Error,
}

/// Registry call audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct RegistryAuditEvent {
    /// Event identifier (`registry_call` or `registry_read`).
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Height the call executed at.
    pub block_height: BlockHeight,
    /// Calling principal.
    pub sender: Principal,
    /// Method name.
    pub method: &'static str,
    /// Call outcome.
    pub outcome: AuditOutcome,
    /// Registry error code when the call failed.
    pub error_code: Option<u32>,
    /// Registry error name when the call failed.
    pub error_name: Option<&'static str>,
}

/// Inputs required to construct an audit event.
pub struct RegistryAuditEventParams<'a> {
    /// Whether the call was read-only.
    pub read_only: bool,
    /// Height the call executed at.
    pub block_height: BlockHeight,
    /// Calling principal.
    pub sender: Principal,
    /// Method name.
    pub method: &'static str,
    /// Recorded call result.
    pub result: &'a CallResult,
}

impl RegistryAuditEvent {
    /// Creates a new audit event stamped with the current wall-clock time.
    #[must_use]
    pub fn new(params: RegistryAuditEventParams<'_>) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        let error_code = params.result.error_code();
        Self {
            event: if params.read_only { "registry_read" } else { "registry_call" },
            timestamp_ms,
            block_height: params.block_height,
            sender: params.sender,
            method: params.method,
            outcome: if error_code.is_some() { AuditOutcome::Error } else { AuditOutcome::Ok },
            error_code,
            error_name: error_code.and_then(RegistryError::name_for_code),
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for registry call events.
pub trait RegistryAuditSink: Send + Sync {
    /// Records an audit event.
    fn record(&self, event: &RegistryAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl RegistryAuditSink for StderrAuditSink {
    fn record(&self, event: &RegistryAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that appends JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl RegistryAuditSink for FileAuditSink {
    fn record(&self, event: &RegistryAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl RegistryAuditSink for NoopAuditSink {
    fn record(&self, _event: &RegistryAuditEvent) {}
}
