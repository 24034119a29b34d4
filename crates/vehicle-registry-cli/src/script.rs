// crates/vehicle-registry-cli/src/script.rs
// ============================================================================
// Module: Transaction Scripts
// Description: JSON transaction scripts replayed against the simulated chain.
// Purpose: Parse script steps and render one canonical JSON line per step.
// Dependencies: vehicle-registry-core, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! A script is a JSON array of steps. `{"block": [tx, ..]}` mines one block;
//! `{"read": {"caller": .., "call": {..}}}` evaluates a read-only call,
//! optionally at an earlier `height`. Each step yields one RFC 8785 JSON line.
//! Malformed payloads produce a `rejected` line and leave the chain unchanged.
//! Lines are written as each step completes, so output for earlier steps
//! survives an abort later in the script.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use vehicle_registry_core::Block;
use vehicle_registry_core::BlockHeight;
use vehicle_registry_core::CallResult;
use vehicle_registry_core::ChainError;
use vehicle_registry_core::HashDigest;
use vehicle_registry_core::HashError;
use vehicle_registry_core::Principal;
use vehicle_registry_core::ReadOnlyCall;
use vehicle_registry_core::Receipt;
use vehicle_registry_core::RegistryStateStore;
use vehicle_registry_core::SimulatedChain;
use vehicle_registry_core::Transaction;
use vehicle_registry_core::hashing::canonical_json_bytes;

// ============================================================================
// SECTION: Script Types
// ============================================================================

/// One script step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    /// Mine a block with these transactions.
    Block(Vec<Transaction>),
    /// Evaluate a read-only call.
    Read(ReadStep),
}

/// Read-only call step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadStep {
    /// Calling principal.
    pub caller: Principal,
    /// Read-only call to evaluate.
    pub call: ReadOnlyCall,
    /// Height to read at; defaults to the chain tip.
    #[serde(default)]
    pub height: Option<BlockHeight>,
}

// ============================================================================
// SECTION: Output Types
// ============================================================================

/// One rendered output line.
#[derive(Debug, Serialize)]
struct StepLine<'a> {
    /// Zero-based step index.
    step: usize,
    /// Step outcome.
    #[serde(flatten)]
    outcome: StepOutcome<'a>,
}

/// Step outcome payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum StepOutcome<'a> {
    /// Mined block summary.
    Block(BlockSummary<'a>),
    /// Read-only call result.
    Read(ReadSummary<'a>),
    /// Step rejected before execution.
    Rejected(RejectedSummary),
}

/// Mined block summary.
#[derive(Debug, Serialize)]
struct BlockSummary<'a> {
    /// Block height.
    height: BlockHeight,
    /// Post-block state hash.
    state_hash: &'a HashDigest,
    /// Block hash.
    block_hash: &'a HashDigest,
    /// Per-transaction receipts.
    receipts: &'a [Receipt],
}

/// Read-only call summary.
#[derive(Debug, Serialize)]
struct ReadSummary<'a> {
    /// Height the call was evaluated at.
    height: BlockHeight,
    /// Calling principal.
    caller: &'a Principal,
    /// Method name.
    method: &'static str,
    /// Call result.
    result: CallResult,
}

/// Rejection summary.
#[derive(Debug, Serialize)]
struct RejectedSummary {
    /// Rejection reason.
    error: String,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Script parsing and execution failures.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Script JSON was malformed.
    #[error("invalid script: {0}")]
    Parse(String),
    /// Chain host failure other than a rejected payload.
    #[error("chain failure at step {step}: {source}")]
    Chain {
        /// Step index.
        step: usize,
        /// Underlying chain error.
        source: ChainError,
    },
    /// Output could not be canonicalized.
    #[error("failed to encode step output: {0}")]
    Encode(String),
    /// Output could not be written.
    #[error("failed to write step output: {0}")]
    Output(String),
}

impl From<HashError> for ScriptError {
    fn from(err: HashError) -> Self {
        Self::Encode(err.to_string())
    }
}

// ============================================================================
// SECTION: Execution
// ============================================================================

/// Parses a script from JSON bytes.
///
/// # Errors
///
/// Returns [`ScriptError::Parse`] when the bytes are not a valid script.
pub fn parse_script(bytes: &[u8]) -> Result<Vec<ScriptStep>, ScriptError> {
    serde_json::from_slice(bytes).map_err(|err| ScriptError::Parse(err.to_string()))
}

/// Runs script steps in order, writing one canonical JSON line per step to `out`.
///
/// # Errors
///
/// Returns [`ScriptError`] when the chain host fails for a reason other than
/// a malformed payload, or when output cannot be encoded or written. Lines
/// for steps before the failure have already been written.
pub fn run_script<S: RegistryStateStore, W: Write>(
    chain: &mut SimulatedChain<S>,
    steps: Vec<ScriptStep>,
    out: &mut W,
) -> Result<(), ScriptError> {
    for (step, script_step) in steps.into_iter().enumerate() {
        let line = match script_step {
            ScriptStep::Block(transactions) => match chain.mine_block(transactions) {
                Ok(block) => render(step, StepOutcome::Block(block_summary(&block)))?,
                Err(err @ ChainError::InvalidTransaction { .. }) => render_rejected(step, &err)?,
                Err(source) => {
                    return Err(ScriptError::Chain {
                        step,
                        source,
                    });
                }
            },
            ScriptStep::Read(read) => {
                let height = read.height.unwrap_or_else(|| chain.height());
                match chain.call_read_only_at(height, &read.call, &read.caller) {
                    Ok(result) => render(
                        step,
                        StepOutcome::Read(ReadSummary {
                            height,
                            caller: &read.caller,
                            method: read.call.method(),
                            result,
                        }),
                    )?,
                    Err(err @ (ChainError::InvalidCall(_) | ChainError::UnknownHeight(_))) => {
                        render_rejected(step, &err)?
                    }
                    Err(source) => {
                        return Err(ScriptError::Chain {
                            step,
                            source,
                        });
                    }
                }
            }
        };
        writeln!(out, "{line}").map_err(|err| ScriptError::Output(err.to_string()))?;
        out.flush().map_err(|err| ScriptError::Output(err.to_string()))?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Borrows the summary fields of a mined block.
fn block_summary(block: &Block) -> BlockSummary<'_> {
    BlockSummary {
        height: block.height,
        state_hash: &block.state_hash,
        block_hash: &block.block_hash,
        receipts: &block.receipts,
    }
}

/// Renders a rejection line.
fn render_rejected(step: usize, err: &ChainError) -> Result<String, ScriptError> {
    render(
        step,
        StepOutcome::Rejected(RejectedSummary {
            error: err.to_string(),
        }),
    )
}

/// Renders a step line as canonical JSON.
fn render(step: usize, outcome: StepOutcome<'_>) -> Result<String, ScriptError> {
    let bytes = canonical_json_bytes(&StepLine {
        step,
        outcome,
    })?;
    String::from_utf8(bytes).map_err(|err| ScriptError::Encode(err.to_string()))
}
