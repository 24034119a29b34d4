// crates/vehicle-registry-core/src/runtime/chain.rs
// ============================================================================
// Module: Simulated Chain Host
// Description: Sequential block execution host for the vehicle registry.
// Purpose: Mine transaction blocks, emit receipts, and serve read-only calls.
// Dependencies: crate::{audit, core, interfaces, runtime::contract}, thiserror
// ============================================================================

//! ## Overview
//! [`SimulatedChain`] deploys the registry at genesis (height 1) and applies
//! one block at a time. Each mined block advances the height by exactly one,
//! executes its transactions in order, and snapshots the post-block state
//! into the store. Every transaction payload is validated before anything
//! executes; a malformed payload rejects the whole block and leaves height
//! and state untouched.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::audit::NoopAuditSink;
use crate::audit::RegistryAuditEvent;
use crate::audit::RegistryAuditEventParams;
use crate::audit::RegistryAuditSink;
use crate::core::BlockHeight;
use crate::core::CallResult;
use crate::core::ContractCall;
use crate::core::DEFAULT_HASH_ALGORITHM;
use crate::core::HashAlgorithm;
use crate::core::HashDigest;
use crate::core::HashError;
use crate::core::IdentifierError;
use crate::core::Principal;
use crate::core::ReadOnlyCall;
use crate::core::Receipt;
use crate::core::RegistryState;
use crate::core::hashing::hash_canonical_json;
use crate::interfaces::RegistryStateStore;
use crate::interfaces::StoreError;
use crate::runtime::contract::RegistryPolicy;
use crate::runtime::contract::VehicleRegistry;
use crate::runtime::store::InMemoryRegistryStateStore;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Signed-by-sender contract call submitted for mining.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction sender (the caller seen by the contract).
    pub sender: Principal,
    /// Call to execute.
    pub call: ContractCall,
}

impl Transaction {
    /// Creates a transaction.
    #[must_use]
    pub fn new(sender: impl Into<Principal>, call: ContractCall) -> Self {
        Self {
            sender: sender.into(),
            call,
        }
    }
}

/// Mined block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block height.
    pub height: BlockHeight,
    /// Hash of the previous block (all zeros for genesis).
    pub parent_hash: HashDigest,
    /// Hash of the registry state after this block.
    pub state_hash: HashDigest,
    /// Hash over height, parent, state, transactions, and receipts.
    pub block_hash: HashDigest,
    /// Transactions in execution order.
    pub transactions: Vec<Transaction>,
    /// One receipt per transaction.
    pub receipts: Vec<Receipt>,
}

/// Hash input for a block.
#[derive(Serialize)]
struct BlockHeader<'a> {
    /// Block height.
    height: BlockHeight,
    /// Parent block hash.
    parent_hash: &'a HashDigest,
    /// Post-block state hash.
    state_hash: &'a HashDigest,
    /// Block transactions.
    transactions: &'a [Transaction],
    /// Block receipts.
    receipts: &'a [Receipt],
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Chain host failures (distinct from registry call errors).
#[derive(Debug, Error)]
pub enum ChainError {
    /// A transaction payload was malformed; the block was not applied.
    #[error("invalid transaction at index {index}: {source}")]
    InvalidTransaction {
        /// Position of the offending transaction.
        index: usize,
        /// Identifier validation failure.
        source: IdentifierError,
    },
    /// A read-only call carried a malformed caller or argument.
    #[error("invalid read-only call: {0}")]
    InvalidCall(IdentifierError),
    /// No block exists at the requested height.
    #[error("unknown block height {0}")]
    UnknownHeight(BlockHeight),
    /// The store has no snapshot for a known height.
    #[error("missing state snapshot for height {0}")]
    MissingState(BlockHeight),
    /// Block height overflowed.
    #[error("block height overflow")]
    HeightOverflow,
    /// State store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Hashing failure.
    #[error(transparent)]
    Hash(#[from] HashError),
}

// ============================================================================
// SECTION: Simulated Chain
// ============================================================================

/// Deterministic single-writer chain host for the registry.
pub struct SimulatedChain<S> {
    /// Contract handlers.
    registry: VehicleRegistry,
    /// Per-height state snapshots.
    store: S,
    /// Audit sink for executed calls.
    audit: Arc<dyn RegistryAuditSink>,
    /// Hash algorithm for state and block hashes.
    hash_algorithm: HashAlgorithm,
    /// Mined blocks, genesis first. Never empty.
    blocks: Vec<Block>,
}

impl SimulatedChain<InMemoryRegistryStateStore> {
    /// Deploys with the default policy, an in-memory store, and no audit output.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError`] when genesis cannot be stored or hashed.
    pub fn deploy_in_memory(deployer: impl Into<Principal>) -> Result<Self, ChainError> {
        Self::deploy(
            deployer.into(),
            RegistryPolicy::default(),
            InMemoryRegistryStateStore::new(),
            Arc::new(NoopAuditSink),
        )
    }
}

impl<S> SimulatedChain<S>
where
    S: RegistryStateStore,
{
    /// Deploys the registry: `deployer` becomes admin and genesis is mined at height 1.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidCall`] for a malformed deployer, or a
    /// store/hash error when genesis cannot be recorded.
    pub fn deploy(
        deployer: Principal,
        policy: RegistryPolicy,
        store: S,
        audit: Arc<dyn RegistryAuditSink>,
    ) -> Result<Self, ChainError> {
        deployer.validate().map_err(ChainError::InvalidCall)?;
        let hash_algorithm = DEFAULT_HASH_ALGORITHM;
        let state = RegistryState::genesis(deployer);
        let genesis = seal_block(
            hash_algorithm,
            BlockHeight::GENESIS,
            HashDigest::zero(hash_algorithm),
            &state,
            Vec::new(),
            Vec::new(),
        )?;
        store.save(BlockHeight::GENESIS, &state)?;
        Ok(Self {
            registry: VehicleRegistry::new(policy),
            store,
            audit,
            hash_algorithm,
            blocks: vec![genesis],
        })
    }

    /// Returns the current chain height.
    #[must_use]
    pub fn height(&self) -> BlockHeight {
        self.blocks.last().map_or(BlockHeight::GENESIS, |block| block.height)
    }

    /// Returns the block at `height`.
    #[must_use]
    pub fn block(&self, height: BlockHeight) -> Option<&Block> {
        let index = height.get().checked_sub(BlockHeight::GENESIS.get())?;
        self.blocks.get(usize::try_from(index).ok()?)
    }

    /// Returns all blocks, genesis first.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns the active registry policy.
    #[must_use]
    pub const fn policy(&self) -> RegistryPolicy {
        self.registry.policy()
    }

    /// Loads the registry state at the current height.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError`] when the snapshot cannot be loaded.
    pub fn state(&self) -> Result<RegistryState, ChainError> {
        self.state_at(self.height())
    }

    /// Loads the registry state after the block at `height`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnknownHeight`] beyond the tip, or a store error.
    pub fn state_at(&self, height: BlockHeight) -> Result<RegistryState, ChainError> {
        if self.block(height).is_none() {
            return Err(ChainError::UnknownHeight(height));
        }
        self.store.load(height)?.ok_or(ChainError::MissingState(height))
    }

    /// Mines a block containing `transactions` and returns it.
    ///
    /// Registry call failures are recorded in receipts and do not fail the
    /// block; failed calls leave state unchanged. Audit events for the
    /// block's calls are recorded after the snapshot is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidTransaction`] for a malformed payload (no
    /// transaction is executed), or a store/hash error. On error the chain
    /// does not advance.
    pub fn mine_block(&mut self, transactions: Vec<Transaction>) -> Result<Block, ChainError> {
        for (index, tx) in transactions.iter().enumerate() {
            tx.sender
                .validate()
                .and_then(|()| tx.call.validate())
                .map_err(|source| ChainError::InvalidTransaction {
                    index,
                    source,
                })?;
        }
        let parent_height = self.height();
        let height = parent_height.next().ok_or(ChainError::HeightOverflow)?;
        let parent_hash = self
            .block(parent_height)
            .map(|block| block.block_hash.clone())
            .ok_or(ChainError::UnknownHeight(parent_height))?;
        let mut state = self.state_at(parent_height)?;

        let mut receipts = Vec::with_capacity(transactions.len());
        let mut events = Vec::with_capacity(transactions.len());
        for (index, tx) in transactions.iter().enumerate() {
            let result =
                CallResult::from(self.registry.execute(&mut state, &tx.sender, height, &tx.call));
            events.push(RegistryAuditEvent::new(RegistryAuditEventParams {
                read_only: false,
                block_height: height,
                sender: tx.sender.clone(),
                method: tx.call.method(),
                result: &result,
            }));
            receipts.push(Receipt {
                index,
                sender: tx.sender.clone(),
                method: tx.call.method().to_string(),
                result,
            });
        }

        let block =
            seal_block(self.hash_algorithm, height, parent_hash, &state, transactions, receipts)?;
        self.store.save(height, &state)?;
        self.blocks.push(block.clone());
        // Events are emitted only once the block has committed.
        for event in &events {
            self.audit.record(event);
        }
        Ok(block)
    }

    /// Evaluates a read-only call against the current state.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidCall`] for malformed arguments, or a store
    /// error. Registry failures are returned inside the [`CallResult`].
    pub fn call_read_only(
        &self,
        call: &ReadOnlyCall,
        caller: &Principal,
    ) -> Result<CallResult, ChainError> {
        self.call_read_only_at(self.height(), call, caller)
    }

    /// Evaluates a read-only call against the state after block `height`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError`] as for [`Self::call_read_only`], plus
    /// [`ChainError::UnknownHeight`] for heights beyond the tip.
    pub fn call_read_only_at(
        &self,
        height: BlockHeight,
        call: &ReadOnlyCall,
        caller: &Principal,
    ) -> Result<CallResult, ChainError> {
        caller.validate().map_err(ChainError::InvalidCall)?;
        call.validate().map_err(ChainError::InvalidCall)?;
        let state = self.state_at(height)?;
        let result = CallResult::from(VehicleRegistry::query(&state, call));
        self.audit.record(&RegistryAuditEvent::new(RegistryAuditEventParams {
            read_only: true,
            block_height: height,
            sender: caller.clone(),
            method: call.method(),
            result: &result,
        }));
        Ok(result)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Hashes state and header, producing a sealed block.
fn seal_block(
    algorithm: HashAlgorithm,
    height: BlockHeight,
    parent_hash: HashDigest,
    state: &RegistryState,
    transactions: Vec<Transaction>,
    receipts: Vec<Receipt>,
) -> Result<Block, ChainError> {
    let state_hash = state.canonical_hash_with(algorithm)?;
    let block_hash = hash_canonical_json(
        algorithm,
        &BlockHeader {
            height,
            parent_hash: &parent_hash,
            state_hash: &state_hash,
            transactions: &transactions,
            receipts: &receipts,
        },
    )?;
    Ok(Block {
        height,
        parent_hash,
        state_hash,
        block_hash,
        transactions,
        receipts,
    })
}
