// Path: crates/test_utils/src/ledger/mod.rs
//! A minimal host ledger.
//!
//! Transactions are applied at the current height in arrival order. Closing a
//! block runs the service's end-block hook once against an overlay, commits
//! the overlay if the hook succeeds and only then advances the height. A
//! failing hook leaves state and height untouched, as a real host would
//! refuse to commit the block.

use parity_scale_codec::Encode;
use quorumcall_api::lifecycle::OnEndBlock;
use quorumcall_api::services::BlockchainService;
use quorumcall_api::state::{commit_change_set, InMemoryState, StateOverlay};
use quorumcall_api::transaction::context::TxContext;
use quorumcall_types::app::{AccountId, KernelEvent};
use quorumcall_types::codec;
use quorumcall_types::error::{StateError, TransactionError};

/// Drives one service over an in-memory store.
pub struct MockLedger<S> {
    state: InMemoryState,
    service: S,
    height: u64,
    events: Vec<KernelEvent>,
}

impl<S: OnEndBlock> MockLedger<S> {
    /// Starts a ledger at `height` over `genesis`.
    pub fn new(service: S, genesis: InMemoryState, height: u64) -> Self {
        Self {
            state: genesis,
            service,
            height,
            events: Vec::new(),
        }
    }

    /// The height of the block currently accepting transactions.
    pub fn height(&self) -> u64 {
        self.height
    }

    /// Committed state.
    pub fn state(&self) -> &InMemoryState {
        &self.state
    }

    /// Committed state, for test setup between blocks.
    pub fn state_mut(&mut self) -> &mut InMemoryState {
        &mut self.state
    }

    /// The hosted service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Every event emitted so far, in order.
    pub fn events(&self) -> &[KernelEvent] {
        &self.events
    }

    /// Applies a service call signed by `signer` in the current block and
    /// returns the events it emitted.
    pub fn apply<P: Encode>(
        &mut self,
        signer: AccountId,
        method: &str,
        params: &P,
    ) -> Result<Vec<KernelEvent>, TransactionError> {
        let bytes = codec::to_bytes_canonical(params).map_err(TransactionError::Serialization)?;
        let mut ctx = TxContext::new(self.height, signer);
        self.service
            .handle_service_call(&mut self.state, method, &bytes, &mut ctx)?;
        let emitted = ctx.drain_events();
        self.events.extend(emitted.iter().cloned());
        Ok(emitted)
    }

    /// Runs the end-block hook for the current height and moves to the next.
    pub fn end_block(&mut self) -> Result<Vec<KernelEvent>, StateError> {
        let mut ctx = TxContext::for_end_block(self.height);
        let batch = {
            let mut overlay = StateOverlay::new(&self.state);
            self.service.on_end_block(&mut overlay, &mut ctx)?;
            overlay.into_ordered_batch()
        };
        commit_change_set(&mut self.state, &batch)?;
        log::debug!("closed block {}", self.height);

        self.height += 1;
        let emitted = ctx.drain_events();
        self.events.extend(emitted.iter().cloned());
        Ok(emitted)
    }

    /// Closes blocks until `height` is the block accepting transactions.
    pub fn advance_to(&mut self, height: u64) -> Result<(), StateError> {
        while self.height < height {
            self.end_block()?;
        }
        Ok(())
    }
}
