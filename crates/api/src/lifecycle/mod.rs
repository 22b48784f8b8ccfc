// Path: crates/api/src/lifecycle/mod.rs
//! Defines traits for services that hook into the block processing lifecycle.

use crate::services::BlockchainService;
use crate::state::StateAccess;
use crate::transaction::context::TxContext;
use quorumcall_types::error::StateError;

/// A trait for services that need to perform actions at the end of a block.
pub trait OnEndBlock: BlockchainService {
    /// Called exactly once per block, after all transactions in the block have
    /// been processed.
    ///
    /// An error here is fatal for the block: the host must not commit it.
    fn on_end_block(&self, state: &mut dyn StateAccess, ctx: &mut TxContext)
        -> Result<(), StateError>;
}
