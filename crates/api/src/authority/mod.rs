// Path: crates/api/src/authority/mod.rs
//! The validator-set seam consumed by the multisig service.

use crate::state::StateAccess;
use quorumcall_types::app::AccountId;
use quorumcall_types::error::StateError;

/// A read-only view of the current authority set.
pub trait ValidatorSetView: Send + Sync {
    /// The minimum number of distinct confirmations needed to execute a call.
    fn current_quorum(&self, state: &dyn StateAccess) -> Result<u16, StateError>;

    /// Whether `account` is currently an eligible voter.
    fn is_authority(&self, state: &dyn StateAccess, account: &AccountId)
        -> Result<bool, StateError>;
}
