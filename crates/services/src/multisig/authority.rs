// Path: crates/services/src/multisig/authority.rs
//! Reads the authority set published by the validator-set module.

use quorumcall_api::authority::ValidatorSetView;
use quorumcall_api::state::StateAccess;
use quorumcall_types::app::{AccountId, ValidatorSet};
use quorumcall_types::codec;
use quorumcall_types::error::StateError;
use quorumcall_types::keys::VALIDATOR_SET_KEY;

/// A `ValidatorSetView` backed by the `ValidatorSet` stored at
/// [`VALIDATOR_SET_KEY`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StoredValidatorSet;

impl StoredValidatorSet {
    /// Loads the current set, if one has been published.
    pub fn load(state: &dyn StateAccess) -> Result<Option<ValidatorSet>, StateError> {
        state
            .get(VALIDATOR_SET_KEY)?
            .map(|bytes| codec::from_bytes_canonical(&bytes).map_err(StateError::Decode))
            .transpose()
    }
}

impl ValidatorSetView for StoredValidatorSet {
    fn current_quorum(&self, state: &dyn StateAccess) -> Result<u16, StateError> {
        Self::load(state)?
            .map(|set| set.quorum)
            .ok_or(StateError::KeyNotFound)
    }

    fn is_authority(&self, state: &dyn StateAccess, account: &AccountId) -> Result<bool, StateError> {
        Ok(Self::load(state)?.is_some_and(|set| set.contains(account)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quorumcall_api::state::InMemoryState;

    #[test]
    fn test_missing_set_has_no_authorities() {
        let state = InMemoryState::new();
        let view = StoredValidatorSet;
        assert_eq!(view.current_quorum(&state), Err(StateError::KeyNotFound));
        assert!(!view.is_authority(&state, &AccountId([1; 32])).unwrap());
    }

    #[test]
    fn test_reads_published_set() {
        let mut state = InMemoryState::new();
        let set = ValidatorSet::new([AccountId([1; 32]), AccountId([2; 32])], 2);
        state
            .insert(VALIDATOR_SET_KEY, &codec::to_bytes_canonical(&set).unwrap())
            .unwrap();

        let view = StoredValidatorSet;
        assert_eq!(view.current_quorum(&state).unwrap(), 2);
        assert!(view.is_authority(&state, &AccountId([2; 32])).unwrap());
        assert!(!view.is_authority(&state, &AccountId([3; 32])).unwrap());
    }
}
