// Path: crates/services/src/multisig/votes.rs
//! The vote ledger: the set of authorities that confirmed each call.
//!
//! A set is stored under one key per call. An emptied set is deleted rather
//! than stored empty. The functions here do not check call status; callers
//! guard every mutation on the call still being pending.

use quorumcall_api::state::StateAccess;
use quorumcall_types::app::AccountId;
use quorumcall_types::codec;
use quorumcall_types::error::StateError;
use quorumcall_types::keys::votes_key;
use std::collections::BTreeSet;

/// Loads the confirmations for call `id`. A missing entry is an empty set.
pub fn load<S: StateAccess + ?Sized>(state: &S, id: u64) -> Result<BTreeSet<AccountId>, StateError> {
    match state.get(&votes_key(id))? {
        Some(bytes) => codec::from_bytes_canonical(&bytes).map_err(StateError::Decode),
        None => Ok(BTreeSet::new()),
    }
}

fn store<S: StateAccess + ?Sized>(
    state: &mut S,
    id: u64,
    voters: &BTreeSet<AccountId>,
) -> Result<(), StateError> {
    if voters.is_empty() {
        return state.delete(&votes_key(id));
    }
    let bytes = codec::to_bytes_canonical(voters).map_err(StateError::InvalidValue)?;
    state.insert(&votes_key(id), &bytes)
}

/// Whether `voter` has confirmed call `id`.
pub fn has_voted<S: StateAccess + ?Sized>(
    state: &S,
    id: u64,
    voter: &AccountId,
) -> Result<bool, StateError> {
    Ok(load(state, id)?.contains(voter))
}

/// Number of distinct confirmations for call `id`.
pub fn count<S: StateAccess + ?Sized>(state: &S, id: u64) -> Result<usize, StateError> {
    Ok(load(state, id)?.len())
}

/// Adds `voter` to the set. Returns false, writing nothing, if already present.
pub fn add<S: StateAccess + ?Sized>(
    state: &mut S,
    id: u64,
    voter: AccountId,
) -> Result<bool, StateError> {
    let mut voters = load(state, id)?;
    if !voters.insert(voter) {
        return Ok(false);
    }
    store(state, id, &voters)?;
    Ok(true)
}

/// Removes `voter` from the set. Returns false, writing nothing, if absent.
pub fn remove<S: StateAccess + ?Sized>(
    state: &mut S,
    id: u64,
    voter: &AccountId,
) -> Result<bool, StateError> {
    let mut voters = load(state, id)?;
    if !voters.remove(voter) {
        return Ok(false);
    }
    store(state, id, &voters)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quorumcall_api::state::InMemoryState;

    #[test]
    fn test_add_is_idempotent_per_voter() {
        let mut state = InMemoryState::new();
        let v1 = AccountId([1; 32]);
        assert!(add(&mut state, 0, v1).unwrap());
        assert!(!add(&mut state, 0, v1).unwrap());
        assert_eq!(count(&state, 0).unwrap(), 1);
        assert!(has_voted(&state, 0, &v1).unwrap());
        assert!(!has_voted(&state, 1, &v1).unwrap());
    }

    #[test]
    fn test_emptied_set_is_deleted() {
        let mut state = InMemoryState::new();
        let v1 = AccountId([1; 32]);
        add(&mut state, 3, v1).unwrap();
        assert!(state.get(&votes_key(3)).unwrap().is_some());

        assert!(remove(&mut state, 3, &v1).unwrap());
        assert!(state.get(&votes_key(3)).unwrap().is_none());
        assert!(!remove(&mut state, 3, &v1).unwrap());
    }
}
