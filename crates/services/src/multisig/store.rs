// Path: crates/services/src/multisig/store.rs
//! Call records, the unique id index and the call id counter.

use quorumcall_api::state::StateAccess;
use quorumcall_types::app::CallRecord;
use quorumcall_types::codec;
use quorumcall_types::error::StateError;
use quorumcall_types::keys::{call_key, unique_id_key, MULTISIG_NEXT_CALL_ID_KEY};

fn decode_u64(bytes: &[u8], what: &str) -> Result<u64, StateError> {
    codec::from_bytes_canonical(bytes)
        .map_err(|e| StateError::InvalidValue(format!("Invalid {} bytes: {}", what, e)))
}

fn encode_u64(value: u64) -> Result<Vec<u8>, StateError> {
    codec::to_bytes_canonical(&value).map_err(StateError::InvalidValue)
}

/// The id the next accepted submission will receive.
pub fn next_id<S: StateAccess + ?Sized>(state: &S) -> Result<u64, StateError> {
    match state.get(MULTISIG_NEXT_CALL_ID_KEY)? {
        Some(bytes) => decode_u64(&bytes, "next call id"),
        None => Ok(0),
    }
}

/// Returns the next id and advances the counter.
pub fn allocate_id<S: StateAccess + ?Sized>(state: &mut S) -> Result<u64, StateError> {
    let id = next_id(state)?;
    let next = id
        .checked_add(1)
        .ok_or_else(|| StateError::InvariantViolation("call id counter overflow".into()))?;
    state.insert(MULTISIG_NEXT_CALL_ID_KEY, &encode_u64(next)?)?;
    Ok(id)
}

/// Loads the record for `id`, if any.
pub fn get<S: StateAccess + ?Sized>(state: &S, id: u64) -> Result<Option<CallRecord>, StateError> {
    state
        .get(&call_key(id))?
        .map(|bytes| codec::from_bytes_canonical(&bytes).map_err(StateError::Decode))
        .transpose()
}

/// Writes `record` under its id, replacing any previous version.
pub fn put<S: StateAccess + ?Sized>(state: &mut S, record: &CallRecord) -> Result<(), StateError> {
    let bytes = codec::to_bytes_canonical(record).map_err(StateError::InvalidValue)?;
    state.insert(&call_key(record.id), &bytes)
}

/// Resolves a unique id to the call that used it.
pub fn id_for_unique<S: StateAccess + ?Sized>(
    state: &S,
    unique_id: &str,
) -> Result<Option<u64>, StateError> {
    state
        .get(&unique_id_key(unique_id))?
        .map(|bytes| decode_u64(&bytes, "unique id index"))
        .transpose()
}

/// Records that `unique_id` belongs to call `id`. Entries are never removed.
pub fn index_unique<S: StateAccess + ?Sized>(
    state: &mut S,
    unique_id: &str,
    id: u64,
) -> Result<(), StateError> {
    state.insert(&unique_id_key(unique_id), &encode_u64(id)?)
}
