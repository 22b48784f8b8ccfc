// Path: crates/services/src/multisig/queue.rs
//! The pending queue: one empty-valued entry per pending call, keyed by
//! `(submitted_height, id)` so that height windows are a single range scan.

use quorumcall_api::state::{next_prefix, StateAccess, StateScanIter};
use quorumcall_types::error::StateError;
use quorumcall_types::keys::{
    parse_queue_key, queue_height_start, queue_key, MULTISIG_QUEUE_KEY_PREFIX,
};

/// Adds the entry for call `id` submitted at `height`.
pub fn insert<S: StateAccess + ?Sized>(state: &mut S, height: u64, id: u64) -> Result<(), StateError> {
    state.insert(&queue_key(height, id), &[])
}

/// Removes the entry for call `id` submitted at `height`.
pub fn remove<S: StateAccess + ?Sized>(state: &mut S, height: u64, id: u64) -> Result<(), StateError> {
    state.delete(&queue_key(height, id))
}

/// All entries with `from_height <= submitted_height <= to_height`, as
/// `(height, id)` pairs in ascending key order.
pub fn range<S: StateAccess + ?Sized>(
    state: &S,
    from_height: u64,
    to_height: u64,
) -> Result<Vec<(u64, u64)>, StateError> {
    if from_height > to_height {
        return Ok(Vec::new());
    }
    let start = queue_height_start(from_height);
    let end = match to_height.checked_add(1) {
        Some(h) => Some(queue_height_start(h)),
        None => next_prefix(MULTISIG_QUEUE_KEY_PREFIX),
    };
    collect_entries(state.range_scan(&start, end.as_deref())?)
}

/// All entries submitted at or before `height`.
pub fn up_to<S: StateAccess + ?Sized>(state: &S, height: u64) -> Result<Vec<(u64, u64)>, StateError> {
    range(state, 0, height)
}

/// Number of pending calls.
pub fn len<S: StateAccess + ?Sized>(state: &S) -> Result<usize, StateError> {
    let mut n = 0;
    for item in state.prefix_scan(MULTISIG_QUEUE_KEY_PREFIX)? {
        item?;
        n += 1;
    }
    Ok(n)
}

fn collect_entries(iter: StateScanIter<'_>) -> Result<Vec<(u64, u64)>, StateError> {
    iter.map(|item| {
        let (key, _) = item?;
        parse_queue_key(&key).ok_or_else(|| {
            StateError::InvalidValue(format!("malformed queue key 0x{}", hex::encode(&key)))
        })
    })
    .collect()
}
