// Path: crates/api/src/state/mod.rs
//! Core traits for state management.
//!
//! - `StateAccess`: ordered key-value operations, including prefix and range scans.
//! - `StateOverlay`: a copy-on-write scratch layer whose writes are either
//!   committed as one ordered batch or discarded by dropping it.
//! - `InMemoryState`: an ordered, in-process store for hosts and tests.

use quorumcall_types::error::StateError;
use std::sync::Arc;

// --- Type Aliases for common state patterns ---
/// An atomically reference-counted, owned key slice.
pub type StateKey = Arc<[u8]>;
/// An atomically reference-counted, owned value slice.
pub type StateVal = Arc<[u8]>;
/// An owned key-value pair from the state, using cheap-to-clone Arcs.
pub type StateKVPair = (StateKey, StateVal);
/// A streaming iterator over key-value pairs in ascending key order.
pub type StateScanIter<'a> = Box<dyn Iterator<Item = Result<StateKVPair, StateError>> + Send + 'a>;

mod accessor;
mod memory;
mod overlay;

pub use accessor::*;
pub use memory::InMemoryState;
pub use overlay::*;

/// Calculates the smallest byte vector that is strictly greater than all keys
/// starting with the given prefix. Returns None if the prefix is empty or all
/// 0xFF bytes, in which case the scan is unbounded above.
pub fn next_prefix(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut ub = prefix.to_vec();
    while let Some(last) = ub.pop() {
        if last != 0xFF {
            ub.push(last + 1);
            return Some(ub);
        }
    }
    None
}
