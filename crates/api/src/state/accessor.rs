// Path: crates/api/src/state/accessor.rs
//! Defines the `StateAccess` trait for ordered key-value storage operations.

use crate::state::{next_prefix, StateScanIter};
use quorumcall_types::error::StateError;

/// A dyn-safe trait that provides the complete interface the kernel needs
/// from the host's ordered key-value store.
///
/// Scans always yield keys in ascending lexicographic order. Services rely on
/// this for deterministic iteration, so implementations backed by unordered
/// maps are not acceptable.
pub trait StateAccess: Send + Sync {
    /// Gets a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError>;

    /// Inserts a key-value pair.
    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError>;

    /// Deletes a key-value pair. Deleting a missing key is not an error.
    fn delete(&mut self, key: &[u8]) -> Result<(), StateError>;

    /// Applies a batch of deletes and then inserts.
    /// This is the method used to commit an overlay's changes.
    fn batch_apply(
        &mut self,
        inserts: &[(Vec<u8>, Vec<u8>)],
        deletes: &[Vec<u8>],
    ) -> Result<(), StateError> {
        for key in deletes {
            self.delete(key)?;
        }
        for (key, value) in inserts {
            self.insert(key, value)?;
        }
        Ok(())
    }

    /// Scans all pairs with `start <= key < end`, or `start <= key` when
    /// `end` is `None`.
    fn range_scan(&self, start: &[u8], end: Option<&[u8]>) -> Result<StateScanIter<'_>, StateError>;

    /// Scans for all key-value pairs starting with the given prefix.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError> {
        let end = next_prefix(prefix);
        self.range_scan(prefix, end.as_deref())
    }
}
