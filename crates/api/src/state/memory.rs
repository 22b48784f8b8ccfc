// Path: crates/api/src/state/memory.rs
//! An ordered, in-process implementation of `StateAccess`.

use crate::state::{StateAccess, StateScanIter};
use quorumcall_types::error::StateError;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Included, Unbounded};
use std::sync::Arc;

/// A `BTreeMap`-backed state store.
///
/// Used by hosts that keep the kernel's namespace in memory and by every test
/// in the workspace. Iteration order is the byte order of keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryState {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl InMemoryState {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl StateAccess for InMemoryState {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        Ok(self.data.get(key).cloned())
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        self.data.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        self.data.remove(key);
        Ok(())
    }

    fn range_scan(&self, start: &[u8], end: Option<&[u8]>) -> Result<StateScanIter<'_>, StateError> {
        let upper = match end {
            // BTreeMap::range panics on inverted bounds.
            Some(e) if e <= start => return Ok(Box::new(std::iter::empty())),
            Some(e) => Excluded(e.to_vec()),
            None => Unbounded,
        };
        let iter = self
            .data
            .range::<Vec<u8>, _>((Included(start.to_vec()), upper))
            .map(|(k, v)| Ok((Arc::from(k.as_slice()), Arc::from(v.as_slice()))));
        Ok(Box::new(iter))
    }
}
