// Path: crates/api/src/state/overlay.rs

//! A copy-on-write state overlay: the kernel's only form of transaction.
//!
//! Work that may fail is run against a `StateOverlay`. On success the overlay
//! is turned into an ordered change set with [`StateOverlay::into_ordered_batch`]
//! and applied to the parent with [`commit_change_set`]; on failure it is simply
//! dropped and the parent never observes any of its writes.

use crate::state::{StateAccess, StateKVPair, StateScanIter};
use quorumcall_types::error::StateError;
use std::cmp::Ordering;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::iter::{Fuse, Peekable};
use std::ops::Bound::{Excluded, Included, Unbounded};
use std::sync::Arc;

/// A batch of key-value pairs to be inserted or updated in the state.
pub type StateInserts = Vec<(Vec<u8>, Vec<u8>)>;

/// A batch of keys to be deleted from the state.
pub type StateDeletes = Vec<Vec<u8>>;

/// A complete set of state changes (inserts/updates and deletes).
pub type StateChangeSet = (StateInserts, StateDeletes);

/// Merges a base scan with the overlay's pending writes. Writes shadow base
/// entries with the same key; tombstones hide them.
struct MergingIterator<'a> {
    base: Peekable<Fuse<StateScanIter<'a>>>,
    writes: Peekable<btree_map::Range<'a, Vec<u8>, Option<Vec<u8>>>>,
}

impl<'a> Iterator for MergingIterator<'a> {
    type Item = Result<StateKVPair, StateError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let order = match (self.base.peek(), self.writes.peek()) {
                // Surface backend errors instead of treating them as end of scan.
                (Some(Err(_)), _) => return self.base.next(),
                (Some(Ok((bk, _))), Some((wk, _))) => {
                    let bk: &[u8] = bk;
                    bk.cmp(wk.as_slice())
                }
                (Some(Ok(_)), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => return None,
            };

            match order {
                Ordering::Less => return self.base.next(),
                Ordering::Equal => {
                    self.base.next();
                }
                Ordering::Greater => {}
            }

            if let Some((key, Some(val))) = self.writes.next() {
                return Some(Ok((Arc::from(key.as_slice()), Arc::from(val.as_slice()))));
            }
        }
    }
}

/// An in-memory, copy-on-write overlay for any `StateAccess`.
///
/// Reads are first checked against the local `writes` cache. If a key is not
/// found, the read is passed through to the underlying `base` state.
/// All writes are captured in the local cache and do not affect the `base` state.
pub struct StateOverlay<'a> {
    base: &'a dyn StateAccess,
    writes: BTreeMap<Vec<u8>, Option<Vec<u8>>>, // BTreeMap for deterministic commit order.
}

impl<'a> StateOverlay<'a> {
    /// Creates a new, empty overlay on top of a base state accessor.
    pub fn new(base: &'a dyn StateAccess) -> Self {
        Self {
            base,
            writes: BTreeMap::new(),
        }
    }

    /// Number of keys written or deleted through this overlay.
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    /// Consumes the overlay and returns its writes in a deterministic order.
    pub fn into_ordered_batch(self) -> StateChangeSet {
        let mut inserts = Vec::new();
        let mut deletes = Vec::new();

        for (key, value_opt) in self.writes {
            match value_opt {
                Some(value) => inserts.push((key, value)),
                None => deletes.push(key),
            }
        }
        (inserts, deletes)
    }
}

/// Applies a change set produced by [`StateOverlay::into_ordered_batch`].
pub fn commit_change_set(
    state: &mut dyn StateAccess,
    changes: &StateChangeSet,
) -> Result<(), StateError> {
    let (inserts, deletes) = changes;
    log::trace!(
        "committing overlay: {} inserts, {} deletes",
        inserts.len(),
        deletes.len()
    );
    state.batch_apply(inserts, deletes)
}

impl<'a> StateAccess for StateOverlay<'a> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        match self.writes.get(key) {
            // A cached write, or `None` for a pending delete.
            Some(value_opt) => Ok(value_opt.clone()),
            None => self.base.get(key),
        }
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        self.writes.insert(key.to_vec(), Some(value.to_vec()));
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        self.writes.insert(key.to_vec(), None);
        Ok(())
    }

    fn range_scan(&self, start: &[u8], end: Option<&[u8]>) -> Result<StateScanIter<'_>, StateError> {
        let upper = match end {
            Some(e) if e <= start => return Ok(Box::new(std::iter::empty())),
            Some(e) => Excluded(e.to_vec()),
            None => Unbounded,
        };
        let base = self.base.range_scan(start, end)?.fuse().peekable();
        let writes = self
            .writes
            .range::<Vec<u8>, _>((Included(start.to_vec()), upper))
            .peekable();

        Ok(Box::new(MergingIterator { base, writes }))
    }
}
