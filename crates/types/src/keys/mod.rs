// Path: crates/types/src/keys/mod.rs
//! Defines constants and builders for well-known state keys.
//!
//! Numeric key components are fixed-width big-endian so that the lexicographic
//! order of keys in the store matches the numeric order of ids and heights.
//! The pending queue relies on this to answer height-range queries with a
//! single ordered range scan.

/// The state key for the current `ValidatorSet`.
pub const VALIDATOR_SET_KEY: &[u8] = b"system::validators::current";

/// The state key for the next call id to allocate.
pub const MULTISIG_NEXT_CALL_ID_KEY: &[u8] = b"multisig::next_id";
/// The state key prefix for call records, keyed by id.
pub const MULTISIG_CALL_KEY_PREFIX: &[u8] = b"multisig::call::";
/// The state key prefix for the unique id to call id index.
pub const MULTISIG_UNIQUE_ID_KEY_PREFIX: &[u8] = b"multisig::uid::";
/// The state key prefix for confirmation sets, keyed by call id.
pub const MULTISIG_VOTES_KEY_PREFIX: &[u8] = b"multisig::votes::";
/// The state key prefix for pending queue entries, keyed by `(height, id)`.
pub const MULTISIG_QUEUE_KEY_PREFIX: &[u8] = b"multisig::queue::";

/// Key of the record for call `id`.
pub fn call_key(id: u64) -> Vec<u8> {
    [MULTISIG_CALL_KEY_PREFIX, &id.to_be_bytes()].concat()
}

/// Key of the unique id index entry for `unique_id`.
pub fn unique_id_key(unique_id: &str) -> Vec<u8> {
    [MULTISIG_UNIQUE_ID_KEY_PREFIX, unique_id.as_bytes()].concat()
}

/// Key of the confirmation set for call `id`.
pub fn votes_key(id: u64) -> Vec<u8> {
    [MULTISIG_VOTES_KEY_PREFIX, &id.to_be_bytes()].concat()
}

/// Key of the queue entry for call `id` submitted at `height`.
pub fn queue_key(height: u64, id: u64) -> Vec<u8> {
    [
        MULTISIG_QUEUE_KEY_PREFIX,
        &height.to_be_bytes(),
        &id.to_be_bytes(),
    ]
    .concat()
}

/// The smallest queue key at `height`, used as an inclusive range start.
pub fn queue_height_start(height: u64) -> Vec<u8> {
    [MULTISIG_QUEUE_KEY_PREFIX, &height.to_be_bytes()].concat()
}

/// Splits a queue key back into `(height, id)`.
pub fn parse_queue_key(key: &[u8]) -> Option<(u64, u64)> {
    let rest = key.strip_prefix(MULTISIG_QUEUE_KEY_PREFIX)?;
    if rest.len() != 16 {
        return None;
    }
    let (height, id) = rest.split_at(8);
    Some((
        u64::from_be_bytes(height.try_into().ok()?),
        u64::from_be_bytes(id.try_into().ok()?),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keys_sort_by_height_then_id() {
        let mut keys = vec![
            queue_key(256, 0),
            queue_key(1, 9),
            queue_key(1, 2),
            queue_key(255, 300),
        ];
        keys.sort();
        let parsed: Vec<_> = keys.iter().filter_map(|k| parse_queue_key(k)).collect();
        assert_eq!(parsed, vec![(1, 2), (1, 9), (255, 300), (256, 0)]);
    }

    #[test]
    fn test_parse_queue_key_rejects_foreign_keys() {
        assert_eq!(parse_queue_key(&call_key(1)), None);
        assert_eq!(parse_queue_key(&queue_height_start(4)), None);
        assert_eq!(parse_queue_key(&queue_key(4, 5)), Some((4, 5)));
    }
}
