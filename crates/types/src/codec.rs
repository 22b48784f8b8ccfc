// Path: crates/types/src/codec.rs

//! The canonical, deterministic binary codec for all consensus-critical state.
//!
//! Every value the kernel writes to state (call records, vote sets, the call id
//! counter, the unique id index, validator sets) and every service-call
//! parameter blob goes through these two functions. They are thin wrappers around
//! `parity-scale-codec` (SCALE), whose encoding of a given value is unique, so
//! two nodes replaying the same blocks always produce byte-identical state.

use parity_scale_codec::{Decode, DecodeAll, Encode};

/// Encodes a value into its canonical SCALE byte representation.
pub fn to_bytes_canonical<T: Encode>(v: &T) -> Result<Vec<u8>, String> {
    Ok(v.encode())
}

/// Decodes a value from its canonical SCALE byte representation.
///
/// Trailing bytes are rejected, so a value has exactly one accepted encoding.
pub fn from_bytes_canonical<T: Decode>(b: &[u8]) -> Result<T, String> {
    T::decode_all(&mut &*b).map_err(|e| format!("canonical decode failed: {}", e))
}
