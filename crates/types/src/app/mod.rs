// Path: crates/types/src/app/mod.rs
//! Core application-level data structures.

/// Quorum-gated call envelopes and their persisted records.
pub mod call;
/// Observable kernel events.
pub mod events;
/// Account identifiers.
pub mod identity;
/// The authority set consulted for voting rights and quorum.
pub mod validators;

pub use call::*;
pub use events::*;
pub use identity::*;
pub use validators::*;
