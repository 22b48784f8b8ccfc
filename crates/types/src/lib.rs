// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # Quorum Call Kernel Types
//!
//! The foundational library of the workspace, containing the data model of
//! quorum-gated calls, the canonical codec, the state key layout, service
//! parameters and the error taxonomy.
//!
//! ## Architectural Role
//!
//! As the base crate, `quorumcall-types` has minimal dependencies and is a
//! dependency of every other crate in the workspace. Keeping shared types
//! here prevents circular dependencies between the API traits and the
//! service implementations.

/// The maximum size in bytes of a call payload accepted for submission.
pub const MAX_CALL_PAYLOAD_BYTES: usize = 64 * 1024; // 64 KiB
/// The maximum length in bytes of a caller-supplied unique id.
pub const MAX_UNIQUE_ID_BYTES: usize = 128;

/// A top-level, crate-wide `Result` type alias with a default error type.
pub type Result<T, E = crate::error::TransactionError> = std::result::Result<T, E>;

/// Application-level data structures: accounts, calls, validator sets and events.
pub mod app;
/// The canonical, deterministic binary codec for consensus-critical state.
pub mod codec;
/// A unified set of all error types used across the workspace.
pub mod error;
/// Constants and builders for well-known state keys.
pub mod keys;
/// Configuration structures for services, such as `MultisigParams`.
pub mod service_configs;
