// Path: crates/api/src/error/mod.rs
// Re-export all core error types from the central types crate.
pub use quorumcall_types::error::{
    ConfigError, ErrorCode, MultisigError, StateError, TransactionError,
};
pub use quorumcall_types::Result;
