// Path: crates/api/src/lib.rs

//! # Quorum Call Kernel API Crate Lints
//!
//! This crate enforces a strict set of lints to keep the state layer
//! panic-free. Panics are disallowed in non-test code.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::indexing_slicing
    )
)]
//! # Quorum Call Kernel API
//!
//! Core traits and interfaces for the kernel. This crate defines the stable
//! contract between the host ledger, the multisig service and the external
//! collaborators it consumes (the validator set and the call router).

/// The validator-set seam: who may vote and how many votes are enough.
pub mod authority;
/// Re-exports all core error types from the central `quorumcall-types` crate.
pub mod error;
/// Defines traits for services that hook into the block processing lifecycle.
pub mod lifecycle;
/// The routing seam between call envelopes and their effect handlers.
pub mod routing;
/// Traits for pluggable blockchain services.
pub mod services;
/// Core traits for state management: `StateAccess`, `StateOverlay` and an in-memory store.
pub mod state;
/// The per-transaction execution context.
pub mod transaction;

/// A curated set of the most commonly used traits and types.
pub mod prelude {
    pub use crate::authority::ValidatorSetView;
    pub use crate::error::{ErrorCode, MultisigError, StateError, TransactionError};
    pub use crate::lifecycle::OnEndBlock;
    pub use crate::routing::{CallHandler, CallRouter};
    pub use crate::services::BlockchainService;
    pub use crate::state::{InMemoryState, StateAccess, StateOverlay};
    pub use crate::transaction::context::TxContext;
}
