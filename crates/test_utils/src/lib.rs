// Path: crates/test_utils/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Quorum Call Kernel Test Utilities
//!
//! Fixtures, assertion macros and a minimal host ledger for driving services
//! block by block in tests.

pub mod assertions;
pub mod fixtures;
pub mod ledger;

pub use ledger::MockLedger;

#[doc(hidden)]
pub use quorumcall_types as __types;
