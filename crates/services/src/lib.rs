// Path: crates/services/src/lib.rs
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented
    )
)]

//! # Quorum Call Kernel Services
//!
//! Service implementations hosted by the kernel. Currently this is the
//! multisig call module, which holds privileged calls until enough
//! authorities confirm them and then executes them at the end of a block.

pub mod multisig;
