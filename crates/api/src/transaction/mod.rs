// Path: crates/api/src/transaction/mod.rs
//! Execution context shared by service calls, end-block hooks and call handlers.

pub mod context;
