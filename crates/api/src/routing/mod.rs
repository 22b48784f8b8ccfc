// Path: crates/api/src/routing/mod.rs
//! The seam between call envelopes and the effect handlers that apply them.
//!
//! Handlers only ever receive a `StateOverlay` (through `&mut dyn StateAccess`),
//! never the host's main state. Whether their writes survive is decided by
//! the caller.

use crate::state::StateAccess;
use crate::transaction::context::TxContext;
use quorumcall_types::app::AnyCall;
use quorumcall_types::error::TransactionError;

/// Applies the effect of one kind of call.
pub trait CallHandler: Send + Sync {
    /// Executes `call` against `state`.
    fn execute(
        &self,
        state: &mut dyn StateAccess,
        call: &AnyCall,
        ctx: &TxContext,
    ) -> Result<(), TransactionError>;
}

impl<F> CallHandler for F
where
    F: Fn(&mut dyn StateAccess, &AnyCall, &TxContext) -> Result<(), TransactionError>
        + Send
        + Sync,
{
    fn execute(
        &self,
        state: &mut dyn StateAccess,
        call: &AnyCall,
        ctx: &TxContext,
    ) -> Result<(), TransactionError> {
        self(state, call, ctx)
    }
}

/// Maps a route string to its handler.
pub trait CallRouter: Send + Sync {
    /// Whether a handler is registered for `route`.
    fn has_route(&self, route: &str) -> bool;

    /// Dispatches `call` to the handler for `route`.
    ///
    /// Fails with `MultisigError::RouteNotFound` when no handler exists.
    fn dispatch(
        &self,
        route: &str,
        call: &AnyCall,
        state: &mut dyn StateAccess,
        ctx: &TxContext,
    ) -> Result<(), TransactionError>;
}
