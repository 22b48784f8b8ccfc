// Path: crates/services/src/multisig/router.rs
//! An append-only table of effect handlers keyed by route.

use quorumcall_api::routing::{CallHandler, CallRouter};
use quorumcall_api::state::StateAccess;
use quorumcall_api::transaction::context::TxContext;
use quorumcall_types::app::AnyCall;
use quorumcall_types::error::{MultisigError, TransactionError};
use std::collections::BTreeMap;

/// Maps routes to handlers. Routes can be added but never replaced or
/// removed, so a route accepted at submission still resolves at execution.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: BTreeMap<String, Box<dyn CallHandler>>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `route`.
    pub fn register(
        &mut self,
        route: impl Into<String>,
        handler: impl CallHandler + 'static,
    ) -> Result<(), MultisigError> {
        let route = route.into();
        if self.handlers.contains_key(&route) {
            return Err(MultisigError::RouteAlreadyRegistered(route));
        }
        log::debug!("registered call handler for route '{}'", route);
        self.handlers.insert(route, Box::new(handler));
        Ok(())
    }

    /// Registers a closure or function as the handler for `route`.
    pub fn register_fn<F>(&mut self, route: impl Into<String>, f: F) -> Result<(), MultisigError>
    where
        F: Fn(&mut dyn StateAccess, &AnyCall, &TxContext) -> Result<(), TransactionError>
            + Send
            + Sync
            + 'static,
    {
        self.register(route, f)
    }

    /// Registered routes in ascending order.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True if no route is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl CallRouter for HandlerRegistry {
    fn has_route(&self, route: &str) -> bool {
        self.handlers.contains_key(route)
    }

    fn dispatch(
        &self,
        route: &str,
        call: &AnyCall,
        state: &mut dyn StateAccess,
        ctx: &TxContext,
    ) -> Result<(), TransactionError> {
        let handler = self
            .handlers
            .get(route)
            .ok_or_else(|| MultisigError::RouteNotFound(route.to_string()))?;
        handler.execute(state, call, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quorumcall_api::state::InMemoryState;
    use quorumcall_types::app::AccountId;

    fn noop(_: &mut dyn StateAccess, _: &AnyCall, _: &TxContext) -> Result<(), TransactionError> {
        Ok(())
    }

    #[test]
    fn test_routes_are_append_only() {
        let mut registry = HandlerRegistry::new();
        registry.register("bank", noop).unwrap();
        let err = registry.register("bank", noop).unwrap_err();
        assert_eq!(err, MultisigError::RouteAlreadyRegistered("bank".into()));
        assert_eq!(registry.routes().collect::<Vec<_>>(), vec!["bank"]);
    }

    #[test]
    fn test_dispatch_reaches_handler() {
        let mut registry = HandlerRegistry::new();
        registry
            .register_fn("kv", |state, call, _ctx| {
                state.insert(b"kv::last", &call.value)?;
                Ok(())
            })
            .unwrap();

        let mut state = InMemoryState::new();
        let ctx = TxContext::new(1, AccountId::default());
        let call = AnyCall::new("kv", "kv/MsgSet", vec![9]);
        registry.dispatch("kv", &call, &mut state, &ctx).unwrap();
        assert_eq!(state.get(b"kv::last").unwrap(), Some(vec![9]));

        let err = registry
            .dispatch("missing", &call, &mut state, &ctx)
            .unwrap_err();
        assert_eq!(
            err,
            TransactionError::Multisig(MultisigError::RouteNotFound("missing".into()))
        );
    }
}
