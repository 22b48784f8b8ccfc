// Path: crates/api/src/services/mod.rs
//! Traits for pluggable blockchain services.

use crate::lifecycle::OnEndBlock;
use crate::state::StateAccess;
use crate::transaction::context::TxContext;
use quorumcall_types::error::TransactionError;
use quorumcall_types::service_configs::Capabilities;

/// The base trait for any service managed by the host ledger.
pub trait BlockchainService: Send + Sync {
    /// A unique, static, lowercase string identifier for the service.
    /// This is used for dispatching service-call transactions.
    fn id(&self) -> &str;

    /// The version of the ABI the service expects from the host.
    fn abi_version(&self) -> u32;

    /// A string identifying the schema of the state this service reads/writes.
    fn state_schema(&self) -> &str;

    /// Returns a bitmask of the lifecycle capabilities (hooks) this service implements.
    fn capabilities(&self) -> Capabilities;

    /// Handles a dispatched call. `method` is a versioned name such as
    /// `submit_call@v1` and `params` its canonical encoding.
    ///
    /// The default implementation returns an `Unsupported` error.
    fn handle_service_call(
        &self,
        state: &mut dyn StateAccess,
        method: &str,
        params: &[u8],
        ctx: &mut TxContext,
    ) -> Result<(), TransactionError> {
        let _ = (state, params, ctx);
        Err(TransactionError::Unsupported(format!(
            "Service '{}' does not implement the method '{}'",
            self.id(),
            method
        )))
    }

    /// Attempts to downcast this service to an `OnEndBlock` trait object.
    fn as_on_end_block(&self) -> Option<&dyn OnEndBlock> {
        None
    }
}
