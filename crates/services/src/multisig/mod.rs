// Path: crates/services/src/multisig/mod.rs
//! The multisig call module.
//!
//! Authorities submit privileged calls, confirm or revoke their confirmation
//! while a call is pending, and at the end of every block the sweep executes
//! calls that reached quorum and rejects those whose interval elapsed.

use parity_scale_codec::{Decode, Encode};
use quorumcall_api::authority::ValidatorSetView;
use quorumcall_api::lifecycle::OnEndBlock;
use quorumcall_api::routing::CallRouter;
use quorumcall_api::services::BlockchainService;
use quorumcall_api::state::{commit_change_set, StateAccess, StateOverlay};
use quorumcall_api::transaction::context::TxContext;
use quorumcall_types::app::AnyCall;
use quorumcall_types::codec;
use quorumcall_types::error::{ConfigError, StateError, TransactionError};
use quorumcall_types::service_configs::{Capabilities, MultisigParams};
use std::sync::Arc;

pub mod authority;
mod lifecycle;
pub mod queue;
pub mod router;
pub mod store;
mod sweep;
pub mod votes;

pub use authority::StoredValidatorSet;
pub use router::HandlerRegistry;
pub use sweep::SweepReport;

// --- Service Method Parameter Structs (The Service's Public ABI) ---

/// Parameters of `submit_call@v1`.
#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct SubmitCallParams {
    /// The privileged message to authorize.
    pub payload: AnyCall,
    /// Caller-chosen idempotency token.
    pub unique_id: String,
}

/// Parameters of `confirm_call@v1`.
#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct ConfirmCallParams {
    /// The call to confirm.
    pub call_id: u64,
}

/// Parameters of `revoke_confirmation@v1`.
#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct RevokeConfirmationParams {
    /// The call whose confirmation is withdrawn.
    pub call_id: u64,
}

// --- Multisig Module ---

/// The quorum-gated call engine.
///
/// The router and validator set are collaborators owned by the instance, so
/// independent instances never share handlers or counters.
pub struct MultisigModule {
    params: MultisigParams,
    router: Arc<dyn CallRouter>,
    validators: Arc<dyn ValidatorSetView>,
}

impl MultisigModule {
    /// Creates the module, rejecting parameters outside their bounds.
    pub fn new(
        params: MultisigParams,
        router: Arc<dyn CallRouter>,
        validators: Arc<dyn ValidatorSetView>,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            params,
            router,
            validators,
        })
    }

    /// Creates the module with the validator set read from state.
    pub fn with_stored_validators(
        params: MultisigParams,
        router: Arc<dyn CallRouter>,
    ) -> Result<Self, ConfigError> {
        Self::new(params, router, Arc::new(StoredValidatorSet))
    }

    /// The parameters the module was built with.
    pub fn params(&self) -> &MultisigParams {
        &self.params
    }

    /// Runs `op` against an overlay of `state` and commits the overlay only if
    /// `op` succeeds. Events emitted by a failed `op` are discarded.
    fn run_in_overlay<T, E, F>(
        &self,
        state: &mut dyn StateAccess,
        ctx: &mut TxContext,
        op: F,
    ) -> Result<T, E>
    where
        E: From<StateError>,
        F: FnOnce(&mut dyn StateAccess, &mut TxContext) -> Result<T, E>,
    {
        let events_before = ctx.events.len();
        let (value, batch) = {
            let mut overlay = StateOverlay::new(&*state);
            match op(&mut overlay, ctx) {
                Ok(value) => (value, overlay.into_ordered_batch()),
                Err(e) => {
                    ctx.events.truncate(events_before);
                    return Err(e);
                }
            }
        };
        if ctx.simulation {
            tracing::debug!(
                target: "multisig",
                "simulation: discarding {} writes",
                batch.0.len() + batch.1.len()
            );
            return Ok(value);
        }
        commit_change_set(state, &batch)?;
        Ok(value)
    }
}

impl BlockchainService for MultisigModule {
    fn id(&self) -> &str {
        "multisig"
    }

    fn abi_version(&self) -> u32 {
        1
    }

    fn state_schema(&self) -> &str {
        "v1"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::ON_END_BLOCK
    }

    fn handle_service_call(
        &self,
        state: &mut dyn StateAccess,
        method: &str,
        params: &[u8],
        ctx: &mut TxContext,
    ) -> Result<(), TransactionError> {
        match method {
            "submit_call@v1" => {
                let p: SubmitCallParams =
                    codec::from_bytes_canonical(params).map_err(TransactionError::Deserialization)?;
                self.run_in_overlay(state, ctx, |overlay, ctx| {
                    self.submit_call(overlay, p.payload, p.unique_id, ctx)
                        .map(|_| ())
                })
            }
            "confirm_call@v1" => {
                let p: ConfirmCallParams =
                    codec::from_bytes_canonical(params).map_err(TransactionError::Deserialization)?;
                self.run_in_overlay(state, ctx, |overlay, ctx| {
                    self.confirm_call(overlay, p.call_id, ctx)
                })
            }
            "revoke_confirmation@v1" => {
                let p: RevokeConfirmationParams =
                    codec::from_bytes_canonical(params).map_err(TransactionError::Deserialization)?;
                self.run_in_overlay(state, ctx, |overlay, ctx| {
                    self.revoke_confirmation(overlay, p.call_id, ctx)
                })
            }
            _ => Err(TransactionError::Unsupported(format!(
                "Multisig service does not support method '{}'",
                method
            ))),
        }
    }

    fn as_on_end_block(&self) -> Option<&dyn OnEndBlock> {
        Some(self)
    }
}

impl OnEndBlock for MultisigModule {
    fn on_end_block(
        &self,
        state: &mut dyn StateAccess,
        ctx: &mut TxContext,
    ) -> Result<(), StateError> {
        let report = self.run_in_overlay(state, ctx, |overlay, ctx| self.sweep(overlay, ctx))?;
        if !report.is_empty() {
            tracing::info!(
                target: "multisig",
                height = ctx.block_height,
                executed = report.executed.len(),
                failed = report.failed.len(),
                rejected = report.rejected.len(),
                "sweep resolved calls"
            );
        }
        Ok(())
    }
}
