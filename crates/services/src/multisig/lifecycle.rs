// Path: crates/services/src/multisig/lifecycle.rs
//! Submission, voting and queries.
//!
//! Every operation finishes all of its checks before its first write, so a
//! caller error never leaves anything behind even when the operation runs
//! directly against main state.

use super::{queue, store, votes, MultisigModule};
use quorumcall_api::state::{StateAccess, StateOverlay};
use quorumcall_api::transaction::context::TxContext;
use quorumcall_types::app::{
    AccountId, AnyCall, CallMessage, CallRecord, CallStatus, KernelEvent,
};
use quorumcall_types::error::{MultisigError, TransactionError};
use quorumcall_types::MAX_UNIQUE_ID_BYTES;

impl MultisigModule {
    fn ensure_authority(
        &self,
        state: &dyn StateAccess,
        account: &AccountId,
    ) -> Result<(), TransactionError> {
        if !self.validators.is_authority(state, account)? {
            return Err(MultisigError::NotAuthorized(*account).into());
        }
        Ok(())
    }

    /// Loads call `id` and checks that it still accepts votes.
    fn pending_record(
        &self,
        state: &dyn StateAccess,
        id: u64,
    ) -> Result<CallRecord, TransactionError> {
        let record = store::get(state, id)?.ok_or(MultisigError::UnknownCallId(id))?;
        match record.status {
            CallStatus::Pending => Ok(record),
            CallStatus::Rejected => Err(MultisigError::AlreadyRejected(id).into()),
            _ => Err(MultisigError::AlreadyApproved(id).into()),
        }
    }

    pub(super) fn emit(ctx: &mut TxContext, event: KernelEvent) {
        tracing::info!(target: "multisig_event", event = ?event);
        ctx.emit(event);
    }

    /// Submits `payload` for authorization and returns its call id.
    ///
    /// The signer must be an authority and becomes the call's first
    /// confirmation. The payload is dry-run against a throwaway overlay so
    /// that calls which cannot succeed right now are refused up front.
    pub fn submit_call(
        &self,
        state: &mut dyn StateAccess,
        payload: AnyCall,
        unique_id: String,
        ctx: &mut TxContext,
    ) -> Result<u64, TransactionError> {
        let creator = ctx.signer_account_id;
        self.ensure_authority(state, &creator)?;

        payload.validate_basic()?;
        if unique_id.is_empty() {
            return Err(MultisigError::InvalidCall("unique id must not be empty".into()).into());
        }
        if unique_id.len() > MAX_UNIQUE_ID_BYTES {
            return Err(MultisigError::InvalidCall(format!(
                "unique id exceeds {} bytes",
                MAX_UNIQUE_ID_BYTES
            ))
            .into());
        }

        let route = payload.route().to_string();
        if !self.router.has_route(&route) {
            return Err(MultisigError::RouteNotFound(route).into());
        }

        {
            let mut scratch = StateOverlay::new(&*state);
            let sim = ctx.simulated();
            if let Err(e) = self.router.dispatch(&route, &payload, &mut scratch, &sim) {
                tracing::debug!(
                    target: "multisig",
                    route = %route,
                    error = %e,
                    "dry run refused call"
                );
                return Err(e);
            }
        }

        if store::id_for_unique(state, &unique_id)?.is_some() {
            return Err(MultisigError::DuplicateUniqueId(unique_id).into());
        }

        let height = ctx.block_height;
        let id = store::allocate_id(state)?;
        let record = CallRecord::pending(id, unique_id.clone(), payload, height, creator);
        store::put(state, &record)?;
        store::index_unique(state, &unique_id, id)?;
        queue::insert(state, height, id)?;
        votes::add(state, id, creator)?;

        Self::emit(
            ctx,
            KernelEvent::CallSubmitted {
                id,
                unique_id,
                creator,
                route,
                height,
            },
        );
        Ok(id)
    }

    /// Adds the signer's confirmation to pending call `id`.
    pub fn confirm_call(
        &self,
        state: &mut dyn StateAccess,
        id: u64,
        ctx: &mut TxContext,
    ) -> Result<(), TransactionError> {
        let voter = ctx.signer_account_id;
        self.ensure_authority(state, &voter)?;
        self.pending_record(state, id)?;

        if !votes::add(state, id, voter)? {
            return Err(MultisigError::DuplicateVote { id, voter }.into());
        }
        Self::emit(ctx, KernelEvent::CallConfirmed { id, voter });
        Ok(())
    }

    /// Withdraws the signer's confirmation of pending call `id`.
    pub fn revoke_confirmation(
        &self,
        state: &mut dyn StateAccess,
        id: u64,
        ctx: &mut TxContext,
    ) -> Result<(), TransactionError> {
        let voter = ctx.signer_account_id;
        self.ensure_authority(state, &voter)?;
        self.pending_record(state, id)?;

        if !votes::remove(state, id, &voter)? {
            return Err(MultisigError::NoSuchVote { id, voter }.into());
        }
        Self::emit(ctx, KernelEvent::ConfirmationRevoked { id, voter });
        Ok(())
    }

    /// Returns call `id`.
    pub fn get_call(
        &self,
        state: &dyn StateAccess,
        id: u64,
    ) -> Result<CallRecord, TransactionError> {
        Ok(store::get(state, id)?.ok_or(MultisigError::UnknownCallId(id))?)
    }

    /// Returns the call submitted with `unique_id`.
    pub fn get_call_by_unique_id(
        &self,
        state: &dyn StateAccess,
        unique_id: &str,
    ) -> Result<CallRecord, TransactionError> {
        let id = store::id_for_unique(state, unique_id)?
            .ok_or_else(|| MultisigError::UnknownUniqueId(unique_id.to_string()))?;
        self.get_call(state, id)
    }

    /// The authorities that confirmed call `id`, in ascending order.
    pub fn list_confirmations(
        &self,
        state: &dyn StateAccess,
        id: u64,
    ) -> Result<Vec<AccountId>, TransactionError> {
        if store::get(state, id)?.is_none() {
            return Err(MultisigError::UnknownCallId(id).into());
        }
        Ok(votes::load(state, id)?.into_iter().collect())
    }

    /// All pending calls, ordered by submission height and then id.
    pub fn pending_calls(
        &self,
        state: &dyn StateAccess,
    ) -> Result<Vec<CallRecord>, TransactionError> {
        let mut calls = Vec::new();
        for (_, id) in queue::up_to(state, u64::MAX)? {
            calls.push(self.get_call(state, id)?);
        }
        Ok(calls)
    }
}
