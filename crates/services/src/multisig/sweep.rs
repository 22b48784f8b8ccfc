// Path: crates/services/src/multisig/sweep.rs
//! The end-of-block sweep.

use super::{queue, store, votes, MultisigModule};
use quorumcall_api::state::{commit_change_set, StateAccess, StateOverlay};
use quorumcall_api::transaction::context::TxContext;
use quorumcall_types::app::{CallRecord, CallStatus, KernelEvent};
use quorumcall_types::error::StateError;

/// Ids of the calls a sweep resolved, each in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Calls whose handler succeeded and whose writes were committed.
    pub executed: Vec<u64>,
    /// Calls whose handler failed; none of their writes were applied.
    pub failed: Vec<u64>,
    /// Calls that expired without reaching quorum.
    pub rejected: Vec<u64>,
}

impl SweepReport {
    /// True if the sweep resolved nothing.
    pub fn is_empty(&self) -> bool {
        self.executed.is_empty() && self.failed.is_empty() && self.rejected.is_empty()
    }
}

fn load_queued(state: &dyn StateAccess, id: u64) -> Result<CallRecord, StateError> {
    let record = store::get(state, id)?.ok_or_else(|| {
        StateError::InvariantViolation(format!("queued call {} has no record", id))
    })?;
    if !record.status.is_pending() {
        return Err(StateError::InvariantViolation(format!(
            "queued call {} has status {}",
            id, record.status
        )));
    }
    Ok(record)
}

fn by_id(mut entries: Vec<(u64, u64)>) -> Vec<(u64, u64)> {
    entries.sort_by_key(|&(_, id)| id);
    entries
}

impl MultisigModule {
    /// Resolves pending calls at `ctx.block_height`.
    ///
    /// Calls in the active window with at least `quorum` confirmations are
    /// executed first. Then, once the height exceeds the interval, calls
    /// submitted at or before `height - interval` that are still pending are
    /// rejected. Handler failures only fail their own call; an error returned
    /// from here means state is inconsistent and the block must be abandoned.
    /// Writes made before the error are left in `state`; the end-block hook
    /// runs this inside an overlay so that a failed sweep leaves nothing
    /// behind.
    pub fn sweep(
        &self,
        state: &mut dyn StateAccess,
        ctx: &mut TxContext,
    ) -> Result<SweepReport, StateError> {
        let height = ctx.block_height;
        let interval = self.params.interval_to_execute;
        let mut report = SweepReport::default();

        let active = by_id(queue::range(&*state, height.saturating_sub(interval), height)?);
        if !active.is_empty() {
            let quorum = usize::from(self.validators.current_quorum(&*state)?);
            for (submitted_height, id) in active {
                if votes::count(&*state, id)? < quorum {
                    continue;
                }
                self.execute_approved(state, ctx, submitted_height, id, &mut report)?;
            }
        }

        if height > interval {
            let expired = by_id(queue::up_to(&*state, height - interval)?);
            for (submitted_height, id) in expired {
                let mut record = load_queued(state, id)?;
                record.status = CallStatus::Rejected;
                record.resolved_height = Some(height);
                store::put(state, &record)?;
                queue::remove(state, submitted_height, id)?;

                tracing::info!(
                    target: "multisig",
                    id,
                    submitted_height,
                    "call rejected: interval elapsed"
                );
                Self::emit(ctx, KernelEvent::CallRejected { id, height });
                report.rejected.push(id);
            }
        }

        Ok(report)
    }

    fn execute_approved(
        &self,
        state: &mut dyn StateAccess,
        ctx: &mut TxContext,
        submitted_height: u64,
        id: u64,
        report: &mut SweepReport,
    ) -> Result<(), StateError> {
        let height = ctx.block_height;
        let mut record = load_queued(state, id)?;
        record.status = CallStatus::Approved;
        store::put(state, &record)?;

        let route = record.payload.route.clone();
        if !self.router.has_route(&route) {
            tracing::error!(
                target: "multisig",
                id,
                route = %route,
                "approved call has no handler; routes must never be removed"
            );
            return Err(StateError::InvariantViolation(format!(
                "no handler for route '{}' of approved call {}",
                route, id
            )));
        }

        let outcome = {
            let mut scratch = StateOverlay::new(&*state);
            self.router
                .dispatch(&route, &record.payload, &mut scratch, ctx)
                .map(|()| scratch.into_ordered_batch())
        };

        let event = match outcome {
            Ok(batch) => {
                commit_change_set(state, &batch)?;
                record.status = CallStatus::Executed;
                report.executed.push(id);
                tracing::info!(target: "multisig", id, route = %route, "call executed");
                KernelEvent::CallExecuted { id, height }
            }
            Err(e) => {
                let error = e.to_string();
                record.status = CallStatus::Failed;
                record.execution_error = Some(error.clone());
                report.failed.push(id);
                tracing::warn!(
                    target: "multisig",
                    id,
                    route = %route,
                    error = %error,
                    "call failed"
                );
                KernelEvent::CallFailed { id, height, error }
            }
        };

        record.resolved_height = Some(height);
        store::put(state, &record)?;
        queue::remove(state, submitted_height, id)?;
        Self::emit(ctx, event);
        Ok(())
    }
}
