// Path: crates/types/src/app/events.rs

use crate::app::AccountId;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// A unified event type representing observable state changes within the kernel.
///
/// Events are an observability boundary only: they are collected on the
/// transaction context and logged, and no kernel logic reads them back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub enum KernelEvent {
    /// A call was accepted and entered the pending queue.
    CallSubmitted {
        /// The assigned call id.
        id: u64,
        /// The caller's idempotency token.
        unique_id: String,
        /// The submitting authority.
        creator: AccountId,
        /// The route of the call's payload.
        route: String,
        /// The height at which the call was submitted.
        height: u64,
    },
    /// An authority confirmed a pending call.
    CallConfirmed {
        /// The confirmed call.
        id: u64,
        /// The confirming authority.
        voter: AccountId,
    },
    /// An authority withdrew its confirmation of a pending call.
    ConfirmationRevoked {
        /// The affected call.
        id: u64,
        /// The revoking authority.
        voter: AccountId,
    },
    /// A call reached quorum and its effects were committed.
    CallExecuted {
        /// The executed call.
        id: u64,
        /// The sweep height.
        height: u64,
    },
    /// A call reached quorum but its handler failed; nothing was applied.
    CallFailed {
        /// The failed call.
        id: u64,
        /// The sweep height.
        height: u64,
        /// The handler's error message.
        error: String,
    },
    /// A call expired without reaching quorum.
    CallRejected {
        /// The rejected call.
        id: u64,
        /// The sweep height.
        height: u64,
    },
}
