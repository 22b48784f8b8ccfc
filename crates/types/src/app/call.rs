// Path: crates/types/src/app/call.rs
use crate::app::AccountId;
use crate::codec;
use crate::error::MultisigError;
use crate::MAX_CALL_PAYLOAD_BYTES;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// The capability set every privileged message exposes to the kernel.
///
/// The kernel never interprets a message: it reads the route to find the
/// effect handler, and asks the message to validate itself statelessly.
pub trait CallMessage {
    /// The route tag used to look up the effect handler.
    fn route(&self) -> &str;

    /// A fully qualified name of the concrete message type.
    fn msg_type(&self) -> &str;

    /// Stateless validation performed before any state is touched.
    fn validate_basic(&self) -> Result<(), MultisigError>;
}

/// A type-erased privileged message, as it is persisted in a [`CallRecord`].
///
/// Typed messages are packed into an `AnyCall` with [`AnyCall::pack`] and
/// recovered by their handler with [`AnyCall::unpack`].
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AnyCall {
    /// The route tag used for dispatch.
    pub route: String,
    /// The name of the message type encoded in `value`.
    pub type_url: String,
    /// The canonical encoding of the message.
    pub value: Vec<u8>,
}

impl AnyCall {
    /// Creates an envelope from raw parts.
    pub fn new(route: impl Into<String>, type_url: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            route: route.into(),
            type_url: type_url.into(),
            value,
        }
    }

    /// Validates a typed message and packs it into an envelope.
    pub fn pack<M: CallMessage + Encode>(msg: &M) -> Result<Self, MultisigError> {
        msg.validate_basic()?;
        let value = codec::to_bytes_canonical(msg).map_err(MultisigError::InvalidCall)?;
        Ok(Self::new(msg.route(), msg.msg_type(), value))
    }

    /// Decodes the typed message carried by this envelope.
    pub fn unpack<M: Decode>(&self) -> Result<M, String> {
        codec::from_bytes_canonical(&self.value)
    }
}

impl CallMessage for AnyCall {
    fn route(&self) -> &str {
        &self.route
    }

    fn msg_type(&self) -> &str {
        &self.type_url
    }

    fn validate_basic(&self) -> Result<(), MultisigError> {
        if self.route.is_empty() {
            return Err(MultisigError::InvalidCall("route must not be empty".into()));
        }
        if self.type_url.is_empty() {
            return Err(MultisigError::InvalidCall(
                "message type must not be empty".into(),
            ));
        }
        if self.value.len() > MAX_CALL_PAYLOAD_BYTES {
            return Err(MultisigError::InvalidCall(format!(
                "payload of {} bytes exceeds the {} byte limit",
                self.value.len(),
                MAX_CALL_PAYLOAD_BYTES
            )));
        }
        Ok(())
    }
}

/// The lifecycle status of a call.
///
/// Status only moves forward: `Pending` to `Rejected`, or `Pending` to
/// `Approved` and then immediately to `Executed` or `Failed`.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallStatus {
    /// Awaiting confirmations.
    Pending,
    /// Reached quorum; execution is in progress within the current sweep.
    Approved,
    /// Reached quorum and its effects were committed.
    Executed,
    /// Reached quorum but its handler returned an error; nothing was applied.
    Failed,
    /// Expired without reaching quorum.
    Rejected,
}

impl CallStatus {
    /// True while the call still accepts confirmations and revocations.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// True once the call has reached quorum, whatever the execution outcome.
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved | Self::Executed | Self::Failed)
    }
}

impl core::fmt::Display for CallStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Executed => "executed",
            Self::Failed => "failed",
            Self::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// The persisted record of a submitted call. Records are never deleted.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CallRecord {
    /// Sequential id assigned at submission, starting at zero.
    pub id: u64,
    /// Caller-supplied idempotency token, unique across all calls ever submitted.
    pub unique_id: String,
    /// The privileged message awaiting authorization.
    pub payload: AnyCall,
    /// Ledger height at submission.
    pub submitted_height: u64,
    /// The authority that submitted the call.
    pub creator: AccountId,
    /// Current lifecycle status.
    pub status: CallStatus,
    /// The handler's error message, set only when `status` is `Failed`.
    pub execution_error: Option<String>,
    /// Height of the sweep that moved the call out of `Pending`.
    pub resolved_height: Option<u64>,
}

impl CallRecord {
    /// Creates a new pending record.
    pub fn pending(
        id: u64,
        unique_id: String,
        payload: AnyCall,
        submitted_height: u64,
        creator: AccountId,
    ) -> Self {
        Self {
            id,
            unique_id,
            payload,
            submitted_height,
            creator,
            status: CallStatus::Pending,
            execution_error: None,
            resolved_height: None,
        }
    }
}
