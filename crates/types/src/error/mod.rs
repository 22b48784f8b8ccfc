// Path: crates/types/src/error/mod.rs
//! Core error types for the quorum call kernel.
//!
//! Every error carries a stable machine-readable code through [`ErrorCode`]
//! and a human-readable message through `Display`; together they form the
//! structured `(code, message)` pair surfaced to callers.

use crate::app::AccountId;
use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors related to the state store or the state layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The requested key was not found in the state.
    #[error("Key not found in state")]
    KeyNotFound,
    /// The provided value was invalid.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
    /// An error occurred during state deserialization.
    #[error("Decode error: {0}")]
    Decode(String),
    /// A kernel invariant was found broken. The block must not be committed.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl ErrorCode for StateError {
    fn code(&self) -> &'static str {
        match self {
            Self::KeyNotFound => "STATE_KEY_NOT_FOUND",
            Self::InvalidValue(_) => "STATE_INVALID_VALUE",
            Self::Decode(_) => "STATE_DECODE_ERROR",
            Self::InvariantViolation(_) => "STATE_INVARIANT_VIOLATION",
        }
    }
}

/// Caller errors returned by the multisig call module.
///
/// None of these are retried and none of them leave any write behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MultisigError {
    /// No effect handler is registered for the call's route.
    #[error("No handler registered for route '{0}'")]
    RouteNotFound(String),
    /// The unique id has already been used by an earlier call.
    #[error("Unique id '{0}' has already been used")]
    DuplicateUniqueId(String),
    /// No call with this id exists.
    #[error("Call with ID {0} not found")]
    UnknownCallId(u64),
    /// No call was submitted with this unique id.
    #[error("No call with unique id '{0}'")]
    UnknownUniqueId(String),
    /// The call has already reached quorum and left the pending state.
    #[error("Call {0} has already been approved")]
    AlreadyApproved(u64),
    /// The call expired without quorum.
    #[error("Call {0} has already been rejected")]
    AlreadyRejected(u64),
    /// The voter has already confirmed this call.
    #[error("Account {voter} has already confirmed call {id}")]
    DuplicateVote {
        /// The call being confirmed.
        id: u64,
        /// The account that confirmed twice.
        voter: AccountId,
    },
    /// The voter has not confirmed this call, so there is nothing to revoke.
    #[error("Account {voter} has not confirmed call {id}")]
    NoSuchVote {
        /// The call whose confirmation was revoked.
        id: u64,
        /// The account without a confirmation.
        voter: AccountId,
    },
    /// The account is not a member of the current validator set.
    #[error("Account {0} is not an authority")]
    NotAuthorized(AccountId),
    /// The call failed its stateless validation.
    #[error("Invalid call: {0}")]
    InvalidCall(String),
    /// A handler for this route is already registered. Routes are append-only.
    #[error("Route '{0}' is already registered")]
    RouteAlreadyRegistered(String),
}

impl ErrorCode for MultisigError {
    fn code(&self) -> &'static str {
        match self {
            Self::RouteNotFound(_) => "MULTISIG_ROUTE_NOT_FOUND",
            Self::DuplicateUniqueId(_) => "MULTISIG_DUPLICATE_UNIQUE_ID",
            Self::UnknownCallId(_) => "MULTISIG_UNKNOWN_CALL_ID",
            Self::UnknownUniqueId(_) => "MULTISIG_UNKNOWN_UNIQUE_ID",
            Self::AlreadyApproved(_) => "MULTISIG_ALREADY_APPROVED",
            Self::AlreadyRejected(_) => "MULTISIG_ALREADY_REJECTED",
            Self::DuplicateVote { .. } => "MULTISIG_DUPLICATE_VOTE",
            Self::NoSuchVote { .. } => "MULTISIG_NO_SUCH_VOTE",
            Self::NotAuthorized(_) => "MULTISIG_NOT_AUTHORIZED",
            Self::InvalidCall(_) => "MULTISIG_INVALID_CALL",
            Self::RouteAlreadyRegistered(_) => "MULTISIG_ROUTE_ALREADY_REGISTERED",
        }
    }
}

/// Errors raised while validating service parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `interval_to_execute` is below the accepted minimum.
    #[error("interval_to_execute must be at least {min} blocks, got {got}")]
    IntervalTooShort {
        /// The configured value.
        got: u64,
        /// The smallest accepted value.
        min: u64,
    },
}

impl ErrorCode for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            Self::IntervalTooShort { .. } => "CONFIG_INTERVAL_TOO_SHORT",
        }
    }
}

/// The umbrella error returned by service operations and effect handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    /// An error from the state layer.
    #[error("State error: {0}")]
    State(#[from] StateError),
    /// A caller error from the multisig module.
    #[error("Multisig error: {0}")]
    Multisig(#[from] MultisigError),
    /// Encoding a value failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Decoding a value or parameter blob failed.
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    /// The operation is invalid for a reason specific to the handler.
    #[error("Invalid transaction: {0}")]
    Invalid(String),
    /// The requested method or feature is not supported.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

impl ErrorCode for TransactionError {
    fn code(&self) -> &'static str {
        match self {
            Self::State(e) => e.code(),
            Self::Multisig(e) => e.code(),
            Self::Serialization(_) => "TX_SERIALIZATION_ERROR",
            Self::Deserialization(_) => "TX_DESERIALIZATION_ERROR",
            Self::Invalid(_) => "TX_INVALID",
            Self::Unsupported(_) => "TX_UNSUPPORTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_error_forwards_inner_code() {
        let err: TransactionError = MultisigError::UnknownCallId(3).into();
        assert_eq!(err.code(), "MULTISIG_UNKNOWN_CALL_ID");
        assert_eq!(err.to_string(), "Multisig error: Call with ID 3 not found");

        let err: TransactionError = StateError::KeyNotFound.into();
        assert_eq!(err.code(), "STATE_KEY_NOT_FOUND");
    }

    #[test]
    fn test_vote_errors_name_the_voter() {
        let voter = AccountId([0xab; 32]);
        let msg = MultisigError::DuplicateVote { id: 1, voter }.to_string();
        assert!(msg.contains(&hex::encode(voter.0)));
    }
}
