// Path: crates/test_utils/src/fixtures/mod.rs
//! Test fixtures: accounts, validator sets and a small key-value call type
//! whose handler can be made to fail on demand.

use parity_scale_codec::{Decode, Encode};
use quorumcall_api::state::StateAccess;
use quorumcall_api::transaction::context::TxContext;
use quorumcall_types::app::{AccountId, AnyCall, CallMessage, ValidatorSet};
use quorumcall_types::codec;
use quorumcall_types::error::{MultisigError, StateError, TransactionError};
use quorumcall_types::keys::VALIDATOR_SET_KEY;

/// Route served by [`kv_handler`].
pub const KV_ROUTE: &str = "kv";
/// Type name of [`MsgSetValue`].
pub const MSG_SET_VALUE_TYPE: &str = "kv/MsgSetValue";

/// A deterministic account whose bytes are all `n`.
pub fn account(n: u8) -> AccountId {
    AccountId([n; 32])
}

/// Accounts `1..=n`.
pub fn authorities(n: u8) -> Vec<AccountId> {
    (1..=n).map(account).collect()
}

/// Publishes a validator set the way the validator-set module would.
pub fn seed_validator_set(
    state: &mut dyn StateAccess,
    members: impl IntoIterator<Item = AccountId>,
    quorum: u16,
) -> Result<(), StateError> {
    let set = ValidatorSet::new(members, quorum);
    let bytes = codec::to_bytes_canonical(&set).map_err(StateError::InvalidValue)?;
    state.insert(VALIDATOR_SET_KEY, &bytes)
}

/// Sets `kv::{key}` to `value`.
#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct MsgSetValue {
    /// Target key, without the `kv::` prefix.
    pub key: String,
    /// Value to store.
    pub value: u64,
}

impl CallMessage for MsgSetValue {
    fn route(&self) -> &str {
        KV_ROUTE
    }

    fn msg_type(&self) -> &str {
        MSG_SET_VALUE_TYPE
    }

    fn validate_basic(&self) -> Result<(), MultisigError> {
        if self.key.is_empty() {
            return Err(MultisigError::InvalidCall("kv key must not be empty".into()));
        }
        Ok(())
    }
}

/// An envelope carrying `MsgSetValue { key, value }`.
pub fn set_value_call(key: &str, value: u64) -> AnyCall {
    let msg = MsgSetValue {
        key: key.to_string(),
        value,
    };
    AnyCall::new(KV_ROUTE, MSG_SET_VALUE_TYPE, msg.encode())
}

/// An envelope for a route nothing serves.
pub fn unrouted_call() -> AnyCall {
    AnyCall::new("nowhere", "nowhere/MsgNothing", Vec::new())
}

/// State key written by [`kv_handler`] for `key`.
pub fn kv_key(key: &str) -> Vec<u8> {
    [b"kv::".as_slice(), key.as_bytes()].concat()
}

fn frozen_key(key: &str) -> Vec<u8> {
    [b"kv_frozen::".as_slice(), key.as_bytes()].concat()
}

/// Makes every later `MsgSetValue` for `key` fail after it has written.
pub fn freeze(state: &mut dyn StateAccess, key: &str) -> Result<(), StateError> {
    state.insert(&frozen_key(key), &[1])
}

/// Reads the value [`kv_handler`] stored for `key`.
pub fn read_value(state: &dyn StateAccess, key: &str) -> Result<Option<u64>, StateError> {
    match state.get(&kv_key(key))? {
        Some(bytes) => {
            let arr: [u8; 8] = bytes
                .try_into()
                .map_err(|_| StateError::InvalidValue("kv value is not a u64".into()))?;
            Ok(Some(u64::from_le_bytes(arr)))
        }
        None => Ok(None),
    }
}

/// Handler for [`KV_ROUTE`]. Writes first, then fails if the key is frozen,
/// so a failed execution has writes that must be rolled back.
pub fn kv_handler(
    state: &mut dyn StateAccess,
    call: &AnyCall,
    _ctx: &TxContext,
) -> Result<(), TransactionError> {
    let msg: MsgSetValue = call.unpack().map_err(TransactionError::Deserialization)?;
    state.insert(&kv_key(&msg.key), &msg.value.to_le_bytes())?;
    if state.get(&frozen_key(&msg.key))?.is_some() {
        return Err(TransactionError::Invalid(format!(
            "key '{}' is frozen",
            msg.key
        )));
    }
    Ok(())
}
