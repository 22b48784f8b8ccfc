// Path: crates/types/src/app/validators.rs
use crate::app::AccountId;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The authority set stored under [`crate::keys::VALIDATOR_SET_KEY`].
///
/// Membership decides who may submit, confirm and revoke; `quorum` is the
/// number of distinct confirmations a call needs before it executes. The set
/// is owned by the validator-set module; the kernel only reads it.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct ValidatorSet {
    /// The accounts currently recognised as authorities.
    pub members: BTreeSet<AccountId>,
    /// Minimum number of distinct confirmations required to execute a call.
    pub quorum: u16,
}

impl ValidatorSet {
    /// Creates a validator set with an explicit quorum.
    pub fn new(members: impl IntoIterator<Item = AccountId>, quorum: u16) -> Self {
        Self {
            members: members.into_iter().collect(),
            quorum,
        }
    }

    /// Returns true if `account` is a member of the set.
    pub fn contains(&self, account: &AccountId) -> bool {
        self.members.contains(account)
    }
}
