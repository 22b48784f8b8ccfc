// Path: crates/services/tests/common/mod.rs
#![allow(dead_code)]

use quorumcall_api::state::InMemoryState;
use quorumcall_services::multisig::{
    ConfirmCallParams, HandlerRegistry, MultisigModule, RevokeConfirmationParams,
    SubmitCallParams,
};
use quorumcall_test_utils::fixtures::{authorities, kv_handler, seed_validator_set, KV_ROUTE};
use quorumcall_test_utils::MockLedger;
use quorumcall_types::app::{AccountId, AnyCall, KernelEvent};
use quorumcall_types::error::TransactionError;
use quorumcall_types::service_configs::MultisigParams;
use std::sync::Arc;

pub type Ledger = MockLedger<MultisigModule>;

/// A ledger at `start_height` with authorities `1..=4` and the kv route.
pub fn ledger(quorum: u16, interval: u64, start_height: u64) -> anyhow::Result<Ledger> {
    let mut registry = HandlerRegistry::new();
    registry.register(KV_ROUTE, kv_handler)?;
    let module = MultisigModule::with_stored_validators(
        MultisigParams::with_interval(interval),
        Arc::new(registry),
    )?;

    let mut genesis = InMemoryState::new();
    seed_validator_set(&mut genesis, authorities(4), quorum)?;
    Ok(MockLedger::new(module, genesis, start_height))
}

pub fn submit(
    ledger: &mut Ledger,
    signer: AccountId,
    payload: AnyCall,
    unique_id: &str,
) -> Result<u64, TransactionError> {
    let params = SubmitCallParams {
        payload,
        unique_id: unique_id.to_string(),
    };
    let events = ledger.apply(signer, "submit_call@v1", &params)?;
    events
        .iter()
        .find_map(|e| match e {
            KernelEvent::CallSubmitted { id, .. } => Some(*id),
            _ => None,
        })
        .ok_or_else(|| TransactionError::Invalid("submission emitted no event".into()))
}

pub fn confirm(ledger: &mut Ledger, signer: AccountId, call_id: u64) -> Result<(), TransactionError> {
    ledger
        .apply(signer, "confirm_call@v1", &ConfirmCallParams { call_id })
        .map(|_| ())
}

pub fn revoke(ledger: &mut Ledger, signer: AccountId, call_id: u64) -> Result<(), TransactionError> {
    ledger
        .apply(
            signer,
            "revoke_confirmation@v1",
            &RevokeConfirmationParams { call_id },
        )
        .map(|_| ())
}
