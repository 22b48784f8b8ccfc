// Path: crates/services/tests/properties.rs
//! Properties that must hold for any sequence of submissions, votes and blocks.

mod common;

use anyhow::Result;
use common::{confirm, ledger, revoke, submit};
use proptest::prelude::*;
use quorumcall_services::multisig::queue;
use quorumcall_test_utils::assert_err_code;
use quorumcall_test_utils::fixtures::{
    account, freeze, read_value, set_value_call, unrouted_call,
};
use quorumcall_types::app::CallStatus;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Op {
    Submit { signer: u8, uid: u8, routed: bool },
    Confirm { signer: u8, call: u8 },
    Revoke { signer: u8, call: u8 },
    EndBlock,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u8..=5, 0u8..6, any::<bool>())
            .prop_map(|(signer, uid, routed)| Op::Submit { signer, uid, routed }),
        (1u8..=5, 0u8..8).prop_map(|(signer, call)| Op::Confirm { signer, call }),
        (1u8..=5, 0u8..8).prop_map(|(signer, call)| Op::Revoke { signer, call }),
        Just(Op::EndBlock),
        Just(Op::EndBlock),
    ]
}

proptest! {
    // The nth accepted submission gets id n - 1, whatever was refused in between.
    #[test]
    fn prop_ids_are_dense_and_monotonic(
        subs in proptest::collection::vec((1u8..=5, 0u8..6, any::<bool>()), 1..30)
    ) {
        let mut ledger = ledger(u16::MAX, 1000, 1).unwrap();
        let mut used = BTreeSet::new();
        let mut accepted = 0u64;

        for (signer, uid, routed) in subs {
            let uid = format!("u{}", uid);
            let payload = if routed { set_value_call("k", 1) } else { unrouted_call() };
            let expect_ok = signer <= 4 && routed && !used.contains(&uid);

            match submit(&mut ledger, account(signer), payload, &uid) {
                Ok(id) => {
                    prop_assert!(expect_ok);
                    prop_assert_eq!(id, accepted);
                    accepted += 1;
                    used.insert(uid);
                }
                Err(_) => prop_assert!(!expect_ok),
            }
        }
    }

    // After every sweep at height h, nothing submitted at or before
    // h - interval is still queued, and only pending calls are queued.
    #[test]
    fn prop_queue_is_drained_past_the_interval(
        ops in proptest::collection::vec(op_strategy(), 1..80)
    ) {
        const INTERVAL: u64 = 3;
        let mut ledger = ledger(2, INTERVAL, 1).unwrap();

        for op in ops {
            match op {
                Op::Submit { signer, uid, routed } => {
                    let payload = if routed { set_value_call("k", 1) } else { unrouted_call() };
                    let _ = submit(&mut ledger, account(signer), payload, &format!("u{}", uid));
                }
                Op::Confirm { signer, call } => {
                    let _ = confirm(&mut ledger, account(signer), u64::from(call));
                }
                Op::Revoke { signer, call } => {
                    let _ = revoke(&mut ledger, account(signer), u64::from(call));
                }
                Op::EndBlock => {
                    let swept = ledger.height();
                    ledger.end_block().unwrap();

                    for (submitted, id) in queue::up_to(ledger.state(), u64::MAX).unwrap() {
                        prop_assert!(swept < INTERVAL || submitted > swept - INTERVAL);
                        let record = ledger.service().get_call(ledger.state(), id).unwrap();
                        prop_assert_eq!(record.status, CallStatus::Pending);
                    }
                }
            }
        }
    }
}

#[test]
fn one_vote_short_at_expiry_is_rejected() -> Result<()> {
    let mut ledger = ledger(3, 10, 20)?;
    let id = submit(&mut ledger, account(1), set_value_call("k", 1), "u1")?;
    confirm(&mut ledger, account(2), id)?;

    ledger.advance_to(30)?;
    ledger.end_block()?;
    let record = ledger.service().get_call(ledger.state(), id)?;
    assert_eq!(record.status, CallStatus::Rejected);
    assert_eq!(read_value(ledger.state(), "k")?, None);
    Ok(())
}

#[test]
fn quorum_reached_on_the_expiry_block_executes() -> Result<()> {
    let mut ledger = ledger(3, 10, 20)?;
    let id = submit(&mut ledger, account(1), set_value_call("k", 5), "u1")?;
    confirm(&mut ledger, account(2), id)?;

    ledger.advance_to(30)?;
    confirm(&mut ledger, account(3), id)?;
    ledger.end_block()?;

    let record = ledger.service().get_call(ledger.state(), id)?;
    assert_eq!(record.status, CallStatus::Executed);
    assert_eq!(record.resolved_height, Some(30));
    assert_eq!(read_value(ledger.state(), "k")?, Some(5));
    Ok(())
}

#[test]
fn revoked_vote_no_longer_counts() -> Result<()> {
    let mut ledger = ledger(2, 10, 1)?;
    let id = submit(&mut ledger, account(1), set_value_call("k", 1), "u1")?;
    confirm(&mut ledger, account(2), id)?;
    revoke(&mut ledger, account(2), id)?;
    ledger.end_block()?;

    assert_eq!(
        ledger.service().get_call(ledger.state(), id)?.status,
        CallStatus::Pending
    );
    Ok(())
}

#[test]
fn unique_ids_stay_taken_whatever_the_outcome() -> Result<()> {
    let mut ledger = ledger(2, 5, 1)?;
    let rejected = submit(&mut ledger, account(1), set_value_call("a", 1), "rejected")?;
    let executed = submit(&mut ledger, account(1), set_value_call("b", 1), "executed")?;
    confirm(&mut ledger, account(2), executed)?;
    let failed = submit(&mut ledger, account(1), set_value_call("f", 1), "failed")?;
    freeze(ledger.state_mut(), "f")?;
    confirm(&mut ledger, account(2), failed)?;
    ledger.advance_to(7)?;
    let pending = submit(&mut ledger, account(1), set_value_call("p", 1), "pending")?;

    let svc = ledger.service();
    assert_eq!(svc.get_call(ledger.state(), rejected)?.status, CallStatus::Rejected);
    assert_eq!(svc.get_call(ledger.state(), executed)?.status, CallStatus::Executed);
    assert_eq!(svc.get_call(ledger.state(), failed)?.status, CallStatus::Failed);
    assert_eq!(svc.get_call(ledger.state(), pending)?.status, CallStatus::Pending);

    for uid in ["rejected", "executed", "failed", "pending"] {
        assert_err_code!(
            submit(&mut ledger, account(3), set_value_call("c", 1), uid),
            "MULTISIG_DUPLICATE_UNIQUE_ID"
        );
    }
    Ok(())
}
