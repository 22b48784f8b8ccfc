// Path: crates/api/src/transaction/context.rs
//! Defines the stable context for transaction execution.

use quorumcall_types::app::{AccountId, KernelEvent};

/// Provides context to services and call handlers during execution.
#[derive(Clone, Debug)]
pub struct TxContext {
    /// The current block height being processed.
    pub block_height: u64,
    /// The `AccountId` of the entity that signed the current transaction.
    /// This is the authoritative source for permission checks within services.
    /// For end-block hooks it is the zero account.
    pub signer_account_id: AccountId,
    /// If true, the transaction is being simulated and its writes will be
    /// discarded by the host.
    pub simulation: bool,
    /// Events emitted while processing, in emission order.
    pub events: Vec<KernelEvent>,
}

impl TxContext {
    /// Creates a context for a transaction signed by `signer` at `block_height`.
    pub fn new(block_height: u64, signer: AccountId) -> Self {
        Self {
            block_height,
            signer_account_id: signer,
            simulation: false,
            events: Vec::new(),
        }
    }

    /// Creates the context handed to end-block hooks.
    pub fn for_end_block(block_height: u64) -> Self {
        Self::new(block_height, AccountId::default())
    }

    /// Returns a copy of this context flagged as a simulation, with no events.
    pub fn simulated(&self) -> Self {
        Self {
            block_height: self.block_height,
            signer_account_id: self.signer_account_id,
            simulation: true,
            events: Vec::new(),
        }
    }

    /// Records an event.
    pub fn emit(&mut self, event: KernelEvent) {
        self.events.push(event);
    }

    /// Takes all recorded events, leaving the context empty.
    pub fn drain_events(&mut self) -> Vec<KernelEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_context_keeps_identity_but_not_events() {
        let mut ctx = TxContext::new(7, AccountId([1; 32]));
        ctx.emit(KernelEvent::CallRejected { id: 0, height: 7 });

        let sim = ctx.simulated();
        assert!(sim.simulation);
        assert_eq!(sim.block_height, 7);
        assert_eq!(sim.signer_account_id, AccountId([1; 32]));
        assert!(sim.events.is_empty());

        assert_eq!(ctx.drain_events().len(), 1);
        assert!(ctx.events.is_empty());
    }
}
