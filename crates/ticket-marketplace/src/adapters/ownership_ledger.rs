//! # In-Memory Ownership Ledger
//!
//! Per-identifier balances for ticket credentials. Only the mint path the
//! marketplace needs is provided.

use crate::domain::ticket_id::TicketId;
use crate::domain::value_objects::{Address, U256};
use crate::ports::outbound::OwnershipLedger;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Shared in-memory ownership ledger. Clones observe the same balances.
#[derive(Clone, Debug)]
pub struct InMemoryOwnershipLedger {
    address: Address,
    minter: Address,
    balances: Arc<RwLock<HashMap<(Address, TicketId), U256>>>,
}

impl InMemoryOwnershipLedger {
    /// Create a ledger living at `address` that accepts mints from `minter`.
    #[must_use]
    pub fn new(address: Address, minter: Address) -> Self {
        Self {
            address,
            minter,
            balances: Arc::default(),
        }
    }

    /// Number of distinct `(holder, id)` entries with a balance.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.balances.read().len()
    }

    /// Sum of all units held by `account`.
    #[must_use]
    pub fn total_held_by(&self, account: Address) -> U256 {
        self.balances
            .read()
            .iter()
            .filter(|((holder, _), _)| *holder == account)
            .fold(U256::zero(), |total, (_, amount)| total.saturating_add(*amount))
    }
}

impl OwnershipLedger for InMemoryOwnershipLedger {
    fn address(&self) -> Address {
        self.address
    }

    fn minter(&self) -> Address {
        self.minter
    }

    fn mint(&mut self, to: Address, id: TicketId, amount: U256) {
        let mut balances = self.balances.write();
        let balance = balances.entry((to, id)).or_default();
        *balance = balance.saturating_add(amount);
    }

    fn balance_of(&self, account: Address, id: TicketId) -> U256 {
        self.balances
            .read()
            .get(&(account, id))
            .copied()
            .unwrap_or_default()
    }
}
