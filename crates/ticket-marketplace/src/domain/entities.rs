//! # Domain Entities
//!
//! Records held by the marketplace and the receipts handed back to buyers.

use super::ticket_id::TicketIdRange;
use super::value_objects::{Address, AssetTag, EventId, U256};
use serde::{Deserialize, Serialize};

// =============================================================================
// TICKET EVENT
// =============================================================================

/// A sellable batch of tickets with fixed capacity and two unit prices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketEvent {
    /// Tickets already sold. Also the index of the next ticket to mint.
    pub next_ticket_to_sell: U256,
    /// Total sellable capacity. Never decreases.
    pub max_tickets: U256,
    /// Unit price in the native asset's smallest unit.
    pub price_native: U256,
    /// Unit price in the external asset's smallest unit.
    pub price_external: U256,
}

impl TicketEvent {
    /// Creates a fresh event with nothing sold.
    #[must_use]
    pub fn new(max_tickets: U256, price_native: U256, price_external: U256) -> Self {
        Self {
            next_ticket_to_sell: U256::zero(),
            max_tickets,
            price_native,
            price_external,
        }
    }

    /// Unit price for the given asset.
    #[must_use]
    pub fn price(&self, asset: AssetTag) -> U256 {
        match asset {
            AssetTag::Native => self.price_native,
            AssetTag::External => self.price_external,
        }
    }

    /// Tickets still available.
    #[must_use]
    pub fn remaining(&self) -> U256 {
        self.max_tickets.saturating_sub(self.next_ticket_to_sell)
    }

    /// True when no ticket can be sold any more.
    #[must_use]
    pub fn is_sold_out(&self) -> bool {
        self.remaining().is_zero()
    }

    /// True if `quantity` more tickets fit under the capacity.
    #[must_use]
    pub fn can_sell(&self, quantity: U256) -> bool {
        self.next_ticket_to_sell
            .checked_add(quantity)
            .is_some_and(|total| total <= self.max_tickets)
    }
}

// =============================================================================
// PURCHASE RECEIPT
// =============================================================================

/// Outcome of a successful purchase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    /// Event the tickets were bought for.
    pub event_id: EventId,
    /// Account the tickets were minted to.
    pub buyer: Address,
    /// Asset used for payment.
    pub asset: AssetTag,
    /// Number of tickets bought.
    pub quantity: U256,
    /// `unit price * quantity` at purchase time.
    pub total_price: U256,
    /// Amount taken into custody (native purchases keep any overpayment).
    pub amount_paid: U256,
    /// Identifiers minted to the buyer.
    pub tickets: TicketIdRange,
}

// =============================================================================
// TESTS
// =============================================================================
