//! # Purchase Planning
//!
//! A purchase is evaluated in full against a snapshot of the event before
//! anything is touched. The resulting [`PurchasePlan`] carries every value
//! the commit step writes, so committing cannot fail on its own terms.
//!
//! Check order:
//!
//! | Step | Native | External |
//! |------|--------|----------|
//! | 1 | `NotFound` | `NotFound` |
//! | 2 | `Overflow` | `Overflow` |
//! | 3 | `InsufficientPayment` | |
//! | 4 | `SoldOut` | `SoldOut` |
//! | 5 | `TicketIndexOverflow` | `TicketIndexOverflow` |
//! | 6 | `CustodyOverflow` | |

use crate::domain::entities::{PurchaseReceipt, TicketEvent};
use crate::domain::errors::{MarketplaceError, MarketplaceResult};
use crate::domain::pricing::total_price;
use crate::domain::ticket_id::TicketIdRange;
use crate::domain::value_objects::{Address, AssetTag, EventId, U256};
use crate::ports::outbound::OwnershipLedger;
use tracing::debug;

/// How the buyer pays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payment {
    /// Native asset supplied with the call.
    Native {
        /// Full amount sent along.
        supplied: U256,
        /// Custody balance before this purchase.
        custody: U256,
    },
    /// External asset pulled from the buyer after planning.
    External,
}

impl Payment {
    /// Asset this payment is made in.
    #[must_use]
    pub const fn asset(&self) -> AssetTag {
        match self {
            Self::Native { .. } => AssetTag::Native,
            Self::External => AssetTag::External,
        }
    }
}

/// A fully validated purchase, ready to commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchasePlan {
    /// Target event.
    pub event_id: EventId,
    /// Asset paid in.
    pub asset: AssetTag,
    /// Tickets to sell.
    pub quantity: U256,
    /// `unit price * quantity`.
    pub total_price: U256,
    /// Amount the marketplace ends up holding for this purchase.
    pub amount_paid: U256,
    /// Identifiers to mint.
    pub tickets: TicketIdRange,
    /// Native custody after commit; `None` for external purchases.
    pub custody_after: Option<U256>,
}

impl PurchasePlan {
    /// Receipt handed back once the plan is committed.
    #[must_use]
    pub fn into_receipt(self, buyer: Address) -> PurchaseReceipt {
        PurchaseReceipt {
            event_id: self.event_id,
            buyer,
            asset: self.asset,
            quantity: self.quantity,
            total_price: self.total_price,
            amount_paid: self.amount_paid,
            tickets: self.tickets,
        }
    }
}

/// Runs every purchase check against `event` without side effects.
///
/// # Errors
///
/// See the module table for the order errors are reported in.
pub fn plan_purchase(
    event_id: EventId,
    event: &TicketEvent,
    quantity: U256,
    payment: Payment,
) -> MarketplaceResult<PurchasePlan> {
    let asset = payment.asset();
    let total = total_price(event.price(asset), quantity)?;

    if let Payment::Native { supplied, .. } = payment {
        if supplied < total {
            return Err(MarketplaceError::InsufficientPayment {
                required: total,
                supplied,
            });
        }
    }

    if !event.can_sell(quantity) {
        return Err(MarketplaceError::SoldOut {
            requested: quantity,
            remaining: event.remaining(),
        });
    }

    let tickets = TicketIdRange::for_sale(event_id, event.next_ticket_to_sell, quantity)
        .ok_or(MarketplaceError::TicketIndexOverflow { event_id })?;

    let (amount_paid, custody_after) = match payment {
        Payment::Native { supplied, custody } => {
            let after = custody
                .checked_add(supplied)
                .ok_or(MarketplaceError::CustodyOverflow)?;
            (supplied, Some(after))
        }
        Payment::External => (total, None),
    };

    debug!(
        event_id = %event_id,
        %asset,
        %quantity,
        total = %total,
        first_index = ?tickets.first(),
        "Purchase planned"
    );

    Ok(PurchasePlan {
        event_id,
        asset,
        quantity,
        total_price: total,
        amount_paid,
        tickets,
        custody_after,
    })
}

/// Mints one unit of every identifier in `tickets` to `buyer`.
pub fn mint_tickets<L: OwnershipLedger>(ledger: &mut L, buyer: Address, tickets: &TicketIdRange) {
    for id in tickets.iter() {
        ledger.mint(buyer, id, U256::one());
    }
}

// =============================================================================
// TESTS
// =============================================================================
