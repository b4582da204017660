//! # Driven Ports (SPI - Outbound)
//!
//! Capabilities the marketplace depends on:
//! - Pulling external-asset payments from buyers
//! - Minting ticket credentials into the ownership ledger
//! - Publishing domain notifications
//!
//! All calls are synchronous. Implementations must not call back into the
//! marketplace; the marketplace holds them by value and lends them out
//! mutably for the duration of a single call.

use crate::domain::errors::TransferError;
use crate::domain::ticket_id::TicketId;
use crate::domain::value_objects::{Address, U256};
use crate::events::MarketplaceNotification;

// =============================================================================
// PAYMENT SOURCE (External Fungible Asset)
// =============================================================================

/// Pull-payment access to external fungible assets.
///
/// The asset is addressed explicitly so the owner can repoint the marketplace
/// at a different token without rewiring the adapter.
pub trait PaymentSource {
    /// Balance of `account` in `asset`.
    ///
    /// Unknown assets report a zero balance.
    fn balance_of(&self, asset: Address, account: Address) -> U256;

    /// Move `amount` of `asset` from `from` to `to`, spending the allowance
    /// `from` granted to `to`.
    ///
    /// Must be all-or-nothing: on `Err` no balance or allowance changed.
    ///
    /// # Errors
    ///
    /// Any [`TransferError`] the asset reports (unknown asset, insufficient
    /// balance or allowance).
    fn pull(
        &mut self,
        asset: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TransferError>;
}

// =============================================================================
// OWNERSHIP LEDGER (Semi-Fungible Ticket Credentials)
// =============================================================================

/// Mint access to the semi-fungible ledger that records ticket ownership.
///
/// Minting is infallible once the ledger is wired: the marketplace verifies
/// at construction that it is the ledger's minter.
pub trait OwnershipLedger {
    /// Address of the ledger itself.
    fn address(&self) -> Address;

    /// The only account allowed to mint.
    fn minter(&self) -> Address;

    /// Credit `amount` units of `id` to `to`.
    fn mint(&mut self, to: Address, id: TicketId, amount: U256);

    /// Units of `id` held by `account`.
    fn balance_of(&self, account: Address, id: TicketId) -> U256;
}

// =============================================================================
// NOTIFICATION SINK
// =============================================================================

/// Receives domain notifications after an operation has fully succeeded.
pub trait NotificationSink {
    /// Deliver one notification.
    fn notify(&mut self, notification: MarketplaceNotification);
}

/// Discards every notification.
impl NotificationSink for () {
    fn notify(&mut self, _notification: MarketplaceNotification) {}
}
