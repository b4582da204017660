//! # Driving Port (API - Inbound)
//!
//! Operations exposed to hosts. Every call names its `caller`; identity is
//! never read from payloads.

use crate::domain::entities::{PurchaseReceipt, TicketEvent};
use crate::domain::errors::MarketplaceResult;
use crate::domain::ticket_id::TicketId;
use crate::domain::value_objects::{Address, EventId, U256};

/// Primary marketplace API.
///
/// Administrative operations are owner-only; purchases are open to any caller.
pub trait TicketMarketplaceApi {
    // -------------------------------------------------------------------------
    // Administration (owner-only)
    // -------------------------------------------------------------------------

    /// Create an event and return its id.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for non-owners.
    fn create_event(
        &mut self,
        caller: Address,
        max_tickets: U256,
        price_native: U256,
        price_external: U256,
    ) -> MarketplaceResult<EventId>;

    /// Raise an event's capacity.
    ///
    /// # Errors
    ///
    /// `Unauthorized`, `NotFound`, or `CapacityTooSmall` if `new_max` is below
    /// the current capacity.
    fn set_max_tickets(
        &mut self,
        caller: Address,
        event_id: EventId,
        new_max: U256,
    ) -> MarketplaceResult<()>;

    /// Overwrite an event's native-asset unit price.
    ///
    /// # Errors
    ///
    /// `Unauthorized` or `NotFound`.
    fn set_price_native(
        &mut self,
        caller: Address,
        event_id: EventId,
        new_price: U256,
    ) -> MarketplaceResult<()>;

    /// Overwrite an event's external-asset unit price.
    ///
    /// # Errors
    ///
    /// `Unauthorized` or `NotFound`.
    fn set_price_external(
        &mut self,
        caller: Address,
        event_id: EventId,
        new_price: U256,
    ) -> MarketplaceResult<()>;

    /// Point the marketplace at a different external asset.
    ///
    /// # Errors
    ///
    /// `Unauthorized`.
    fn set_external_asset_address(
        &mut self,
        caller: Address,
        new_address: Address,
    ) -> MarketplaceResult<()>;

    // -------------------------------------------------------------------------
    // Purchases (any caller)
    // -------------------------------------------------------------------------

    /// Buy with the native asset. `amount_supplied` is the value sent along
    /// with the call; all of it is retained.
    ///
    /// # Errors
    ///
    /// `NotFound`, `Overflow`, `InsufficientPayment`, `SoldOut`,
    /// `TicketIndexOverflow`, `CustodyOverflow`.
    fn buy_native(
        &mut self,
        caller: Address,
        event_id: EventId,
        quantity: U256,
        amount_supplied: U256,
    ) -> MarketplaceResult<PurchaseReceipt>;

    /// Buy with the external asset, pulled from the caller's balance.
    ///
    /// # Errors
    ///
    /// `NotFound`, `Overflow`, `SoldOut`, `TicketIndexOverflow`,
    /// `TransferFailed`.
    fn buy_external(
        &mut self,
        caller: Address,
        event_id: EventId,
        quantity: U256,
    ) -> MarketplaceResult<PurchaseReceipt>;

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Number of events created; also the next id to be assigned.
    fn event_count(&self) -> u64;

    /// Event record by id.
    ///
    /// # Errors
    ///
    /// `NotFound` if the id was never assigned.
    fn get_event(&self, event_id: EventId) -> MarketplaceResult<TicketEvent>;

    /// Administrative owner.
    fn owner(&self) -> Address;

    /// Current external asset.
    fn external_asset_address(&self) -> Address;

    /// Address of the ownership ledger tickets are minted into.
    fn ownership_ledger_address(&self) -> Address;

    /// Address the marketplace receives payments and mints under.
    fn marketplace_address(&self) -> Address;

    /// Native-asset payments retained so far.
    fn native_custody(&self) -> U256;

    /// Units of `ticket_id` held by `account` on the ownership ledger.
    fn ticket_balance(&self, account: Address, ticket_id: TicketId) -> U256;
}
