//! Ticket Marketplace Service
//!
//! Main service implementing `TicketMarketplaceApi`. Owns the registry,
//! native custody, and the three outbound capabilities.

use crate::adapters::InMemoryOwnershipLedger;
use crate::application::purchase::{mint_tickets, plan_purchase, Payment, PurchasePlan};
use crate::config::MarketplaceConfig;
use crate::domain::access::AccessGate;
use crate::domain::entities::{PurchaseReceipt, TicketEvent};
use crate::domain::errors::{MarketplaceError, MarketplaceResult};
use crate::domain::invariants::{check_all_invariants, InvariantCheckResult};
use crate::domain::registry::EventRegistry;
use crate::domain::services::compute_ledger_address;
use crate::domain::ticket_id::TicketId;
use crate::domain::value_objects::{Address, AssetTag, EventId, U256};
use crate::events::MarketplaceNotification;
use crate::ports::inbound::TicketMarketplaceApi;
use crate::ports::outbound::{NotificationSink, OwnershipLedger, PaymentSource};

use tracing::{info, instrument, warn};

/// Ticket Marketplace Service
///
/// Every mutating operation runs:
/// 1. Authorization (administrative operations only)
/// 2. All validation against current state
/// 3. The external payment pull (external purchases only)
/// 4. Local effects
/// 5. Notification
///
/// A failure at any step before 4 leaves no trace.
pub struct TicketMarketplace<P, L, N> {
    config: MarketplaceConfig,
    gate: AccessGate,
    registry: EventRegistry,
    native_custody: U256,
    payments: P,
    ledger: L,
    sink: N,
}

impl<P, L, N> TicketMarketplace<P, L, N>
where
    P: PaymentSource,
    L: OwnershipLedger,
    N: NotificationSink,
{
    /// Wire a marketplace to an existing ownership ledger.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for zero addresses, `LedgerNotOwned` if the ledger
    /// does not accept mints from `config.marketplace_address`.
    pub fn new(config: MarketplaceConfig, payments: P, ledger: L, sink: N) -> MarketplaceResult<Self> {
        config.validate()?;

        if ledger.minter() != config.marketplace_address {
            return Err(MarketplaceError::LedgerNotOwned {
                ledger: ledger.address(),
                minter: ledger.minter(),
            });
        }

        info!(
            marketplace = ?config.marketplace_address,
            owner = ?config.owner,
            external_asset = ?config.external_asset,
            ownership_ledger = ?ledger.address(),
            "Ticket marketplace deployed"
        );

        Ok(Self {
            gate: AccessGate::new(config.owner),
            config,
            registry: EventRegistry::new(),
            native_custody: U256::zero(),
            payments,
            ledger,
            sink,
        })
    }

    /// Borrow the ownership ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Read-only view of every event.
    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    /// Evaluate the registry invariants against current state.
    pub fn check_invariants(&self) -> InvariantCheckResult {
        check_all_invariants(&self.registry)
    }

    fn set_price(
        &mut self,
        caller: Address,
        event_id: EventId,
        asset: AssetTag,
        new_price: U256,
    ) -> MarketplaceResult<()> {
        self.gate.require_owner(&caller)?;
        let previous = self.registry.set_price(event_id, asset, new_price)?;

        info!(%event_id, %asset, %previous, %new_price, "Price updated");
        self.sink.notify(MarketplaceNotification::PriceUpdate {
            event_id,
            new_price,
            asset,
        });
        Ok(())
    }

    /// Apply a validated plan. Only called after any external pull succeeded.
    fn commit_purchase(&mut self, buyer: Address, plan: PurchasePlan) -> MarketplaceResult<PurchaseReceipt> {
        let sold = self.registry.advance_sold(plan.event_id, plan.quantity)?;
        mint_tickets(&mut self.ledger, buyer, &plan.tickets);
        if let Some(custody) = plan.custody_after {
            self.native_custody = custody;
        }

        info!(
            event_id = %plan.event_id,
            buyer = ?buyer,
            asset = %plan.asset,
            quantity = %plan.quantity,
            amount_paid = %plan.amount_paid,
            sold = %sold,
            "Tickets bought"
        );
        self.sink.notify(MarketplaceNotification::TicketsBought {
            event_id: plan.event_id,
            quantity: plan.quantity,
            asset: plan.asset,
        });

        Ok(plan.into_receipt(buyer))
    }
}

impl<P, N> TicketMarketplace<P, InMemoryOwnershipLedger, N>
where
    P: PaymentSource,
    N: NotificationSink,
{
    /// Deploy a marketplace together with its own ownership ledger at the
    /// address derived from the marketplace address.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for zero addresses.
    pub fn with_in_memory_ledger(config: MarketplaceConfig, payments: P, sink: N) -> MarketplaceResult<Self> {
        let ledger = InMemoryOwnershipLedger::new(
            compute_ledger_address(config.marketplace_address),
            config.marketplace_address,
        );
        Self::new(config, payments, ledger, sink)
    }
}

impl<P, L, N> TicketMarketplaceApi for TicketMarketplace<P, L, N>
where
    P: PaymentSource,
    L: OwnershipLedger,
    N: NotificationSink,
{
    fn create_event(
        &mut self,
        caller: Address,
        max_tickets: U256,
        price_native: U256,
        price_external: U256,
    ) -> MarketplaceResult<EventId> {
        self.gate.require_owner(&caller)?;
        let event_id = self.registry.create(max_tickets, price_native, price_external);

        info!(%event_id, %max_tickets, %price_native, %price_external, "Event created");
        self.sink.notify(MarketplaceNotification::EventCreated {
            event_id,
            max_tickets,
            price_native,
            price_external,
        });
        Ok(event_id)
    }

    fn set_max_tickets(
        &mut self,
        caller: Address,
        event_id: EventId,
        new_max: U256,
    ) -> MarketplaceResult<()> {
        self.gate.require_owner(&caller)?;
        let previous = self.registry.set_max_tickets(event_id, new_max)?;

        info!(%event_id, %previous, %new_max, "Max tickets updated");
        self.sink
            .notify(MarketplaceNotification::MaxTicketsUpdate { event_id, new_max });
        Ok(())
    }

    fn set_price_native(
        &mut self,
        caller: Address,
        event_id: EventId,
        new_price: U256,
    ) -> MarketplaceResult<()> {
        self.set_price(caller, event_id, AssetTag::Native, new_price)
    }

    fn set_price_external(
        &mut self,
        caller: Address,
        event_id: EventId,
        new_price: U256,
    ) -> MarketplaceResult<()> {
        self.set_price(caller, event_id, AssetTag::External, new_price)
    }

    fn set_external_asset_address(
        &mut self,
        caller: Address,
        new_address: Address,
    ) -> MarketplaceResult<()> {
        self.gate.require_owner(&caller)?;
        let previous = std::mem::replace(&mut self.config.external_asset, new_address);

        info!(previous = ?previous, new_address = ?new_address, "External asset updated");
        self.sink
            .notify(MarketplaceNotification::ExternalAssetAddressUpdate { new_address });
        Ok(())
    }

    #[instrument(skip(self), fields(asset = "native"))]
    fn buy_native(
        &mut self,
        caller: Address,
        event_id: EventId,
        quantity: U256,
        amount_supplied: U256,
    ) -> MarketplaceResult<PurchaseReceipt> {
        let payment = Payment::Native {
            supplied: amount_supplied,
            custody: self.native_custody,
        };
        let plan = plan_purchase(event_id, self.registry.get(event_id)?, quantity, payment)?;
        self.commit_purchase(caller, plan)
    }

    #[instrument(skip(self), fields(asset = "external"))]
    fn buy_external(
        &mut self,
        caller: Address,
        event_id: EventId,
        quantity: U256,
    ) -> MarketplaceResult<PurchaseReceipt> {
        let plan = plan_purchase(
            event_id,
            self.registry.get(event_id)?,
            quantity,
            Payment::External,
        )?;

        let asset = self.config.external_asset;
        let recipient = self.config.marketplace_address;
        if let Err(reason) = self.payments.pull(asset, caller, recipient, plan.total_price) {
            warn!(
                asset = ?asset,
                buyer = ?caller,
                amount = %plan.total_price,
                %reason,
                "External payment pull failed"
            );
            return Err(reason.into());
        }

        self.commit_purchase(caller, plan)
    }

    fn event_count(&self) -> u64 {
        self.registry.len()
    }

    fn get_event(&self, event_id: EventId) -> MarketplaceResult<TicketEvent> {
        self.registry.get(event_id).cloned()
    }

    fn owner(&self) -> Address {
        self.gate.owner()
    }

    fn external_asset_address(&self) -> Address {
        self.config.external_asset
    }

    fn ownership_ledger_address(&self) -> Address {
        self.ledger.address()
    }

    fn marketplace_address(&self) -> Address {
        self.config.marketplace_address
    }

    fn native_custody(&self) -> U256 {
        self.native_custody
    }

    fn ticket_balance(&self, account: Address, ticket_id: TicketId) -> U256 {
        self.ledger.balance_of(account, ticket_id)
    }
}
