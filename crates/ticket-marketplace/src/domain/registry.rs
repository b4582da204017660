//! # Event Registry
//!
//! Append-only table of events. The position in the table is the event id,
//! so ids are dense and assigned in creation order (INVARIANT-3). Every
//! mutator enforces the capacity invariants itself:
//!
//! - INVARIANT-1: `next_ticket_to_sell <= max_tickets`
//! - INVARIANT-2: `max_tickets` never decreases

use super::entities::TicketEvent;
use super::errors::{MarketplaceError, MarketplaceResult};
use super::pricing;
use super::value_objects::{AssetTag, EventId, U256};
use serde::{Deserialize, Serialize};

/// Table of all events ever created.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRegistry {
    events: Vec<TicketEvent>,
}

impl EventRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events created so far.
    #[must_use]
    pub fn len(&self) -> u64 {
        u64::try_from(self.events.len()).unwrap_or(u64::MAX)
    }

    /// True before the first event is created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The id the next `create` will assign.
    #[must_use]
    pub fn next_event_id(&self) -> EventId {
        EventId::new(self.len())
    }

    /// Appends a new event and returns its id.
    pub fn create(&mut self, max_tickets: U256, price_native: U256, price_external: U256) -> EventId {
        let event_id = self.next_event_id();
        self.events
            .push(TicketEvent::new(max_tickets, price_native, price_external));
        event_id
    }

    /// Looks up an event.
    ///
    /// # Errors
    ///
    /// `NotFound` if `event_id >= len()`.
    pub fn get(&self, event_id: EventId) -> MarketplaceResult<&TicketEvent> {
        event_id
            .as_index()
            .and_then(|index| self.events.get(index))
            .ok_or_else(|| self.not_found(event_id))
    }

    fn get_mut(&mut self, event_id: EventId) -> MarketplaceResult<&mut TicketEvent> {
        let not_found = self.not_found(event_id);
        event_id
            .as_index()
            .and_then(|index| self.events.get_mut(index))
            .ok_or(not_found)
    }

    fn not_found(&self, event_id: EventId) -> MarketplaceError {
        MarketplaceError::NotFound {
            event_id,
            event_count: self.len(),
        }
    }

    /// Raises (or keeps) the capacity of an event. Returns the previous capacity.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown event, `CapacityTooSmall` if `new_max` is
    /// below the current capacity.
    pub fn set_max_tickets(&mut self, event_id: EventId, new_max: U256) -> MarketplaceResult<U256> {
        let event = self.get_mut(event_id)?;
        if new_max < event.max_tickets {
            return Err(MarketplaceError::CapacityTooSmall {
                current: event.max_tickets,
                requested: new_max,
            });
        }
        Ok(std::mem::replace(&mut event.max_tickets, new_max))
    }

    /// Overwrites one of the event's prices. Returns the previous price.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown event.
    pub fn set_price(
        &mut self,
        event_id: EventId,
        asset: AssetTag,
        new_price: U256,
    ) -> MarketplaceResult<U256> {
        let event = self.get_mut(event_id)?;
        Ok(pricing::apply_price(event, asset, new_price))
    }

    /// Marks `quantity` more tickets as sold. Returns the new sold count.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown event, `SoldOut` if the capacity would be exceeded.
    pub fn advance_sold(&mut self, event_id: EventId, quantity: U256) -> MarketplaceResult<U256> {
        let event = self.get_mut(event_id)?;
        if !event.can_sell(quantity) {
            return Err(MarketplaceError::SoldOut {
                requested: quantity,
                remaining: event.remaining(),
            });
        }
        event.next_ticket_to_sell += quantity;
        Ok(event.next_ticket_to_sell)
    }

    /// Iterates events in id order.
    pub fn iter(&self) -> impl Iterator<Item = (EventId, &TicketEvent)> {
        (0u64..).map(EventId::new).zip(self.events.iter())
    }
}

// =============================================================================
// TESTS
// =============================================================================
