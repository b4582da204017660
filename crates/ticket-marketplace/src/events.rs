//! # Notification Schema
//!
//! Payloads published through the [`NotificationSink`] port once an operation
//! has fully succeeded. Field order matches the order hosts index them by.
//!
//! | Notification | Emitted by |
//! |--------------|------------|
//! | `EventCreated` | `create_event` |
//! | `PriceUpdate` | `set_price_native`, `set_price_external` |
//! | `MaxTicketsUpdate` | `set_max_tickets` |
//! | `ExternalAssetAddressUpdate` | `set_external_asset_address` |
//! | `TicketsBought` | `buy_native`, `buy_external` |
//!
//! [`NotificationSink`]: crate::ports::outbound::NotificationSink

use crate::domain::value_objects::{Address, AssetTag, EventId, U256};
use serde::{Deserialize, Serialize};

/// A domain notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MarketplaceNotification {
    /// A new event was registered.
    EventCreated {
        /// Assigned id.
        event_id: EventId,
        /// Initial capacity.
        max_tickets: U256,
        /// Initial native-asset unit price.
        price_native: U256,
        /// Initial external-asset unit price.
        price_external: U256,
    },
    /// One of an event's prices was overwritten.
    PriceUpdate {
        /// Affected event.
        event_id: EventId,
        /// Price now in force.
        new_price: U256,
        /// Which price changed.
        asset: AssetTag,
    },
    /// An event's capacity was raised (or confirmed).
    MaxTicketsUpdate {
        /// Affected event.
        event_id: EventId,
        /// Capacity now in force.
        new_max: U256,
    },
    /// The marketplace now accepts a different external asset.
    ExternalAssetAddressUpdate {
        /// New asset address.
        new_address: Address,
    },
    /// Tickets were sold.
    TicketsBought {
        /// Event the tickets belong to.
        event_id: EventId,
        /// Number of tickets sold.
        quantity: U256,
        /// Asset used for payment.
        asset: AssetTag,
    },
}

impl MarketplaceNotification {
    /// Bus topic for this notification.
    #[must_use]
    pub const fn topic(&self) -> &'static str {
        match self {
            Self::EventCreated { .. } => topics::EVENT_CREATED,
            Self::PriceUpdate { .. } => topics::PRICE_UPDATE,
            Self::MaxTicketsUpdate { .. } => topics::MAX_TICKETS_UPDATE,
            Self::ExternalAssetAddressUpdate { .. } => topics::EXTERNAL_ASSET_ADDRESS_UPDATE,
            Self::TicketsBought { .. } => topics::TICKETS_BOUGHT,
        }
    }

    /// Event the notification refers to, if any.
    #[must_use]
    pub const fn event_id(&self) -> Option<EventId> {
        match self {
            Self::EventCreated { event_id, .. }
            | Self::PriceUpdate { event_id, .. }
            | Self::MaxTicketsUpdate { event_id, .. }
            | Self::TicketsBought { event_id, .. } => Some(*event_id),
            Self::ExternalAssetAddressUpdate { .. } => None,
        }
    }
}

// =============================================================================
// EVENT BUS TOPICS
// =============================================================================

/// Topics notifications are published under.
pub mod topics {
    /// An event was created.
    pub const EVENT_CREATED: &str = "marketplace.event.created";

    /// A unit price changed.
    pub const PRICE_UPDATE: &str = "marketplace.event.price_update";

    /// Capacity changed.
    pub const MAX_TICKETS_UPDATE: &str = "marketplace.event.max_tickets_update";

    /// External asset repointed.
    pub const EXTERNAL_ASSET_ADDRESS_UPDATE: &str = "marketplace.external_asset.update";

    /// Tickets sold.
    pub const TICKETS_BOUGHT: &str = "marketplace.tickets.bought";
}

// =============================================================================
// TESTS
// =============================================================================
