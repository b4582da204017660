//! # Ticket Marketplace - Event Ticket Sales Engine
//!
//! ## Purpose
//!
//! Sells tickets for owner-defined events, priced in a native settlement
//! asset and an external fungible asset. Every sold ticket becomes a unique
//! 256-bit identifier minted to the buyer on a semi-fungible ownership
//! ledger.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Sold count within capacity | `domain/registry.rs` - `advance_sold()` |
//! | INVARIANT-2 | Capacity never decreases | `domain/registry.rs` - `set_max_tickets()` |
//! | INVARIANT-3 | Dense event ids | `domain/registry.rs` - `create()` |
//! | INVARIANT-4 | Unique ticket ids | `domain/ticket_id.rs` - `TicketId::pack()` |
//! | INVARIANT-5 | No state change on failure | `application/purchase.rs` - `plan_purchase()` |
//!
//! ## Operations
//!
//! | Operation | Caller | Notification |
//! |-----------|--------|--------------|
//! | `create_event` | owner | `EventCreated` |
//! | `set_max_tickets` | owner | `MaxTicketsUpdate` |
//! | `set_price_native` / `set_price_external` | owner | `PriceUpdate` |
//! | `set_external_asset_address` | owner | `ExternalAssetAddressUpdate` |
//! | `buy_native` / `buy_external` | anyone | `TicketsBought` |
//!
//! ## Outbound Dependencies
//!
//! | Capability | Trait | Purpose |
//! |------------|-------|---------|
//! | External asset | `PaymentSource` | Pull payment from buyers |
//! | Ownership ledger | `OwnershipLedger` | Mint ticket credentials |
//! | Notifications | `NotificationSink` | Publish domain events |
//!
//! ## Usage Example
//!
//! ```
//! use ticket_marketplace::prelude::*;
//!
//! let owner = Address::from_low_u64_be(1);
//! let buyer = Address::from_low_u64_be(2);
//! let config = MarketplaceConfig::new(
//!     Address::from_low_u64_be(0xAA),
//!     owner,
//!     Address::from_low_u64_be(0xEE),
//! );
//!
//! let mut market =
//!     TicketMarketplace::with_in_memory_ledger(config, InMemoryTokenLedger::new(), TracingSink)?;
//! let event = market.create_event(owner, U256::from(100), U256::from(10), U256::from(12))?;
//! let receipt = market.buy_native(buyer, event, U256::from(2), U256::from(20))?;
//!
//! assert_eq!(receipt.tickets.len(), 2);
//! # Ok::<(), MarketplaceError>(())
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod events;
pub mod ports;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain
    pub use crate::domain::entities::{PurchaseReceipt, TicketEvent};
    pub use crate::domain::errors::{MarketplaceError, MarketplaceResult, TransferError};
    pub use crate::domain::ticket_id::{TicketId, TicketIdRange};
    pub use crate::domain::value_objects::{Address, AssetTag, EventId, U256};

    // Invariants
    pub use crate::domain::invariants::{
        check_all_invariants, InvariantCheckResult, InvariantViolation,
    };

    // Ports
    pub use crate::ports::inbound::TicketMarketplaceApi;
    pub use crate::ports::outbound::{NotificationSink, OwnershipLedger, PaymentSource};

    // Events
    pub use crate::events::{topics, MarketplaceNotification};

    // Adapters
    pub use crate::adapters::{
        BroadcastSink, InMemoryOwnershipLedger, InMemoryTokenLedger, RecordingSink, TracingSink,
    };

    // Service
    pub use crate::application::TicketMarketplace;
    pub use crate::config::MarketplaceConfig;
}

pub use application::TicketMarketplace;
pub use config::MarketplaceConfig;
pub use domain::errors::{MarketplaceError, MarketplaceResult};
pub use ports::inbound::TicketMarketplaceApi;

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
