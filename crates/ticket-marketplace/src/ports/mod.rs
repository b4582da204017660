//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions between the marketplace and the outside world.
//!
//! - **Driving Port (Inbound)**: `TicketMarketplaceApi`
//! - **Driven Ports (Outbound)**: `PaymentSource`, `OwnershipLedger`, `NotificationSink`
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
