//! # Adapters
//!
//! In-memory implementations of the outbound ports.

pub mod notification;
pub mod ownership_ledger;
pub mod token_ledger;

pub use notification::{BroadcastSink, RecordingSink, TracingSink, DEFAULT_CHANNEL_CAPACITY};
pub use ownership_ledger::InMemoryOwnershipLedger;
pub use token_ledger::InMemoryTokenLedger;
