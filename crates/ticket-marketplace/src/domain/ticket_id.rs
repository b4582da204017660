//! # Ticket Identifiers
//!
//! A ticket identifier packs two 128-bit segments into one 256-bit word:
//!
//! ```text
//!  big-endian byte:  0 ............ 15 16 ........... 31
//!                   [   event id     ][  ticket index   ]
//! ```
//!
//! `id = (event_id << 128) | ticket_index`. Ticket indexes count from zero per
//! event, so identifiers are globally unique and sort chronologically within
//! an event.

use super::value_objects::{EventId, U256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of each packed segment, in bytes.
const SEGMENT_BYTES: usize = 16;

/// Globally unique 256-bit ticket identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(pub U256);

impl TicketId {
    /// Packs an event id and a per-event ticket index.
    #[must_use]
    pub fn pack(event_id: EventId, ticket_index: u128) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..SEGMENT_BYTES].copy_from_slice(&u128::from(event_id.as_u64()).to_be_bytes());
        bytes[SEGMENT_BYTES..].copy_from_slice(&ticket_index.to_be_bytes());
        Self(U256::from_big_endian(&bytes))
    }

    /// Splits the identifier back into `(event segment, ticket index)`.
    #[must_use]
    pub fn unpack(self) -> (u128, u128) {
        let bytes = self.to_be_bytes();
        let mut high = [0u8; SEGMENT_BYTES];
        let mut low = [0u8; SEGMENT_BYTES];
        high.copy_from_slice(&bytes[..SEGMENT_BYTES]);
        low.copy_from_slice(&bytes[SEGMENT_BYTES..]);
        (u128::from_be_bytes(high), u128::from_be_bytes(low))
    }

    /// The event this ticket belongs to, if the high segment is a valid event id.
    #[must_use]
    pub fn event_id(self) -> Option<EventId> {
        u64::try_from(self.unpack().0).ok().map(EventId::new)
    }

    /// Sequential index of the ticket within its event.
    #[must_use]
    pub fn ticket_index(self) -> u128 {
        self.unpack().1
    }

    /// Returns the raw 256-bit value.
    #[must_use]
    pub const fn as_u256(self) -> U256 {
        self.0
    }

    /// Big-endian 32-byte encoding.
    #[must_use]
    pub fn to_be_bytes(self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        self.0.to_big_endian(&mut bytes);
        bytes
    }
}

impl fmt::Debug for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (event, index) = self.unpack();
        write!(f, "TicketId(event={event}, index={index})")
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.to_be_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<TicketId> for U256 {
    fn from(id: TicketId) -> Self {
        id.0
    }
}

// =============================================================================
// TICKET ID RANGE
// =============================================================================

/// Half-open run `[start, end)` of consecutive ticket indexes within one event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketIdRange {
    event_id: EventId,
    start: u128,
    end: u128,
}

impl TicketIdRange {
    /// Creates a range. An inverted range is treated as empty.
    #[must_use]
    pub fn new(event_id: EventId, start: u128, end: u128) -> Self {
        Self {
            event_id,
            start,
            end: end.max(start),
        }
    }

    /// The identifiers minted by selling `quantity` tickets when
    /// `already_sold` tickets of the event are gone.
    ///
    /// Returns `None` when any index would leave the 128-bit window.
    #[must_use]
    pub fn for_sale(event_id: EventId, already_sold: U256, quantity: U256) -> Option<Self> {
        let end = already_sold.checked_add(quantity)?;
        if end > U256::from(u128::MAX) {
            return None;
        }
        Some(Self::new(event_id, already_sold.low_u128(), end.low_u128()))
    }

    /// Event the range belongs to.
    #[must_use]
    pub const fn event_id(&self) -> EventId {
        self.event_id
    }

    /// Number of identifiers in the range.
    #[must_use]
    pub const fn len(&self) -> u128 {
        self.end - self.start
    }

    /// True when the range holds no identifiers.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// First identifier, if any.
    #[must_use]
    pub fn first(&self) -> Option<TicketId> {
        (!self.is_empty()).then(|| TicketId::pack(self.event_id, self.start))
    }

    /// Last identifier, if any.
    #[must_use]
    pub fn last(&self) -> Option<TicketId> {
        (!self.is_empty()).then(|| TicketId::pack(self.event_id, self.end - 1))
    }

    /// True if `id` belongs to this range.
    #[must_use]
    pub fn contains(&self, id: TicketId) -> bool {
        let (event, index) = id.unpack();
        event == u128::from(self.event_id.as_u64()) && (self.start..self.end).contains(&index)
    }

    /// Iterates the identifiers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = TicketId> + '_ {
        (self.start..self.end).map(move |index| TicketId::pack(self.event_id, index))
    }
}

// =============================================================================
// TESTS
// =============================================================================
