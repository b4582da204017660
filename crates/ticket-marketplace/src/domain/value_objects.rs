//! # Value Objects
//!
//! Immutable domain primitives for the marketplace.
//! These types represent concepts that are defined by their value, not identity.

use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export U256 from primitive-types for 256-bit arithmetic
pub use primitive_types::U256;

/// A 20-byte account address (owner, buyers, asset contracts, the marketplace itself).
pub type Address = primitive_types::H160;

// =============================================================================
// EVENT ID
// =============================================================================

/// Dense sequential identifier of an event: 0, 1, 2, … in creation order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl EventId {
    /// The first id ever assigned.
    pub const FIRST: Self = Self(0);

    /// Creates an event id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Position of this event in the registry table.
    ///
    /// `None` when the id cannot address memory on this platform, which
    /// callers treat the same as an unknown id.
    #[must_use]
    pub fn as_index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl fmt::Debug for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventId({})", self.0)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<EventId> for u64 {
    fn from(id: EventId) -> Self {
        id.0
    }
}

// =============================================================================
// ASSET TAG
// =============================================================================

/// Which payment asset a price or purchase refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetTag {
    /// The platform's built-in settlement asset, supplied with the call.
    Native,
    /// The external fungible token, pulled from the buyer's balance.
    External,
}

impl AssetTag {
    /// Wire name carried by notifications.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::External => "external",
        }
    }
}

impl fmt::Display for AssetTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TESTS
// =============================================================================
