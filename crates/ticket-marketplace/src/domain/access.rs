//! # Access Gate
//!
//! Single-owner authorization for administrative operations.
//! Purchases never pass through the gate.

use super::errors::{MarketplaceError, MarketplaceResult};
use super::value_objects::Address;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Holds the administrative principal and checks callers against it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGate {
    owner: Address,
}

impl AccessGate {
    /// Creates a gate for `owner`.
    #[must_use]
    pub const fn new(owner: Address) -> Self {
        Self { owner }
    }

    /// The administrative principal.
    #[must_use]
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// True if `caller` is the owner.
    #[must_use]
    pub fn is_owner(&self, caller: &Address) -> bool {
        *caller == self.owner
    }

    /// Fails with [`MarketplaceError::Unauthorized`] unless `caller` is the owner.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for any other caller.
    pub fn require_owner(&self, caller: &Address) -> MarketplaceResult<()> {
        if self.is_owner(caller) {
            return Ok(());
        }

        warn!(caller = ?caller, owner = ?self.owner, "Rejected non-owner call");
        Err(MarketplaceError::Unauthorized { caller: *caller })
    }
}
