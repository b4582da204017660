//! Configuration for the ticket marketplace

use crate::domain::errors::{MarketplaceError, MarketplaceResult};
use crate::domain::value_objects::Address;
use serde::{Deserialize, Serialize};

/// Deployment parameters fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceConfig {
    /// Address the marketplace acts under (payment recipient, ledger minter)
    pub marketplace_address: Address,
    /// Administrative principal
    pub owner: Address,
    /// Initial external fungible asset
    pub external_asset: Address,
}

impl MarketplaceConfig {
    /// Creates a configuration.
    #[must_use]
    pub const fn new(marketplace_address: Address, owner: Address, external_asset: Address) -> Self {
        Self {
            marketplace_address,
            owner,
            external_asset,
        }
    }

    /// Rejects zero addresses.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> MarketplaceResult<()> {
        let fields = [
            ("marketplace_address", self.marketplace_address),
            ("owner", self.owner),
            ("external_asset", self.external_asset),
        ];
        match fields.iter().find(|(_, address)| address.is_zero()) {
            Some((name, _)) => Err(MarketplaceError::InvalidConfig(format!(
                "{name} must not be the zero address"
            ))),
            None => Ok(()),
        }
    }
}
