//! # In-Memory Token Ledger
//!
//! Fungible balances and allowances for any number of assets, keyed by asset
//! address. Implements the [`PaymentSource`] port for tests and embedders.
//!
//! The handle is cheap to clone; clones share the same books, so a test can
//! hand one clone to the marketplace and inspect balances through another.

use crate::domain::errors::TransferError;
use crate::domain::value_objects::{Address, U256};
use crate::ports::outbound::PaymentSource;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Balances and allowances of a single asset.
#[derive(Debug, Default)]
struct AssetBook {
    balances: HashMap<Address, U256>,
    /// `(holder, spender) -> remaining allowance`
    allowances: HashMap<(Address, Address), U256>,
}

impl AssetBook {
    fn balance(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn allowance(&self, holder: &Address, spender: &Address) -> U256 {
        self.allowances
            .get(&(*holder, *spender))
            .copied()
            .unwrap_or_default()
    }

    /// Validates the move, then applies it. Nothing changes on `Err`.
    fn transfer(&mut self, from: Address, to: Address, amount: U256) -> Result<(), TransferError> {
        let available = self.balance(&from);
        if available < amount {
            return Err(TransferError::InsufficientBalance {
                required: amount,
                available,
            });
        }
        if from == to {
            return Ok(());
        }

        let credited = self
            .balance(&to)
            .checked_add(amount)
            .ok_or(TransferError::BalanceOverflow)?;
        self.balances.insert(from, available - amount);
        self.balances.insert(to, credited);
        Ok(())
    }
}

/// Shared in-memory fungible token ledger.
#[derive(Clone, Debug, Default)]
pub struct InMemoryTokenLedger {
    assets: Arc<RwLock<HashMap<Address, AssetBook>>>,
}

impl InMemoryTokenLedger {
    /// Create an empty ledger with no assets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `asset` and credit its whole `supply` to `issuer`.
    ///
    /// Redeploying an existing address resets its books.
    pub fn deploy_asset(&self, asset: Address, issuer: Address, supply: U256) {
        let mut book = AssetBook::default();
        book.balances.insert(issuer, supply);
        self.assets.write().insert(asset, book);
        debug!(asset = ?asset, issuer = ?issuer, %supply, "Asset deployed");
    }

    /// True if `asset` has been deployed.
    #[must_use]
    pub fn has_asset(&self, asset: Address) -> bool {
        self.assets.read().contains_key(&asset)
    }

    /// Balance of `account` in `asset` (zero for unknown assets).
    #[must_use]
    pub fn balance(&self, asset: Address, account: Address) -> U256 {
        self.assets
            .read()
            .get(&asset)
            .map(|book| book.balance(&account))
            .unwrap_or_default()
    }

    /// Remaining amount `spender` may pull from `holder`.
    #[must_use]
    pub fn allowance(&self, asset: Address, holder: Address, spender: Address) -> U256 {
        self.assets
            .read()
            .get(&asset)
            .map(|book| book.allowance(&holder, &spender))
            .unwrap_or_default()
    }

    /// Set the amount `spender` may pull from `holder`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// `UnknownAsset` if `asset` was never deployed.
    pub fn approve(
        &self,
        asset: Address,
        holder: Address,
        spender: Address,
        amount: U256,
    ) -> Result<(), TransferError> {
        let mut assets = self.assets.write();
        let book = assets
            .get_mut(&asset)
            .ok_or(TransferError::UnknownAsset(asset))?;
        book.allowances.insert((holder, spender), amount);
        Ok(())
    }

    /// Move `amount` directly from `from` to `to`.
    ///
    /// # Errors
    ///
    /// `UnknownAsset`, `InsufficientBalance` or `BalanceOverflow`.
    pub fn transfer(
        &self,
        asset: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TransferError> {
        let mut assets = self.assets.write();
        let book = assets
            .get_mut(&asset)
            .ok_or(TransferError::UnknownAsset(asset))?;
        book.transfer(from, to, amount)
    }

    /// Move `amount` from `holder` to `to` on behalf of `spender`, consuming
    /// allowance.
    ///
    /// # Errors
    ///
    /// `UnknownAsset`, `InsufficientAllowance`, `InsufficientBalance` or
    /// `BalanceOverflow`. Books are untouched on error.
    pub fn transfer_from(
        &self,
        asset: Address,
        spender: Address,
        holder: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TransferError> {
        let mut assets = self.assets.write();
        let book = assets
            .get_mut(&asset)
            .ok_or(TransferError::UnknownAsset(asset))?;

        let allowed = book.allowance(&holder, &spender);
        if allowed < amount {
            return Err(TransferError::InsufficientAllowance {
                required: amount,
                available: allowed,
            });
        }

        book.transfer(holder, to, amount)?;
        book.allowances.insert((holder, spender), allowed - amount);
        Ok(())
    }
}

impl PaymentSource for InMemoryTokenLedger {
    fn balance_of(&self, asset: Address, account: Address) -> U256 {
        self.balance(asset, account)
    }

    /// The recipient is also the spender: the buyer approves the marketplace,
    /// which then pulls into its own address.
    fn pull(
        &mut self,
        asset: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TransferError> {
        self.transfer_from(asset, to, from, to, amount)
    }
}

// =============================================================================
// TESTS
// =============================================================================
