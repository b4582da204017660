//! # Error Types
//!
//! All failures abort the whole operation; none of them leave partial state.

use super::value_objects::{Address, EventId, U256};
use thiserror::Error;

// =============================================================================
// MARKETPLACE ERRORS
// =============================================================================

/// Errors returned by marketplace operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarketplaceError {
    /// Caller is not the owner on a gated operation.
    #[error("unauthorized access: {caller:?} is not the owner")]
    Unauthorized { caller: Address },

    /// Event id out of range.
    #[error("event {event_id} not found ({event_count} events exist)")]
    NotFound { event_id: EventId, event_count: u64 },

    /// Capacity decrease attempted.
    #[error("the new number of max tickets is too small: {requested} < {current}")]
    CapacityTooSmall { current: U256, requested: U256 },

    /// `price * quantity` does not fit in 256 bits.
    #[error("overflow while calculating the total price of {quantity} tickets at {price} each")]
    Overflow { price: U256, quantity: U256 },

    /// The minted ticket indexes would leave the 128-bit window.
    #[error("ticket indexes of event {event_id} exhausted")]
    TicketIndexOverflow { event_id: EventId },

    /// Native payment below the computed total.
    #[error("not enough funds supplied: required {required}, supplied {supplied}")]
    InsufficientPayment { required: U256, supplied: U256 },

    /// Requested quantity exceeds remaining capacity.
    #[error("not enough tickets left to sell: requested {requested}, remaining {remaining}")]
    SoldOut { requested: U256, remaining: U256 },

    /// External-asset pull was rejected by the payment source.
    #[error("external asset transfer failed: {0}")]
    TransferFailed(#[from] TransferError),

    /// Native custody balance cannot absorb the payment.
    #[error("native custody overflow")]
    CustodyOverflow,

    /// The ownership ledger does not accept mints from this marketplace.
    #[error("ownership ledger {ledger:?} is minted by {minter:?}, not this marketplace")]
    LedgerNotOwned { ledger: Address, minter: Address },

    /// Configuration rejected at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MarketplaceError {
    /// Returns true if the caller can succeed by retrying with different inputs
    /// (more funds, fewer tickets), as opposed to a permission or wiring fault.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::CapacityTooSmall { .. }
                | Self::Overflow { .. }
                | Self::InsufficientPayment { .. }
                | Self::SoldOut { .. }
                | Self::TransferFailed(_)
        )
    }
}

// =============================================================================
// TRANSFER ERRORS
// =============================================================================

/// Reasons a payment source refuses to pull funds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// No asset is deployed at the given address.
    #[error("unknown asset: {0:?}")]
    UnknownAsset(Address),

    /// Payer holds less than requested.
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: U256, available: U256 },

    /// Payer approved less than requested.
    #[error("insufficient allowance: required {required}, available {available}")]
    InsufficientAllowance { required: U256, available: U256 },

    /// Receiving balance would overflow.
    #[error("balance overflow")]
    BalanceOverflow,
}

/// Result alias for marketplace operations.
pub type MarketplaceResult<T> = Result<T, MarketplaceError>;

// =============================================================================
// TESTS
// =============================================================================
