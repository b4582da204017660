//! # Pricing Policy
//!
//! Price fields have no monotonicity rule: the owner may raise or lower
//! either price freely. The only arithmetic concern is the purchase total,
//! which must be the exact product or an error.

use super::entities::TicketEvent;
use super::errors::{MarketplaceError, MarketplaceResult};
use super::value_objects::{AssetTag, U256};

/// Exact `unit_price * quantity` over 256-bit unsigned integers.
///
/// # Errors
///
/// `Overflow` when the true product is not representable.
pub fn total_price(unit_price: U256, quantity: U256) -> MarketplaceResult<U256> {
    unit_price
        .checked_mul(quantity)
        .ok_or(MarketplaceError::Overflow {
            price: unit_price,
            quantity,
        })
}

/// Overwrites the price of `asset` and returns the previous value.
pub fn apply_price(event: &mut TicketEvent, asset: AssetTag, new_price: U256) -> U256 {
    let slot = match asset {
        AssetTag::Native => &mut event.price_native,
        AssetTag::External => &mut event.price_external,
    };
    std::mem::replace(slot, new_price)
}
