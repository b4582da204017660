//! # Purchases
//!
//! Both purchase paths: authorization, failure modes and minted identifiers.

#[cfg(test)]
mod tests {
    use super::super::fixtures::{deploy_with_events, one_coin, pow10, ticket, Deployment};
    use ticket_marketplace::prelude::*;

    fn first() -> EventId {
        EventId::new(0)
    }

    fn second() -> EventId {
        EventId::new(1)
    }

    fn ten_coins() -> U256 {
        U256::from(10) * one_coin()
    }

    fn assert_untouched(deployment: &Deployment, event_id: EventId) {
        let event = deployment.market.get_event(event_id).unwrap();
        assert_eq!(event.next_ticket_to_sell, U256::zero());
        assert_eq!(deployment.market.ledger().entry_count(), 0);
        assert!(deployment.sink.is_empty());
    }

    // =========================================================================
    // buy_native
    // =========================================================================

    #[test]
    fn test_native_purchase_open_to_non_owner() {
        let mut deployment = deploy_with_events().unwrap();
        let not_owner = deployment.not_owner;

        let receipt = deployment
            .market
            .buy_native(not_owner, first(), U256::one(), one_coin())
            .unwrap();

        assert_eq!(receipt.buyer, not_owner);
        assert_eq!(
            deployment.market.ticket_balance(not_owner, ticket(0, 0)),
            U256::one()
        );
    }

    #[test]
    fn test_native_purchase_overflow() {
        let mut deployment = deploy_with_events().unwrap();
        let owner = deployment.owner;
        deployment
            .market
            .set_price_native(owner, first(), pow10(75))
            .unwrap();
        deployment.sink.drain();

        let err = deployment
            .market
            .buy_native(owner, first(), pow10(10), U256::zero())
            .unwrap_err();

        assert_eq!(
            err,
            MarketplaceError::Overflow {
                price: pow10(75),
                quantity: pow10(10),
            }
        );
        assert_untouched(&deployment, first());
    }

    #[test]
    fn test_native_purchase_insufficient_funds() {
        let mut deployment = deploy_with_events().unwrap();
        let owner = deployment.owner;

        let err = deployment
            .market
            .buy_native(owner, first(), U256::one(), U256::one())
            .unwrap_err();

        assert_eq!(
            err,
            MarketplaceError::InsufficientPayment {
                required: U256::from(100_001),
                supplied: U256::one(),
            }
        );
        assert_untouched(&deployment, first());
        assert_eq!(deployment.market.native_custody(), U256::zero());
    }

    #[test]
    fn test_native_purchase_too_many_tickets() {
        let mut deployment = deploy_with_events().unwrap();
        let owner = deployment.owner;

        let err = deployment
            .market
            .buy_native(owner, first(), pow10(6), U256::from(1000) * one_coin())
            .unwrap_err();

        assert_eq!(
            err,
            MarketplaceError::SoldOut {
                requested: pow10(6),
                remaining: pow10(5),
            }
        );
        assert_untouched(&deployment, first());
    }

    #[test]
    fn test_native_purchase_mints_sequential_ids() {
        let mut deployment = deploy_with_events().unwrap();
        let owner = deployment.owner;

        deployment
            .market
            .buy_native(owner, second(), U256::from(3), ten_coins())
            .unwrap();
        for index in 0..3 {
            assert_eq!(
                deployment.market.ticket_balance(owner, ticket(1, index)),
                U256::one()
            );
        }

        deployment
            .market
            .buy_native(owner, second(), U256::from(3), ten_coins())
            .unwrap();
        for index in 3..6 {
            let id = ticket(1, index);
            assert_eq!(id.as_u256(), (U256::one() << 128) + U256::from(index));
            assert_eq!(deployment.market.ticket_balance(owner, id), U256::one());
        }
        assert_eq!(
            deployment.market.ticket_balance(owner, ticket(1, 6)),
            U256::zero()
        );
    }

    #[test]
    fn test_native_purchase_zero_quantity() {
        let mut deployment = deploy_with_events().unwrap();
        let not_owner = deployment.not_owner;

        let receipt = deployment
            .market
            .buy_native(not_owner, first(), U256::zero(), U256::from(5))
            .unwrap();

        assert!(receipt.tickets.is_empty());
        assert_eq!(deployment.market.native_custody(), U256::from(5));
        assert_eq!(deployment.sink.len(), 1);
        assert_eq!(
            deployment.market.get_event(first()).unwrap().next_ticket_to_sell,
            U256::zero()
        );
    }

    #[test]
    fn test_native_purchase_unknown_event() {
        let mut deployment = deploy_with_events().unwrap();
        let owner = deployment.owner;

        let err = deployment
            .market
            .buy_native(owner, EventId::new(2), U256::one(), one_coin())
            .unwrap_err();
        assert!(matches!(err, MarketplaceError::NotFound { .. }));
    }

    #[test]
    fn test_purchase_up_to_exact_capacity() {
        let mut deployment = deploy_with_events().unwrap();
        let owner = deployment.owner;
        deployment
            .market
            .create_event(owner, U256::from(4), U256::one(), U256::one())
            .unwrap();
        let small = EventId::new(2);

        deployment
            .market
            .buy_native(owner, small, U256::from(4), U256::from(4))
            .unwrap();

        assert!(deployment.market.get_event(small).unwrap().is_sold_out());
        assert!(matches!(
            deployment.market.buy_native(owner, small, U256::one(), U256::one()),
            Err(MarketplaceError::SoldOut { .. })
        ));
    }

    // =========================================================================
    // buy_external
    // =========================================================================

    #[test]
    fn test_external_purchase_open_to_non_owner() {
        let mut deployment = deploy_with_events().unwrap();
        let not_owner = deployment.not_owner;

        let receipt = deployment
            .market
            .buy_external(not_owner, first(), U256::one())
            .unwrap();

        assert_eq!(receipt.asset, AssetTag::External);
        assert_eq!(receipt.amount_paid, U256::from(100_002));
    }

    #[test]
    fn test_external_purchase_overflow() {
        let mut deployment = deploy_with_events().unwrap();
        let owner = deployment.owner;
        deployment
            .market
            .set_price_external(owner, first(), pow10(75))
            .unwrap();
        deployment.sink.drain();

        let err = deployment
            .market
            .buy_external(owner, first(), pow10(10))
            .unwrap_err();

        assert!(matches!(err, MarketplaceError::Overflow { .. }));
        assert_untouched(&deployment, first());
    }

    #[test]
    fn test_external_purchase_insufficient_funds() {
        let mut deployment = deploy_with_events().unwrap();
        let owner = deployment.owner;
        deployment
            .market
            .set_price_external(owner, first(), pow10(75))
            .unwrap();
        deployment.sink.drain();
        let balance_before = deployment.coin_balance(owner);

        let err = deployment
            .market
            .buy_external(owner, first(), U256::one())
            .unwrap_err();

        assert!(matches!(err, MarketplaceError::TransferFailed(_)));
        assert_untouched(&deployment, first());
        assert_eq!(deployment.coin_balance(owner), balance_before);
    }

    #[test]
    fn test_external_purchase_too_many_tickets() {
        let mut deployment = deploy_with_events().unwrap();
        let owner = deployment.owner;

        let err = deployment
            .market
            .buy_external(owner, first(), pow10(6))
            .unwrap_err();

        assert!(matches!(err, MarketplaceError::SoldOut { .. }));
        assert_untouched(&deployment, first());
    }

    #[test]
    fn test_external_purchase_mints_sequential_ids() {
        let mut deployment = deploy_with_events().unwrap();
        let owner = deployment.owner;

        let first_batch = deployment
            .market
            .buy_external(owner, second(), U256::from(3))
            .unwrap();
        let second_batch = deployment
            .market
            .buy_external(owner, second(), U256::from(3))
            .unwrap();

        let ids: Vec<_> = first_batch
            .tickets
            .iter()
            .chain(second_batch.tickets.iter())
            .collect();
        let expected: Vec<_> = (0..6).map(|index| ticket(1, index)).collect();
        assert_eq!(ids, expected);

        for id in ids {
            assert_eq!(deployment.market.ticket_balance(owner, id), U256::one());
        }
    }

    #[test]
    fn test_external_purchase_against_repointed_unknown_asset() {
        let mut deployment = deploy_with_events().unwrap();
        let owner = deployment.owner;
        let bogus = Address::from_low_u64_be(1);
        deployment
            .market
            .set_external_asset_address(owner, bogus)
            .unwrap();
        deployment.sink.drain();

        let err = deployment
            .market
            .buy_external(owner, first(), U256::one())
            .unwrap_err();

        assert_eq!(
            err,
            MarketplaceError::TransferFailed(TransferError::UnknownAsset(bogus))
        );
        assert_untouched(&deployment, first());
    }
}
