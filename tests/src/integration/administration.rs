//! # Administration
//!
//! Event creation and the owner-only setters.

#[cfg(test)]
mod tests {
    use super::super::fixtures::{
        deploy, deploy_with_events, pow10, FIXTURE_CAPACITY, FIXTURE_PRICE_EXTERNAL,
        FIXTURE_PRICE_NATIVE,
    };
    use ticket_marketplace::prelude::*;

    fn first() -> EventId {
        EventId::new(0)
    }

    // =========================================================================
    // create_event
    // =========================================================================

    #[test]
    fn test_create_event_rejects_non_owner() {
        let mut deployment = deploy().unwrap();
        let not_owner = deployment.not_owner;

        let err = deployment
            .market
            .create_event(not_owner, pow10(5), pow10(5), pow10(5))
            .unwrap_err();

        assert_eq!(err, MarketplaceError::Unauthorized { caller: not_owner });
        assert_eq!(deployment.market.event_count(), 0);
    }

    #[test]
    fn test_create_event_stores_fields() {
        let mut deployment = deploy().unwrap();
        let owner = deployment.owner;

        deployment
            .market
            .create_event(
                owner,
                U256::from(FIXTURE_CAPACITY),
                U256::from(FIXTURE_PRICE_NATIVE),
                U256::from(FIXTURE_PRICE_EXTERNAL),
            )
            .unwrap();

        assert_eq!(
            deployment.market.get_event(first()).unwrap(),
            TicketEvent {
                next_ticket_to_sell: U256::zero(),
                max_tickets: U256::from(100_000),
                price_native: U256::from(100_001),
                price_external: U256::from(100_002),
            }
        );
    }

    #[test]
    fn test_create_event_advances_event_count() {
        let mut deployment = deploy().unwrap();
        let owner = deployment.owner;

        for expected in 0..3 {
            let before = deployment.market.event_count();
            let id = deployment
                .market
                .create_event(owner, U256::one(), U256::one(), U256::one())
                .unwrap();

            assert_eq!(id, EventId::new(expected));
            assert_eq!(deployment.market.event_count(), before + 1);
        }
    }

    #[test]
    fn test_get_unknown_event() {
        let deployment = deploy_with_events().unwrap();
        assert_eq!(
            deployment.market.get_event(EventId::new(2)),
            Err(MarketplaceError::NotFound {
                event_id: EventId::new(2),
                event_count: 2,
            })
        );
    }

    // =========================================================================
    // set_max_tickets
    // =========================================================================

    #[test]
    fn test_set_max_tickets_rejects_non_owner() {
        let mut deployment = deploy_with_events().unwrap();
        let not_owner = deployment.not_owner;

        let err = deployment
            .market
            .set_max_tickets(not_owner, first(), pow10(10))
            .unwrap_err();
        assert!(matches!(err, MarketplaceError::Unauthorized { .. }));
    }

    #[test]
    fn test_set_max_tickets_rejects_decrease() {
        let mut deployment = deploy_with_events().unwrap();
        let owner = deployment.owner;
        let max = deployment.market.get_event(first()).unwrap().max_tickets;

        let err = deployment
            .market
            .set_max_tickets(owner, first(), max - U256::one())
            .unwrap_err();

        assert_eq!(
            err,
            MarketplaceError::CapacityTooSmall {
                current: max,
                requested: max - U256::one(),
            }
        );
        assert_eq!(deployment.market.get_event(first()).unwrap().max_tickets, max);
    }

    #[test]
    fn test_set_max_tickets_accepts_increase() {
        let mut deployment = deploy_with_events().unwrap();
        let owner = deployment.owner;
        let max = deployment.market.get_event(first()).unwrap().max_tickets;

        deployment
            .market
            .set_max_tickets(owner, first(), max + U256::one())
            .unwrap();

        assert_eq!(
            deployment.market.get_event(first()).unwrap().max_tickets,
            max + U256::one()
        );
    }

    #[test]
    fn test_set_max_tickets_unknown_event() {
        let mut deployment = deploy_with_events().unwrap();
        let owner = deployment.owner;

        let err = deployment
            .market
            .set_max_tickets(owner, EventId::new(9), pow10(10))
            .unwrap_err();
        assert!(matches!(err, MarketplaceError::NotFound { .. }));
    }

    // =========================================================================
    // Price setters
    // =========================================================================

    #[test]
    fn test_set_price_native_rejects_non_owner() {
        let mut deployment = deploy_with_events().unwrap();
        let not_owner = deployment.not_owner;

        assert!(matches!(
            deployment.market.set_price_native(not_owner, first(), pow10(10)),
            Err(MarketplaceError::Unauthorized { .. })
        ));
    }

    #[test]
    fn test_set_price_native_updates_price() {
        let mut deployment = deploy_with_events().unwrap();
        let owner = deployment.owner;

        deployment
            .market
            .set_price_native(owner, first(), pow10(10))
            .unwrap();

        let event = deployment.market.get_event(first()).unwrap();
        assert_eq!(event.price_native, pow10(10));
        assert_eq!(event.price_external, U256::from(FIXTURE_PRICE_EXTERNAL));
    }

    #[test]
    fn test_set_price_external_rejects_non_owner() {
        let mut deployment = deploy_with_events().unwrap();
        let not_owner = deployment.not_owner;

        assert!(matches!(
            deployment.market.set_price_external(not_owner, first(), pow10(10)),
            Err(MarketplaceError::Unauthorized { .. })
        ));
    }

    #[test]
    fn test_set_price_external_updates_price() {
        let mut deployment = deploy_with_events().unwrap();
        let owner = deployment.owner;

        deployment
            .market
            .set_price_external(owner, first(), pow10(10))
            .unwrap();

        let event = deployment.market.get_event(first()).unwrap();
        assert_eq!(event.price_external, pow10(10));
        assert_eq!(event.price_native, U256::from(FIXTURE_PRICE_NATIVE));
    }

    #[test]
    fn test_price_may_be_lowered_to_zero() {
        let mut deployment = deploy_with_events().unwrap();
        let owner = deployment.owner;

        deployment
            .market
            .set_price_native(owner, first(), U256::zero())
            .unwrap();
        assert_eq!(
            deployment.market.get_event(first()).unwrap().price_native,
            U256::zero()
        );
    }

    // =========================================================================
    // set_external_asset_address
    // =========================================================================

    #[test]
    fn test_set_external_asset_rejects_non_owner() {
        let mut deployment = deploy().unwrap();
        let not_owner = deployment.not_owner;

        assert!(matches!(
            deployment
                .market
                .set_external_asset_address(not_owner, Address::from_low_u64_be(1)),
            Err(MarketplaceError::Unauthorized { .. })
        ));
        assert_eq!(deployment.market.external_asset_address(), deployment.coin);
    }

    #[test]
    fn test_set_external_asset_updates_address() {
        let mut deployment = deploy().unwrap();
        let owner = deployment.owner;
        let previous = deployment.market.external_asset_address();

        deployment
            .market
            .set_external_asset_address(owner, Address::from_low_u64_be(1))
            .unwrap();

        let current = deployment.market.external_asset_address();
        assert_ne!(current, previous);
        assert_eq!(current, Address::from_low_u64_be(1));
    }
}
