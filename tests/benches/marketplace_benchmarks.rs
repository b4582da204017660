//! # Ticket Marketplace Benchmarks
//!
//! | Path | Cost driver |
//! |------|-------------|
//! | `buy_native` | one mint per ticket |
//! | `buy_external` | payment pull + one mint per ticket |
//! | `TicketId::pack` | byte packing |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ticket_marketplace::prelude::*;

const OWNER: u64 = 1;
const BUYER: u64 = 2;
const MARKET: u64 = 0x7AC3;
const COIN: u64 = 0xC014;

fn addr(n: u64) -> Address {
    Address::from_low_u64_be(n)
}

fn market() -> (TicketMarketplace<InMemoryTokenLedger, InMemoryOwnershipLedger, ()>, EventId) {
    let tokens = InMemoryTokenLedger::new();
    tokens.deploy_asset(addr(COIN), addr(BUYER), U256::MAX);
    tokens
        .approve(addr(COIN), addr(BUYER), addr(MARKET), U256::MAX)
        .unwrap();

    let config = MarketplaceConfig::new(addr(MARKET), addr(OWNER), addr(COIN));
    let mut market = TicketMarketplace::with_in_memory_ledger(config, tokens, ()).unwrap();
    let event_id = market
        .create_event(addr(OWNER), U256::from(u64::MAX), U256::one(), U256::one())
        .unwrap();
    (market, event_id)
}

fn bench_purchases(c: &mut Criterion) {
    let mut group = c.benchmark_group("purchases");

    for quantity in [1u64, 10, 100] {
        group.throughput(Throughput::Elements(quantity));

        group.bench_with_input(BenchmarkId::new("buy_native", quantity), &quantity, |b, &quantity| {
            let (mut market, event_id) = market();
            b.iter(|| {
                black_box(
                    market
                        .buy_native(addr(BUYER), event_id, U256::from(quantity), U256::from(quantity))
                        .unwrap(),
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("buy_external", quantity), &quantity, |b, &quantity| {
            let (mut market, event_id) = market();
            b.iter(|| black_box(market.buy_external(addr(BUYER), event_id, U256::from(quantity)).unwrap()));
        });
    }

    group.finish();
}

fn bench_ticket_ids(c: &mut Criterion) {
    c.bench_function("ticket_id_pack", |b| {
        let mut index = 0u128;
        b.iter(|| {
            index = index.wrapping_add(1);
            black_box(TicketId::pack(EventId::new(7), index))
        });
    });
}

criterion_group!(benches, bench_purchases, bench_ticket_ids);
criterion_main!(benches);
