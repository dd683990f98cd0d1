//! Property tests for ledger invariants.
//!
//! Uses proptest to verify:
//! 1. Ledger order: timestamps are non-decreasing after any insertion order
//! 2. Unknown symbols are always rejected without touching the ledger
//! 3. `trades_since` matches a brute-force filter of the ledger
//! 4. VWSP stays within the min/max price of the windowed trades

mod common;

use common::*;
use gbce::domain::error::MarketError;
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_symbol() -> impl Strategy<Value = &'static str> {
    prop::sample::select(STANDARD_SYMBOLS.to_vec())
}

fn arb_trade() -> impl Strategy<Value = Trade> {
    (
        arb_symbol(),
        0_i64..5_000,
        any::<bool>(),
        1_u32..2_000,
        (1.0..1_000.0_f64).prop_map(|p| (p * 100.0).round() / 100.0),
    )
        .prop_map(|(symbol, ts, is_buy, qty, price)| {
            let side = if is_buy { TradeSide::Buy } else { TradeSide::Sell };
            Trade::new(symbol, ts, side, qty, price)
        })
}

fn arb_trades() -> impl Strategy<Value = Vec<Trade>> {
    prop::collection::vec(arb_trade(), 0..200)
}

// ── 1. Ledger order ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn ledger_is_time_ordered(trades in arb_trades()) {
        let mut market = standard_market();
        let count = trades.len();
        record_all(&mut market, trades);

        let ts = ledger_timestamps(&market);
        prop_assert_eq!(ts.len(), count);
        prop_assert!(ts.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(market.last_trade_timestamp(), ts.last().copied().unwrap_or(0));
    }

    /// Trades with equal timestamps that arrive in order keep their arrival order.
    #[test]
    fn in_order_ties_keep_arrival_order(prices in prop::collection::vec(1.0..100.0_f64, 1..20)) {
        let mut market = standard_market();
        for price in &prices {
            market.record_trade(buy("TEA", 1000, 1, *price)).unwrap();
        }
        let recorded: Vec<f64> = market.trades().iter().map(|t| t.price()).collect();
        prop_assert_eq!(recorded, prices);
    }
}

// ── 2. Unknown symbols ───────────────────────────────────────────────

proptest! {
    #[test]
    fn unknown_symbol_rejected(
        trades in arb_trades(),
        ts in 0_i64..5_000,
        symbol in "[a-z]{1,4}|[A-Z]{5,6}",
    ) {
        let mut market = standard_market();
        record_all(&mut market, trades);
        let before: Vec<Trade> = market.trades().to_vec();

        let result = market.record_trade(buy(&symbol, ts, 10, 10.0));

        prop_assert_eq!(result, Err(MarketError::UnknownStock { symbol: symbol.clone() }));
        prop_assert_eq!(market.trades(), before.as_slice());
    }
}

// ── 3. Window correctness ────────────────────────────────────────────

proptest! {
    #[test]
    fn trades_since_matches_filter(
        trades in arb_trades(),
        symbol in arb_symbol(),
        earliest in 0_i64..5_500,
    ) {
        let mut market = standard_market();
        record_all(&mut market, trades);

        let got: Vec<Trade> = market
            .trades_since(symbol, earliest)
            .into_iter()
            .cloned()
            .collect();

        let mut expected: Vec<Trade> = market
            .trades()
            .iter()
            .filter(|t| t.symbol() == symbol && t.timestamp() >= earliest)
            .cloned()
            .collect();
        expected.reverse();

        prop_assert_eq!(&got, &expected);
        prop_assert!(got.windows(2).all(|w| w[0].timestamp() >= w[1].timestamp()));
    }
}

// ── 4. VWSP bounds ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn vwsp_between_min_and_max_windowed_price(
        trades in arb_trades(),
        symbol in arb_symbol(),
        as_of in 0_i64..6_000,
    ) {
        let mut market = standard_market();
        record_all(&mut market, trades);

        let vwsp = market.volume_weighted_stock_price(symbol, as_of);
        let window: Vec<f64> = market
            .trades_since(symbol, (as_of - 900).max(0))
            .iter()
            .map(|t| t.price())
            .collect();

        if window.is_empty() {
            prop_assert_eq!(vwsp, 0.0);
        } else {
            let min = window.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = window.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(vwsp >= min - 1e-9 && vwsp <= max + 1e-9);
        }
    }

    #[test]
    fn index_is_zero_or_positive(trades in arb_trades(), as_of in 0_i64..6_000) {
        let mut market = standard_market();
        record_all(&mut market, trades);
        let index = market.composite_index(as_of);
        prop_assert!(index >= 0.0 && index.is_finite());
    }
}
