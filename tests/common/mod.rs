#![allow(dead_code)]

use gbce::domain::market::Market;
use gbce::domain::stock::Stock;
pub use gbce::domain::trade::{Trade, TradeSide};

pub const STANDARD_SYMBOLS: [&str; 5] = ["TEA", "POP", "ALE", "GIN", "JOE"];

pub fn standard_stocks() -> Vec<Stock> {
    vec![
        Stock::common("TEA", 100.0, 0.0),
        Stock::common("POP", 100.0, 8.0),
        Stock::common("ALE", 60.0, 23.0),
        Stock::preferred("GIN", 100.0, 8.0, 0.02),
        Stock::common("JOE", 250.0, 13.0),
    ]
}

pub fn standard_market() -> Market {
    let mut market = Market::new();
    for stock in standard_stocks() {
        market.register_stock(stock);
    }
    market
}

pub fn buy(symbol: &str, timestamp: i64, quantity: u32, price: f64) -> Trade {
    Trade::new(symbol, timestamp, TradeSide::Buy, quantity, price)
}

pub fn record_all(market: &mut Market, trades: Vec<Trade>) {
    for trade in trades {
        market.record_trade(trade).unwrap();
    }
}

pub fn ledger_timestamps(market: &Market) -> Vec<i64> {
    market.trades().iter().map(|t| t.timestamp()).collect()
}
