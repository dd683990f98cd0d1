//! Random demo-trade generator.
//!
//! Produces a plausible-looking tape for each stock: a random number of trades
//! whose price wanders from the stock's par value.

use crate::domain::error::GbceError;
use crate::domain::stock::Stock;
use crate::domain::trade::{Trade, TradeSide};
use crate::ports::trade_source::TradeSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_MAX_TRADES_PER_STOCK: usize = 250;

/// Quantities are whole lots of this size.
pub const LOT_SIZE: u32 = 25;
pub const MAX_LOTS: u32 = 50;

pub struct RandomTradeGenerator {
    /// (symbol, starting price)
    seeds: Vec<(String, f64)>,
    start: i64,
    end: i64,
    max_trades_per_stock: usize,
    seed: Option<u64>,
}

impl RandomTradeGenerator {
    /// One price series per stock, starting at its par value. Stocks are
    /// visited in symbol order so a seeded run is reproducible.
    pub fn new<'a>(stocks: impl IntoIterator<Item = &'a Stock>) -> Self {
        let mut seeds: Vec<(String, f64)> = stocks
            .into_iter()
            .map(|s| (s.symbol().to_string(), s.par_value()))
            .collect();
        seeds.sort_by(|a, b| a.0.cmp(&b.0));
        Self {
            seeds,
            start: 100,
            end: 2000,
            max_trades_per_stock: DEFAULT_MAX_TRADES_PER_STOCK,
            seed: None,
        }
    }

    /// Timestamps are drawn from `[start, end)`.
    pub fn between(mut self, start: i64, end: i64) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn max_trades_per_stock(mut self, max: usize) -> Self {
        self.max_trades_per_stock = max;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl TradeSource for RandomTradeGenerator {
    fn fetch_trades(&self) -> Result<Vec<Trade>, GbceError> {
        if self.end <= self.start {
            return Err(GbceError::TradeData {
                reason: format!(
                    "empty time range for generated trades: [{}, {})",
                    self.start, self.end
                ),
            });
        }

        let mut rng = self.rng();
        let mut trades = Vec::new();

        for (symbol, start_price) in &self.seeds {
            let count = if self.max_trades_per_stock == 0 {
                0
            } else {
                rng.gen_range(0..self.max_trades_per_stock)
            };
            let mut price = *start_price;

            for _ in 0..count {
                let quantity = rng.gen_range(1..=MAX_LOTS) * LOT_SIZE;
                let side = if rng.gen_bool(0.5) {
                    TradeSide::Buy
                } else {
                    TradeSide::Sell
                };
                // -5.0% ..= +4.9% in 0.1% steps
                let step = f64::from(rng.gen_range(-50_i32..50)) / 1000.0;
                price += price * step;
                let timestamp = rng.gen_range(self.start..self.end);

                trades.push(Trade::new(symbol.as_str(), timestamp, side, quantity, price));
            }
            log::debug!("generated {} trades for {}", count, symbol);
        }

        Ok(trades)
    }
}
