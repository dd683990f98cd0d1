//! Stock registry, time-ordered trade ledger and market analytics.

use std::collections::HashMap;

use super::error::MarketError;
use super::quote::StockQuote;
use super::stats::geometric_mean;
use super::stock::Stock;
use super::trade::Trade;

/// Default trailing window for the volume-weighted stock price (15 minutes).
pub const VWSP_WINDOW_SECS: i64 = 15 * 60;

#[derive(Debug, Clone)]
pub struct Market {
    stocks: HashMap<String, Stock>,
    /// Invariant: timestamps are non-decreasing.
    trades: Vec<Trade>,
    vwsp_window_secs: i64,
}

impl Default for Market {
    fn default() -> Self {
        Self::new()
    }
}

impl Market {
    pub fn new() -> Self {
        Self::with_vwsp_window(VWSP_WINDOW_SECS)
    }

    pub fn with_vwsp_window(vwsp_window_secs: i64) -> Self {
        Market {
            stocks: HashMap::new(),
            trades: Vec::new(),
            vwsp_window_secs,
        }
    }

    pub fn vwsp_window_secs(&self) -> i64 {
        self.vwsp_window_secs
    }

    // -- registry --

    /// Insert or replace the stock under its symbol. The ledger is untouched.
    pub fn register_stock(&mut self, stock: Stock) {
        self.stocks.insert(stock.symbol().to_string(), stock);
    }

    pub fn known_stock(&self, symbol: &str) -> bool {
        self.stocks.contains_key(symbol)
    }

    pub fn get_stock(&self, symbol: &str) -> Option<&Stock> {
        self.stocks.get(symbol)
    }

    pub fn stocks(&self) -> impl Iterator<Item = &Stock> {
        self.stocks.values()
    }

    pub fn stock_count(&self) -> usize {
        self.stocks.len()
    }

    /// Empty the registry. Trades already in the ledger are kept.
    pub fn clear_stocks(&mut self) {
        self.stocks.clear();
    }

    // -- ledger --

    /// Record a trade, keeping the ledger in timestamp order.
    ///
    /// Trades arriving in order are appended. A late trade is inserted before
    /// the oldest trade whose timestamp is not earlier than its own.
    pub fn record_trade(&mut self, trade: Trade) -> Result<(), MarketError> {
        if !self.known_stock(trade.symbol()) {
            return Err(MarketError::UnknownStock {
                symbol: trade.symbol().to_string(),
            });
        }

        if self.trades.is_empty() || trade.timestamp() >= self.last_trade_timestamp() {
            self.trades.push(trade);
            return Ok(());
        }

        match self
            .trades
            .iter()
            .position(|t| t.timestamp() >= trade.timestamp())
        {
            Some(index) => {
                log::debug!(
                    "late trade for {} at {} inserted at ledger position {}",
                    trade.symbol(),
                    trade.timestamp(),
                    index
                );
                self.trades.insert(index, trade);
            }
            None => self.trades.push(trade),
        }
        Ok(())
    }

    pub fn clear_trades(&mut self) {
        self.trades.clear();
    }

    /// Timestamp of the newest ledger entry, or 0 for an empty ledger.
    pub fn last_trade_timestamp(&self) -> i64 {
        self.trades.last().map_or(0, Trade::timestamp)
    }

    /// The whole ledger, oldest first.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn trade_count(&self) -> usize {
        self.trades.len()
    }

    /// Trades for `symbol` at or after `earliest`, newest first.
    ///
    /// Walks the ledger backwards and stops at the first trade older than
    /// `earliest`, relying on the ledger ordering.
    pub fn trades_since(&self, symbol: &str, earliest: i64) -> Vec<&Trade> {
        self.trades
            .iter()
            .rev()
            .take_while(|t| t.timestamp() >= earliest)
            .filter(|t| t.symbol() == symbol)
            .collect()
    }

    // -- analytics --

    /// First timestamp inside the VWSP window for `as_of`, never before 0.
    pub fn window_start(&self, as_of: i64) -> i64 {
        as_of.saturating_sub(self.vwsp_window_secs).max(0)
    }

    /// Volume-weighted price over the trailing window starting at
    /// `window_start(as_of)`. The window has no upper bound.
    /// Returns 0.0 when the window holds no trades for `symbol`.
    pub fn volume_weighted_stock_price(&self, symbol: &str, as_of: i64) -> f64 {
        let (weighted, quantity) = self
            .trades_since(symbol, self.window_start(as_of))
            .into_iter()
            .fold((0.0_f64, 0_u64), |(w, q), t| {
                (w + t.notional(), q + u64::from(t.quantity()))
            });

        if quantity > 0 {
            weighted / quantity as f64
        } else {
            0.0
        }
    }

    /// Geometric mean of every registered stock's VWSP at `as_of`.
    /// Stocks with no trades in the window do not contribute. Symbols are
    /// summed in sorted order so the result does not depend on hash order.
    pub fn composite_index(&self, as_of: i64) -> f64 {
        let mut symbols: Vec<&str> = self.stocks.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        geometric_mean(
            symbols
                .into_iter()
                .map(|symbol| self.volume_weighted_stock_price(symbol, as_of)),
        )
    }

    pub fn quote(&self, symbol: &str, price: f64, as_of: i64) -> Result<StockQuote, MarketError> {
        let stock = self
            .get_stock(symbol)
            .ok_or_else(|| MarketError::UnknownStock {
                symbol: symbol.to_string(),
            })?;

        Ok(StockQuote {
            symbol: symbol.to_string(),
            price,
            as_of,
            dividend_yield: stock.dividend_yield(price),
            pe_ratio: stock.pe_ratio(price),
            vwsp: self.volume_weighted_stock_price(symbol, as_of),
        })
    }
}
