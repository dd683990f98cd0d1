//! Per-stock analytics snapshot.

/// Dividend yield, P/E ratio and VWSP for one stock at a given price and time.
#[derive(Debug, Clone, PartialEq)]
pub struct StockQuote {
    pub symbol: String,
    pub price: f64,
    pub as_of: i64,
    pub dividend_yield: f64,
    pub pe_ratio: f64,
    pub vwsp: f64,
}

impl StockQuote {
    /// True when there were no trades in the VWSP window.
    pub fn has_market_data(&self) -> bool {
        self.vwsp > 0.0
    }
}
