//! Stock definitions and per-stock dividend formulas.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockType {
    Common,
    Preferred,
}

impl fmt::Display for StockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockType::Common => write!(f, "Common"),
            StockType::Preferred => write!(f, "Preferred"),
        }
    }
}

impl FromStr for StockType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "common" => Ok(StockType::Common),
            "preferred" => Ok(StockType::Preferred),
            other => Err(format!("unknown stock type '{other}', expected common or preferred")),
        }
    }
}

/// Static metadata for one listed stock.
///
/// Fields are fixed at construction. To change a stock, register a new one
/// under the same symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Stock {
    symbol: String,
    stock_type: StockType,
    par_value: f64,
    last_dividend: f64,
    fixed_dividend: f64,
}

impl Stock {
    pub fn new(
        symbol: impl Into<String>,
        stock_type: StockType,
        par_value: f64,
        last_dividend: f64,
        fixed_dividend: f64,
    ) -> Self {
        Stock {
            symbol: symbol.into(),
            stock_type,
            par_value,
            last_dividend,
            fixed_dividend,
        }
    }

    pub fn common(symbol: impl Into<String>, par_value: f64, last_dividend: f64) -> Self {
        Self::new(symbol, StockType::Common, par_value, last_dividend, 0.0)
    }

    pub fn preferred(
        symbol: impl Into<String>,
        par_value: f64,
        last_dividend: f64,
        fixed_dividend: f64,
    ) -> Self {
        Self::new(
            symbol,
            StockType::Preferred,
            par_value,
            last_dividend,
            fixed_dividend,
        )
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn stock_type(&self) -> StockType {
        self.stock_type
    }

    pub fn par_value(&self) -> f64 {
        self.par_value
    }

    pub fn last_dividend(&self) -> f64 {
        self.last_dividend
    }

    pub fn fixed_dividend(&self) -> f64 {
        self.fixed_dividend
    }

    pub fn is_preferred(&self) -> bool {
        self.stock_type == StockType::Preferred
    }

    /// Dividend per share. The price is not used; it is accepted so the
    /// signature lines up with [`Stock::dividend_yield`].
    fn dividend(&self, _price: f64) -> f64 {
        if self.is_preferred() {
            self.fixed_dividend * self.par_value
        } else {
            self.last_dividend
        }
    }

    /// Preferred: `fixed_dividend * par_value / price`. Common: `last_dividend / price`.
    ///
    /// `price` must be positive; a zero price yields an infinite or NaN result.
    pub fn dividend_yield(&self, price: f64) -> f64 {
        self.dividend(price) / price
    }

    /// `price / dividend`. A zero dividend yields `f64::INFINITY`.
    pub fn pe_ratio(&self, price: f64) -> f64 {
        price / self.dividend(price)
    }
}
