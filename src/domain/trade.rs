//! Trade records.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "BUY"),
            TradeSide::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for TradeSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" | "b" => Ok(TradeSide::Buy),
            "sell" | "s" => Ok(TradeSide::Sell),
            other => Err(format!("unknown trade side '{other}', expected buy or sell")),
        }
    }
}

/// One executed trade. Timestamps are seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    symbol: String,
    timestamp: i64,
    side: TradeSide,
    quantity: u32,
    price: f64,
}

impl Trade {
    pub fn new(
        symbol: impl Into<String>,
        timestamp: i64,
        side: TradeSide,
        quantity: u32,
        price: f64,
    ) -> Self {
        Trade {
            symbol: symbol.into(),
            timestamp,
            side,
            quantity,
            price,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn side(&self) -> TradeSide {
        self.side
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// price * quantity
    pub fn notional(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
