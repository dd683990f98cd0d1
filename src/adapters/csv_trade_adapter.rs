//! CSV trade file adapter.
//!
//! Expects a header row followed by `symbol,timestamp,side,quantity,price`.

use crate::domain::error::GbceError;
use crate::domain::trade::{Trade, TradeSide};
use crate::ports::trade_source::TradeSource;
use std::fs;
use std::path::PathBuf;

pub struct CsvTradeAdapter {
    path: PathBuf,
}

impl CsvTradeAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Parse CSV text. Trades are returned in file order.
    pub fn parse(content: &str) -> Result<Vec<Trade>, GbceError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());
        let mut trades = Vec::new();

        for (index, result) in rdr.records().enumerate() {
            // Header is line 1.
            let line = index + 2;
            let record = result.map_err(|e| GbceError::TradeData {
                reason: format!("CSV parse error on line {line}: {e}"),
            })?;

            let field = |pos: usize, name: &str| {
                record.get(pos).ok_or_else(|| GbceError::TradeData {
                    reason: format!("line {line}: missing {name} column"),
                })
            };

            let symbol = field(0, "symbol")?;
            if symbol.is_empty() {
                return Err(GbceError::TradeData {
                    reason: format!("line {line}: empty symbol"),
                });
            }

            let timestamp: i64 = field(1, "timestamp")?.parse().map_err(|e| {
                GbceError::TradeData {
                    reason: format!("line {line}: invalid timestamp: {e}"),
                }
            })?;

            let side: TradeSide = field(2, "side")?
                .parse()
                .map_err(|e: String| GbceError::TradeData {
                    reason: format!("line {line}: {e}"),
                })?;

            let quantity: u32 = field(3, "quantity")?.parse().map_err(|e| {
                GbceError::TradeData {
                    reason: format!("line {line}: invalid quantity: {e}"),
                }
            })?;
            if quantity == 0 {
                return Err(GbceError::TradeData {
                    reason: format!("line {line}: quantity must be positive"),
                });
            }

            let price: f64 = field(4, "price")?.parse().map_err(|e| GbceError::TradeData {
                reason: format!("line {line}: invalid price: {e}"),
            })?;
            if !(price.is_finite() && price > 0.0) {
                return Err(GbceError::TradeData {
                    reason: format!(
                        "line {line}: price must be a positive finite number, got {price}"
                    ),
                });
            }

            trades.push(Trade::new(symbol, timestamp, side, quantity, price));
        }

        Ok(trades)
    }
}

impl TradeSource for CsvTradeAdapter {
    fn fetch_trades(&self) -> Result<Vec<Trade>, GbceError> {
        let content = fs::read_to_string(&self.path).map_err(|e| GbceError::TradeData {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;
        let trades = Self::parse(&content)?;
        log::info!("read {} trades from {}", trades.len(), self.path.display());
        Ok(trades)
    }
}
