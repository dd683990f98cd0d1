//! Trade source port trait.

use crate::domain::error::GbceError;
use crate::domain::trade::Trade;

/// Anything that can supply a batch of trades to load into the ledger.
pub trait TradeSource {
    fn fetch_trades(&self) -> Result<Vec<Trade>, GbceError>;
}
