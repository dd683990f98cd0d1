//! Bulk loading of trades from a [`TradeSource`] into a [`Market`].

use crate::domain::error::{GbceError, MarketError};
use crate::domain::market::Market;
use crate::ports::trade_source::TradeSource;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerLoad {
    pub recorded: usize,
    pub rejected: usize,
}

/// Record every trade the source yields. Trades for unregistered symbols are
/// skipped with a warning and counted as rejected.
pub fn populate_ledger(
    market: &mut Market,
    source: &dyn TradeSource,
) -> Result<LedgerLoad, GbceError> {
    let mut load = LedgerLoad::default();

    for trade in source.fetch_trades()? {
        let timestamp = trade.timestamp();
        match market.record_trade(trade) {
            Ok(()) => load.recorded += 1,
            Err(MarketError::UnknownStock { symbol }) => {
                log::warn!("rejected trade at {timestamp}: unknown stock {symbol}");
                load.rejected += 1;
            }
        }
    }

    log::info!(
        "ledger loaded: {} recorded, {} rejected",
        load.recorded,
        load.rejected
    );
    Ok(load)
}
