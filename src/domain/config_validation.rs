//! Market configuration validation.
//!
//! Turns `[stock.<SYMBOL>]` sections and the optional `[market]` section into
//! a populated [`Market`].

use crate::domain::error::GbceError;
use crate::domain::market::{Market, VWSP_WINDOW_SECS};
use crate::domain::stock::{Stock, StockType};
use crate::ports::config_port::ConfigPort;

pub const STOCK_SECTION_PREFIX: &str = "stock.";
pub const MARKET_SECTION: &str = "market";

/// Build a market with the configured VWSP window and every configured stock registered.
pub fn build_market(config: &dyn ConfigPort) -> Result<Market, GbceError> {
    let window = validate_vwsp_window(config)?;
    let mut market = Market::with_vwsp_window(window);
    for stock in build_stocks(config)? {
        market.register_stock(stock);
    }
    Ok(market)
}

/// Parse every stock section, sorted by symbol.
pub fn build_stocks(config: &dyn ConfigPort) -> Result<Vec<Stock>, GbceError> {
    let mut sections: Vec<String> = config
        .sections()
        .into_iter()
        .filter(|s| s.starts_with(STOCK_SECTION_PREFIX))
        .collect();
    sections.sort();

    sections
        .iter()
        .map(|section| build_stock(config, section))
        .collect()
}

fn build_stock(config: &dyn ConfigPort, section: &str) -> Result<Stock, GbceError> {
    let symbol = section[STOCK_SECTION_PREFIX.len()..].trim();
    if symbol.is_empty() {
        return Err(invalid(section, "symbol", "stock section must name a symbol"));
    }

    let stock_type: StockType = required(config, section, "type")?
        .parse()
        .map_err(|reason: String| invalid(section, "type", &reason))?;

    let par_value = required_f64(config, section, "par_value")?;
    if par_value <= 0.0 {
        return Err(invalid(section, "par_value", "par_value must be positive"));
    }

    let last_dividend = optional_f64(config, section, "last_dividend")?.unwrap_or(0.0);
    if last_dividend < 0.0 {
        return Err(invalid(
            section,
            "last_dividend",
            "last_dividend must be non-negative",
        ));
    }

    let fixed_dividend = match stock_type {
        StockType::Preferred => required_f64(config, section, "fixed_dividend")?,
        StockType::Common => optional_f64(config, section, "fixed_dividend")?.unwrap_or(0.0),
    };
    if !(0.0..=1.0).contains(&fixed_dividend) {
        return Err(invalid(
            section,
            "fixed_dividend",
            "fixed_dividend must be between 0 and 1",
        ));
    }

    Ok(Stock::new(
        symbol,
        stock_type,
        par_value,
        last_dividend,
        fixed_dividend,
    ))
}

fn validate_vwsp_window(config: &dyn ConfigPort) -> Result<i64, GbceError> {
    if config.get_string(MARKET_SECTION, "vwsp_window_secs").is_none() {
        return Ok(VWSP_WINDOW_SECS);
    }
    let value = config.get_int(MARKET_SECTION, "vwsp_window_secs", 0);
    if value <= 0 {
        return Err(invalid(
            MARKET_SECTION,
            "vwsp_window_secs",
            "vwsp_window_secs must be a positive whole number of seconds",
        ));
    }
    Ok(value)
}

fn required(config: &dyn ConfigPort, section: &str, key: &str) -> Result<String, GbceError> {
    config
        .get_string(section, key)
        .ok_or_else(|| GbceError::ConfigMissing {
            section: section.to_string(),
            key: key.to_string(),
        })
}

fn required_f64(config: &dyn ConfigPort, section: &str, key: &str) -> Result<f64, GbceError> {
    optional_f64(config, section, key)?.ok_or_else(|| GbceError::ConfigMissing {
        section: section.to_string(),
        key: key.to_string(),
    })
}

fn optional_f64(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<Option<f64>, GbceError> {
    match config.get_string(section, key) {
        None => Ok(None),
        Some(s) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(invalid(section, key, &format!("'{s}' is not a number"))),
        },
    }
}

fn invalid(section: &str, key: &str, reason: &str) -> GbceError {
    GbceError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
