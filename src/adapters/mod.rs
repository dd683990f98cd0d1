//! Concrete adapter implementations for ports.

pub mod csv_trade_adapter;
pub mod file_config_adapter;
pub mod random_trade_adapter;
