//! Port traits: the seams between the market core and its adapters.

pub mod config_port;
pub mod trade_source;
