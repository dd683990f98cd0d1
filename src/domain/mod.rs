//! Core domain types and logic.

pub mod stock;
pub mod trade;
pub mod market;
pub mod stats;
pub mod quote;
pub mod ledger_load;
pub mod config_validation;
pub mod error;
