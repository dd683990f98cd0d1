//! gbce — a small stock exchange: stock registry, time-ordered trade ledger and
//! market analytics (dividend yield, P/E ratio, VWSP, composite index).
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`], command-line front end in [`cli`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
