//! CLI definition and dispatch.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_trade_adapter::CsvTradeAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::random_trade_adapter::RandomTradeGenerator;
use crate::domain::config_validation::build_market;
use crate::domain::error::GbceError;
use crate::domain::ledger_load::populate_ledger;
use crate::domain::market::Market;
use crate::domain::quote::StockQuote;
use crate::domain::trade::Trade;

/// Span of generated demo trades, ending at the as-of time.
pub const DEMO_SPAN_SECS: i64 = 1900;

#[derive(Parser, Debug)]
#[command(name = "gbce", about = "Stock market analytics: dividend yield, P/E, VWSP and index")]
pub struct Cli {
    #[command(flatten)]
    pub market: MarketArgs,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, Default)]
pub struct MarketArgs {
    /// INI file with stock definitions (defaults to the built-in GBCE table)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// CSV file of trades: symbol,timestamp,side,quantity,price
    #[arg(short, long, global = true)]
    pub trades: Option<PathBuf>,
    /// Generate random demo trades
    #[arg(long, global = true)]
    pub demo: bool,
    /// Seed for demo trade generation
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// Evaluation time in seconds since the epoch (defaults to now)
    #[arg(long, global = true)]
    pub as_of: Option<i64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dividend yield, P/E ratio and VWSP for one stock
    Quote {
        #[arg(short, long)]
        symbol: String,
        #[arg(short, long, value_parser = parse_price)]
        price: f64,
    },
    /// Composite index across all stocks
    Index,
    /// List recent trades for a stock, newest first
    Trades {
        #[arg(short, long)]
        symbol: String,
        /// Earliest timestamp (defaults to the start of the VWSP window)
        #[arg(long)]
        since: Option<i64>,
    },
    /// List registered stocks
    Stocks,
    /// Validate a stock configuration
    Validate,
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Validate => run_validate(&cli.market),
        command => run_query(&cli.market, command),
    };

    match result {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_query(args: &MarketArgs, command: Command) -> Result<String, GbceError> {
    let as_of = resolve_as_of(args);
    let market = load_market(args, as_of)?;

    match command {
        Command::Quote { symbol, price } => {
            let quote = market.quote(&symbol, price, as_of)?;
            Ok(format_quote(&quote))
        }
        Command::Index => Ok(format_index(market.composite_index(as_of))),
        Command::Trades { symbol, since } => {
            if !market.known_stock(&symbol) {
                log::warn!("{symbol} is not a registered stock");
            }
            let since = since.unwrap_or_else(|| market.window_start(as_of));
            Ok(format_trades(&symbol, &market.trades_since(&symbol, since)))
        }
        Command::Stocks => Ok(format_stock_table(&market, as_of)),
        Command::Validate => run_validate(args),
    }
}

fn run_validate(args: &MarketArgs) -> Result<String, GbceError> {
    let market = build_market(&resolve_config(args.config.as_ref())?)?;
    Ok(format!(
        "OK: {} stocks, VWSP window {}s\n",
        market.stock_count(),
        market.vwsp_window_secs()
    ))
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, GbceError> {
    log::info!("loading config from {}", path.display());
    FileConfigAdapter::from_file(path).map_err(|e| GbceError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn resolve_config(path: Option<&PathBuf>) -> Result<FileConfigAdapter, GbceError> {
    match path {
        Some(p) => load_config(p),
        None => FileConfigAdapter::standard().map_err(|reason| GbceError::ConfigParse {
            file: "<built-in>".to_string(),
            reason,
        }),
    }
}

pub fn resolve_as_of(args: &MarketArgs) -> i64 {
    args.as_of.unwrap_or_else(|| chrono::Utc::now().timestamp())
}

/// Build the market from config, then load trades from the CSV file and/or
/// the demo generator.
pub fn load_market(args: &MarketArgs, as_of: i64) -> Result<Market, GbceError> {
    let mut market = build_market(&resolve_config(args.config.as_ref())?)?;
    log::info!("registered {} stocks", market.stock_count());

    if let Some(path) = &args.trades {
        populate_ledger(&mut market, &CsvTradeAdapter::new(path.clone()))?;
    }

    if args.demo {
        let mut generator = RandomTradeGenerator::new(market.stocks())
            .between(as_of.saturating_sub(DEMO_SPAN_SECS).max(0), as_of);
        if let Some(seed) = args.seed {
            generator = generator.seed(seed);
        }
        populate_ledger(&mut market, &generator)?;
    }

    Ok(market)
}

pub fn parse_price(s: &str) -> Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(p) if p > 0.0 && p.is_finite() => Ok(p),
        _ => Err("price must be a positive numeric value".to_string()),
    }
}

pub fn format_quote(quote: &StockQuote) -> String {
    format!(
        "For stock {}\n\
         PE Ratio        = {:.1}\n\
         Dividend Yield  = {:.3}\n\
         VWSP            = {:.1}\n",
        quote.symbol, quote.pe_ratio, quote.dividend_yield, quote.vwsp
    )
}

pub fn format_index(index: f64) -> String {
    format!("GBCE Index  = {index:.1}\n")
}

pub fn format_trades(symbol: &str, trades: &[&Trade]) -> String {
    if trades.is_empty() {
        return format!("No trades for {symbol}\n");
    }
    let mut out = format!(
        "{:<20} {:>12} {:<4} {:>8} {:>12}\n",
        "Time (UTC)", "Timestamp", "Side", "Qty", "Price"
    );
    for trade in trades {
        out.push_str(&format!(
            "{:<20} {:>12} {:<4} {:>8} {:>12.2}\n",
            format_timestamp(trade.timestamp()),
            trade.timestamp(),
            trade.side(),
            trade.quantity(),
            trade.price()
        ));
    }
    out
}

pub fn format_stock_table(market: &Market, as_of: i64) -> String {
    let mut stocks: Vec<_> = market.stocks().collect();
    stocks.sort_by(|a, b| a.symbol().cmp(b.symbol()));

    let mut out = format!(
        "{:<8} {:<10} {:>10} {:>10} {:>10} {:>10}\n",
        "Symbol", "Type", "Par", "Last Div", "Fixed Div", "VWSP"
    );
    for stock in stocks {
        out.push_str(&format!(
            "{:<8} {:<10} {:>10.2} {:>10.2} {:>9.1}% {:>10.1}\n",
            stock.symbol(),
            stock.stock_type().to_string(),
            stock.par_value(),
            stock.last_dividend(),
            stock.fixed_dividend() * 100.0,
            market.volume_weighted_stock_price(stock.symbol(), as_of)
        ));
    }
    out
}

fn format_timestamp(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}
