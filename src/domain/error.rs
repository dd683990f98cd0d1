//! Domain error types.

/// Errors raised by the market core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarketError {
    #[error("unknown stock: {symbol}")]
    UnknownStock { symbol: String },
}

/// Top-level error type for gbce.
#[derive(Debug, thiserror::Error)]
pub enum GbceError {
    #[error(transparent)]
    Market(#[from] MarketError),

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("trade data error: {reason}")]
    TradeData { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GbceError {
    /// Process exit status for this error.
    pub fn exit_status(&self) -> u8 {
        match self {
            GbceError::Io(_) => 1,
            GbceError::ConfigParse { .. }
            | GbceError::ConfigMissing { .. }
            | GbceError::ConfigInvalid { .. } => 2,
            GbceError::TradeData { .. } => 3,
            GbceError::Market(_) => 4,
        }
    }
}

impl From<&GbceError> for std::process::ExitCode {
    fn from(err: &GbceError) -> Self {
        std::process::ExitCode::from(err.exit_status())
    }
}
