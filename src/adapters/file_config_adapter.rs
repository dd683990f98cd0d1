//! INI file configuration adapter.
//!
//! Section and key names are case-sensitive so stock symbols keep their case.

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

/// The five GBCE sample stocks.
pub const DEFAULT_STOCKS_INI: &str = r#"
[market]
vwsp_window_secs = 900

[stock.TEA]
type = common
par_value = 100
last_dividend = 0

[stock.POP]
type = common
par_value = 100
last_dividend = 8

[stock.ALE]
type = common
par_value = 60
last_dividend = 23

[stock.GIN]
type = preferred
par_value = 100
last_dividend = 8
fixed_dividend = 0.02

[stock.JOE]
type = common
par_value = 250
last_dividend = 13
"#;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new_cs();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new_cs();
        config.read(content.to_string())?;
        Ok(Self { config })
    }

    /// Adapter over [`DEFAULT_STOCKS_INI`].
    pub fn standard() -> Result<Self, String> {
        Self::from_string(DEFAULT_STOCKS_INI)
    }
}

impl ConfigPort for FileConfigAdapter {
    fn sections(&self) -> Vec<String> {
        self.config.sections()
    }

    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config
            .getint(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn from_string_keeps_symbol_case() {
        let adapter =
            FileConfigAdapter::from_string("[stock.TEA]\ntype = common\n[stock.tea]\ntype = preferred\n")
                .unwrap();
        assert_eq!(
            adapter.get_string("stock.TEA", "type"),
            Some("common".to_string())
        );
        assert_eq!(
            adapter.get_string("stock.tea", "type"),
            Some("preferred".to_string())
        );
    }

    #[test]
    fn sections_lists_every_section() {
        let adapter = FileConfigAdapter::from_string(
            "[market]\nvwsp_window_secs = 900\n[stock.TEA]\npar_value = 100\n[stock.POP]\npar_value = 100\n",
        )
        .unwrap();
        let mut sections = adapter.sections();
        sections.sort();
        assert_eq!(sections, vec!["market", "stock.POP", "stock.TEA"]);
    }

    #[test]
    fn get_string_returns_none_for_missing_key() {
        let adapter = FileConfigAdapter::from_string("[stock.TEA]\npar_value = 100\n").unwrap();
        assert_eq!(adapter.get_string("stock.TEA", "missing"), None);
        assert_eq!(adapter.get_string("missing_section", "key"), None);
    }

    #[test]
    fn get_int_returns_value() {
        let adapter = FileConfigAdapter::from_string("[market]\nvwsp_window_secs = 300\n").unwrap();
        assert_eq!(adapter.get_int("market", "vwsp_window_secs", 0), 300);
    }

    #[test]
    fn get_int_returns_default_for_missing_or_non_numeric() {
        let adapter = FileConfigAdapter::from_string("[market]\nvwsp_window_secs = abc\n").unwrap();
        assert_eq!(adapter.get_int("market", "vwsp_window_secs", 42), 42);
        assert_eq!(adapter.get_int("market", "missing", 7), 7);
    }

    #[test]
    fn standard_table_has_five_stocks() {
        let adapter = FileConfigAdapter::standard().unwrap();
        let stocks = adapter
            .sections()
            .into_iter()
            .filter(|s| s.starts_with("stock."))
            .count();
        assert_eq!(stocks, 5);
        assert_eq!(
            adapter.get_string("stock.GIN", "fixed_dividend"),
            Some("0.02".to_string())
        );
    }

    #[test]
    fn from_file_reads_config() {
        let file = create_temp_config("[stock.JOE]\npar_value = 250\n");
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("stock.JOE", "par_value"),
            Some("250".to_string())
        );
    }

    #[test]
    fn from_file_returns_error_for_missing_file() {
        let result = FileConfigAdapter::from_file("/nonexistent/path/market.ini");
        assert!(result.is_err());
    }
}
