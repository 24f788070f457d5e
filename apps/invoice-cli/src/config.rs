//! # CLI Configuration
//!
//! Settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--currency`, `--output`, `--config`)
//! 2. Environment variables (`STOCKROOM_*`)
//! 3. Defaults (this file)

use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use stockroom_core::DEFAULT_CURRENCY_SYMBOL;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned invoice table.
    #[default]
    Human,
    /// Pretty-printed JSON for scripts.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("STOCKROOM_OUTPUT".to_string())),
        }
    }
}

/// Invoice CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Prefix for formatted amounts.
    pub currency_symbol: String,

    /// Tax configuration document used when `--config` is not given.
    pub tax_config_path: Option<PathBuf>,

    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            tax_config_path: None,
            output: OutputFormat::Human,
        }
    }
}

impl CliConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_CURRENCY_SYMBOL`: e.g. "₹"
    /// - `STOCKROOM_TAX_CONFIG`: path to a tax configuration JSON file
    /// - `STOCKROOM_OUTPUT`: "human" or "json"
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CliConfig::default();

        if let Some(symbol) = lookup("STOCKROOM_CURRENCY_SYMBOL") {
            if symbol.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "STOCKROOM_CURRENCY_SYMBOL".to_string(),
                ));
            }
            config.currency_symbol = symbol.trim().to_string();
        }

        if let Some(path) = lookup("STOCKROOM_TAX_CONFIG") {
            if !path.trim().is_empty() {
                config.tax_config_path = Some(PathBuf::from(path.trim()));
            }
        }

        if let Some(output) = lookup("STOCKROOM_OUTPUT") {
            config.output = output.parse()?;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_env_overrides() {
        let config = CliConfig::from_lookup(lookup_from(&[
            ("STOCKROOM_CURRENCY_SYMBOL", "₹"),
            ("STOCKROOM_TAX_CONFIG", "/etc/stockroom/tax.json"),
            ("STOCKROOM_OUTPUT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(
            config.tax_config_path,
            Some(PathBuf::from("/etc/stockroom/tax.json"))
        );
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_output_is_rejected() {
        let err = CliConfig::from_lookup(lookup_from(&[("STOCKROOM_OUTPUT", "xml")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STOCKROOM_OUTPUT");
    }

    #[test]
    fn test_blank_currency_is_rejected() {
        assert!(
            CliConfig::from_lookup(lookup_from(&[("STOCKROOM_CURRENCY_SYMBOL", " ")])).is_err()
        );
    }
}
