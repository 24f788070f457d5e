//! # CLI Commands
//!
//! ```text
//! invoice-preview
//! ├── preview   ◄─── price a subtotal or purchase lines, print breakdown
//! └── validate  ◄─── check a tax configuration before saving it
//! ```
//!
//! Shared file loading lives here; each command module owns its rendering.

pub mod preview;
pub mod validate;

use std::fs;
use std::path::{Path, PathBuf};

use stockroom_core::{validate_purchase_lines, PurchaseLine, TaxConfiguration};
use tracing::debug;

use crate::config::CliConfig;
use crate::error::CliError;

/// Picks the `--config` flag, falling back to `STOCKROOM_TAX_CONFIG`.
pub fn resolve_config_path(flag: Option<PathBuf>, config: &CliConfig) -> Result<PathBuf, CliError> {
    flag.or_else(|| config.tax_config_path.clone())
        .ok_or(CliError::MissingTaxConfig)
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a tax configuration document.
pub fn load_tax_config(path: &Path) -> Result<TaxConfiguration, CliError> {
    let json = read_file(path)?;
    let config = TaxConfiguration::from_json(&json)?;

    debug!(
        path = %path.display(),
        other_taxes = config.other_taxes.len(),
        "Loaded tax configuration"
    );
    Ok(config)
}

/// Reads a JSON array of purchase lines and checks each one.
pub fn load_purchase_lines(path: &Path) -> Result<Vec<PurchaseLine>, CliError> {
    let json = read_file(path)?;
    let lines: Vec<PurchaseLine> =
        serde_json::from_str(&json).map_err(|source| CliError::PurchaseLines {
            path: path.to_path_buf(),
            source,
        })?;
    validate_purchase_lines(&lines)?;

    debug!(path = %path.display(), lines = lines.len(), "Loaded purchase lines");
    Ok(lines)
}
