//! Error types for the invoice CLI.

use std::path::PathBuf;

use stockroom_core::CoreError;

use crate::config::ConfigError;

/// Invoice CLI errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid purchase lines in {}: {source}", .path.display())]
    PurchaseLines {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No tax configuration file given (use --config or STOCKROOM_TAX_CONFIG)")]
    MissingTaxConfig,

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
