//! # Stockroom Invoice Preview
//!
//! Command-line front-end for the stockroom tax engine.
//!
//! ## Usage
//! ```text
//! invoice-preview preview  --config tax.json --subtotal 1000 --currency ₹
//! invoice-preview preview  --config tax.json --items purchase.json --output json
//! invoice-preview validate --config tax.json
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr, so stdout stays pipeable)
//! 2. Load configuration from the environment
//! 3. Apply command-line overrides
//! 4. Run the command

#![forbid(unsafe_code)]

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use commands::preview::SubtotalSource;
use config::{CliConfig, OutputFormat};
use error::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "invoice-preview",
    version,
    about = "Price purchases against a Stockroom tax configuration"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// Currency symbol for formatted amounts
    #[arg(long, global = true)]
    currency: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the invoice breakdown for a subtotal or purchase lines
    Preview {
        /// Tax configuration JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pre-tax subtotal
        #[arg(long, conflicts_with = "items", required_unless_present = "items")]
        subtotal: Option<Decimal>,

        /// JSON array of purchase lines ({ "quantity", "unitCost" })
        #[arg(long)]
        items: Option<PathBuf>,
    },

    /// Check a tax configuration against the settings rules
    Validate {
        /// Tax configuration JSON file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            error!(error = %err, "invoice-preview failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let settings = load_settings(&cli, |name| std::env::var(name).ok())?;
    debug!(?settings, "Configuration loaded");

    match cli.command {
        Commands::Preview {
            config,
            subtotal,
            items,
        } => {
            let path = commands::resolve_config_path(config, &settings)?;
            let tax_config = commands::load_tax_config(&path)?;

            let source = match (subtotal, items) {
                (Some(amount), _) => SubtotalSource::Amount(amount),
                (None, Some(items)) => SubtotalSource::Lines(commands::load_purchase_lines(&items)?),
                (None, None) => anyhow::bail!("either --subtotal or --items is required"),
            };

            commands::preview::run(
                &tax_config,
                &source,
                &settings.currency_symbol,
                settings.output,
            )?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { config } => {
            let path = commands::resolve_config_path(config, &settings)?;
            let tax_config = commands::load_tax_config(&path)?;

            let valid = commands::validate::run(&tax_config, settings.output)?;
            Ok(if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

/// Environment configuration with the global flags applied on top.
fn load_settings<F>(cli: &Cli, lookup: F) -> Result<CliConfig, CliError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = CliConfig::from_lookup(lookup)?;
    if let Some(output) = cli.output {
        settings.output = output;
    }
    if let Some(currency) = &cli.currency {
        settings.currency_symbol = currency.clone();
    }
    Ok(settings)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_core=debug` - Settings and engine crate only
/// - Default: INFO everywhere, DEBUG for our crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockroom_core=debug,invoice_preview=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
