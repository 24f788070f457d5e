//! # Preview Command
//!
//! Prices a subtotal (or a list of purchase lines) under a tax configuration
//! and prints the invoice breakdown.
//!
//! The calculator accepts configurations that would fail validation, the
//! same way invoices are still produced for legacy settings. Broken rules
//! are reported as warnings next to the invoice instead of aborting it.

use rust_decimal::Decimal;
use serde::Serialize;
use stockroom_core::{
    calculate_taxes, format_tax_breakdown, purchase_subtotal, validate_tax_config, BreakdownLine,
    PurchaseLine, TaxCalculationResult, TaxConfiguration,
};
use tracing::{info, warn};

use crate::config::OutputFormat;
use crate::error::CliError;

/// Where the subtotal comes from.
#[derive(Debug, Clone)]
pub enum SubtotalSource {
    Amount(Decimal),
    Lines(Vec<PurchaseLine>),
}

impl SubtotalSource {
    fn subtotal(&self) -> Decimal {
        match self {
            SubtotalSource::Amount(amount) => *amount,
            SubtotalSource::Lines(lines) => purchase_subtotal(lines),
        }
    }
}

/// Everything the preview prints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewReport {
    pub result: TaxCalculationResult,
    pub breakdown: Vec<BreakdownLine>,
    pub warnings: Vec<String>,
}

/// Computes the preview without printing anything.
pub fn build_preview(
    config: &TaxConfiguration,
    source: &SubtotalSource,
    currency_symbol: &str,
) -> PreviewReport {
    let result = calculate_taxes(source.subtotal(), Some(config));
    let breakdown = format_tax_breakdown(&result, currency_symbol);
    let warnings = validate_tax_config(Some(config)).errors;

    PreviewReport {
        result,
        breakdown,
        warnings,
    }
}

/// Renders the aligned invoice table.
pub fn render_human(report: &PreviewReport) -> String {
    let width = report
        .breakdown
        .iter()
        .map(|line| line.label.chars().count())
        .max()
        .unwrap_or(0)
        .max(12);
    let amount_width = report
        .breakdown
        .iter()
        .map(|line| line.formatted.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for line in &report.breakdown {
        if line.is_total_tax || line.is_grand_total {
            out.push_str(&"-".repeat(width + amount_width + 2));
            out.push('\n');
        }
        out.push_str(&format!(
            "{:<width$}  {:>amount_width$}\n",
            line.label, line.formatted
        ));
    }

    for warning in &report.warnings {
        out.push_str(&format!("warning: {warning}\n"));
    }

    out
}

/// Runs the command and writes the report to stdout.
pub fn run(
    config: &TaxConfiguration,
    source: &SubtotalSource,
    currency_symbol: &str,
    output: OutputFormat,
) -> Result<(), CliError> {
    let report = build_preview(config, source, currency_symbol);

    for warning in &report.warnings {
        warn!(%warning, "Tax configuration would fail validation");
    }
    info!(
        subtotal = %report.result.subtotal,
        total_tax = %report.result.total_tax,
        grand_total = %report.result.grand_total,
        "Invoice priced"
    );

    match output {
        OutputFormat::Human => print!("{}", render_human(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
