//! # Validate Command
//!
//! Runs the advisory tax configuration checks an administrator would hit
//! when saving settings.

use stockroom_core::{validate_tax_config, TaxConfigValidation, TaxConfiguration};
use tracing::info;

use crate::config::OutputFormat;
use crate::error::CliError;

/// Renders the report as plain text, one message per line.
pub fn render_human(report: &TaxConfigValidation) -> String {
    if report.is_valid {
        return "Tax configuration is valid\n".to_string();
    }

    let mut out = format!("Tax configuration has {} problem(s):\n", report.errors.len());
    for error in &report.errors {
        out.push_str(&format!("  - {error}\n"));
    }
    out
}

/// Validates `config`, prints the report and returns whether it passed.
pub fn run(config: &TaxConfiguration, output: OutputFormat) -> Result<bool, CliError> {
    let report = validate_tax_config(Some(config));
    info!(
        is_valid = report.is_valid,
        errors = report.errors.len(),
        "Tax configuration validated"
    );

    match output {
        OutputFormat::Human => print!("{}", render_human(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(report.is_valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use stockroom_core::OtherTax;

    #[test]
    fn test_render_valid() {
        let report = validate_tax_config(Some(&TaxConfiguration::default()));
        assert_eq!(render_human(&report), "Tax configuration is valid\n");
    }

    #[test]
    fn test_render_lists_each_problem() {
        let config = TaxConfiguration {
            other_taxes: vec![
                OtherTax::percentage("", dec!(1)),
                OtherTax::fixed("Levy", dec!(-2)),
            ],
            ..TaxConfiguration::default()
        };
        let text = render_human(&validate_tax_config(Some(&config)));

        assert!(text.starts_with("Tax configuration has 2 problem(s):"));
        assert!(text.contains("  - Tax 1: name is required\n"));
        assert!(text.contains("  - Tax 2: rate cannot be negative\n"));
    }
}
