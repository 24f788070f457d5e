//! # Validation Module
//!
//! Input validation for tax settings and purchase lines.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Settings form (web client)                                   │
//! │  └── Immediate feedback while typing                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Before persisting a configuration change                     │
//! │  └── THIS MODULE: validate_tax_config → list of messages               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Calculator                                                   │
//! │  └── Never validates; degrades to zero for anything it can't price     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use stockroom_core::{validate_tax_config, GstConfig, TaxConfiguration};
//!
//! let config = TaxConfiguration {
//!     gst: GstConfig::exclusive(Decimal::from(150)),
//!     ..TaxConfiguration::default()
//! };
//!
//! let report = validate_tax_config(Some(&config));
//! assert!(!report.is_valid);
//! assert_eq!(report.errors, vec!["GST rate must be between 0 and 100"]);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{TaxConfigIssue, ValidationError};
use crate::types::TaxConfiguration;
use crate::MAX_GST_RATE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Tax Configuration
// =============================================================================

/// Outcome of [`validate_tax_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxConfigValidation {
    pub is_valid: bool,

    /// Human-readable messages, in rule order.
    pub errors: Vec<String>,
}

impl From<Vec<TaxConfigIssue>> for TaxConfigValidation {
    fn from(issues: Vec<TaxConfigIssue>) -> Self {
        TaxConfigValidation {
            is_valid: issues.is_empty(),
            errors: issues.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Checks a configuration against every rule and reports each broken one.
///
/// ## Rules
/// - Configuration must be present
/// - GST (when enabled): rate in 0..=100, type inclusive or exclusive
/// - Platform fee (when enabled): rate >= 0, type percentage or fixed
/// - Every custom tax, enabled or not: non-blank name, rate >= 0,
///   type percentage or fixed
pub fn tax_config_issues(tax_config: Option<&TaxConfiguration>) -> Vec<TaxConfigIssue> {
    let Some(config) = tax_config else {
        return vec![TaxConfigIssue::Missing];
    };

    let mut issues = Vec::new();

    if config.gst.enabled {
        if config.gst.rate < Decimal::ZERO || config.gst.rate > Decimal::from(MAX_GST_RATE) {
            issues.push(TaxConfigIssue::GstRateOutOfRange);
        }
        if !config.gst.kind.is_known() {
            issues.push(TaxConfigIssue::GstTypeInvalid);
        }
    }

    if config.platform_fee.enabled {
        if config.platform_fee.rate < Decimal::ZERO {
            issues.push(TaxConfigIssue::PlatformFeeRateNegative);
        }
        if !config.platform_fee.kind.is_known() {
            issues.push(TaxConfigIssue::PlatformFeeTypeInvalid);
        }
    }

    for (position, tax) in config.other_taxes.iter().enumerate() {
        let index = position + 1;

        if tax.name.trim().is_empty() {
            issues.push(TaxConfigIssue::OtherTaxNameRequired { index });
        }
        if tax.rate < Decimal::ZERO {
            issues.push(TaxConfigIssue::OtherTaxRateNegative { index });
        }
        if !tax.kind.is_known() {
            issues.push(TaxConfigIssue::OtherTaxTypeInvalid { index });
        }
    }

    issues
}

/// Advisory check run before a configuration change is saved.
///
/// The calculator never calls this; see [`tax_config_issues`] for the rules.
pub fn validate_tax_config(tax_config: Option<&TaxConfiguration>) -> TaxConfigValidation {
    tax_config_issues(tax_config).into()
}

// =============================================================================
// Identity Validators
// =============================================================================

/// Validates a tenant or user identifier.
///
/// ## Rules
/// - Must not be empty after trimming
pub fn validate_identifier(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Purchase Line Validators
// =============================================================================

/// Validates a purchase line quantity.
///
/// ## Rules
/// - Must be positive (> 0); fractional quantities are allowed (kg, litres)
pub fn validate_quantity(quantity: Decimal) -> ValidationResult<()> {
    if quantity <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit cost.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free samples)
pub fn validate_unit_cost(unit_cost: Decimal) -> ValidationResult<()> {
    if unit_cost < Decimal::ZERO {
        return Err(ValidationError::Negative {
            field: "unit cost".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChargeType, GstConfig, GstType, OtherTax, PlatformFeeConfig};
    use rust_decimal_macros::dec;

    #[test]
    fn test_missing_config_is_invalid() {
        let report = validate_tax_config(None);
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["Tax configuration is required"]);
    }

    #[test]
    fn test_default_config_is_valid() {
        let report = validate_tax_config(Some(&TaxConfiguration::default()));
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_gst_rate_bounds() {
        for (rate, valid) in [
            (dec!(0), true),
            (dec!(18), true),
            (dec!(100), true),
            (dec!(100.01), false),
            (dec!(150), false),
            (dec!(-1), false),
        ] {
            let config = TaxConfiguration {
                gst: GstConfig::exclusive(rate),
                ..TaxConfiguration::default()
            };
            let report = validate_tax_config(Some(&config));
            assert_eq!(report.is_valid, valid, "rate {rate}");
            if !valid {
                assert!(report.errors[0].contains("between 0 and 100"));
            }
        }
    }

    #[test]
    fn test_disabled_gst_is_not_checked() {
        let config = TaxConfiguration {
            gst: GstConfig {
                enabled: false,
                ..GstConfig::exclusive(dec!(150))
            },
            ..TaxConfiguration::default()
        };
        assert!(validate_tax_config(Some(&config)).is_valid);
    }

    #[test]
    fn test_unknown_types_are_reported() {
        let config = TaxConfiguration {
            gst: GstConfig {
                kind: GstType::Unknown("compound".to_string()),
                ..GstConfig::exclusive(dec!(5))
            },
            platform_fee: PlatformFeeConfig {
                kind: ChargeType::Unknown("tiered".to_string()),
                ..PlatformFeeConfig::fixed(dec!(2))
            },
            other_taxes: vec![OtherTax {
                kind: ChargeType::Unknown("tiered".to_string()),
                ..OtherTax::fixed("Eco", dec!(1))
            }],
        };

        let issues = tax_config_issues(Some(&config));
        assert_eq!(
            issues,
            vec![
                TaxConfigIssue::GstTypeInvalid,
                TaxConfigIssue::PlatformFeeTypeInvalid,
                TaxConfigIssue::OtherTaxTypeInvalid { index: 1 },
            ]
        );
    }

    #[test]
    fn test_negative_platform_fee() {
        let config = TaxConfiguration {
            platform_fee: PlatformFeeConfig::percentage(dec!(-2)),
            ..TaxConfiguration::default()
        };
        let report = validate_tax_config(Some(&config));
        assert_eq!(report.errors, vec!["Platform fee rate cannot be negative"]);
    }

    #[test]
    fn test_other_tax_blank_name_is_indexed() {
        let config = TaxConfiguration {
            other_taxes: vec![
                OtherTax::percentage("Cess", dec!(1)),
                OtherTax::percentage("   ", dec!(2)),
                OtherTax::fixed("", dec!(3)),
            ],
            ..TaxConfiguration::default()
        };

        let report = validate_tax_config(Some(&config));
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec!["Tax 2: name is required", "Tax 3: name is required"]
        );
    }

    #[test]
    fn test_disabled_other_taxes_are_still_checked() {
        let config = TaxConfiguration {
            other_taxes: vec![OtherTax::fixed("Old levy", dec!(-4)).disabled()],
            ..TaxConfiguration::default()
        };

        let report = validate_tax_config(Some(&config));
        assert_eq!(report.errors, vec!["Tax 1: rate cannot be negative"]);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let value = serde_json::to_value(validate_tax_config(None)).unwrap();
        assert_eq!(value["isValid"], serde_json::Value::Bool(false));
        assert_eq!(value["errors"][0], "Tax configuration is required");
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("tenant_id", "tenant-42").is_ok());
        assert!(validate_identifier("tenant_id", "").is_err());
        assert!(validate_identifier("tenant_id", "   ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(dec!(1)).is_ok());
        assert!(validate_quantity(dec!(0.25)).is_ok());
        assert!(validate_quantity(Decimal::ZERO).is_err());
        assert!(validate_quantity(dec!(-3)).is_err());
    }

    #[test]
    fn test_validate_unit_cost() {
        assert!(validate_unit_cost(Decimal::ZERO).is_ok());
        assert!(validate_unit_cost(dec!(10.99)).is_ok());
        assert!(validate_unit_cost(dec!(-0.01)).is_err());
    }
}
