//! # Tax Calculator
//!
//! Turns a subtotal and a tenant's [`TaxConfiguration`] into a
//! [`TaxCalculationResult`].
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate_taxes(subtotal, config)                                      │
//! │                                                                         │
//! │  config absent or subtotal <= 0 ──────────────► untaxed(subtotal)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GST          exclusive: subtotal × r / 100        → added to total    │
//! │               inclusive: subtotal × r / (100 + r)  → NOT added         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Platform fee percentage: subtotal × r / 100 | fixed: r → added        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Other taxes  enabled entries only, in order      → each added         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  totalTax   = gst + fee + Σ other     (includes inclusive GST)         │
//! │  grandTotal = subtotal + additive amounts                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! The calculator never fails and never logs. A `type` outside the known set
//! contributes zero for its line; [`validate_tax_config`] is where such
//! configurations get rejected.
//!
//! [`validate_tax_config`]: crate::validate_tax_config

use rust_decimal::Decimal;

use crate::money::{inclusive_portion, percentage_of};
use crate::types::{AppliedTax, ChargeType, GstType, TaxCalculationResult, TaxConfiguration};

/// Prices `subtotal` under `tax_config`.
///
/// Safe to call unconditionally: with no configuration, or an empty cart,
/// the result carries no tax and a grand total equal to the subtotal.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use stockroom_core::{calculate_taxes, GstConfig, TaxConfiguration};
///
/// let config = TaxConfiguration {
///     gst: GstConfig::inclusive(Decimal::from(18)),
///     ..TaxConfiguration::default()
/// };
///
/// let result = calculate_taxes(Decimal::from(118), Some(&config));
/// assert_eq!(result.gst, Decimal::from(18));
/// assert_eq!(result.grand_total, Decimal::from(118)); // already inside the subtotal
/// ```
pub fn calculate_taxes(
    subtotal: Decimal,
    tax_config: Option<&TaxConfiguration>,
) -> TaxCalculationResult {
    let config = match tax_config {
        Some(config) if subtotal > Decimal::ZERO => config,
        _ => return TaxCalculationResult::untaxed(subtotal),
    };

    let mut grand_total = subtotal;

    let mut gst = Decimal::ZERO;
    if config.gst.enabled {
        match &config.gst.kind {
            GstType::Exclusive => {
                gst = percentage_of(subtotal, config.gst.rate);
                grand_total = grand_total.saturating_add(gst);
            }
            GstType::Inclusive => {
                gst = inclusive_portion(subtotal, config.gst.rate);
            }
            GstType::Unknown(_) => {}
        }
    }

    let mut platform_fee = Decimal::ZERO;
    if config.platform_fee.enabled {
        platform_fee = charge_amount(
            subtotal,
            config.platform_fee.rate,
            &config.platform_fee.kind,
        );
        grand_total = grand_total.saturating_add(platform_fee);
    }

    let other_taxes: Vec<AppliedTax> = config
        .other_taxes
        .iter()
        .filter(|tax| tax.enabled)
        .map(|tax| AppliedTax {
            name: tax.name.clone(),
            rate: tax.rate,
            kind: tax.kind.clone(),
            amount: charge_amount(subtotal, tax.rate, &tax.kind),
        })
        .collect();

    let mut total_tax = gst.saturating_add(platform_fee);
    for tax in &other_taxes {
        total_tax = total_tax.saturating_add(tax.amount);
        grand_total = grand_total.saturating_add(tax.amount);
    }

    TaxCalculationResult {
        subtotal,
        gst,
        platform_fee,
        other_taxes,
        total_tax,
        grand_total,
    }
}

/// Amount for a percentage or fixed charge.
fn charge_amount(subtotal: Decimal, rate: Decimal, kind: &ChargeType) -> Decimal {
    match kind {
        ChargeType::Percentage => percentage_of(subtotal, rate),
        ChargeType::Fixed => rate,
        ChargeType::Unknown(_) => Decimal::ZERO,
    }
}

impl TaxConfiguration {
    /// Shorthand for [`calculate_taxes`] with this configuration.
    pub fn calculate(&self, subtotal: Decimal) -> TaxCalculationResult {
        calculate_taxes(subtotal, Some(self))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GstConfig, OtherTax, PlatformFeeConfig};
    use rust_decimal_macros::dec;

    fn gst_only(gst: GstConfig) -> TaxConfiguration {
        TaxConfiguration {
            gst,
            ..TaxConfiguration::default()
        }
    }

    #[test]
    fn test_no_config_is_untaxed() {
        for subtotal in [Decimal::ZERO, dec!(1), dec!(99.99), dec!(1000000)] {
            let result = calculate_taxes(subtotal, None);
            assert_eq!(result.grand_total, subtotal);
            assert_eq!(result.total_tax, Decimal::ZERO);
            assert!(result.other_taxes.is_empty());
        }
    }

    #[test]
    fn test_all_disabled_is_untaxed() {
        let config = TaxConfiguration {
            gst: GstConfig {
                enabled: false,
                ..GstConfig::exclusive(dec!(18))
            },
            platform_fee: PlatformFeeConfig {
                enabled: false,
                ..PlatformFeeConfig::fixed(dec!(5))
            },
            other_taxes: vec![OtherTax::percentage("Cess", dec!(1)).disabled()],
        };

        let result = config.calculate(dec!(250));
        assert_eq!(result, TaxCalculationResult::untaxed(dec!(250)));
    }

    #[test]
    fn test_non_positive_subtotal_is_untaxed() {
        let config = TaxConfiguration {
            platform_fee: PlatformFeeConfig::fixed(dec!(5)),
            ..gst_only(GstConfig::exclusive(dec!(18)))
        };

        let empty = config.calculate(Decimal::ZERO);
        assert_eq!(empty, TaxCalculationResult::untaxed(Decimal::ZERO));

        let refund = config.calculate(dec!(-20));
        assert_eq!(refund.platform_fee, Decimal::ZERO);
        assert_eq!(refund.grand_total, dec!(-20));
    }

    #[test]
    fn test_exclusive_gst_is_added() {
        let result = gst_only(GstConfig::exclusive(dec!(18))).calculate(dec!(100));
        assert_eq!(result.gst, dec!(18));
        assert_eq!(result.total_tax, dec!(18));
        assert_eq!(result.grand_total, dec!(118));
    }

    #[test]
    fn test_inclusive_gst_is_not_double_counted() {
        let result = gst_only(GstConfig::inclusive(dec!(18))).calculate(dec!(118));
        assert_eq!(result.gst, dec!(18));
        assert_eq!(result.total_tax, dec!(18));
        assert_eq!(result.grand_total, dec!(118));
        assert_eq!(result.subtotal - result.gst, dec!(100));
    }

    #[test]
    fn test_fixed_platform_fee_independent_of_subtotal() {
        let config = TaxConfiguration {
            platform_fee: PlatformFeeConfig::fixed(dec!(5)),
            ..TaxConfiguration::default()
        };

        for subtotal in [dec!(1), dec!(100), dec!(123456.78)] {
            let result = config.calculate(subtotal);
            assert_eq!(result.platform_fee, dec!(5));
            assert_eq!(result.grand_total, subtotal + dec!(5));
        }
    }

    #[test]
    fn test_percentage_platform_fee() {
        let config = TaxConfiguration {
            platform_fee: PlatformFeeConfig::percentage(dec!(2.5)),
            ..TaxConfiguration::default()
        };

        let result = config.calculate(dec!(200));
        assert_eq!(result.platform_fee, dec!(5));
        assert_eq!(result.grand_total, dec!(205));
    }

    #[test]
    fn test_other_taxes_filtered_in_order() {
        let config = TaxConfiguration {
            other_taxes: vec![
                OtherTax::percentage("A", dec!(5)).disabled(),
                OtherTax::percentage("B", dec!(10)),
                OtherTax::fixed("C", dec!(3)),
            ],
            ..TaxConfiguration::default()
        };

        let result = config.calculate(dec!(100));
        let names: Vec<&str> = result.other_taxes.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
        assert_eq!(result.other_taxes[0].amount, dec!(10));
        assert_eq!(result.other_taxes[0].kind, ChargeType::Percentage);
        assert_eq!(result.other_taxes[1].amount, dec!(3));
        assert_eq!(result.other_taxes_total(), dec!(13));
        assert_eq!(result.grand_total, dec!(113));
    }

    #[test]
    fn test_combined_invoice() {
        let config = TaxConfiguration {
            gst: GstConfig::exclusive(dec!(18)),
            platform_fee: PlatformFeeConfig::percentage(dec!(2)),
            other_taxes: vec![OtherTax::fixed("VAT", dec!(50))],
        };

        let result = config.calculate(dec!(1000));
        assert_eq!(result.subtotal, dec!(1000));
        assert_eq!(result.gst, dec!(180));
        assert_eq!(result.platform_fee, dec!(20));
        assert_eq!(result.other_taxes.len(), 1);
        assert_eq!(result.other_taxes[0].name, "VAT");
        assert_eq!(result.other_taxes[0].amount, dec!(50));
        assert_eq!(result.total_tax, dec!(250));
        assert_eq!(result.grand_total, dec!(1250));
    }

    #[test]
    fn test_inclusive_gst_with_additive_charges() {
        let config = TaxConfiguration {
            gst: GstConfig::inclusive(dec!(18)),
            platform_fee: PlatformFeeConfig::fixed(dec!(10)),
            other_taxes: vec![OtherTax::percentage("Cess", dec!(1))],
        };

        let result = config.calculate(dec!(118));
        assert_eq!(result.gst, dec!(18));
        assert_eq!(result.total_tax, dec!(18) + dec!(10) + dec!(1.18));
        assert_eq!(result.grand_total, dec!(118) + dec!(10) + dec!(1.18));
    }

    #[test]
    fn test_unknown_types_contribute_nothing() {
        let config = TaxConfiguration::from_json(
            r#"{
                "gst": { "enabled": true, "rate": 18, "type": "compound" },
                "platformFee": { "enabled": true, "rate": 7, "type": "tiered" },
                "otherTaxes": [{ "name": "Eco", "enabled": true, "rate": 3, "type": "per-unit" }]
            }"#,
        )
        .unwrap();

        let result = config.calculate(dec!(100));
        assert_eq!(result.gst, Decimal::ZERO);
        assert_eq!(result.platform_fee, Decimal::ZERO);
        assert_eq!(result.other_taxes.len(), 1);
        assert_eq!(result.other_taxes[0].amount, Decimal::ZERO);
        assert_eq!(result.grand_total, dec!(100));
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let config = TaxConfiguration {
            gst: GstConfig::inclusive(dec!(7)),
            platform_fee: PlatformFeeConfig::percentage(dec!(1.5)),
            other_taxes: vec![OtherTax::percentage("Cess", dec!(0.5))],
        };

        assert_eq!(config.calculate(dec!(321.09)), config.calculate(dec!(321.09)));
    }
}
