//! # Invoice Breakdown
//!
//! Converts a [`TaxCalculationResult`] into the ordered line items that
//! invoice renderers print.
//!
//! ## Line Order
//! ```text
//! Subtotal        ₹1000.00   always, first
//! GST              ₹180.00   only when gst > 0
//! Platform Fee      ₹20.00   only when platformFee > 0
//! VAT               ₹50.00   one per applied custom tax
//! Total Tax        ₹250.00   only when totalTax > 0   (isTotalTax)
//! Grand Total     ₹1250.00   always, last             (isGrandTotal)
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::format_currency;
use crate::types::TaxCalculationResult;

/// One printable invoice line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownLine {
    pub label: String,

    /// Unrounded amount.
    #[ts(type = "number")]
    pub amount: Decimal,

    /// `{symbol}{amount}` with two decimals.
    pub formatted: String,

    pub is_total_tax: bool,

    pub is_grand_total: bool,
}

impl BreakdownLine {
    fn new(label: impl Into<String>, amount: Decimal, currency_symbol: &str) -> Self {
        BreakdownLine {
            label: label.into(),
            amount,
            formatted: format_currency(currency_symbol, amount),
            is_total_tax: false,
            is_grand_total: false,
        }
    }
}

/// Builds the invoice lines for `result`.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use stockroom_core::{calculate_taxes, format_tax_breakdown};
///
/// let result = calculate_taxes(Decimal::from(40), None);
/// let lines = format_tax_breakdown(&result, "₹");
///
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].label, "Subtotal");
/// assert_eq!(lines[1].formatted, "₹40.00");
/// ```
pub fn format_tax_breakdown(
    result: &TaxCalculationResult,
    currency_symbol: &str,
) -> Vec<BreakdownLine> {
    let mut lines = Vec::with_capacity(result.other_taxes.len() + 5);

    lines.push(BreakdownLine::new("Subtotal", result.subtotal, currency_symbol));

    if result.gst > Decimal::ZERO {
        lines.push(BreakdownLine::new("GST", result.gst, currency_symbol));
    }

    if result.platform_fee > Decimal::ZERO {
        lines.push(BreakdownLine::new(
            "Platform Fee",
            result.platform_fee,
            currency_symbol,
        ));
    }

    // Already filtered to enabled taxes by the calculator
    for tax in &result.other_taxes {
        lines.push(BreakdownLine::new(tax.name.as_str(), tax.amount, currency_symbol));
    }

    if result.total_tax > Decimal::ZERO {
        lines.push(BreakdownLine {
            is_total_tax: true,
            ..BreakdownLine::new("Total Tax", result.total_tax, currency_symbol)
        });
    }

    lines.push(BreakdownLine {
        is_grand_total: true,
        ..BreakdownLine::new("Grand Total", result.grand_total, currency_symbol)
    });

    lines
}

// =============================================================================
// Unit Tests
// =============================================================================
