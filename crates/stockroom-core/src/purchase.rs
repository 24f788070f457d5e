//! # Purchase Pricing
//!
//! The two ends of the purchase flow that touch the engine: the subtotal
//! going in, and the invoice fields coming out.
//!
//! ```text
//! [PurchaseLine] ──► purchase_subtotal ──► calculate_taxes ──► InvoiceTotals
//!  qty × unit cost        Σ                                     taxDetails
//!                                                               totalAmount
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::tax::calculate_taxes;
use crate::types::{AppliedTax, TaxCalculationResult, TaxConfiguration};
use crate::validation::{validate_quantity, validate_unit_cost, ValidationResult};

/// A line item on a purchase.
///
/// Extra fields in stored documents (product id, name, ...) are ignored.
/// Deserializing does not check the field rules; run
/// [`validate_purchase_lines`] on lines read from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseLine {
    #[ts(type = "number")]
    pub quantity: Decimal,

    #[ts(type = "number")]
    pub unit_cost: Decimal,
}

impl PurchaseLine {
    /// Creates a validated purchase line.
    pub fn new(quantity: Decimal, unit_cost: Decimal) -> CoreResult<Self> {
        let line = PurchaseLine {
            quantity,
            unit_cost,
        };
        validate_purchase_line(&line)?;
        Ok(line)
    }

    /// Quantity × unit cost.
    pub fn line_total(&self) -> Decimal {
        self.quantity
            .checked_mul(self.unit_cost)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Checks one line: quantity > 0, unit cost >= 0.
pub fn validate_purchase_line(line: &PurchaseLine) -> ValidationResult<()> {
    validate_quantity(line.quantity)?;
    validate_unit_cost(line.unit_cost)
}

/// Checks every line, stopping at the first bad one.
///
/// ## Returns
/// - `Err(CoreError::InvalidPurchaseLine)` carrying the 1-based line number
pub fn validate_purchase_lines(lines: &[PurchaseLine]) -> CoreResult<()> {
    for (index, line) in lines.iter().enumerate() {
        validate_purchase_line(line).map_err(|source| CoreError::InvalidPurchaseLine {
            line: index + 1,
            source,
        })?;
    }
    Ok(())
}

/// Σ quantity × unit cost over `lines`.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use stockroom_core::{purchase_subtotal, PurchaseLine};
///
/// let lines = vec![
///     PurchaseLine::new(Decimal::from(3), Decimal::from(250)).unwrap(),
///     PurchaseLine::new(Decimal::from(1), Decimal::from(250)).unwrap(),
/// ];
/// assert_eq!(purchase_subtotal(&lines), Decimal::from(1000));
/// ```
pub fn purchase_subtotal(lines: &[PurchaseLine]) -> Decimal {
    lines
        .iter()
        .fold(Decimal::ZERO, |sum, line| sum.saturating_add(line.line_total()))
}

/// The tax fields a purchase record stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxDetails {
    #[ts(type = "number")]
    pub gst: Decimal,

    #[ts(type = "number")]
    pub platform_fee: Decimal,

    pub other_taxes: Vec<AppliedTax>,

    #[ts(type = "number")]
    pub total_tax: Decimal,
}

/// Everything a purchase record copies out of a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    #[ts(type = "number")]
    pub subtotal: Decimal,

    pub tax_details: TaxDetails,

    /// The grand total.
    #[ts(type = "number")]
    pub total_amount: Decimal,
}

impl InvoiceTotals {
    /// Copies the stored fields out of a calculation.
    pub fn from_result(result: &TaxCalculationResult) -> Self {
        InvoiceTotals {
            subtotal: result.subtotal,
            tax_details: TaxDetails {
                gst: result.gst,
                platform_fee: result.platform_fee,
                other_taxes: result.other_taxes.clone(),
                total_tax: result.total_tax,
            },
            total_amount: result.grand_total,
        }
    }
}

impl From<TaxCalculationResult> for InvoiceTotals {
    fn from(result: TaxCalculationResult) -> Self {
        InvoiceTotals::from_result(&result)
    }
}

/// Prices a purchase end to end: subtotal, taxes, stored totals.
///
/// Pass the configuration fetched immediately before invoicing; the engine
/// has no opinion on how fresh it is.
pub fn price_purchase(
    lines: &[PurchaseLine],
    tax_config: Option<&TaxConfiguration>,
) -> InvoiceTotals {
    calculate_taxes(purchase_subtotal(lines), tax_config).into()
}

// =============================================================================
// Unit Tests
// =============================================================================
