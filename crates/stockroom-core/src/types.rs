//! # Domain Types
//!
//! Tax configuration and calculation result types.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  TaxConfiguration (per tenant, read-only to the calculator)             │
//! │  ├── gst: GstConfig           enabled, rate 0-100, inclusive|exclusive  │
//! │  ├── platformFee: PlatformFee enabled, rate >= 0, percentage|fixed      │
//! │  └── otherTaxes: [OtherTax]   name, enabled, rate, percentage|fixed     │
//! │                     │                                                   │
//! │                     ▼  calculate_taxes(subtotal, config)                │
//! │                                                                         │
//! │  TaxCalculationResult (ephemeral, one per invocation)                   │
//! │  ├── subtotal, gst, platformFee                                        │
//! │  ├── otherTaxes: [AppliedTax] (enabled entries only, same order)       │
//! │  └── totalTax, grandTotal                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! Every type serializes with camelCase keys, and the `kind` fields are
//! written as `type`, so documents stored by the web application load as-is.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

// =============================================================================
// Charge Types
// =============================================================================

/// Whether GST is added on top of the subtotal or already embedded in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum GstType {
    /// Subtotal already contains GST (EU/UK model).
    Inclusive,
    /// GST is charged on top of the subtotal (USA model).
    #[default]
    Exclusive,
    /// A value outside the enumerated set, kept verbatim so legacy records
    /// load and save back unchanged. Contributes no tax.
    #[serde(untagged)]
    #[ts(skip)]
    Unknown(String),
}

impl GstType {
    /// Returns false for [`GstType::Unknown`].
    pub const fn is_known(&self) -> bool {
        !matches!(self, GstType::Unknown(_))
    }
}

/// How a platform fee or custom tax rate is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ChargeType {
    /// `rate` is a percentage of the subtotal.
    #[default]
    Percentage,
    /// `rate` is an absolute currency amount.
    Fixed,
    /// A value outside the enumerated set, kept verbatim. Contributes no
    /// amount.
    #[serde(untagged)]
    #[ts(skip)]
    Unknown(String),
}

impl ChargeType {
    /// Returns false for [`ChargeType::Unknown`].
    pub const fn is_known(&self) -> bool {
        !matches!(self, ChargeType::Unknown(_))
    }
}

/// Reads an explicit `null` as the field's default.
///
/// `#[serde(default)]` only covers missing keys; stored documents also carry
/// `"rate": null` and similar.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Tax Configuration
// =============================================================================

/// GST settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct GstConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,

    /// Percentage, 0 to 100.
    #[ts(type = "number")]
    #[serde(deserialize_with = "null_as_default")]
    pub rate: Decimal,

    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: GstType,

    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

impl GstConfig {
    /// Enabled GST charged on top of the subtotal.
    pub fn exclusive(rate: Decimal) -> Self {
        GstConfig {
            enabled: true,
            rate,
            kind: GstType::Exclusive,
            description: String::new(),
        }
    }

    /// Enabled GST already contained in the subtotal.
    pub fn inclusive(rate: Decimal) -> Self {
        GstConfig {
            enabled: true,
            rate,
            kind: GstType::Inclusive,
            description: String::new(),
        }
    }
}

/// Platform fee settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct PlatformFeeConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,

    /// Percent or currency amount, depending on `kind`.
    #[ts(type = "number")]
    #[serde(deserialize_with = "null_as_default")]
    pub rate: Decimal,

    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: ChargeType,

    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

impl PlatformFeeConfig {
    /// Enabled fee charged as a percentage of the subtotal.
    pub fn percentage(rate: Decimal) -> Self {
        PlatformFeeConfig {
            enabled: true,
            rate,
            kind: ChargeType::Percentage,
            description: String::new(),
        }
    }

    /// Enabled fee charged as a flat amount.
    pub fn fixed(amount: Decimal) -> Self {
        PlatformFeeConfig {
            enabled: true,
            rate: amount,
            kind: ChargeType::Fixed,
            description: String::new(),
        }
    }
}

/// An administrator-defined tax line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct OtherTax {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,

    #[ts(type = "number")]
    #[serde(deserialize_with = "null_as_default")]
    pub rate: Decimal,

    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: ChargeType,

    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

impl OtherTax {
    /// Enabled tax charged as a percentage of the subtotal.
    pub fn percentage(name: impl Into<String>, rate: Decimal) -> Self {
        OtherTax {
            name: name.into(),
            enabled: true,
            rate,
            kind: ChargeType::Percentage,
            description: String::new(),
        }
    }

    /// Enabled tax charged as a flat amount.
    pub fn fixed(name: impl Into<String>, amount: Decimal) -> Self {
        OtherTax {
            name: name.into(),
            enabled: true,
            rate: amount,
            kind: ChargeType::Fixed,
            description: String::new(),
        }
    }

    /// Returns the same tax with `enabled` cleared.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// A tenant's complete tax setup.
///
/// The default configuration has every charge disabled, which prices any
/// subtotal at itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct TaxConfiguration {
    #[serde(deserialize_with = "null_as_default")]
    pub gst: GstConfig,

    #[serde(deserialize_with = "null_as_default")]
    pub platform_fee: PlatformFeeConfig,

    /// Display order is preserved; entries are independent of each other.
    #[serde(deserialize_with = "null_as_default")]
    pub other_taxes: Vec<OtherTax>,
}

impl TaxConfiguration {
    /// Parses a configuration document as stored by the web application.
    ///
    /// Missing or `null` fields fall back to their defaults and unrecognized
    /// `type` strings load as `Unknown`.
    pub fn from_json(json: &str) -> crate::CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// True when no charge of any kind is enabled.
    pub fn is_tax_free(&self) -> bool {
        !self.gst.enabled
            && !self.platform_fee.enabled
            && self.other_taxes.iter().all(|tax| !tax.enabled)
    }
}

// =============================================================================
// Calculation Result
// =============================================================================

/// One enabled custom tax as priced for a specific subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppliedTax {
    pub name: String,

    #[ts(type = "number")]
    pub rate: Decimal,

    #[serde(rename = "type")]
    pub kind: ChargeType,

    #[ts(type = "number")]
    pub amount: Decimal,
}

/// Priced invoice produced by [`calculate_taxes`](crate::calculate_taxes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxCalculationResult {
    /// The input subtotal, unchanged.
    #[ts(type = "number")]
    pub subtotal: Decimal,

    /// GST amount (embedded portion when inclusive).
    #[ts(type = "number")]
    pub gst: Decimal,

    #[ts(type = "number")]
    pub platform_fee: Decimal,

    pub other_taxes: Vec<AppliedTax>,

    /// Every tax amount, including inclusive GST.
    #[ts(type = "number")]
    pub total_tax: Decimal,

    /// What the customer pays: subtotal plus every additive amount.
    #[ts(type = "number")]
    pub grand_total: Decimal,
}

impl TaxCalculationResult {
    /// A result carrying no tax at all.
    pub fn untaxed(subtotal: Decimal) -> Self {
        TaxCalculationResult {
            subtotal,
            gst: Decimal::ZERO,
            platform_fee: Decimal::ZERO,
            other_taxes: Vec::new(),
            total_tax: Decimal::ZERO,
            grand_total: subtotal,
        }
    }

    /// Sum of the custom tax amounts.
    pub fn other_taxes_total(&self) -> Decimal {
        self.other_taxes
            .iter()
            .fold(Decimal::ZERO, |sum, tax| sum.saturating_add(tax.amount))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
