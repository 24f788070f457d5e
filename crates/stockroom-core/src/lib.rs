//! # stockroom-core: Pure Tax/Invoice Engine for Stockroom
//!
//! This crate turns a purchase subtotal plus a tenant's tax configuration into
//! a priced invoice breakdown. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Application                              │   │
//! │  │  Purchase Form ──► Purchase List ──► Tax Settings Preview       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ subtotal + TaxConfiguration            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │    tax    │  │ breakdown │  │validation │  │ settings  │  │   │
//! │  │   │ calculate │  │  invoice  │  │  advisory │  │  audit    │  │   │
//! │  │   │  _taxes   │  │   lines   │  │   rules   │  │  trail    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ TaxCalculationResult                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │   Purchase persistence (taxDetails, totalAmount) • Invoices     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Tax configuration and calculation result types
//! - [`money`] - Decimal currency helpers (percentages, rounding, display)
//! - [`tax`] - The calculator
//! - [`breakdown`] - Invoice line items for renderers
//! - [`validation`] - Advisory tax configuration checks
//! - [`settings`] - Per-tenant configuration with change history
//! - [`purchase`] - Subtotal math and invoice field mapping
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system and clock access are FORBIDDEN here
//! 3. **Decimal Money**: Rates and amounts are `Decimal`, never `f64`
//! 4. **Never Fail an Invoice**: The calculator degrades instead of erroring;
//!    validation happens when an administrator edits settings
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use stockroom_core::{calculate_taxes, GstConfig, TaxConfiguration};
//!
//! let config = TaxConfiguration {
//!     gst: GstConfig::exclusive(Decimal::from(18)),
//!     ..TaxConfiguration::default()
//! };
//!
//! let result = calculate_taxes(Decimal::from(100), Some(&config));
//! assert_eq!(result.gst, Decimal::from(18));
//! assert_eq!(result.grand_total, Decimal::from(118));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod breakdown;
pub mod error;
pub mod money;
pub mod purchase;
pub mod settings;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use breakdown::{format_tax_breakdown, BreakdownLine};
pub use error::{CoreError, CoreResult, TaxConfigIssue, ValidationError};
pub use purchase::{
    price_purchase, purchase_subtotal, validate_purchase_line, validate_purchase_lines,
    InvoiceTotals, PurchaseLine, TaxDetails,
};
pub use settings::{TaxConfigChange, TaxSettings};
pub use tax::calculate_taxes;
pub use types::*;
pub use validation::{validate_tax_config, TaxConfigValidation};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency symbol used when the caller does not supply one.
///
/// The web application passes `"₹"` for its Indian tenants.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Upper bound for a GST rate, in percent.
pub const MAX_GST_RATE: u32 = 100;
