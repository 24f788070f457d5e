//! # Money Module
//!
//! Decimal helpers for every currency computation in the engine.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    118 * 18 / 118 = 17.999999999999996 on some paths                   │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Exact base-10 arithmetic with 28 digits of precision.               │
//! │    Amounts keep full precision through the pipeline and are rounded   │
//! │    to 2 places exactly once, when an invoice line is displayed.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overflow
//! Amounts beyond `Decimal::MAX` (~7.9e28) are not meaningful invoices.
//! The helpers use checked arithmetic and fall back to zero instead of
//! panicking, keeping the calculator total.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places shown for currency amounts.
pub const CURRENCY_DECIMALS: u32 = 2;

/// Returns `rate` percent of `amount`.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use stockroom_core::money::percentage_of;
///
/// let tax = percentage_of(Decimal::from(1000), Decimal::from(18));
/// assert_eq!(tax, Decimal::from(180));
/// ```
pub fn percentage_of(amount: Decimal, rate: Decimal) -> Decimal {
    amount
        .checked_mul(rate)
        .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Returns the tax portion already contained in a tax-inclusive `gross`.
///
/// ## Formula
/// ```text
/// gross × rate / (100 + rate)
///
/// gross = 118, rate = 18  →  118 × 18 / 118 = 18   (net base stays 100)
/// ```
///
/// A rate of exactly -100 has no inclusive portion and yields zero.
pub fn inclusive_portion(gross: Decimal, rate: Decimal) -> Decimal {
    let divisor = match Decimal::ONE_HUNDRED.checked_add(rate) {
        Some(divisor) if !divisor.is_zero() => divisor,
        _ => return Decimal::ZERO,
    };

    gross
        .checked_mul(rate)
        .and_then(|product| product.checked_div(divisor))
        .unwrap_or(Decimal::ZERO)
}

/// Rounds to [`CURRENCY_DECIMALS`] places, halves away from zero.
///
/// This matches the web client's `toFixed(2)` display rounding, so both
/// sides print the same invoice.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use stockroom_core::money::round_currency;
///
/// let amount: Decimal = "0.125".parse().unwrap();
/// assert_eq!(round_currency(amount).to_string(), "0.13");
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as `{symbol}{amount}` with exactly two decimals.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use stockroom_core::money::format_currency;
///
/// assert_eq!(format_currency("₹", Decimal::from(1250)), "₹1250.00");
/// ```
pub fn format_currency(symbol: &str, amount: Decimal) -> String {
    let mut rounded = round_currency(amount);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.rescale(CURRENCY_DECIMALS);

    format!("{symbol}{rounded}")
}

// =============================================================================
// Unit Tests
// =============================================================================
