//! Percentage helpers.
//!
//! Every percentage in the engine goes through [`safe_ratio`]: a zero
//! denominator yields `0`, never an error and never a non-finite value.

use rust_decimal::{Decimal, RoundingStrategy};

/// Returns `numerator / denominator * 100`, or zero when `denominator` is zero.
///
/// The result is unrounded; callers pick the precision with [`round_percent`].
/// Multiplies first for precision and divides first when that overflows.
/// Results still too large for `Decimal` saturate instead of panicking.
#[must_use]
pub fn safe_ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }

    numerator
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(denominator))
        .or_else(|| {
            numerator
                .checked_div(denominator)
                .and_then(|quotient| quotient.checked_mul(Decimal::ONE_HUNDRED))
        })
        .unwrap_or_else(|| {
            if numerator.is_sign_negative() == denominator.is_sign_negative() {
                Decimal::MAX
            } else {
                Decimal::MIN
            }
        })
}

/// Rounds a percentage to `dp` decimal places, halves away from zero.
#[must_use]
pub fn round_percent(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
