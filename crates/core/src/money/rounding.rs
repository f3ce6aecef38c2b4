//! Rounding policies.
//!
//! Two rules coexist and must not be merged:
//! - Display rounds half away from zero ("half-up"): 16.665 → 16.67
//! - Comparison truncates toward zero: 16.669 → 16.66
//!
//! Internally amounts always keep full precision.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Decimal places used when rendering and comparing money.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Rounds half away from zero to `decimal_places`.
///
/// The result always carries exactly `decimal_places` digits of scale, so it
/// renders with trailing zeros (`50` → `50.00`). Negative zero is normalized.
#[must_use]
pub fn round_for_display(value: Decimal, decimal_places: u32) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimal_places);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

/// Truncates toward zero to `decimal_places`.
#[must_use]
pub fn truncate_for_comparison(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::ToZero)
}
