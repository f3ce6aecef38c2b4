//! Text rendering for `Money`.

use std::fmt;

use super::rounding::{DISPLAY_DECIMAL_PLACES, round_for_display};
use super::value::Money;

/// Renders as `"<amount half-up to 2 places> <currency>"`, e.g. `50.00 EUR`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            round_for_display(self.amount(), DISPLAY_DECIMAL_PLACES),
            self.currency()
        )
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Money")
            .field("display", &self.to_string())
            .field("amount", &self.amount())
            .field("currency", &self.currency())
            .field("base_currency", &self.rates().base_currency())
            .finish()
    }
}
