//! The `Money` value type.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` and keep full precision; rounding only
//! happens when money is displayed or compared.

use std::cmp::Ordering;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::rounding::{
    DISPLAY_DECIMAL_PLACES, round_for_display, truncate_for_comparison,
};
use crate::error::MoneyError;
use crate::rates::{RateTable, registry};

/// An amount in a currency known to a rate table.
///
/// Every operation returns a new value. The table a value was built with
/// travels with it and with everything derived from it.
#[derive(Clone, Serialize)]
pub struct Money {
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    currency: String,
    #[serde(skip)]
    rates: Arc<RateTable>,
}

impl Money {
    /// Creates money against the process-wide rate table.
    ///
    /// Fails with `ConversionRatesNotSet` if no table is configured, or
    /// `InvalidCurrency` if the table does not know `currency`.
    pub fn new(amount: impl Into<Decimal>, currency: &str) -> Result<Self, MoneyError> {
        let Some(rates) = registry::current() else {
            debug!(%currency, "money created before conversion rates were set");
            return Err(MoneyError::ConversionRatesNotSet);
        };
        Self::with_rates(amount, currency, &rates)
    }

    /// Creates money against an explicit rate table.
    pub fn with_rates(
        amount: impl Into<Decimal>,
        currency: &str,
        rates: &Arc<RateTable>,
    ) -> Result<Self, MoneyError> {
        if !rates.is_valid_currency(currency) {
            debug!(%currency, "unknown currency");
            return Err(MoneyError::InvalidCurrency(currency.to_string()));
        }

        Ok(Self {
            amount: amount.into(),
            currency: currency.to_string(),
            rates: Arc::clone(rates),
        })
    }

    /// Creates a zero amount against the process-wide rate table.
    pub fn zero(currency: &str) -> Result<Self, MoneyError> {
        Self::new(Decimal::ZERO, currency)
    }

    /// Full-precision amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Currency code.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Rate table this value was built with.
    #[must_use]
    pub fn rates(&self) -> &Arc<RateTable> {
        &self.rates
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Converts into `target` through the base currency.
    pub fn convert_to(&self, target: &str) -> Result<Self, MoneyError> {
        if !self.rates.is_valid_currency(target) {
            debug!(currency = %target, "unknown conversion target");
            return Err(MoneyError::InvalidCurrency(target.to_string()));
        }

        let rate = self
            .rates
            .conversion_rate(&self.currency, target)
            .ok_or(MoneyError::Overflow)?;
        debug!(source = %self.currency, %target, %rate, "converting money");

        let amount = self.amount.checked_mul(rate).ok_or(MoneyError::Overflow)?;
        Self::with_rates(amount, target, &self.rates)
    }

    /// Adds `other`, converted into this value's currency.
    pub fn try_add(&self, other: &Self) -> Result<Self, MoneyError> {
        let other = self.expressed_here(other)?;
        let amount = self.amount.checked_add(other).ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(amount))
    }

    /// Subtracts `other`, converted into this value's currency.
    pub fn try_sub(&self, other: &Self) -> Result<Self, MoneyError> {
        let other = self.expressed_here(other)?;
        let amount = self.amount.checked_sub(other).ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(amount))
    }

    /// Multiplies by a scalar, keeping the currency.
    pub fn multiply(&self, factor: impl Into<Decimal>) -> Result<Self, MoneyError> {
        let amount = self
            .amount
            .checked_mul(factor.into())
            .ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(amount))
    }

    /// Divides by a scalar, keeping the currency and full precision.
    pub fn try_divide(&self, divisor: impl Into<Decimal>) -> Result<Self, MoneyError> {
        let divisor = divisor.into();
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let amount = self.amount.checked_div(divisor).ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(amount))
    }

    /// Orders two values after converting `other` into this currency.
    ///
    /// Both amounts are truncated to two decimal places first, so values that
    /// differ only past the cent compare equal.
    pub fn compare(&self, other: &Self) -> Result<Ordering, MoneyError> {
        let other = self.expressed_here(other)?;
        let lhs = truncate_for_comparison(self.amount, DISPLAY_DECIMAL_PLACES);
        let rhs = truncate_for_comparison(other, DISPLAY_DECIMAL_PLACES);
        Ok(lhs.cmp(&rhs))
    }

    /// Copy rounded half-up to `decimal_places`.
    #[must_use]
    pub fn round_dp(&self, decimal_places: u32) -> Self {
        self.with_amount(round_for_display(self.amount, decimal_places))
    }

    /// Copy truncated toward zero to `decimal_places`.
    #[must_use]
    pub fn truncate_dp(&self, decimal_places: u32) -> Self {
        self.with_amount(truncate_for_comparison(self.amount, decimal_places))
    }

    fn with_amount(&self, amount: Decimal) -> Self {
        Self {
            amount,
            currency: self.currency.clone(),
            rates: Arc::clone(&self.rates),
        }
    }

    /// Amount of `other` in this value's currency.
    fn expressed_here(&self, other: &Self) -> Result<Decimal, MoneyError> {
        if !Arc::ptr_eq(&self.rates, &other.rates) && self.rates != other.rates {
            return Err(MoneyError::IncompatibleRateTable);
        }
        if other.currency == self.currency {
            return Ok(other.amount);
        }
        Ok(other.convert_to(&self.currency)?.amount)
    }
}

/// Equality is receiver-relative: `other` is converted into `self`'s
/// currency and both sides are truncated to cents. Across currencies
/// `a == b` and `b == a` may therefore disagree.
impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.compare(other), Ok(Ordering::Equal))
    }
}

/// Ordering is receiver-relative like `PartialEq`. Values built against
/// different rate tables are unordered.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}
