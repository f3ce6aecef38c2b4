//! Rate table types and conversion logic.
//!
//! Every rate is expressed against the base currency: `rates[c]` is how many
//! units of `c` equal one unit of the base. Conversions between two non-base
//! currencies always route through the base:
//!
//! ```text
//! rate(source -> target) = to_base(source) * from_base(target)
//! to_base(c)   = 1 / rates[c]   (1 for the base)
//! from_base(c) = rates[c]       (1 for the base)
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use ubergeld_shared::RatesConfig;

use crate::error::{BASE_CURRENCY_MISSING, MoneyError, RATES_INVALID};

/// Immutable table of conversion rates relative to a base currency.
///
/// Validated once at construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateTable {
    base_currency: String,
    rates: BTreeMap<String, Decimal>,
}

impl RateTable {
    /// Builds a rate table from typed rates.
    ///
    /// Fails with `InvalidConfiguration` if the base currency is empty, or if
    /// any entry has an empty code, repeats the base currency, or carries a
    /// rate that is not strictly positive. Later duplicates of a code replace
    /// earlier ones.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use ubergeld_core::RateTable;
    ///
    /// let table = RateTable::new("EUR", [("USD", dec!(1.11))]).unwrap();
    /// assert_eq!(table.conversion_rate("EUR", "USD"), Some(dec!(1.11)));
    /// ```
    pub fn new<I, K>(base_currency: impl Into<String>, rates: I) -> Result<Self, MoneyError>
    where
        I: IntoIterator<Item = (K, Decimal)>,
        K: Into<String>,
    {
        let base_currency = base_currency.into();
        if base_currency.is_empty() {
            return Err(MoneyError::invalid_configuration(BASE_CURRENCY_MISSING));
        }

        let mut table = BTreeMap::new();
        for (code, rate) in rates {
            let code = code.into();
            if code.is_empty() || code == base_currency || rate <= Decimal::ZERO {
                return Err(MoneyError::invalid_configuration(RATES_INVALID));
            }
            table.insert(code, rate);
        }

        Ok(Self {
            base_currency,
            rates: table,
        })
    }

    /// Builds a rate table from textual rates such as `"1.11"` or `"4.7e-3"`.
    ///
    /// An unparseable rate fails with `InvalidConfiguration`, as does anything
    /// [`RateTable::new`] rejects.
    pub fn parse<I, K, V>(base_currency: impl Into<String>, rates: I) -> Result<Self, MoneyError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let base_currency = base_currency.into();
        if base_currency.is_empty() {
            return Err(MoneyError::invalid_configuration(BASE_CURRENCY_MISSING));
        }

        let parsed = rates
            .into_iter()
            .map(|(code, raw)| parse_rate(raw.as_ref()).map(|rate| (code.into(), rate)))
            .collect::<Result<Vec<(String, Decimal)>, MoneyError>>()?;

        Self::new(base_currency, parsed)
    }

    /// Builds a rate table from loaded configuration.
    pub fn from_config(config: &RatesConfig) -> Result<Self, MoneyError> {
        Self::parse(config.base_currency.as_str(), &config.rates)
    }

    /// Currency every rate is expressed against.
    #[must_use]
    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Rates of the non-base currencies.
    #[must_use]
    pub fn rates(&self) -> &BTreeMap<String, Decimal> {
        &self.rates
    }

    /// Units of `currency` per one unit of the base currency.
    ///
    /// The base currency always yields 1.
    #[must_use]
    pub fn rate(&self, currency: &str) -> Option<Decimal> {
        if currency == self.base_currency {
            return Some(Decimal::ONE);
        }
        self.rates.get(currency).copied()
    }

    /// All known currencies, base first.
    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.base_currency.as_str()).chain(self.rates.keys().map(String::as_str))
    }

    /// Returns true if `currency` is the base currency or has a rate.
    #[must_use]
    pub fn is_valid_currency(&self, currency: &str) -> bool {
        currency == self.base_currency || self.rates.contains_key(currency)
    }

    /// Factor such that `amount_in_target = amount_in_source * rate`.
    ///
    /// Returns exactly 1 when both currencies are the same. Returns `None` if
    /// either currency is unknown or the composed rate overflows.
    #[must_use]
    pub fn conversion_rate(&self, source: &str, target: &str) -> Option<Decimal> {
        if source == target {
            return self.is_valid_currency(source).then_some(Decimal::ONE);
        }
        self.to_base_rate(source)?
            .checked_mul(self.from_base_rate(target)?)
    }

    fn to_base_rate(&self, currency: &str) -> Option<Decimal> {
        if currency == self.base_currency {
            return Some(Decimal::ONE);
        }
        Decimal::ONE.checked_div(*self.rates.get(currency)?)
    }

    fn from_base_rate(&self, currency: &str) -> Option<Decimal> {
        self.rate(currency)
    }
}

fn parse_rate(raw: &str) -> Result<Decimal, MoneyError> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| MoneyError::invalid_configuration(RATES_INVALID))
}
