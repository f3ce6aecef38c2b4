//! Process-wide rate table slot.
//!
//! `Money::new` reads the table installed here. Values keep the `Arc` they
//! were built with, so replacing or clearing the slot never changes the
//! behaviour of money that already exists. Hosts that prefer explicit wiring
//! can skip the registry entirely and use `Money::with_rates`.

use std::sync::{Arc, PoisonError, RwLock};

use rust_decimal::Decimal;
use tracing::{info, warn};
use ubergeld_shared::{AppResult, RatesConfig};

use super::table::RateTable;
use crate::error::MoneyError;

static CURRENT: RwLock<Option<Arc<RateTable>>> = RwLock::new(None);

/// Validates and installs a new process-wide rate table.
///
/// On failure the previously installed table, if any, stays in place.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use ubergeld_core::{Money, registry};
///
/// registry::configure_rates("EUR", [("USD", dec!(1.11))]).unwrap();
/// let dollars = Money::new(50, "EUR").unwrap().convert_to("USD").unwrap();
/// assert_eq!(dollars.to_string(), "55.50 USD");
/// ```
pub fn configure_rates<I, K>(
    base_currency: impl Into<String>,
    rates: I,
) -> Result<Arc<RateTable>, MoneyError>
where
    I: IntoIterator<Item = (K, Decimal)>,
    K: Into<String>,
{
    let table = RateTable::new(base_currency, rates).inspect_err(|err| {
        warn!(error = %err, "rejected rate configuration");
    })?;
    Ok(install(table))
}

/// Builds the process-wide rate table from loaded configuration.
pub fn configure_from_config(config: &RatesConfig) -> Result<Arc<RateTable>, MoneyError> {
    let table = RateTable::from_config(config).inspect_err(|err| {
        warn!(error = %err, "rejected rate configuration");
    })?;
    Ok(install(table))
}

/// Loads configuration from files and environment, then installs the table.
///
/// Loading failures and rejected rates both surface as
/// `AppError::Configuration`.
pub fn configure_from_env() -> AppResult<Arc<RateTable>> {
    let config = RatesConfig::load()?;
    Ok(configure_from_config(&config)?)
}

/// Installs an already validated table, replacing any previous one.
pub fn install(table: impl Into<Arc<RateTable>>) -> Arc<RateTable> {
    let table = table.into();
    info!(
        base_currency = %table.base_currency(),
        rates = table.rates().len(),
        "conversion rates configured"
    );
    *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&table));
    table
}

/// Currently installed table, if any.
#[must_use]
pub fn current() -> Option<Arc<RateTable>> {
    CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Removes the installed table.
pub fn clear() {
    if CURRENT
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
        .is_some()
    {
        info!("conversion rates cleared");
    }
}
