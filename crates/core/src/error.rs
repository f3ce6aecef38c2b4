//! Money error types.
//!
//! Every error is terminal for the operation that raised it. Retrying with the
//! same input fails identically.

use thiserror::Error;
use ubergeld_shared::AppError;

/// Message used when the base currency is empty.
pub const BASE_CURRENCY_MISSING: &str = "base currency is not provided";

/// Message used for any malformed rate entry.
pub const RATES_INVALID: &str = "rates are not valid";

/// Errors that can occur while building rate tables or handling money.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Configuration Errors ==========
    /// No rate table has been configured for the process.
    #[error("Conversion rates are not set")]
    ConversionRatesNotSet,

    /// The rate table could not be built.
    #[error("Invalid rate configuration: {0}")]
    InvalidConfiguration(String),

    // ========== Currency Errors ==========
    /// Currency is neither the base currency nor present in the rate table.
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// Operands were built against different rate tables.
    #[error("Money values were built against different rate tables")]
    IncompatibleRateTable,

    // ========== Arithmetic Errors ==========
    /// Scalar division by zero.
    #[error("Division by zero is not supported")]
    DivisionByZero,

    /// Result does not fit in a decimal.
    #[error("Arithmetic overflow")]
    Overflow,
}

impl MoneyError {
    pub(crate) fn invalid_configuration(message: &str) -> Self {
        Self::InvalidConfiguration(message.to_string())
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConversionRatesNotSet => "CONVERSION_RATES_NOT_SET",
            Self::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
            Self::InvalidCurrency(_) => "INVALID_CURRENCY",
            Self::IncompatibleRateTable => "INCOMPATIBLE_RATE_TABLE",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Overflow => "OVERFLOW",
        }
    }

    /// Returns true if this error is retryable. No money error is.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

impl From<MoneyError> for AppError {
    fn from(err: MoneyError) -> Self {
        match err {
            MoneyError::ConversionRatesNotSet | MoneyError::InvalidConfiguration(_) => {
                Self::Configuration(err.to_string())
            }
            MoneyError::InvalidCurrency(_)
            | MoneyError::IncompatibleRateTable
            | MoneyError::DivisionByZero
            | MoneyError::Overflow => Self::Validation(err.to_string()),
        }
    }
}
