//! Rate table configuration management.
//!
//! Rates are read as text so that a malformed value is reported by the
//! rate table itself instead of failing deserialization.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Exchange rate configuration.
///
/// ```toml
/// base_currency = "EUR"
///
/// [rates]
/// USD = 1.11
/// Bitcoin = "0.0047"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RatesConfig {
    /// Currency every rate is expressed against.
    pub base_currency: String,
    /// Units of each currency per one unit of the base currency.
    #[serde(default)]
    pub rates: BTreeMap<String, String>,
}

impl RatesConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/rates.toml`, `config/rates.{RUN_MODE}.toml`, then
    /// `UBERGELD__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        tracing::debug!(%run_mode, "loading rate configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/rates").required(false))
            .add_source(config::File::with_name(&format!("config/rates.{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("UBERGELD").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or lacks a base currency.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
