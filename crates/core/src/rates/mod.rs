//! Exchange rates anchored to a single base currency.
//!
//! - `table` - Immutable, validated rate table and conversion-rate composition
//! - `registry` - Process-wide slot holding the configured table

pub mod registry;
pub mod table;

#[cfg(test)]
mod props;

pub use table::RateTable;
