//! Currency-aware money arithmetic for Ubergeld.
//!
//! This crate contains pure money logic with ZERO I/O dependencies.
//!
//! # Modules
//!
//! - `rates` - Rate table, conversion rates and the process-wide registry
//! - `money` - Immutable amount + currency values and their arithmetic
//! - `error` - Error taxonomy shared by both

pub mod error;
pub mod money;
pub mod rates;

pub use error::MoneyError;
pub use money::Money;
pub use rates::{RateTable, registry};
