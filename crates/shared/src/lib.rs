//! Shared errors and configuration for Ubergeld.
//!
//! This crate provides the pieces every host of the money library needs:
//! - Application-wide error types
//! - Rate table configuration loading

pub mod config;
pub mod error;

pub use config::RatesConfig;
pub use error::{AppError, AppResult};
