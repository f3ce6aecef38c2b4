//! Immutable monetary values.
//!
//! This module implements:
//! - The `Money` value type and its conversion
//! - Arithmetic with implicit conversion into the left operand's currency
//! - Operator traits over the named methods
//! - Rounding policies for display and comparison
//! - Display, Debug and serde rendering

pub mod ops;
pub mod rounding;
pub mod value;

mod format;

#[cfg(test)]
mod props;

pub use rounding::{DISPLAY_DECIMAL_PLACES, round_for_display, truncate_for_comparison};
pub use value::Money;
