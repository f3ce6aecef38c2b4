//! Property-based tests for rate tables.
//!
//! - Identity: a currency converts to itself at exactly 1
//! - Composition: every conversion equals the route through the base
//! - Inversion: there-and-back rates multiply to 1 (within decimal precision)

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::table::RateTable;

const CODES: [&str; 4] = ["EUR", "USD", "GBP", "Bitcoin"];

/// Strategy to generate positive rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate a table with base `EUR` and three random rates.
fn rate_table() -> impl Strategy<Value = RateTable> {
    prop::collection::vec(positive_rate(), 3).prop_map(|rates| {
        RateTable::new(CODES[0], CODES[1..].iter().copied().zip(rates))
            .expect("generated rates are positive")
    })
}

/// Strategy to pick one of the table's currencies.
fn code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(CODES.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* table and currency, converting to itself uses rate 1.
    #[test]
    fn prop_identity_rate(table in rate_table(), currency in code()) {
        prop_assert_eq!(table.conversion_rate(currency, currency), Some(Decimal::ONE));
    }

    /// *For any* pair, the direct rate equals the rate routed through the base.
    #[test]
    fn prop_rates_compose_through_base(
        table in rate_table(),
        source in code(),
        target in code(),
    ) {
        prop_assume!(source != target);
        let base = table.base_currency().to_string();
        let direct = table.conversion_rate(source, target).unwrap();
        let routed = table.conversion_rate(source, &base).unwrap()
            * table.conversion_rate(&base, target).unwrap();
        prop_assert_eq!(direct, routed);
    }

    /// *For any* pair, there-and-back rates multiply to 1 within 1e-20.
    #[test]
    fn prop_inverse_rates_cancel(
        table in rate_table(),
        source in code(),
        target in code(),
    ) {
        let there = table.conversion_rate(source, target).unwrap();
        let back = table.conversion_rate(target, source).unwrap();
        let error = (there * back - Decimal::ONE).abs();
        prop_assert!(error < Decimal::new(1, 20), "error {} too large", error);
    }

    /// *For any* table, the base currency is valid without being a rate key.
    #[test]
    fn prop_base_currency_implicit(table in rate_table()) {
        prop_assert!(table.is_valid_currency(table.base_currency()));
        prop_assert!(!table.rates().contains_key(table.base_currency()));
        prop_assert_eq!(table.rate(table.base_currency()), Some(Decimal::ONE));
    }
}
