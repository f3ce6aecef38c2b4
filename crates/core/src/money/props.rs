//! Property-based tests for money arithmetic.
//!
//! Uses the reference table: base `EUR`, `USD` = 1.11, `Bitcoin` = 0.0047.

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::rounding::{DISPLAY_DECIMAL_PLACES, round_for_display};
use super::value::Money;
use crate::rates::RateTable;

fn rates() -> Arc<RateTable> {
    Arc::new(
        RateTable::new("EUR", [("USD", dec!(1.11)), ("Bitcoin", dec!(0.0047))])
            .expect("reference rates are valid"),
    )
}

/// Strategy to generate whole-cent amounts (-1,000,000.00 to 1,000,000.00).
fn cents() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|c| Decimal::new(c, 2))
}

fn code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["EUR", "USD", "Bitcoin"])
}

fn display(value: Decimal) -> Decimal {
    round_for_display(value, DISPLAY_DECIMAL_PLACES)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* amount and currencies X, Y: X → Y → X matches at display precision.
    #[test]
    fn prop_round_trip_conversion(amount in cents(), from in code(), to in code()) {
        let rates = rates();
        let original = Money::with_rates(amount, from, &rates).unwrap();
        let back = original.convert_to(to).unwrap().convert_to(from).unwrap();
        prop_assert_eq!(back.currency(), from);
        prop_assert_eq!(display(back.amount()), display(amount));
    }

    /// *For any* amount, converting into its own currency keeps it exactly.
    #[test]
    fn prop_identity_conversion(amount in cents(), currency in code()) {
        let m = Money::with_rates(amount, currency, &rates()).unwrap();
        let same = m.convert_to(currency).unwrap();
        prop_assert_eq!(same.amount(), amount);
        prop_assert!(same == m);
    }

    /// *For any* operands, sums and differences take the left currency.
    #[test]
    fn prop_result_takes_left_currency(
        a in cents(),
        b in cents(),
        left in code(),
        right in code(),
    ) {
        let rates = rates();
        let lhs = Money::with_rates(a, left, &rates).unwrap();
        let rhs = Money::with_rates(b, right, &rates).unwrap();
        let sum = lhs.try_add(&rhs).unwrap();
        let difference = lhs.try_sub(&rhs).unwrap();
        prop_assert_eq!(sum.currency(), left);
        prop_assert_eq!(difference.currency(), left);
    }

    /// *For any* amount and target, the converted value equals the original.
    #[test]
    fn prop_comparison_ignores_currency(amount in cents(), from in code(), to in code()) {
        let m = Money::with_rates(amount, from, &rates()).unwrap();
        prop_assert!(m.convert_to(to).unwrap() == m);
    }

    /// *For any* amount, sub-cent differences compare equal.
    #[test]
    fn prop_sub_cent_differences_are_equal(amount in 0i64..100_000_000i64, extra in 0i64..10) {
        let rates = rates();
        let base = Money::with_rates(Decimal::new(amount, 2), "EUR", &rates).unwrap();
        let nudged = Money::with_rates(
            Decimal::new(amount * 10 + extra, 3),
            "EUR",
            &rates,
        ).unwrap();
        prop_assert!(base == nudged);
    }

    /// *For any* non-zero factor, multiplying then dividing restores the amount.
    #[test]
    fn prop_scale_then_unscale(amount in cents(), factor in 1i64..1000) {
        let m = Money::with_rates(amount, "USD", &rates()).unwrap();
        let restored = m.multiply(factor).unwrap().try_divide(factor).unwrap();
        prop_assert_eq!(restored.amount(), amount);
        prop_assert_eq!(restored.currency(), "USD");
    }
}
