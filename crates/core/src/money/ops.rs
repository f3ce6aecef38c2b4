//! Operator traits over the named `Money` methods.
//!
//! Operators that can fail (conversion, overflow, division by zero) yield a
//! `Result`, so `(&a + &b)?` reads like the arithmetic it performs.

use std::ops::{Add, Div, Mul, Sub};

use rust_decimal::Decimal;

use super::value::Money;
use crate::error::MoneyError;

impl Add<&Money> for &Money {
    type Output = Result<Money, MoneyError>;

    fn add(self, rhs: &Money) -> Self::Output {
        self.try_add(rhs)
    }
}

impl Add for Money {
    type Output = Result<Money, MoneyError>;

    fn add(self, rhs: Money) -> Self::Output {
        self.try_add(&rhs)
    }
}

impl Sub<&Money> for &Money {
    type Output = Result<Money, MoneyError>;

    fn sub(self, rhs: &Money) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl Sub for Money {
    type Output = Result<Money, MoneyError>;

    fn sub(self, rhs: Money) -> Self::Output {
        self.try_sub(&rhs)
    }
}

impl<T: Into<Decimal>> Mul<T> for &Money {
    type Output = Result<Money, MoneyError>;

    fn mul(self, factor: T) -> Self::Output {
        self.multiply(factor)
    }
}

impl<T: Into<Decimal>> Mul<T> for Money {
    type Output = Result<Money, MoneyError>;

    fn mul(self, factor: T) -> Self::Output {
        self.multiply(factor)
    }
}

impl<T: Into<Decimal>> Div<T> for &Money {
    type Output = Result<Money, MoneyError>;

    fn div(self, divisor: T) -> Self::Output {
        self.try_divide(divisor)
    }
}

impl<T: Into<Decimal>> Div<T> for Money {
    type Output = Result<Money, MoneyError>;

    fn div(self, divisor: T) -> Self::Output {
        self.try_divide(divisor)
    }
}
