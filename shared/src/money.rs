//! Money arithmetic in fixed-point minor units
//!
//! All monetary values are normalized to integer cents at ingestion and stay
//! in cents throughout. `rust_decimal` is used only at the boundaries: once
//! when converting catalog prices stored in major units (dollars), and once
//! when formatting for display. Repeated additions therefore never drift.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A monetary amount in minor units (cents)
///
/// Serializes as a bare integer cent count.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Convert a major-unit (dollar) amount into cents
    ///
    /// Catalog sources store menu item base prices in dollars as floats; this
    /// is the single place that conversion happens. Rejects non-finite and
    /// negative inputs, rounds half-up to the nearest cent.
    pub fn from_major_f64(major: f64) -> Result<Self, AppError> {
        if !major.is_finite() {
            return Err(AppError::validation(format!(
                "price must be a finite number, got {major}"
            )));
        }
        if major < 0.0 {
            return Err(AppError::validation(format!(
                "price must be non-negative, got {major}"
            )));
        }
        let cents = Decimal::from_f64(major)
            .ok_or_else(|| {
                AppError::validation(format!("price {major} is not representable as a decimal"))
            })?
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| AppError::validation(format!("price {major} is out of range")))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        cents
            .to_i64()
            .map(Money)
            .ok_or_else(|| AppError::validation(format!("price {major} is out of range")))
    }

    /// Major-unit decimal value, for display and reporting only
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Subtraction clamped at zero, for discount application
    pub fn saturating_sub(self, rhs: Money) -> Money {
        Money((self.0 - rhs.0).max(0))
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.to_decimal())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        Money(self.0 * i64::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_rounds_to_nearest_cent() {
        assert_eq!(Money::from_major_f64(5.0).unwrap(), Money::from_cents(500));
        assert_eq!(Money::from_major_f64(0.5).unwrap(), Money::from_cents(50));
        // 10.005 rounds half-up
        assert_eq!(
            Money::from_major_f64(10.005).unwrap(),
            Money::from_cents(1001)
        );
    }

    #[test]
    fn test_from_major_rejects_invalid_input() {
        assert!(Money::from_major_f64(f64::NAN).is_err());
        assert!(Money::from_major_f64(f64::INFINITY).is_err());
        assert!(Money::from_major_f64(-0.01).is_err());
    }

    #[test]
    fn test_repeated_addition_does_not_drift() {
        // 0.10 added 1000 times is exactly 100.00 in cents
        let dime = Money::from_major_f64(0.10).unwrap();
        let total: Money = std::iter::repeat_n(dime, 1000).sum();
        assert_eq!(total, Money::from_cents(10_000));
    }

    #[test]
    fn test_display_formats_major_units() {
        assert_eq!(Money::from_cents(1100).to_string(), "$11.00");
        assert_eq!(Money::from_cents(50).to_string(), "$0.50");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_saturating_sub_clamps_at_zero() {
        let a = Money::from_cents(30);
        let b = Money::from_cents(50);
        assert_eq!(a.saturating_sub(b), Money::ZERO);
        assert_eq!(b.saturating_sub(a), Money::from_cents(20));
    }

    #[test]
    fn test_quantity_extension() {
        assert_eq!(Money::from_cents(550) * 2, Money::from_cents(1100));
        assert_eq!(Money::from_cents(550) * 0, Money::ZERO);
    }

    #[test]
    fn test_serde_as_integer_cents() {
        let json = serde_json::to_string(&Money::from_cents(500)).unwrap();
        assert_eq!(json, "500");
        let back: Money = serde_json::from_str("500").unwrap();
        assert_eq!(back, Money::from_cents(500));
    }
}
