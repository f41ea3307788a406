//! Opaque currency type used for every monetary field in the engine.
//!
//! Wraps an arbitrary-precision decimal so the engine never loses cents to
//! float drift, while staying cheap to copy and trivial to serialize. The
//! host application owns the real wallet; this type only has to support the
//! operations the engine performs: add, subtract, scale by a factor,
//! compare, and round-trip through serde.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Whole currency units (dollars), no fractional part.
    pub fn from_units(units: i64) -> Self {
        Money(Decimal::from(units))
    }

    /// Lossy construction from a float, rounded to cents.
    /// Non-finite inputs collapse to zero.
    pub fn from_f64(value: f64) -> Self {
        Money(Decimal::from_f64(value).unwrap_or_default().round_dp(2))
    }

    /// Lossy view for scaling math. Fine for gameplay-grade curves.
    pub fn to_f64(self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Multiplies by a float factor, rounding to cents.
    pub fn scaled(self, factor: f64) -> Money {
        Money::from_f64(self.to_f64() * factor)
    }

    /// Subtraction with a floor at zero.
    pub fn saturating_sub(self, other: Money) -> Money {
        if other >= self {
            Money::ZERO
        } else {
            Money(self.0 - other.0)
        }
    }

    /// The smaller of the two amounts.
    pub fn min(self, other: Money) -> Money {
        if self <= other {
            self
        } else {
            other
        }
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

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0.round_dp(2))
    }
}
