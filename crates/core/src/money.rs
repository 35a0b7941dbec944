//! Monetary amounts in ZAR, carried in cents (minor units).
//!
//! All arithmetic is exact integer arithmetic: summing line totals and
//! formatting for display must never drift from the mathematically exact sum.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A non-negative ZAR amount in cents.
///
/// Value object: compared by amount, immutable, cheap to copy. Serializes as
/// the raw cent count (JSON number), same convention as unit prices on order
/// lines elsewhere.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole-rand constructor (catalog prices are whole rands).
    pub const fn from_rands(rands: u64) -> Self {
        Self(rands * 100)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Line total: unit price × quantity.
    ///
    /// Saturates rather than wrapping; the aggregate has no failure surface
    /// and a saturated total is strictly a caller-contract violation anyway.
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }

    pub const fn plus(self, other: Money) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::plus)
    }
}

impl core::fmt::Display for Money {
    /// Renders `R1,899` for whole-rand amounts and `R1,899.50` otherwise.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let rands = self.0 / 100;
        let cents = self.0 % 100;

        let digits = rands.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        if cents == 0 {
            write!(f, "R{grouped}")
        } else {
            write!(f, "R{grouped}.{cents:02}")
        }
    }
}

impl ValueObject for Money {}
