//! Raw token amount with checked arithmetic.

use core::fmt;

use super::Rounding;
use crate::math::mul_div;

/// A raw token amount in the smallest unit of its token.
///
/// `Amount` never interprets decimals; that is the job of
/// [`Token`](super::Token). The inner `u128` is also the input width of
/// the TWAP oracle, so every `Amount` is by construction a valid oracle
/// input and anything wider surfaces as
/// [`RouterError::AmountTooLarge`](crate::error::RouterError::AmountTooLarge)
/// at the point where it would have been produced.
///
/// Arithmetic methods are checked and return `None` instead of panicking.
///
/// # Examples
///
/// ```
/// use twap_router::domain::{Amount, Rounding};
///
/// let a = Amount::new(1_000);
/// assert_eq!(a.checked_sub(&Amount::new(400)), Some(Amount::new(600)));
/// assert_eq!(a.mul_div(9_900, 10_000, Rounding::Down), Some(Amount::new(990)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Largest representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `self * numerator / denominator` with explicit rounding.
    ///
    /// The product is never materialized, so large amounts only fail when
    /// the final result itself does not fit. Returns `None` on overflow or
    /// a zero denominator.
    #[must_use]
    pub const fn mul_div(&self, numerator: u128, denominator: u128, rounding: Rounding) -> Option<Self> {
        match mul_div(self.0, numerator, denominator, rounding) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
