//! Basis-point representation for percentages and slippage buffers.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::RouterError;

/// Value that represents 100%.
const MAX_BPS: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// All `u32` values can be constructed, but only `0..=10_000` are
/// meaningful as percentages; [`is_valid_percent`](Self::is_valid_percent)
/// checks this and configuration setters reject anything above it.
///
/// As a slippage buffer, [`discount`](Self::discount) shrinks an oracle
/// estimate into a minimum output and [`premium`](Self::premium) grows one
/// into a maximum input.
///
/// # Examples
///
/// ```
/// use twap_router::domain::{Amount, BasisPoints};
///
/// let buffer = BasisPoints::new(100); // 1%
/// assert_eq!(buffer.discount(Amount::new(1_000)), Ok(Amount::new(990)));
/// assert_eq!(buffer.premium(Amount::new(1_000)), Ok(Amount::new(1_010)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the valid percentage range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Computes `floor(amount * (10_000 - self) / 10_000)`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidInput`] if `self` exceeds 100%.
    pub const fn discount(&self, amount: Amount) -> crate::error::Result<Amount> {
        if !self.is_valid_percent() {
            return Err(RouterError::InvalidInput("buffer exceeds 10000 basis points"));
        }
        match amount.mul_div((MAX_BPS - self.0) as u128, MAX_BPS as u128, Rounding::Down) {
            Some(v) => Ok(v),
            // (10_000 - b) / 10_000 <= 1, so the result always fits.
            None => Err(RouterError::Overflow("basis points discount overflow")),
        }
    }

    /// Computes `floor(amount * (10_000 + self) / 10_000)`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::AmountTooLarge`] if the grown amount no
    /// longer fits the amount width.
    pub const fn premium(&self, amount: Amount) -> crate::error::Result<Amount> {
        match amount.mul_div(MAX_BPS as u128 + self.0 as u128, MAX_BPS as u128, Rounding::Down) {
            Some(v) => Ok(v),
            None => Err(RouterError::AmountTooLarge),
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
