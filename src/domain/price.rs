//! Exchange rate between two tokens.

use super::Amount;
use crate::error::RouterError;

/// Dimensionless exchange rate (raw units of quote token per raw unit of
/// base token).
///
/// Wraps a finite, non-negative `f64`. Reporting only: quotes and bounds
/// are computed in integers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Creates a new `Price`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPrice`] if the value is negative, NaN,
    /// or infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(RouterError::InvalidPrice(
                "price must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Computes `numerator / denominator` as a price.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::DivisionByZero`] if `denominator` is zero.
    pub fn from_amounts(numerator: Amount, denominator: Amount) -> crate::error::Result<Self> {
        if denominator.is_zero() {
            return Err(RouterError::DivisionByZero);
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = numerator.get() as f64 / denominator.get() as f64;
        Self::new(ratio)
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }
}
