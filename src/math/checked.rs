//! Checked arithmetic trait for amount bookkeeping.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning helpers on
//! [`Amount`] into [`Result`](crate::error::Result) so custody and
//! settlement code can propagate a specific error with `?`.
//!
//! # Examples
//!
//! ```
//! use twap_router::domain::Amount;
//! use twap_router::math::CheckedArithmetic;
//!
//! let pulled = Amount::new(1_010);
//! let used = Amount::new(1_000);
//! assert_eq!(pulled.safe_sub(&used), Ok(Amount::new(10)));
//! ```

use crate::domain::{Amount, Rounding};
use crate::error::RouterError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Overflow`] if the result does not fit.
    fn safe_add(&self, other: &Self) -> Result<Self, RouterError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, RouterError>;

    /// Checked `self * numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::DivisionByZero`] for a zero denominator and
    /// [`RouterError::Overflow`] if the result does not fit.
    fn safe_mul_div(
        &self,
        numerator: u128,
        denominator: u128,
        rounding: Rounding,
    ) -> Result<Self, RouterError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, RouterError> {
        self.checked_add(other)
            .ok_or(RouterError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, RouterError> {
        self.checked_sub(other)
            .ok_or(RouterError::Underflow("amount subtraction underflow"))
    }

    fn safe_mul_div(
        &self,
        numerator: u128,
        denominator: u128,
        rounding: Rounding,
    ) -> Result<Self, RouterError> {
        if denominator == 0 {
            return Err(RouterError::DivisionByZero);
        }
        self.mul_div(numerator, denominator, rounding)
            .ok_or(RouterError::Overflow("amount scaling overflow"))
    }
}
