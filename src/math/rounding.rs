//! Rounding helpers for integer division and scaling.
//!
//! [`div_round`] performs `u128` division with an explicit [`Rounding`]
//! direction; [`mul_div`] scales a value by a ratio without materializing
//! the full product. Both back [`Amount`](crate::domain::Amount) and the
//! basis-point buffer math.
//!
//! # Examples
//!
//! ```
//! use twap_router::domain::Rounding;
//! use twap_router::math::{div_round, mul_div};
//!
//! assert_eq!(div_round(10, 3, Rounding::Down), Some(3));
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! assert_eq!(mul_div(1_000, 9_900, 10_000, Rounding::Down), Some(990));
//! ```

use crate::domain::Rounding;

/// Integer division of `u128` values with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        Rounding::Up => {
            // q + 1 cannot overflow: a non-zero remainder implies q < u128::MAX.
            if numerator % denominator != 0 {
                Some(q + 1)
            } else {
                Some(q)
            }
        }
    }
}

/// Computes `value * numerator / denominator` with explicit rounding.
///
/// Splits `value = q * denominator + r` so that
/// `value * numerator / denominator = q * numerator + r * numerator / denominator`
/// exactly; only the final result (and `r * numerator`, which is bounded by
/// `denominator * numerator`) has to fit in `u128`.
///
/// Returns [`None`] on a zero denominator or if the result overflows.
#[must_use]
pub const fn mul_div(value: u128, numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let q = value / denominator;
    let r = value % denominator;

    let whole = match q.checked_mul(numerator) {
        Some(v) => v,
        None => return None,
    };
    let partial_product = match r.checked_mul(numerator) {
        Some(v) => v,
        None => return None,
    };
    let partial = match div_round(partial_product, denominator, rounding) {
        Some(v) => v,
        None => return None,
    };
    whole.checked_add(partial)
}
