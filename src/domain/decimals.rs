//! Token decimal places.

use crate::error::RouterError;

/// Maximum allowed decimal places.
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places of a token's raw amounts.
///
/// Valid range is `0..=18`. Oracle quotes report the decimals of the
/// output token next to the raw amount so callers can render it.
///
/// # Examples
///
/// ```
/// use twap_router::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.one(), 1_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Eighteen decimal places, the usual precision of a wrapped native asset.
    pub const EIGHTEEN: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, RouterError> {
        if value > MAX_DECIMALS {
            return Err(RouterError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns the raw amount of one whole token, `10^decimals`.
    #[must_use]
    pub const fn one(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_range() {
        let Ok(d) = Decimals::new(18) else {
            panic!("expected Ok");
        };
        assert_eq!(d, Decimals::EIGHTEEN);
        assert_eq!(Decimals::new(0), Ok(Decimals::ZERO));
    }

    #[test]
    fn rejects_nineteen() {
        assert_eq!(
            Decimals::new(19),
            Err(RouterError::InvalidPrecision("decimals must be 0..=18"))
        );
    }

    #[test]
    fn one_unit() {
        assert_eq!(Decimals::ZERO.one(), 1);
        assert_eq!(Decimals::EIGHTEEN.one(), 1_000_000_000_000_000_000);
    }
}
