//! Discrete log-price point reported by the TWAP oracle.

use core::fmt;

use crate::error::RouterError;

const MIN_TICK: i32 = -887_272;
const MAX_TICK: i32 = 887_272;

/// A pool tick, `price = 1.0001^tick`.
///
/// Pools accumulate `tick * seconds` over time. The difference of two
/// cumulative readings divided by the seconds between them is the
/// arithmetic mean tick, which is the TWAP in log space.
///
/// ```
/// use twap_router::domain::Tick;
///
/// // Cumulatives -1000 -> -1601 over 60 s: mean -10.0166 rounds to -11.
/// assert_eq!(Tick::from_cumulatives(-1_000, -1_601, 60).map(|t| t.get()), Ok(-11));
/// assert!(Tick::new(900_000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tick(i32);

impl Tick {
    /// Lowest tick a pool can reach.
    pub const MIN: Self = Self(MIN_TICK);

    /// Highest tick a pool can reach.
    pub const MAX: Self = Self(MAX_TICK);

    /// `price = 1`.
    pub const ZERO: Self = Self(0);

    /// Creates a tick from its raw index.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidTick`] outside `[-887272, 887272]`.
    pub const fn new(value: i32) -> crate::error::Result<Self> {
        if value < MIN_TICK || value > MAX_TICK {
            return Err(RouterError::InvalidTick("tick out of range [-887272, 887272]"));
        }
        Ok(Self(value))
    }

    /// Arithmetic mean tick between two cumulative readings taken `period`
    /// seconds apart (`start` is the older one). Rounds toward negative
    /// infinity.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidPeriod`] for a zero period.
    /// - [`RouterError::InvalidTick`] if the mean is out of range.
    pub fn from_cumulatives(start: i64, end: i64, period: u32) -> crate::error::Result<Self> {
        if period == 0 {
            return Err(RouterError::InvalidPeriod(period));
        }
        let delta = end
            .checked_sub(start)
            .ok_or(RouterError::InvalidTick("tick cumulative delta overflow"))?;
        let mean = delta.div_euclid(i64::from(period));
        let mean = i32::try_from(mean)
            .map_err(|_| RouterError::InvalidTick("mean tick out of range"))?;
        Self::new(mean)
    }

    /// Returns the raw tick index.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
