//! Pool fee tiers built on [`BasisPoints`].

use core::fmt;

use super::BasisPoints;
use crate::error::RouterError;

/// Hundredths of a basis point per basis point.
const PIPS_PER_BP: u32 = 100;

/// A pool fee tier wrapping [`BasisPoints`].
///
/// Concentrated-liquidity pools only exist at a fixed set of fee tiers;
/// [`is_standard`](Self::is_standard) tells whether a value is one of
/// them. Requests and registrations reject anything else.
///
/// On the path wire format fees are written in *pips* (hundredths of a
/// basis point) as a 24-bit big-endian integer, so the 0.30% tier is
/// `3000`.
///
/// # Examples
///
/// ```
/// use twap_router::domain::FeeTier;
///
/// let tier = FeeTier::TIER_0_30_PERCENT;
/// assert_eq!(tier.pips(), 3_000);
/// assert_eq!(FeeTier::from_pips(3_000), Ok(tier));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// 0.01% fee (1 bp, 100 pips).
    pub const TIER_0_01_PERCENT: Self = Self(BasisPoints::new(1));

    /// 0.05% fee (5 bp, 500 pips).
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.30% fee (30 bp, 3 000 pips).
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% fee (100 bp, 10 000 pips).
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// All standard tiers in ascending order.
    pub const STANDARD: [Self; 4] = [
        Self::TIER_0_01_PERCENT,
        Self::TIER_0_05_PERCENT,
        Self::TIER_0_30_PERCENT,
        Self::TIER_1_00_PERCENT,
    ];

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Parses a fee expressed in pips.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidInput`] unless `pips` is one of the
    /// standard tiers.
    pub const fn from_pips(pips: u32) -> Result<Self, RouterError> {
        if pips % PIPS_PER_BP != 0 {
            return Err(RouterError::InvalidInput("fee is not a standard tier"));
        }
        let tier = Self(BasisPoints::new(pips / PIPS_PER_BP));
        if !tier.is_standard() {
            return Err(RouterError::InvalidInput("fee is not a standard tier"));
        }
        Ok(tier)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns the fee in pips (hundredths of a basis point).
    #[must_use]
    pub const fn pips(&self) -> u32 {
        self.0.get().saturating_mul(PIPS_PER_BP)
    }

    /// Returns `true` if this tier is one of the standard tiers.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        matches!(self.0.get(), 1 | 5 | 30 | 100)
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
