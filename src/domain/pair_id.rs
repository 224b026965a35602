//! Order-independent identifier of a (token, token, fee) combination.

use core::fmt;

use tiny_keccak::{Hasher, Keccak};

use super::token_pair::sort_addresses;
use super::{FeeTier, TokenAddress};

/// `keccak256(token_low ‖ token_high ‖ fee_pips_u24_be)`.
///
/// Both constructors sort the tokens first, so the identifier is the same
/// whichever order the caller names them in.
///
/// # Examples
///
/// ```
/// use twap_router::domain::{FeeTier, PairId, TokenAddress};
///
/// let a = TokenAddress::from_bytes([1u8; 32]);
/// let b = TokenAddress::from_bytes([2u8; 32]);
/// let fee = FeeTier::TIER_0_30_PERCENT;
/// assert_eq!(PairId::of(a, b, fee), PairId::of(b, a, fee));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairId([u8; 32]);

impl PairId {
    /// Computes the identifier of `(a, b, fee)` in canonical order.
    #[must_use]
    pub fn of(a: TokenAddress, b: TokenAddress, fee: FeeTier) -> Self {
        let (low, high) = sort_addresses(a, b);
        let mut hasher = Keccak::v256();
        hasher.update(low.as_bytes());
        hasher.update(high.as_bytes());
        hasher.update(&fee.pips().to_be_bytes()[1..]);
        let mut out = [0u8; 32];
        hasher.finalize(&mut out);
        Self(out)
    }

    /// Returns the underlying hash bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
