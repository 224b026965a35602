//! Pool reference and the metadata a pool reports about itself.

use core::fmt;

use super::{FeeTier, TokenAddress};

/// Reference to a concentrated-liquidity pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PoolId([u8; 32]);

impl PoolId {
    /// Creates a `PoolId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// The token and fee metadata a pool reports about itself.
///
/// Pools store their tokens in canonical order, so `token0 < token1` for
/// any well-formed pool. Registration compares this descriptor against
/// the pair being registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolDescriptor {
    /// The pool being described.
    pub id: PoolId,
    /// Lower-addressed token.
    pub token0: TokenAddress,
    /// Higher-addressed token.
    pub token1: TokenAddress,
    /// Fee tier the pool charges.
    pub fee: FeeTier,
}
