//! Registry entry for a trusted trading venue.

use super::{FeeTier, PairId, PoolId, TokenPair};

/// One registered venue for a token pair at a fee tier.
///
/// Entries are never removed: unregistering flips [`active`](Self::is_active)
/// to `false` and a later registration writes a fresh entry next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrustedPair {
    tokens: TokenPair,
    pool: PoolId,
    fee: FeeTier,
    active: bool,
}

impl TrustedPair {
    /// Creates a new active entry.
    #[must_use]
    pub const fn new(tokens: TokenPair, pool: PoolId, fee: FeeTier) -> Self {
        Self {
            tokens,
            pool,
            fee,
            active: true,
        }
    }

    /// Returns the canonical token pair.
    #[must_use]
    pub const fn tokens(&self) -> TokenPair {
        self.tokens
    }

    /// Returns the pool backing this entry.
    #[must_use]
    pub const fn pool(&self) -> PoolId {
        self.pool
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee(&self) -> FeeTier {
        self.fee
    }

    /// Returns `true` while the entry is trusted.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the order-independent identifier of this entry.
    #[must_use]
    pub fn id(&self) -> PairId {
        PairId::of(
            self.tokens.low().address(),
            self.tokens.high().address(),
            self.fee,
        )
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }
}
