//! Registry of trusted (token, token, fee) combinations.
//!
//! [`PairRegistry`] decides which pools the router may price against and
//! route through. Keys are order-independent [`PairId`]s, so trusting
//! `(A, B, fee)` also trusts `(B, A, fee)`. Entries are never removed:
//! every registration ever written for a key is kept as history and the
//! last one is the current entry.

use std::collections::HashMap;

use tracing::info;

use crate::domain::{
    FeeTier, PairId, PoolDescriptor, RouterEvent, Token, TokenAddress, TokenPair, TrustedPair,
};
use crate::error::RouterError;

/// Trusted-pair registry with per-key history.
#[derive(Debug, Clone, Default)]
pub struct PairRegistry {
    entries: HashMap<PairId, Vec<TrustedPair>>,
}

impl PairRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trusts `pool` for the pair `(token_a, token_b)` at `fee`.
    ///
    /// The pool's own metadata must name the same tokens in canonical order
    /// and the same fee tier.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidInput`] for a zero or repeated token, or a
    ///   non-standard fee tier.
    /// - [`RouterError::AlreadyRegistered`] if the pair is already active.
    /// - [`RouterError::PoolMismatch`] if the pool metadata disagrees.
    pub fn register(
        &mut self,
        token_a: Token,
        token_b: Token,
        pool: &PoolDescriptor,
        fee: FeeTier,
    ) -> Result<RouterEvent, RouterError> {
        let tokens = TokenPair::new(token_a, token_b)?;
        if !fee.is_standard() {
            return Err(RouterError::InvalidInput("fee is not a standard tier"));
        }
        let id = PairId::of(tokens.low().address(), tokens.high().address(), fee);
        if self.active(id).is_some() {
            return Err(RouterError::AlreadyRegistered(id));
        }
        if pool.token0 != tokens.low().address() {
            return Err(RouterError::PoolMismatch("pool token0 differs from pair"));
        }
        if pool.token1 != tokens.high().address() {
            return Err(RouterError::PoolMismatch("pool token1 differs from pair"));
        }
        if pool.fee != fee {
            return Err(RouterError::PoolMismatch("pool fee differs from pair"));
        }

        let pair = TrustedPair::new(tokens, pool.id, fee);
        self.entries.entry(id).or_default().push(pair);
        info!(pair = %id, pool = %pool.id, %fee, "pair registered");
        Ok(RouterEvent::PairRegistered { id, pair })
    }

    /// Stops trusting the pair `(token_a, token_b)` at `fee`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::NotRegistered`] if the pair has no active entry.
    pub fn unregister(
        &mut self,
        token_a: TokenAddress,
        token_b: TokenAddress,
        fee: FeeTier,
    ) -> Result<RouterEvent, RouterError> {
        let id = PairId::of(token_a, token_b, fee);
        let Some(entry) = self
            .entries
            .get_mut(&id)
            .and_then(|history| history.last_mut())
            .filter(|pair| pair.is_active())
        else {
            return Err(RouterError::NotRegistered(id));
        };
        let pair = *entry;
        entry.deactivate();
        info!(pair = %id, pool = %pair.pool(), "pair unregistered");
        Ok(RouterEvent::PairUnregistered { id, pair })
    }

    /// Returns `true` if the pair is currently trusted, in either order.
    #[must_use]
    pub fn is_supported(&self, token_a: TokenAddress, token_b: TokenAddress, fee: FeeTier) -> bool {
        self.get(token_a, token_b, fee).is_some()
    }

    /// Returns the active entry for the pair, in either order.
    #[must_use]
    pub fn get(
        &self,
        token_a: TokenAddress,
        token_b: TokenAddress,
        fee: FeeTier,
    ) -> Option<&TrustedPair> {
        self.active(PairId::of(token_a, token_b, fee))
    }

    /// Returns the active entry for `id`.
    #[must_use]
    pub fn active(&self, id: PairId) -> Option<&TrustedPair> {
        self.entries
            .get(&id)
            .and_then(|history| history.last())
            .filter(|pair| pair.is_active())
    }

    /// Returns every entry ever written for `id`, oldest first.
    #[must_use]
    pub fn history(&self, id: PairId) -> &[TrustedPair] {
        self.entries.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Iterates over all currently active entries.
    pub fn active_pairs(&self) -> impl Iterator<Item = &TrustedPair> + '_ {
        self.entries
            .values()
            .filter_map(|history| history.last())
            .filter(|pair| pair.is_active())
    }
}
