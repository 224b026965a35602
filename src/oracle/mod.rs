//! TWAP quotes against trusted pairs.
//!
//! [`OracleClient`] is the router's only price source. It refuses to
//! quote anything the [`PairRegistry`] does not currently trust, resolves
//! the averaging window, and converts the backend's mean tick into an
//! amount of the output token.

use core::fmt;

use tracing::debug;

use crate::config::OracleConfig;
use crate::domain::{Amount, Decimals, FeeTier, PairId, TokenAddress};
use crate::error::RouterError;
use crate::registry::PairRegistry;
use crate::traits::OracleBackend;

/// Result of a TWAP quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quote {
    /// Amount of the output token, in its smallest unit.
    pub amount_out: Amount,
    /// Decimals of the output token.
    pub decimals: Decimals,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (decimals={})", self.amount_out, self.decimals.get())
    }
}

/// Quotes time-weighted prices for registered pairs.
#[derive(Debug, Clone)]
pub struct OracleClient<O> {
    backend: O,
    config: OracleConfig,
}

impl<O: OracleBackend> OracleClient<O> {
    /// Creates a client over `backend` with the given window limits.
    pub const fn new(backend: O, config: OracleConfig) -> Self {
        Self { backend, config }
    }

    /// Returns the backend.
    pub const fn backend(&self) -> &O {
        &self.backend
    }

    /// Returns the window limits.
    #[must_use]
    pub const fn config(&self) -> OracleConfig {
        self.config
    }

    /// Amount of `token_out` obtainable for `amount_in` of `token_in`,
    /// averaged over `period` seconds (0 = default window).
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidInput`] for equal or zero tokens, or a zero
    ///   amount.
    /// - [`RouterError::InvalidPeriod`] if `period` exceeds the maximum.
    /// - [`RouterError::PairNotFound`] if the pair is not active.
    /// - [`RouterError::AmountTooLarge`] if the quote does not fit.
    pub fn quote(
        &self,
        registry: &PairRegistry,
        token_in: TokenAddress,
        token_out: TokenAddress,
        amount_in: Amount,
        fee: FeeTier,
        period: u32,
    ) -> Result<Quote, RouterError> {
        if token_in == token_out {
            return Err(RouterError::InvalidInput("quote requires two distinct tokens"));
        }
        if token_in.is_zero() || token_out.is_zero() {
            return Err(RouterError::InvalidInput("token address must be non-zero"));
        }
        if amount_in.is_zero() {
            return Err(RouterError::InvalidInput("quote amount must be non-zero"));
        }
        let window = self.config.resolve_period(period)?;

        let id = PairId::of(token_in, token_out, fee);
        let pair = registry.active(id).ok_or(RouterError::PairNotFound(id))?;
        let decimals = pair
            .tokens()
            .token(token_out)
            .ok_or(RouterError::PairNotFound(id))?
            .decimals();

        let pool = pair.pool();
        let tick = self.backend.mean_tick(pool, window)?;
        let amount_out = self
            .backend
            .quote_at_tick(pool, tick, amount_in, token_in, token_out)?;

        debug!(
            pair = %id,
            %pool,
            %tick,
            window,
            %amount_in,
            %amount_out,
            "twap quote"
        );
        Ok(Quote {
            amount_out,
            decimals,
        })
    }
}
