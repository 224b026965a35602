//! Source of pool metadata and time-weighted mean ticks.
//!
//! [`OracleBackend`] is the seam to the exchange's observation mechanism.
//! The router only ever asks for the arithmetic mean tick over a trailing
//! window and converts it to an amount with
//! [`quote_at_tick`](OracleBackend::quote_at_tick).

use crate::domain::{Amount, PoolDescriptor, PoolId, Tick, TokenAddress};
use crate::error::RouterError;

/// Read-only access to pool metadata and TWAP observations.
///
/// # Errors
///
/// Implementations report unreachable pools or missing observations as
/// [`RouterError::OracleUnavailable`]. Conversion failures in
/// [`quote_at_tick`](Self::quote_at_tick) surface as
/// [`RouterError::AmountTooLarge`].
pub trait OracleBackend {
    /// Returns the token and fee metadata the pool reports about itself.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::OracleUnavailable`] if the pool is unknown.
    fn pool(&self, id: PoolId) -> Result<PoolDescriptor, RouterError>;

    /// Returns the arithmetic mean tick of `pool` over the last `period`
    /// seconds. `period` is always non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::OracleUnavailable`] if the pool has no
    /// observations covering the window.
    fn mean_tick(&self, pool: PoolId, period: u32) -> Result<Tick, RouterError>;

    /// Converts `amount` of `base` into `quote` at `tick`, the mean tick
    /// just observed on `pool`.
    ///
    /// The default ignores `pool` and uses the integer `1.0001^tick` math
    /// with the canonical token ordering; see [`crate::math::quote_at_tick`].
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::AmountTooLarge`] if the result does not fit.
    fn quote_at_tick(
        &self,
        pool: PoolId,
        tick: Tick,
        amount: Amount,
        base: TokenAddress,
        quote: TokenAddress,
    ) -> Result<Amount, RouterError> {
        let _ = pool;
        crate::math::quote_at_tick(tick, amount, base, quote)
    }
}
