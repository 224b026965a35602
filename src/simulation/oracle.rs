//! Oracle backend with fixed, exact exchange rates.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use crate::domain::{Amount, PoolDescriptor, PoolId, Rounding, Tick, TokenAddress};
use crate::error::RouterError;
use crate::math::tick_at_ratio;
use crate::traits::OracleBackend;

/// An [`OracleBackend`] whose TWAP never moves.
///
/// Each pool carries an exact rational rate. [`mean_tick`](OracleBackend::mean_tick)
/// reports the greatest tick at or below that rate, while
/// [`quote_at_tick`](OracleBackend::quote_at_tick) converts with the exact
/// rate of the pool it is asked about, so two pools of the same pair can
/// quote differently.
///
/// Observation calls are counted, which lets tests assert that an explicit
/// slippage bound never consults the oracle.
#[derive(Debug, Default)]
pub struct FixedRateOracle {
    pools: HashMap<PoolId, PoolDescriptor>,
    ticks: HashMap<PoolId, Tick>,
    // pool -> (numerator, denominator): units of token1 per unit of token0.
    rates: HashMap<PoolId, (u128, u128)>,
    calls: AtomicUsize,
    last_period: AtomicU32,
}

impl FixedRateOracle {
    /// Creates an oracle with no pools.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `pool`, where one unit of `token0` is worth
    /// `numerator / denominator` units of `token1`.
    pub fn add_pool(&mut self, pool: PoolDescriptor, numerator: u128, denominator: u128) {
        self.pools.insert(pool.id, pool);
        self.set_rate(pool.id, numerator, denominator);
    }

    /// Changes the rate of a known pool. Unknown pools are ignored.
    ///
    /// A rate with no tick (zero numerator or denominator, or below the
    /// minimum tick price) leaves the pool without observations, so
    /// `mean_tick` fails for it.
    pub fn set_rate(&mut self, pool: PoolId, numerator: u128, denominator: u128) {
        if !self.pools.contains_key(&pool) {
            return;
        }
        let Ok(tick) = tick_at_ratio(numerator, denominator) else {
            self.ticks.remove(&pool);
            self.rates.remove(&pool);
            return;
        };
        self.ticks.insert(pool, tick);
        self.rates.insert(pool, (numerator, denominator));
    }

    /// Drops the observations of `pool`, making `mean_tick` fail.
    pub fn clear_observations(&mut self, pool: PoolId) {
        self.ticks.remove(&pool);
    }

    /// Number of `mean_tick` calls served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Window of the most recent `mean_tick` call.
    #[must_use]
    pub fn last_period(&self) -> Option<u32> {
        match self.last_period.load(Ordering::Relaxed) {
            0 => None,
            period => Some(period),
        }
    }
}

impl OracleBackend for FixedRateOracle {
    fn pool(&self, id: PoolId) -> Result<PoolDescriptor, RouterError> {
        self.pools
            .get(&id)
            .copied()
            .ok_or_else(|| RouterError::OracleUnavailable(format!("unknown pool {id}")))
    }

    fn mean_tick(&self, pool: PoolId, period: u32) -> Result<Tick, RouterError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.last_period.store(period, Ordering::Relaxed);
        let tick = self
            .ticks
            .get(&pool)
            .copied()
            .ok_or_else(|| RouterError::OracleUnavailable(format!("no observations for {pool}")))?;
        // A constant tick accumulates linearly across the window.
        let end = i64::from(tick.get()) * i64::from(period);
        Tick::from_cumulatives(0, end, period)
    }

    fn quote_at_tick(
        &self,
        pool: PoolId,
        tick: Tick,
        amount: Amount,
        base: TokenAddress,
        quote: TokenAddress,
    ) -> Result<Amount, RouterError> {
        let (Some(descriptor), Some(&(num, den))) = (self.pools.get(&pool), self.rates.get(&pool))
        else {
            return crate::math::quote_at_tick(tick, amount, base, quote);
        };
        let scaled = if (base, quote) == (descriptor.token0, descriptor.token1) {
            amount.mul_div(num, den, Rounding::Down)
        } else if (base, quote) == (descriptor.token1, descriptor.token0) {
            amount.mul_div(den, num, Rounding::Down)
        } else {
            return crate::math::quote_at_tick(tick, amount, base, quote);
        };
        scaled.ok_or(RouterError::AmountTooLarge)
    }
}
