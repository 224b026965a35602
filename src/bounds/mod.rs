//! Oracle-derived slippage bounds.
//!
//! When a caller leaves the slippage bound at zero, the router derives it
//! here: chain TWAP quotes across every hop of the route, then widen the
//! final estimate once by the configured buffer.
//!
//! - Exact input: hops run left to right, each quote feeding the next, and
//!   the minimum output is `floor(estimate * (10000 - b) / 10000)`.
//! - Exact output: hops run right to left in the reverse direction starting
//!   from the requested output, and the maximum input is
//!   `floor(estimate * (10000 + b) / 10000)`.
//!
//! The buffer is never compounded per hop.

use tracing::debug;

use crate::config::BufferConfig;
use crate::domain::{Amount, Decimals, FeeTier, TokenAddress};
use crate::error::RouterError;
use crate::oracle::OracleClient;
use crate::registry::PairRegistry;
use crate::traits::OracleBackend;

/// A derived bound together with the raw estimate it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivedBound {
    /// Chained TWAP estimate before the buffer.
    pub estimate: Amount,
    /// Buffered bound handed to the engine.
    pub bound: Amount,
    /// Decimals of the bounded token.
    pub decimals: Decimals,
}

/// Derives minimum-output and maximum-input bounds from TWAP quotes.
#[derive(Debug)]
pub struct BoundDeriver<'a, O> {
    oracle: &'a OracleClient<O>,
    registry: &'a PairRegistry,
    settings: BufferConfig,
}

impl<'a, O: OracleBackend> BoundDeriver<'a, O> {
    /// Creates a deriver that quotes through `oracle` with `settings`.
    pub const fn new(
        oracle: &'a OracleClient<O>,
        registry: &'a PairRegistry,
        settings: BufferConfig,
    ) -> Self {
        Self {
            oracle,
            registry,
            settings,
        }
    }

    /// Minimum output for selling `amount_in` of `token_in` in one pool.
    ///
    /// # Errors
    ///
    /// Propagates quote errors unchanged.
    pub fn min_amount_out(
        &self,
        token_in: TokenAddress,
        token_out: TokenAddress,
        amount_in: Amount,
        fee: FeeTier,
    ) -> Result<DerivedBound, RouterError> {
        self.min_amount_out_multihop(&[token_in, token_out], &[fee], amount_in)
    }

    /// Maximum input for buying `amount_out` of `token_out` in one pool.
    ///
    /// # Errors
    ///
    /// Propagates quote errors unchanged; [`RouterError::AmountTooLarge`]
    /// if the buffered bound does not fit.
    pub fn max_amount_in(
        &self,
        token_in: TokenAddress,
        token_out: TokenAddress,
        amount_out: Amount,
        fee: FeeTier,
    ) -> Result<DerivedBound, RouterError> {
        self.max_amount_in_multihop(&[token_in, token_out], &[fee], amount_out)
    }

    /// Minimum output for selling `amount_in` along `tokens`.
    ///
    /// `tokens` runs from input to output and `fees[i]` is the fee of the
    /// hop `tokens[i] -> tokens[i + 1]`.
    ///
    /// # Errors
    ///
    /// - [`RouterError::LengthMismatch`] unless `fees.len() + 1 == tokens.len()`
    ///   with at least one hop.
    /// - Quote errors of any hop, unchanged.
    pub fn min_amount_out_multihop(
        &self,
        tokens: &[TokenAddress],
        fees: &[FeeTier],
        amount_in: Amount,
    ) -> Result<DerivedBound, RouterError> {
        check_route(tokens, fees)?;
        let period = self.settings.period();
        let mut amount = amount_in;
        let mut decimals = Decimals::ZERO;
        for (hop, fee) in tokens.windows(2).zip(fees) {
            let quote = self
                .oracle
                .quote(self.registry, hop[0], hop[1], amount, *fee, period)?;
            amount = quote.amount_out;
            decimals = quote.decimals;
        }
        let bound = self.settings.buffer().discount(amount)?;
        debug!(estimate = %amount, %bound, hops = fees.len(), "derived minimum output");
        Ok(DerivedBound {
            estimate: amount,
            bound,
            decimals,
        })
    }

    /// Maximum input for buying `amount_out` along `tokens`.
    ///
    /// `tokens` still runs from input to output; the quotes walk it
    /// backwards, asking how much of `tokens[i]` each hop's output is worth.
    ///
    /// # Errors
    ///
    /// - [`RouterError::LengthMismatch`] unless `fees.len() + 1 == tokens.len()`
    ///   with at least one hop.
    /// - Quote errors of any hop, unchanged.
    /// - [`RouterError::AmountTooLarge`] if the buffered bound does not fit.
    pub fn max_amount_in_multihop(
        &self,
        tokens: &[TokenAddress],
        fees: &[FeeTier],
        amount_out: Amount,
    ) -> Result<DerivedBound, RouterError> {
        check_route(tokens, fees)?;
        let period = self.settings.period();
        let mut amount = amount_out;
        let mut decimals = Decimals::ZERO;
        for (hop, fee) in tokens.windows(2).zip(fees).rev() {
            let quote = self
                .oracle
                .quote(self.registry, hop[1], hop[0], amount, *fee, period)?;
            amount = quote.amount_out;
            decimals = quote.decimals;
        }
        let bound = self.settings.buffer().premium(amount)?;
        debug!(estimate = %amount, %bound, hops = fees.len(), "derived maximum input");
        Ok(DerivedBound {
            estimate: amount,
            bound,
            decimals,
        })
    }
}

fn check_route(tokens: &[TokenAddress], fees: &[FeeTier]) -> Result<(), RouterError> {
    if fees.is_empty() || fees.len() + 1 != tokens.len() {
        return Err(RouterError::LengthMismatch {
            tokens: tokens.len(),
            fees: fees.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::OracleConfig;
    use crate::domain::{BasisPoints, PoolDescriptor, PoolId, Token};
    use crate::simulation::FixedRateOracle;

    const FEE: FeeTier = FeeTier::TIER_0_30_PERCENT;

    fn addr(b: u8) -> TokenAddress {
        TokenAddress::from_bytes([b; 32])
    }

    /// Chain 1 -> 2 -> 3, each hop worth 1000x.
    fn setup() -> (OracleClient<FixedRateOracle>, PairRegistry) {
        let mut oracle = FixedRateOracle::new();
        let mut registry = PairRegistry::new();
        for (pool_id, t0, t1) in [(7u8, 1u8, 2u8), (8, 2, 3)] {
            let pool = PoolDescriptor {
                id: PoolId::from_bytes([pool_id; 32]),
                token0: addr(t0),
                token1: addr(t1),
                fee: FEE,
            };
            oracle.add_pool(pool, 1_000, 1);
            let Ok(_) = registry.register(
                Token::new(addr(t0), Decimals::EIGHTEEN),
                Token::new(addr(t1), Decimals::EIGHTEEN),
                &pool,
                FEE,
            ) else {
                panic!("expected Ok");
            };
        }
        (OracleClient::new(oracle, OracleConfig::default()), registry)
    }

    fn settings(bps: u32) -> BufferConfig {
        let Ok(cfg) = BufferConfig::new(0, BasisPoints::new(bps)) else {
            panic!("expected Ok");
        };
        cfg
    }

    #[test]
    fn single_hop_min_out() {
        let (oracle, registry) = setup();
        let deriver = BoundDeriver::new(&oracle, &registry, settings(100));
        let Ok(b) = deriver.min_amount_out(addr(1), addr(2), Amount::new(1), FEE) else {
            panic!("expected Ok");
        };
        assert_eq!(b.estimate, Amount::new(1_000));
        assert_eq!(b.bound, Amount::new(990));
        assert_eq!(b.decimals, Decimals::EIGHTEEN);
    }

    #[test]
    fn single_hop_max_in_uses_reverse_quote() {
        let (oracle, registry) = setup();
        let deriver = BoundDeriver::new(&oracle, &registry, settings(100));
        // Buying 2000 of token 2 is worth 2 of token 1.
        let Ok(b) = deriver.max_amount_in(addr(1), addr(2), Amount::new(2_000), FEE) else {
            panic!("expected Ok");
        };
        assert_eq!(b.estimate, Amount::new(2));
        assert_eq!(b.bound, Amount::new(2));

        let Ok(b) = deriver.max_amount_in(addr(2), addr(1), Amount::new(1_000), FEE) else {
            panic!("expected Ok");
        };
        assert_eq!(b.estimate, Amount::new(1_000_000));
        assert_eq!(b.bound, Amount::new(1_010_000));
    }

    #[test]
    fn multihop_buffer_applied_once() {
        let (oracle, registry) = setup();
        let deriver = BoundDeriver::new(&oracle, &registry, settings(100));
        let Ok(b) = deriver.min_amount_out_multihop(
            &[addr(1), addr(2), addr(3)],
            &[FEE, FEE],
            Amount::new(1),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(b.estimate, Amount::new(1_000_000));
        assert_eq!(b.bound, Amount::new(990_000));
    }

    #[test]
    fn multihop_max_in_walks_backwards() {
        let (oracle, registry) = setup();
        let deriver = BoundDeriver::new(&oracle, &registry, settings(50));
        let Ok(b) = deriver.max_amount_in_multihop(
            &[addr(3), addr(2), addr(1)],
            &[FEE, FEE],
            Amount::new(1),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(b.estimate, Amount::new(1_000_000));
        assert_eq!(b.bound, Amount::new(1_005_000));
    }

    #[test]
    fn untrusted_hop_propagates_pair_not_found() {
        let (oracle, registry) = setup();
        let deriver = BoundDeriver::new(&oracle, &registry, settings(100));
        let err = deriver.min_amount_out_multihop(
            &[addr(1), addr(2), addr(4)],
            &[FEE, FEE],
            Amount::new(1),
        );
        assert!(matches!(err, Err(RouterError::PairNotFound(_))));
    }

    #[test]
    fn length_mismatch() {
        let (oracle, registry) = setup();
        let deriver = BoundDeriver::new(&oracle, &registry, settings(100));
        assert_eq!(
            deriver.min_amount_out_multihop(&[addr(1), addr(2)], &[FEE, FEE], Amount::new(1)),
            Err(RouterError::LengthMismatch { tokens: 2, fees: 2 })
        );
        assert_eq!(
            deriver.max_amount_in_multihop(&[addr(1)], &[], Amount::new(1)),
            Err(RouterError::LengthMismatch { tokens: 1, fees: 0 })
        );
    }

    #[test]
    fn premium_overflow_is_amount_too_large() {
        let (oracle, registry) = setup();
        let deriver = BoundDeriver::new(&oracle, &registry, settings(100));
        let err = deriver.max_amount_in(addr(2), addr(1), Amount::new(u128::MAX / 1_000), FEE);
        assert_eq!(err, Err(RouterError::AmountTooLarge));
    }
}
