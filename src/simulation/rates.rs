//! Exact rational exchange rates the simulated engine fills at.

use std::collections::HashMap;

use crate::domain::{Amount, Rounding, TokenAddress};

/// Rational rates between token pairs, stored in canonical order.
#[derive(Debug, Clone, Default)]
pub(crate) struct RateTable {
    // (low, high) -> (numerator, denominator): units of high per unit of low.
    rates: HashMap<(TokenAddress, TokenAddress), (u128, u128)>,
}

impl RateTable {
    /// Records that one unit of `base` is worth `numerator / denominator`
    /// units of `quote`.
    pub(crate) fn set(&mut self, base: TokenAddress, quote: TokenAddress, numerator: u128, denominator: u128) {
        if base < quote {
            self.rates.insert((base, quote), (numerator, denominator));
        } else {
            self.rates.insert((quote, base), (denominator, numerator));
        }
    }

    /// Returns `(numerator, denominator)` of `quote` per `base`, if known.
    pub(crate) fn get(&self, base: TokenAddress, quote: TokenAddress) -> Option<(u128, u128)> {
        if base < quote {
            self.rates.get(&(base, quote)).copied()
        } else {
            self.rates.get(&(quote, base)).map(|&(n, d)| (d, n))
        }
    }

    /// Converts `amount` of `base` into `quote`. `None` if the rate is
    /// unknown; `Some(None)` if the result does not fit.
    pub(crate) fn convert(
        &self,
        base: TokenAddress,
        quote: TokenAddress,
        amount: Amount,
        rounding: Rounding,
    ) -> Option<Option<Amount>> {
        let (num, den) = self.get(base, quote)?;
        Some(amount.mul_div(num, den, rounding))
    }
}
