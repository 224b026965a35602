//! Execution engine that settles swaps against an [`InMemoryLedger`].

use tracing::debug;

use super::rates::RateTable;
use super::InMemoryLedger;
use crate::domain::{AccountId, Amount, BasisPoints, Rounding, SwapType, TokenAddress};
use crate::error::RouterError;
use crate::traits::{AssetLedger, ExecutionEngine, MultihopParams, SingleHopParams};

/// A market maker that fills every swap at fixed rates from its own
/// pre-funded account.
///
/// The engine account doubles as the spender the router approves. An
/// optional execution slippage makes fills worse than the configured rate,
/// and bound enforcement can be switched off to exercise the router's own
/// post-execution checks.
#[derive(Debug, Clone)]
pub struct LedgerEngine {
    ledger: InMemoryLedger,
    account: AccountId,
    rates: RateTable,
    slippage: BasisPoints,
    enforce_bounds: bool,
    fail_with: Option<String>,
    calls: usize,
}

impl LedgerEngine {
    /// Creates an engine trading from `account` on `ledger`.
    #[must_use]
    pub fn new(ledger: InMemoryLedger, account: AccountId) -> Self {
        Self {
            ledger,
            account,
            rates: RateTable::default(),
            slippage: BasisPoints::ZERO,
            enforce_bounds: true,
            fail_with: None,
            calls: 0,
        }
    }

    /// Fills `base -> quote` at `numerator / denominator` units of `quote`
    /// per unit of `base` (and the inverse the other way).
    pub fn set_rate(&mut self, base: TokenAddress, quote: TokenAddress, numerator: u128, denominator: u128) {
        self.rates.set(base, quote, numerator, denominator);
    }

    /// Makes every fill worse than the rate by `slippage`.
    pub fn set_slippage(&mut self, slippage: BasisPoints) {
        self.slippage = slippage;
    }

    /// Toggles the engine-side bound check.
    pub fn set_enforce_bounds(&mut self, enforce: bool) {
        self.enforce_bounds = enforce;
    }

    /// Makes every subsequent call fail with `reason`.
    pub fn fail_with(&mut self, reason: impl Into<String>) {
        self.fail_with = Some(reason.into());
    }

    /// Number of swaps attempted.
    #[must_use]
    pub const fn calls(&self) -> usize {
        self.calls
    }

    /// Input needed to receive `amount_out` of `token_out`, walking
    /// `route` (ordered from output to input).
    fn input_for(&self, route: &[TokenAddress], amount_out: Amount) -> Result<Amount, RouterError> {
        let mut amount = amount_out;
        for hop in route.windows(2) {
            amount = self.convert(hop[0], hop[1], amount, Rounding::Up)?;
        }
        self.slippage
            .premium(amount)
            .map_err(|_| RouterError::ExecutionFailed("input overflow".into()))
    }

    /// Output received for `amount_in`, walking `route` (ordered from
    /// input to output).
    fn output_for(&self, route: &[TokenAddress], amount_in: Amount) -> Result<Amount, RouterError> {
        let mut amount = amount_in;
        for hop in route.windows(2) {
            amount = self.convert(hop[0], hop[1], amount, Rounding::Down)?;
        }
        self.slippage
            .discount(amount)
            .map_err(|_| RouterError::ExecutionFailed("invalid slippage".into()))
    }

    fn convert(
        &self,
        base: TokenAddress,
        quote: TokenAddress,
        amount: Amount,
        rounding: Rounding,
    ) -> Result<Amount, RouterError> {
        match self.rates.convert(base, quote, amount, rounding) {
            Some(Some(out)) => Ok(out),
            Some(None) => Err(RouterError::ExecutionFailed("amount overflow".into())),
            None => Err(RouterError::ExecutionFailed(format!("no liquidity for {base}/{quote}"))),
        }
    }

    /// Executes `route` (ordered input to output) and returns the realized
    /// amount on the non-fixed side.
    fn execute(
        &mut self,
        swap_type: SwapType,
        route: &[TokenAddress],
        payer: AccountId,
        recipient: AccountId,
        amount_specified: Amount,
        bound: Amount,
    ) -> Result<Amount, RouterError> {
        self.calls += 1;
        if let Some(reason) = &self.fail_with {
            return Err(RouterError::ExecutionFailed(reason.clone()));
        }
        let (Some(&token_in), Some(&token_out)) = (route.first(), route.last()) else {
            return Err(RouterError::ExecutionFailed("empty route".into()));
        };

        let (amount_in, amount_out) = match swap_type {
            SwapType::ExactIn => {
                let out = self.output_for(route, amount_specified)?;
                if self.enforce_bounds && out < bound {
                    return Err(RouterError::ExecutionFailed("too little received".into()));
                }
                (amount_specified, out)
            }
            SwapType::ExactOut => {
                let reversed: Vec<TokenAddress> = route.iter().rev().copied().collect();
                let needed = self.input_for(&reversed, amount_specified)?;
                if self.enforce_bounds && needed > bound {
                    return Err(RouterError::ExecutionFailed("too much requested".into()));
                }
                (needed, amount_specified)
            }
        };

        self.ledger
            .transfer_from(token_in, self.account, payer, self.account, amount_in)?;
        self.ledger
            .transfer(token_out, self.account, recipient, amount_out)?;
        debug!(%swap_type, %amount_in, %amount_out, hops = route.len() - 1, "engine filled swap");

        Ok(match swap_type {
            SwapType::ExactIn => amount_out,
            SwapType::ExactOut => amount_in,
        })
    }
}

impl ExecutionEngine for LedgerEngine {
    fn spender(&self) -> AccountId {
        self.account
    }

    fn execute_single(&mut self, params: &SingleHopParams) -> Result<Amount, RouterError> {
        self.execute(
            params.swap_type,
            &[params.token_in, params.token_out],
            params.payer,
            params.recipient,
            params.amount_specified,
            params.other_amount_bound,
        )
    }

    fn execute_multihop(&mut self, params: &MultihopParams) -> Result<Amount, RouterError> {
        let (mut tokens, _fees) = params.path.decode()?;
        // Exact-output paths arrive output-first.
        if params.swap_type == SwapType::ExactOut {
            tokens.reverse();
        }
        self.execute(
            params.swap_type,
            &tokens,
            params.payer,
            params.recipient,
            params.amount_specified,
            params.other_amount_bound,
        )
    }
}
