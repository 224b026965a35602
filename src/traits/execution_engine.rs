//! The exchange that actually moves liquidity.

use crate::domain::{AccountId, Amount, FeeTier, SwapType, TokenAddress};
use crate::error::RouterError;
use crate::path::SwapPath;

/// Parameters of a single-pool swap.
///
/// For [`SwapType::ExactIn`], `amount_specified` is the input and
/// `other_amount_bound` the minimum output. For [`SwapType::ExactOut`],
/// `amount_specified` is the output and `other_amount_bound` the maximum
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleHopParams {
    /// Which side is fixed.
    pub swap_type: SwapType,
    /// Token paid in.
    pub token_in: TokenAddress,
    /// Token paid out.
    pub token_out: TokenAddress,
    /// Fee tier of the pool.
    pub fee: FeeTier,
    /// Account the input is pulled from.
    pub payer: AccountId,
    /// Who receives the output.
    pub recipient: AccountId,
    /// Last acceptable timestamp (inclusive).
    pub deadline: u64,
    /// The fixed amount.
    pub amount_specified: Amount,
    /// Bound on the other side.
    pub other_amount_bound: Amount,
}

/// Parameters of a path swap.
///
/// Exact-input paths run from the input token to the output token;
/// exact-output paths run from the output token back to the input token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultihopParams {
    /// Which side is fixed.
    pub swap_type: SwapType,
    /// Encoded route.
    pub path: SwapPath,
    /// Account the input is pulled from.
    pub payer: AccountId,
    /// Who receives the output.
    pub recipient: AccountId,
    /// Last acceptable timestamp (inclusive).
    pub deadline: u64,
    /// The fixed amount.
    pub amount_specified: Amount,
    /// Bound on the other side.
    pub other_amount_bound: Amount,
}

/// An exchange that executes swaps against its own pools.
///
/// The engine pulls input from the payer through the allowance granted to
/// [`spender`](Self::spender) and delivers output to the recipient.
/// Both may be the same account.
///
/// # Contract
///
/// - Exact-input: consume exactly `amount_specified`, return the output,
///   fail if it is below `other_amount_bound`.
/// - Exact-output: deliver exactly `amount_specified`, return the input
///   consumed, never consume more than `other_amount_bound`.
/// - A failed call moves nothing.
pub trait ExecutionEngine {
    /// Account that must be approved to pull swap input.
    fn spender(&self) -> AccountId;

    /// Executes a single-pool swap and returns the realized amount on the
    /// non-fixed side.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::ExecutionFailed`] if the swap cannot be
    /// filled within its bound.
    fn execute_single(&mut self, params: &SingleHopParams) -> Result<Amount, RouterError>;

    /// Executes a path swap and returns the realized amount on the
    /// non-fixed side.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::ExecutionFailed`] if the swap cannot be
    /// filled within its bound.
    fn execute_multihop(&mut self, params: &MultihopParams) -> Result<Amount, RouterError>;
}
