//! Unified error types for the router.
//!
//! All fallible operations across the crate return [`RouterError`], so a
//! caller sees one taxonomy whether the failure came from request
//! validation, the oracle, custody, or the execution engine.

use thiserror::Error;

use crate::domain::{Amount, PairId};

/// Crate-wide error enum.
///
/// Validation variants carry a static description of the violated
/// constraint; collaborator variants carry the message reported by the
/// external system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// Malformed request: equal tokens, zero amount, bad fee tier, elapsed
    /// deadline, mismatched sequence lengths.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A hop of the route is not present or not active in the registry.
    #[error("pair not trusted: {0}")]
    PairNotTrusted(PairId),

    /// An amount does not fit the oracle's input width.
    #[error("amount exceeds the oracle input width")]
    AmountTooLarge,

    /// The averaging window is outside `(0, max_period]`.
    #[error("invalid oracle period: {0}s")]
    InvalidPeriod(u32),

    /// Oracle query against a missing or inactive pair.
    #[error("pair not found: {0}")]
    PairNotFound(PairId),

    /// Attached native value differs from the amount the call requires.
    #[error("attached value {actual} does not match required {expected}")]
    ValueMismatch {
        /// Value the call requires.
        expected: Amount,
        /// Value actually attached.
        actual: Amount,
    },

    /// The realized amount violates the slippage bound.
    #[error("slippage exceeded: realized {realized}, bound {bound}")]
    SlippageExceeded {
        /// Amount the engine reported.
        realized: Amount,
        /// Bound the swap was held to.
        bound: Amount,
    },

    /// Capability check failed.
    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),

    /// Swap entry point called while paused.
    #[error("router is paused")]
    Paused,

    /// The pair already has an active registry entry.
    #[error("pair already registered: {0}")]
    AlreadyRegistered(PairId),

    /// The pair has no active registry entry.
    #[error("pair not registered: {0}")]
    NotRegistered(PairId),

    /// The pool's own metadata disagrees with the registration request.
    #[error("pool mismatch: {0}")]
    PoolMismatch(&'static str),

    /// Fee sequence length is not token sequence length minus one.
    #[error("length mismatch: {tokens} tokens, {fees} fees")]
    LengthMismatch {
        /// Number of tokens supplied.
        tokens: usize,
        /// Number of fees supplied.
        fees: usize,
    },

    /// An encoded path could not be decoded.
    #[error("malformed path: {0}")]
    MalformedPath(&'static str),

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Tick outside the supported range.
    #[error("invalid tick: {0}")]
    InvalidTick(&'static str),

    /// Price is negative, NaN, or infinite.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// Decimal precision outside `0..=18`.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// A ledger account cannot cover a debit.
    #[error("insufficient balance: {0}")]
    InsufficientBalance(&'static str),

    /// A spender tried to move more than it was approved for.
    #[error("insufficient allowance")]
    InsufficientAllowance,

    /// The execution engine rejected the swap.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// The oracle backend could not serve the request.
    #[error("oracle unavailable: {0}")]
    OracleUnavailable(String),

    /// Funds pulled in do not reconcile with funds used and refunded.
    #[error("custody imbalance: pulled {pulled}, used {used}, refunded {refunded}")]
    CustodyImbalance {
        /// Amount pulled from the caller.
        pulled: Amount,
        /// Amount consumed by the engine.
        used: Amount,
        /// Amount returned to the caller.
        refunded: Amount,
    },

    /// A swap tried to skip or repeat a phase.
    #[error("invalid phase transition: {0}")]
    InvalidPhaseTransition(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, RouterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_slippage() {
        let err = RouterError::SlippageExceeded {
            realized: Amount::new(900),
            bound: Amount::new(990),
        };
        assert_eq!(err.to_string(), "slippage exceeded: realized 900, bound 990");
    }

    #[test]
    fn display_value_mismatch() {
        let err = RouterError::ValueMismatch {
            expected: Amount::new(10),
            actual: Amount::ZERO,
        };
        assert_eq!(
            err.to_string(),
            "attached value 0 does not match required 10"
        );
    }

    #[test]
    fn display_length_mismatch() {
        let err = RouterError::LengthMismatch { tokens: 3, fees: 1 };
        assert_eq!(err.to_string(), "length mismatch: 3 tokens, 1 fees");
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(RouterError::Paused, RouterError::Paused);
        assert_ne!(RouterError::Paused, RouterError::AmountTooLarge);
    }
}
