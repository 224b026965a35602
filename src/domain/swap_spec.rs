//! Swap constraint: which side is fixed and how the other side is bounded.

use core::fmt;

use super::Amount;
use crate::error::RouterError;

/// Which side of a swap the caller fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SwapType {
    /// The input amount is fixed; output is bounded from below.
    ExactIn = 0,
    /// The output amount is fixed; input is bounded from above.
    ExactOut = 1,
}

impl SwapType {
    /// Returns `true` for [`ExactIn`](Self::ExactIn).
    #[must_use]
    pub const fn is_exact_in(&self) -> bool {
        matches!(self, Self::ExactIn)
    }
}

impl fmt::Display for SwapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactIn => write!(f, "ExactIn"),
            Self::ExactOut => write!(f, "ExactOut"),
        }
    }
}

/// Slippage bound on the non-fixed side of a swap.
///
/// Callers express "derive it for me" by passing zero, which maps to
/// [`Auto`](Self::Auto); any non-zero amount is an explicit bound that
/// bypasses the oracle entirely.
///
/// # Examples
///
/// ```
/// use twap_router::domain::{Amount, SlippageBound};
///
/// assert_eq!(SlippageBound::from(Amount::ZERO), SlippageBound::Auto);
/// assert_eq!(
///     SlippageBound::from(Amount::new(950)),
///     SlippageBound::Explicit(Amount::new(950)),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlippageBound {
    /// Derive the bound from the TWAP oracle and the configured buffer.
    Auto,
    /// Use the caller's bound verbatim.
    Explicit(Amount),
}

impl SlippageBound {
    /// Returns the explicit amount, if any.
    #[must_use]
    pub const fn explicit(&self) -> Option<Amount> {
        match self {
            Self::Auto => None,
            Self::Explicit(amount) => Some(*amount),
        }
    }
}

impl From<Amount> for SlippageBound {
    fn from(amount: Amount) -> Self {
        if amount.is_zero() {
            Self::Auto
        } else {
            Self::Explicit(amount)
        }
    }
}

/// The fixed amount of a swap together with the bound on the other side.
///
/// # Invariants
///
/// The fixed amount is always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapSpec {
    /// Sell exactly `amount_in`, receive at least the bound.
    ExactIn {
        /// The fixed input amount.
        amount_in: Amount,
        /// Minimum acceptable output.
        amount_out_minimum: SlippageBound,
    },
    /// Receive exactly `amount_out`, pay at most the bound.
    ExactOut {
        /// The fixed output amount.
        amount_out: Amount,
        /// Maximum acceptable input.
        amount_in_maximum: SlippageBound,
    },
}

impl SwapSpec {
    /// Creates an exact-input specification. A zero `amount_out_minimum`
    /// requests automatic derivation.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidInput`] if `amount_in` is zero.
    pub fn exact_in(amount_in: Amount, amount_out_minimum: Amount) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(RouterError::InvalidInput("swap amount must be non-zero"));
        }
        Ok(Self::ExactIn {
            amount_in,
            amount_out_minimum: amount_out_minimum.into(),
        })
    }

    /// Creates an exact-output specification. A zero `amount_in_maximum`
    /// requests automatic derivation.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidInput`] if `amount_out` is zero.
    pub fn exact_out(amount_out: Amount, amount_in_maximum: Amount) -> crate::error::Result<Self> {
        if amount_out.is_zero() {
            return Err(RouterError::InvalidInput("swap amount must be non-zero"));
        }
        Ok(Self::ExactOut {
            amount_out,
            amount_in_maximum: amount_in_maximum.into(),
        })
    }

    /// Returns the fixed amount regardless of variant.
    pub const fn amount(&self) -> Amount {
        match self {
            Self::ExactIn { amount_in, .. } => *amount_in,
            Self::ExactOut { amount_out, .. } => *amount_out,
        }
    }

    /// Returns the bound on the non-fixed side.
    #[must_use]
    pub const fn bound(&self) -> SlippageBound {
        match self {
            Self::ExactIn {
                amount_out_minimum, ..
            } => *amount_out_minimum,
            Self::ExactOut {
                amount_in_maximum, ..
            } => *amount_in_maximum,
        }
    }

    /// Returns the [`SwapType`] of this specification.
    #[must_use]
    pub const fn swap_type(&self) -> SwapType {
        match self {
            Self::ExactIn { .. } => SwapType::ExactIn,
            Self::ExactOut { .. } => SwapType::ExactOut,
        }
    }
}

impl fmt::Display for SwapSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactIn { amount_in, .. } => write!(f, "ExactIn({amount_in})"),
            Self::ExactOut { amount_out, .. } => write!(f, "ExactOut({amount_out})"),
        }
    }
}
