//! Outcome of a completed swap.

use core::fmt;

use super::{AccountId, Amount, Asset, Price, SwapKind};
use crate::custody::CustodyLedger;

/// Where the slippage bound of a swap came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundSource {
    /// The caller supplied a non-zero bound.
    Explicit,
    /// The router derived the bound from an oracle estimate.
    Oracle {
        /// Chained TWAP estimate before the buffer was applied.
        estimate: Amount,
    },
}

/// Record of a settled swap.
///
/// `amount_in` is what the engine actually consumed and `amount_out` what
/// it actually delivered; for exact-output swaps `refund` is the unused part
/// of the custodied maximum returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapReceipt {
    pub(crate) kind: SwapKind,
    pub(crate) asset_in: Asset,
    pub(crate) asset_out: Asset,
    pub(crate) payer: AccountId,
    pub(crate) recipient: AccountId,
    pub(crate) amount_in: Amount,
    pub(crate) amount_out: Amount,
    pub(crate) bound: Amount,
    pub(crate) bound_source: BoundSource,
    pub(crate) refund: Amount,
    pub(crate) custody: CustodyLedger,
}

impl SwapReceipt {
    /// Returns the swap kind.
    #[must_use]
    pub const fn kind(&self) -> SwapKind {
        self.kind
    }

    /// Returns the asset paid in.
    #[must_use]
    pub const fn asset_in(&self) -> Asset {
        self.asset_in
    }

    /// Returns the asset paid out.
    #[must_use]
    pub const fn asset_out(&self) -> Asset {
        self.asset_out
    }

    /// Returns the account that funded the swap.
    #[must_use]
    pub const fn payer(&self) -> AccountId {
        self.payer
    }

    /// Returns the account that received the output.
    #[must_use]
    pub const fn recipient(&self) -> AccountId {
        self.recipient
    }

    /// Returns the input actually consumed.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output actually delivered.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the bound the swap was held to: minimum output for
    /// exact-input kinds, maximum input for exact-output kinds.
    pub const fn bound(&self) -> Amount {
        self.bound
    }

    /// Returns where the bound came from.
    #[must_use]
    pub const fn bound_source(&self) -> BoundSource {
        self.bound_source
    }

    /// Returns the amount refunded to the payer.
    pub const fn refund(&self) -> Amount {
        self.refund
    }

    /// Reconciled vault movements of the swap.
    #[must_use]
    pub const fn custody(&self) -> CustodyLedger {
        self.custody
    }

    /// Realized price as `amount_out / amount_in`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::DivisionByZero`](crate::error::RouterError::DivisionByZero)
    /// if nothing was consumed.
    pub fn effective_price(&self) -> crate::error::Result<Price> {
        Price::from_amounts(self.amount_out, self.amount_in)
    }

    /// Distance between the realized amount and the bound, in the bounded
    /// token. Always non-negative for a settled swap.
    pub const fn bound_slack(&self) -> Amount {
        let (hi, lo) = if self.kind.swap_type().is_exact_in() {
            (self.amount_out, self.bound)
        } else {
            (self.bound, self.amount_in)
        };
        match hi.checked_sub(&lo) {
            Some(v) => v,
            None => Amount::ZERO,
        }
    }
}

impl fmt::Display for SwapReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({} {} -> {} {}, bound={}, refund={})",
            self.kind,
            self.amount_in,
            self.asset_in,
            self.amount_out,
            self.asset_out,
            self.bound,
            self.refund
        )
    }
}
