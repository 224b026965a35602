//! Custody of caller funds across an engine call.
//!
//! [`FundCustodian`] moves funds between the caller, the router's vault,
//! and the engine's spender allowance. The native asset is wrapped on the
//! way in and unwrapped on the way out, so the engine only ever sees the
//! wrapped-native token. Every movement is recorded in a [`CustodyLedger`]
//! that the router reconciles before completing a swap.

use core::fmt;

use tracing::debug;

use crate::domain::{AccountId, Amount, Asset, CallContext, TokenAddress};
use crate::error::RouterError;
use crate::math::CheckedArithmetic;
use crate::traits::AssetLedger;

/// Per-call record of funds held by the router.
///
/// Conservation: `pulled == realized_in + refunded`. For exact-input swaps
/// nothing is refunded and the whole pull is consumed; for exact-output
/// swaps the unused part of the maximum goes back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CustodyLedger {
    pulled: Amount,
    realized_in: Amount,
    refunded: Amount,
    paid_out: Amount,
}

impl CustodyLedger {
    /// Amount pulled from the caller.
    pub const fn pulled(&self) -> Amount {
        self.pulled
    }

    /// Amount the engine consumed.
    pub const fn realized_in(&self) -> Amount {
        self.realized_in
    }

    /// Amount returned to the caller.
    pub const fn refunded(&self) -> Amount {
        self.refunded
    }

    /// Amount delivered to the recipient.
    pub const fn paid_out(&self) -> Amount {
        self.paid_out
    }

    /// Checks that every pulled unit was either consumed or refunded.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::CustodyImbalance`] otherwise.
    pub fn verify(&self) -> Result<(), RouterError> {
        let accounted = self.realized_in.safe_add(&self.refunded)?;
        if accounted != self.pulled {
            return Err(RouterError::CustodyImbalance {
                pulled: self.pulled,
                used: self.realized_in,
                refunded: self.refunded,
            });
        }
        Ok(())
    }
}

impl fmt::Display for CustodyLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Custody(pulled={}, used={}, refunded={}, paid={})",
            self.pulled, self.realized_in, self.refunded, self.paid_out
        )
    }
}

/// Moves funds in and out of the router's vault for a single call.
#[derive(Debug)]
pub struct FundCustodian<'a, L> {
    ledger: &'a mut L,
    vault: AccountId,
    wrapped_native: TokenAddress,
    record: CustodyLedger,
}

impl<'a, L: AssetLedger> FundCustodian<'a, L> {
    /// Creates a custodian holding funds in `vault`.
    pub fn new(ledger: &'a mut L, vault: AccountId, wrapped_native: TokenAddress) -> Self {
        Self {
            ledger,
            vault,
            wrapped_native,
            record: CustodyLedger::default(),
        }
    }

    /// Returns the custody record so far.
    #[must_use]
    pub const fn record(&self) -> CustodyLedger {
        self.record
    }

    /// Pulls `amount` of `asset` from the caller into the vault.
    ///
    /// Native input must arrive as attached value equal to `amount` and is
    /// wrapped immediately. Token input must arrive with no attached value
    /// and is pulled through the allowance the caller granted the vault.
    ///
    /// # Errors
    ///
    /// - [`RouterError::ValueMismatch`] if the attached value is wrong.
    /// - Ledger errors from the transfer.
    pub fn take_funds(
        &mut self,
        ctx: &CallContext,
        asset: Asset,
        amount: Amount,
    ) -> Result<(), RouterError> {
        match asset {
            Asset::Native => {
                if ctx.value != amount {
                    return Err(RouterError::ValueMismatch {
                        expected: amount,
                        actual: ctx.value,
                    });
                }
                self.ledger.accept_native(ctx.caller, self.vault, amount)?;
                self.ledger.wrap(self.vault, amount)?;
            }
            Asset::Token(token) => {
                if !ctx.value.is_zero() {
                    return Err(RouterError::ValueMismatch {
                        expected: Amount::ZERO,
                        actual: ctx.value,
                    });
                }
                self.ledger
                    .transfer_from(token, self.vault, ctx.caller, self.vault, amount)?;
            }
        }
        self.record.pulled = self.record.pulled.safe_add(&amount)?;
        debug!(%asset, %amount, from = %ctx.caller, "funds taken");
        Ok(())
    }

    /// Sends `amount` of `asset` from the vault to `recipient`, unwrapping
    /// native output. Zero amounts are a no-op.
    ///
    /// # Errors
    ///
    /// Ledger errors from the transfer.
    pub fn send_funds(
        &mut self,
        asset: Asset,
        recipient: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError> {
        if amount.is_zero() {
            return Ok(());
        }
        match asset {
            Asset::Native => {
                self.ledger.unwrap(self.vault, amount)?;
                self.ledger.send_native(self.vault, recipient, amount)?;
            }
            Asset::Token(token) => {
                self.ledger.transfer(token, self.vault, recipient, amount)?;
            }
        }
        debug!(%asset, %amount, to = %recipient, "funds sent");
        Ok(())
    }

    /// Delivers swap output and records it.
    ///
    /// # Errors
    ///
    /// See [`send_funds`](Self::send_funds).
    pub fn pay_out(
        &mut self,
        asset: Asset,
        recipient: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError> {
        self.send_funds(asset, recipient, amount)?;
        self.record.paid_out = self.record.paid_out.safe_add(&amount)?;
        Ok(())
    }

    /// Returns unused input and records it.
    ///
    /// # Errors
    ///
    /// See [`send_funds`](Self::send_funds).
    pub fn refund(
        &mut self,
        asset: Asset,
        recipient: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError> {
        self.send_funds(asset, recipient, amount)?;
        self.record.refunded = self.record.refunded.safe_add(&amount)?;
        Ok(())
    }

    /// Records how much input the engine consumed.
    pub fn record_consumed(&mut self, amount: Amount) {
        self.record.realized_in = amount;
    }

    /// Lets `spender` pull exactly `amount` of `token` from the vault.
    ///
    /// # Errors
    ///
    /// Ledger errors from the approval.
    pub fn approve(
        &mut self,
        token: TokenAddress,
        spender: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError> {
        self.ledger.approve(token, self.vault, spender, amount)
    }

    /// Resets `spender`'s allowance over the vault's `token` to zero.
    ///
    /// # Errors
    ///
    /// Ledger errors from the approval.
    pub fn revoke(&mut self, token: TokenAddress, spender: AccountId) -> Result<(), RouterError> {
        self.ledger.approve(token, self.vault, spender, Amount::ZERO)
    }

    /// Token the native asset is held as.
    #[must_use]
    pub const fn wrapped_native(&self) -> TokenAddress {
        self.wrapped_native
    }
}
