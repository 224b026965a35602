//! Token and native-asset movement primitives.

use crate::domain::{AccountId, Amount, TokenAddress};
use crate::error::RouterError;

/// Balance-moving primitives the router composes into custody.
///
/// Every method either moves exactly the stated amount or fails without
/// effect. The atomic bracket lets the router undo a partially completed
/// swap; hosts whose calls are all-or-nothing already keep the defaults.
pub trait AssetLedger {
    /// Moves `amount` of `token` from `owner` to `to`, spending the
    /// allowance `owner` granted to `spender`.
    ///
    /// # Errors
    ///
    /// [`RouterError::InsufficientAllowance`] or
    /// [`RouterError::InsufficientBalance`].
    fn transfer_from(
        &mut self,
        token: TokenAddress,
        spender: AccountId,
        owner: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError>;

    /// Moves `amount` of `token` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// [`RouterError::InsufficientBalance`].
    fn transfer(
        &mut self,
        token: TokenAddress,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError>;

    /// Sets the allowance of `spender` over `owner`'s `token` to `amount`.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn approve(
        &mut self,
        token: TokenAddress,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError>;

    /// Moves `amount` of native value attached by `from` into `to`.
    ///
    /// # Errors
    ///
    /// [`RouterError::InsufficientBalance`].
    fn accept_native(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError>;

    /// Converts `amount` of `account`'s native balance into the
    /// wrapped-native token.
    ///
    /// # Errors
    ///
    /// [`RouterError::InsufficientBalance`].
    fn wrap(&mut self, account: AccountId, amount: Amount) -> Result<(), RouterError>;

    /// Converts `amount` of `account`'s wrapped-native token back into
    /// native balance.
    ///
    /// # Errors
    ///
    /// [`RouterError::InsufficientBalance`].
    fn unwrap(&mut self, account: AccountId, amount: Amount) -> Result<(), RouterError>;

    /// Sends `amount` of native balance from `from` to `to`.
    ///
    /// # Errors
    ///
    /// [`RouterError::InsufficientBalance`].
    fn send_native(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError>;

    /// Opens an atomic section.
    fn begin_atomic(&mut self) {}

    /// Keeps every movement since the matching [`begin_atomic`](Self::begin_atomic).
    fn commit_atomic(&mut self) {}

    /// Undoes every movement since the matching [`begin_atomic`](Self::begin_atomic).
    fn revert_atomic(&mut self) {}
}
