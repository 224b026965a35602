//! In-memory token and native balances.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{AccountId, Amount, TokenAddress};
use crate::error::RouterError;
use crate::traits::AssetLedger;

#[derive(Debug, Clone, Default)]
struct Balances {
    tokens: HashMap<(TokenAddress, AccountId), Amount>,
    native: HashMap<AccountId, Amount>,
    allowances: HashMap<(TokenAddress, AccountId, AccountId), Amount>,
}

#[derive(Debug, Default)]
struct LedgerState {
    current: Balances,
    snapshots: Vec<Balances>,
}

impl LedgerState {
    fn debit_token(&mut self, token: TokenAddress, account: AccountId, amount: Amount) -> Result<(), RouterError> {
        let balance = self.current.tokens.entry((token, account)).or_default();
        *balance = balance
            .checked_sub(&amount)
            .ok_or(RouterError::InsufficientBalance("token balance"))?;
        Ok(())
    }

    fn credit_token(&mut self, token: TokenAddress, account: AccountId, amount: Amount) -> Result<(), RouterError> {
        let balance = self.current.tokens.entry((token, account)).or_default();
        *balance = balance
            .checked_add(&amount)
            .ok_or(RouterError::Overflow("token balance overflow"))?;
        Ok(())
    }

    fn debit_native(&mut self, account: AccountId, amount: Amount) -> Result<(), RouterError> {
        let balance = self.current.native.entry(account).or_default();
        *balance = balance
            .checked_sub(&amount)
            .ok_or(RouterError::InsufficientBalance("native balance"))?;
        Ok(())
    }

    fn credit_native(&mut self, account: AccountId, amount: Amount) -> Result<(), RouterError> {
        let balance = self.current.native.entry(account).or_default();
        *balance = balance
            .checked_add(&amount)
            .ok_or(RouterError::Overflow("native balance overflow"))?;
        Ok(())
    }
}

/// Shared in-memory ledger.
///
/// Clones share the same balances, so a test can hand one clone to the
/// router and another to a [`LedgerEngine`](super::LedgerEngine) and
/// inspect both sides afterwards. The atomic bracket snapshots and
/// restores every balance and allowance.
///
/// Multi-step operations check the debit before crediting, so a failed
/// call leaves the ledger unchanged.
#[derive(Debug, Clone)]
pub struct InMemoryLedger {
    wrapped_native: TokenAddress,
    state: Arc<Mutex<LedgerState>>,
}

impl InMemoryLedger {
    /// Creates an empty ledger whose wrapped-native token is `wrapped_native`.
    #[must_use]
    pub fn new(wrapped_native: TokenAddress) -> Self {
        Self {
            wrapped_native,
            state: Arc::new(Mutex::new(LedgerState::default())),
        }
    }

    fn state(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the wrapped-native token.
    #[must_use]
    pub const fn wrapped_native(&self) -> TokenAddress {
        self.wrapped_native
    }

    /// Credits `amount` of `token` to `account` out of thin air.
    pub fn mint(&self, token: TokenAddress, account: AccountId, amount: Amount) {
        let mut state = self.state();
        let balance = state.current.tokens.entry((token, account)).or_default();
        *balance = balance.checked_add(&amount).unwrap_or(Amount::MAX);
    }

    /// Credits `amount` of native balance to `account` out of thin air.
    pub fn mint_native(&self, account: AccountId, amount: Amount) {
        let mut state = self.state();
        let balance = state.current.native.entry(account).or_default();
        *balance = balance.checked_add(&amount).unwrap_or(Amount::MAX);
    }

    /// Returns `account`'s balance of `token`.
    pub fn balance_of(&self, token: TokenAddress, account: AccountId) -> Amount {
        self.state()
            .current
            .tokens
            .get(&(token, account))
            .copied()
            .unwrap_or_default()
    }

    /// Returns `account`'s native balance.
    pub fn native_balance_of(&self, account: AccountId) -> Amount {
        self.state()
            .current
            .native
            .get(&account)
            .copied()
            .unwrap_or_default()
    }

    /// Returns how much of `owner`'s `token` `spender` may still pull.
    pub fn allowance(&self, token: TokenAddress, owner: AccountId, spender: AccountId) -> Amount {
        self.state()
            .current
            .allowances
            .get(&(token, owner, spender))
            .copied()
            .unwrap_or_default()
    }

    /// Number of open atomic sections.
    #[must_use]
    pub fn open_snapshots(&self) -> usize {
        self.state().snapshots.len()
    }
}

impl AssetLedger for InMemoryLedger {
    fn transfer_from(
        &mut self,
        token: TokenAddress,
        spender: AccountId,
        owner: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError> {
        let mut state = self.state();
        let key = (token, owner, spender);
        let allowed = state.current.allowances.get(&key).copied().unwrap_or_default();
        let remaining = allowed
            .checked_sub(&amount)
            .ok_or(RouterError::InsufficientAllowance)?;
        state.debit_token(token, owner, amount)?;
        state.credit_token(token, to, amount)?;
        state.current.allowances.insert(key, remaining);
        Ok(())
    }

    fn transfer(
        &mut self,
        token: TokenAddress,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError> {
        let mut state = self.state();
        state.debit_token(token, from, amount)?;
        state.credit_token(token, to, amount)
    }

    fn approve(
        &mut self,
        token: TokenAddress,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError> {
        self.state()
            .current
            .allowances
            .insert((token, owner, spender), amount);
        Ok(())
    }

    fn accept_native(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError> {
        let mut state = self.state();
        state.debit_native(from, amount)?;
        state.credit_native(to, amount)
    }

    fn wrap(&mut self, account: AccountId, amount: Amount) -> Result<(), RouterError> {
        let wrapped = self.wrapped_native;
        let mut state = self.state();
        state.debit_native(account, amount)?;
        state.credit_token(wrapped, account, amount)
    }

    fn unwrap(&mut self, account: AccountId, amount: Amount) -> Result<(), RouterError> {
        let wrapped = self.wrapped_native;
        let mut state = self.state();
        state.debit_token(wrapped, account, amount)?;
        state.credit_native(account, amount)
    }

    fn send_native(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), RouterError> {
        let mut state = self.state();
        state.debit_native(from, amount)?;
        state.credit_native(to, amount)
    }

    fn begin_atomic(&mut self) {
        let mut state = self.state();
        let snapshot = state.current.clone();
        state.snapshots.push(snapshot);
    }

    fn commit_atomic(&mut self) {
        self.state().snapshots.pop();
    }

    fn revert_atomic(&mut self) {
        let mut state = self.state();
        if let Some(snapshot) = state.snapshots.pop() {
            state.current = snapshot;
        }
    }
}
