//! Fixed capability sets.

use std::collections::HashSet;

use crate::domain::AccountId;
use crate::traits::AuthContext;

/// An [`AuthContext`] backed by two fixed account sets.
#[derive(Debug, Clone, Default)]
pub struct StaticAuth {
    admins: HashSet<AccountId>,
    pausers: HashSet<AccountId>,
}

impl StaticAuth {
    /// Creates a context where nobody holds any capability.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants the admin capability to `account`.
    #[must_use]
    pub fn with_admin(mut self, account: AccountId) -> Self {
        self.admins.insert(account);
        self
    }

    /// Grants the pauser capability to `account`.
    #[must_use]
    pub fn with_pauser(mut self, account: AccountId) -> Self {
        self.pausers.insert(account);
        self
    }
}

impl AuthContext for StaticAuth {
    fn is_admin(&self, account: AccountId) -> bool {
        self.admins.contains(&account)
    }

    fn is_pauser(&self, account: AccountId) -> bool {
        self.pausers.contains(&account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capabilities_are_independent() {
        let admin = AccountId::from_bytes([1u8; 32]);
        let pauser = AccountId::from_bytes([2u8; 32]);
        let auth = StaticAuth::new().with_admin(admin).with_pauser(pauser);
        assert!(auth.is_admin(admin));
        assert!(!auth.is_pauser(admin));
        assert!(auth.is_pauser(pauser));
        assert!(!auth.is_admin(pauser));
    }
}
