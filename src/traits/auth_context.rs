//! Capability checks for administrative entry points.

use crate::domain::AccountId;

/// Answers whether an account holds a capability.
pub trait AuthContext {
    /// May register and unregister pairs and change bound settings.
    fn is_admin(&self, account: AccountId) -> bool;

    /// May pause and unpause swaps.
    fn is_pauser(&self, account: AccountId) -> bool;
}
