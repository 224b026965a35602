//! Per-call environment supplied by the host.

use super::{AccountId, Amount};

/// Who is calling, how much native value they attached, and the current
/// time in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallContext {
    /// The calling account.
    pub caller: AccountId,
    /// Native value attached to the call.
    pub value: Amount,
    /// Current timestamp in unix seconds.
    pub timestamp: u64,
}

impl CallContext {
    /// Context without attached value.
    #[must_use]
    pub const fn new(caller: AccountId, timestamp: u64) -> Self {
        Self {
            caller,
            value: Amount::ZERO,
            timestamp,
        }
    }

    /// Returns a copy with `value` attached.
    #[must_use]
    pub const fn with_value(self, value: Amount) -> Self {
        Self { value, ..self }
    }
}
