//! Events emitted by state-changing router calls.

use core::fmt;

use super::{AccountId, BasisPoints, PairId, SwapReceipt, TrustedPair};

/// Notification of a state change, returned by the call that caused it and
/// journaled by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouterEvent {
    /// A fresh active registry entry was written.
    PairRegistered {
        /// Order-independent key of the pair.
        id: PairId,
        /// The stored entry.
        pair: TrustedPair,
    },
    /// The active registry entry was deactivated.
    PairUnregistered {
        /// Order-independent key of the pair.
        id: PairId,
        /// The entry as it was before deactivation.
        pair: TrustedPair,
    },
    /// The oracle averaging window changed.
    PeriodUpdated {
        /// Previous window in seconds (0 = oracle default).
        old: u32,
        /// New window in seconds (0 = oracle default).
        new: u32,
    },
    /// The slippage buffer changed.
    BufferUpdated {
        /// Previous buffer.
        old: BasisPoints,
        /// New buffer.
        new: BasisPoints,
    },
    /// Swaps were halted.
    Paused {
        /// Account that paused.
        by: AccountId,
    },
    /// Swaps were resumed.
    Unpaused {
        /// Account that unpaused.
        by: AccountId,
    },
    /// A swap settled.
    Swapped(SwapReceipt),
}

impl fmt::Display for RouterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PairRegistered { id, pair } => {
                write!(f, "PairRegistered({id}, pool={})", pair.pool())
            }
            Self::PairUnregistered { id, .. } => write!(f, "PairUnregistered({id})"),
            Self::PeriodUpdated { old, new } => write!(f, "PeriodUpdated({old}s -> {new}s)"),
            Self::BufferUpdated { old, new } => write!(f, "BufferUpdated({old} -> {new})"),
            Self::Paused { by } => write!(f, "Paused(by={by})"),
            Self::Unpaused { by } => write!(f, "Unpaused(by={by})"),
            Self::Swapped(receipt) => write!(f, "Swapped({receipt})"),
        }
    }
}
