//! Per-swap phase tracking.

use core::fmt;

use tracing::debug;

use crate::error::RouterError;

/// Where a swap is in its lifecycle.
///
/// ```text
/// Validating -> FundingIn -> Approving -> Executing -> Settling -> [Refunding] -> Done
///      \____________\____________\____________\____________\___________\-> Aborted
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapPhase {
    /// Checking the request; nothing has moved.
    Validating,
    /// Deriving the bound and pulling funds into custody.
    FundingIn,
    /// Authorizing the engine to spend custodied funds.
    Approving,
    /// Waiting on the engine.
    Executing,
    /// Enforcing the realized bound and paying out.
    Settling,
    /// Returning unused input (exact-output only).
    Refunding,
    /// Completed.
    Done,
    /// Failed; every movement is undone.
    Aborted,
}

impl SwapPhase {
    /// Returns `true` for [`Done`](Self::Done) and [`Aborted`](Self::Aborted).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Aborted)
    }

    const fn can_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Validating, Self::FundingIn)
                | (Self::FundingIn, Self::Approving)
                | (Self::Approving, Self::Executing)
                | (Self::Executing, Self::Settling)
                | (Self::Settling, Self::Refunding | Self::Done)
                | (Self::Refunding, Self::Done)
        )
    }
}

impl fmt::Display for SwapPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Enforces the legal phase order of a single swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTracker {
    phase: SwapPhase,
}

impl PhaseTracker {
    /// Starts in [`SwapPhase::Validating`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: SwapPhase::Validating,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> SwapPhase {
        self.phase
    }

    /// Moves to `next`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPhaseTransition`] if `next` does not
    /// follow the current phase.
    pub fn advance(&mut self, next: SwapPhase) -> Result<(), RouterError> {
        if !self.phase.can_advance_to(next) {
            return Err(RouterError::InvalidPhaseTransition(
                "swap phases must advance in order",
            ));
        }
        debug!(from = %self.phase, to = %next, "swap phase");
        self.phase = next;
        Ok(())
    }

    /// Moves to [`SwapPhase::Aborted`] and returns the phase that failed.
    /// A finished swap stays finished.
    pub fn abort(&mut self) -> SwapPhase {
        let failed = self.phase;
        if !failed.is_terminal() {
            self.phase = SwapPhase::Aborted;
        }
        failed
    }
}

impl Default for PhaseTracker {
    fn default() -> Self {
        Self::new()
    }
}
