//! Arithmetic utilities for quote and bound calculations.
//!
//! This module provides [`CheckedArithmetic`] for overflow-safe amount
//! bookkeeping, rounding helpers for integer scaling, and the tick math
//! that converts an oracle mean tick into an amount.

mod checked;
mod rounding;
mod tick_math;

pub use checked::CheckedArithmetic;
pub use rounding::{div_round, mul_div};
pub use tick_math::{quote_at_tick, sqrt_ratio_at_tick, tick_at_ratio};
