//! Slippage buffer and averaging window used for derived bounds.

use crate::domain::BasisPoints;
use crate::error::RouterError;

/// Parameters for oracle-derived slippage bounds.
///
/// `period` is the TWAP window in seconds, where zero defers to the
/// oracle's default. `buffer` is subtracted from exact-input estimates and
/// added to exact-output estimates.
///
/// # Validation
///
/// - `buffer` must not exceed 10 000 basis points.
/// - The upper limit on `period` depends on the oracle and is checked by
///   [`RouterConfig`](super::RouterConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BufferConfig {
    period: u32,
    buffer: BasisPoints,
}

impl BufferConfig {
    /// Creates a new `BufferConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidInput`] if `buffer` exceeds 100%.
    pub fn new(period: u32, buffer: BasisPoints) -> Result<Self, RouterError> {
        let config = Self { period, buffer };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidInput`] if `buffer` exceeds 100%.
    pub fn validate(&self) -> Result<(), RouterError> {
        if !self.buffer.is_valid_percent() {
            return Err(RouterError::InvalidInput("buffer exceeds 10000 basis points"));
        }
        Ok(())
    }

    /// Returns the TWAP window (0 = oracle default).
    #[must_use]
    pub const fn period(&self) -> u32 {
        self.period
    }

    /// Returns the slippage buffer.
    #[must_use]
    pub const fn buffer(&self) -> BasisPoints {
        self.buffer
    }

    pub(crate) fn set_period(&mut self, period: u32) {
        self.period = period;
    }

    pub(crate) fn set_buffer(&mut self, buffer: BasisPoints) {
        self.buffer = buffer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        assert!(BufferConfig::new(0, BasisPoints::ZERO).is_ok());
        assert!(BufferConfig::new(600, BasisPoints::MAX_PERCENT).is_ok());
    }

    #[test]
    fn rejects_buffer_above_hundred_percent() {
        assert!(BufferConfig::new(0, BasisPoints::new(10_001)).is_err());
    }

    #[test]
    fn default_is_zero() {
        let cfg = BufferConfig::default();
        assert_eq!(cfg.period(), 0);
        assert_eq!(cfg.buffer(), BasisPoints::ZERO);
    }
}
