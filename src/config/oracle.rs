//! TWAP window limits for oracle consultation.

use crate::error::RouterError;

/// Default averaging window when the caller passes zero: 30 minutes.
pub const DEFAULT_PERIOD: u32 = 1_800;

/// Longest averaging window the oracle accepts: one day.
pub const MAX_PERIOD: u32 = 86_400;

/// Limits on the TWAP averaging window.
///
/// A requested period of zero means "use the default"; any other value
/// must lie in `(0, max_period]`.
///
/// # Examples
///
/// ```
/// use twap_router::config::OracleConfig;
///
/// let cfg = OracleConfig::default();
/// assert_eq!(cfg.resolve_period(0), Ok(1_800));
/// assert_eq!(cfg.resolve_period(600), Ok(600));
/// assert!(cfg.resolve_period(86_401).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OracleConfig {
    default_period: u32,
    max_period: u32,
}

impl OracleConfig {
    /// Creates a new `OracleConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPeriod`] if `max_period` is zero or
    /// `default_period` is outside `(0, max_period]`.
    pub fn new(default_period: u32, max_period: u32) -> Result<Self, RouterError> {
        let config = Self {
            default_period,
            max_period,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPeriod`] on an unusable window.
    pub fn validate(&self) -> Result<(), RouterError> {
        if self.max_period == 0 {
            return Err(RouterError::InvalidPeriod(self.max_period));
        }
        if self.default_period == 0 || self.default_period > self.max_period {
            return Err(RouterError::InvalidPeriod(self.default_period));
        }
        Ok(())
    }

    /// Returns the window used when a caller passes zero.
    #[must_use]
    pub const fn default_period(&self) -> u32 {
        self.default_period
    }

    /// Returns the longest accepted window.
    #[must_use]
    pub const fn max_period(&self) -> u32 {
        self.max_period
    }

    /// Maps a requested period to the window actually queried.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPeriod`] if `period > max_period`.
    pub fn resolve_period(&self, period: u32) -> Result<u32, RouterError> {
        if period == 0 {
            return Ok(self.default_period);
        }
        if period > self.max_period {
            return Err(RouterError::InvalidPeriod(period));
        }
        Ok(period)
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            default_period: DEFAULT_PERIOD,
            max_period: MAX_PERIOD,
        }
    }
}
