//! Top-level router configuration.

use super::{BufferConfig, OracleConfig};
use crate::domain::{AccountId, TokenAddress};
use crate::error::RouterError;

/// Immutable deployment parameters plus the initial mutable bound settings.
///
/// - `vault` is the router's own custody account: it receives pulled
///   funds and engine output before settlement.
/// - `wrapped_native` is the token the native asset trades as.
///
/// # Validation
///
/// - `wrapped_native` must be non-zero.
/// - `buffer` must be valid and its period must not exceed
///   `oracle.max_period()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouterConfig {
    vault: AccountId,
    wrapped_native: TokenAddress,
    oracle: OracleConfig,
    buffer: BufferConfig,
}

impl RouterConfig {
    /// Creates a new `RouterConfig`.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidInput`] for a zero wrapped-native address or
    ///   an oversized buffer.
    /// - [`RouterError::InvalidPeriod`] if the buffer period exceeds the
    ///   oracle maximum.
    pub fn new(
        vault: AccountId,
        wrapped_native: TokenAddress,
        oracle: OracleConfig,
        buffer: BufferConfig,
    ) -> Result<Self, RouterError> {
        let config = Self {
            vault,
            wrapped_native,
            oracle,
            buffer,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn validate(&self) -> Result<(), RouterError> {
        if self.wrapped_native.is_zero() {
            return Err(RouterError::InvalidInput(
                "wrapped native address must be non-zero",
            ));
        }
        self.oracle.validate()?;
        self.buffer.validate()?;
        if self.buffer.period() > self.oracle.max_period() {
            return Err(RouterError::InvalidPeriod(self.buffer.period()));
        }
        Ok(())
    }

    /// Returns the custody account.
    #[must_use]
    pub const fn vault(&self) -> AccountId {
        self.vault
    }

    /// Returns the wrapped-native token address.
    #[must_use]
    pub const fn wrapped_native(&self) -> TokenAddress {
        self.wrapped_native
    }

    /// Returns the oracle window limits.
    #[must_use]
    pub const fn oracle(&self) -> OracleConfig {
        self.oracle
    }

    /// Returns the bound settings.
    #[must_use]
    pub const fn buffer(&self) -> BufferConfig {
        self.buffer
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::BasisPoints;

    fn vault() -> AccountId {
        AccountId::from_bytes([9u8; 32])
    }

    #[test]
    fn valid_config() {
        let Ok(buffer) = BufferConfig::new(600, BasisPoints::new(100)) else {
            panic!("expected Ok");
        };
        let Ok(cfg) = RouterConfig::new(
            vault(),
            TokenAddress::from_bytes([0xee; 32]),
            OracleConfig::default(),
            buffer,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(cfg.buffer().period(), 600);
        assert_eq!(cfg.vault(), vault());
    }

    #[test]
    fn zero_wrapped_native_rejected() {
        let result = RouterConfig::new(
            vault(),
            TokenAddress::zero(),
            OracleConfig::default(),
            BufferConfig::default(),
        );
        assert!(matches!(result, Err(RouterError::InvalidInput(_))));
    }

    #[test]
    fn buffer_period_above_oracle_max_rejected() {
        let Ok(buffer) = BufferConfig::new(90_000, BasisPoints::ZERO) else {
            panic!("expected Ok");
        };
        let result = RouterConfig::new(
            vault(),
            TokenAddress::from_bytes([0xee; 32]),
            OracleConfig::default(),
            buffer,
        );
        assert_eq!(result, Err(RouterError::InvalidPeriod(90_000)));
    }
}
