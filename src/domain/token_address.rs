//! Chain-agnostic token address.

use core::fmt;

/// A chain-agnostic address identifying a fungible token.
///
/// Wraps a fixed-size `[u8; 32]`. Ordering is lexicographic over the
/// bytes, which is the ordering used to canonicalize trading pairs. The
/// all-zero address is the null identifier and is rejected wherever a
/// real token is required.
///
/// # Examples
///
/// ```
/// use twap_router::domain::TokenAddress;
///
/// let addr = TokenAddress::from_bytes([1u8; 32]);
/// assert!(!addr.is_zero());
/// assert!(TokenAddress::zero() < addr);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenAddress([u8; 32]);

impl TokenAddress {
    /// Byte length of an encoded address.
    pub const LEN: usize = 32;

    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the all-zero (null) address.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` for the null address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_null() {
        assert!(TokenAddress::zero().is_zero());
        assert!(!TokenAddress::from_bytes([1u8; 32]).is_zero());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut lo = [0u8; 32];
        let mut hi = [0u8; 32];
        lo[31] = 0xff;
        hi[0] = 0x01;
        assert!(TokenAddress::from_bytes(lo) < TokenAddress::from_bytes(hi));
    }

    #[test]
    fn display_is_hex() {
        let s = TokenAddress::from_bytes([0xab; 32]).to_string();
        assert!(s.starts_with("0xabab"));
        assert_eq!(s.len(), 2 + 64);
    }
}
