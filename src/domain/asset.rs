//! Route endpoint: either the native asset or a fungible token.

use core::fmt;

use super::TokenAddress;

/// An asset a caller can pay with or be paid in.
///
/// The native asset never appears on the wire: custody wraps it into the
/// wrapped-native token on the way in and unwraps it on the way out, and
/// every pricing or path computation sees the wrapped token instead.
///
/// # Examples
///
/// ```
/// use twap_router::domain::{Asset, TokenAddress};
///
/// let weth = TokenAddress::from_bytes([0xee; 32]);
/// assert_eq!(Asset::Native.resolve(weth), weth);
///
/// let usdc = TokenAddress::from_bytes([1u8; 32]);
/// assert_eq!(Asset::Token(usdc).resolve(weth), usdc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    /// The chain's base asset.
    Native,
    /// A fungible token.
    Token(TokenAddress),
}

impl Asset {
    /// Returns `true` for [`Asset::Native`].
    #[must_use]
    pub const fn is_native(&self) -> bool {
        matches!(self, Self::Native)
    }

    /// Returns the token address the asset trades as, substituting
    /// `wrapped_native` for the native asset.
    #[must_use]
    pub const fn resolve(&self, wrapped_native: TokenAddress) -> TokenAddress {
        match self {
            Self::Native => wrapped_native,
            Self::Token(address) => *address,
        }
    }
}

impl From<TokenAddress> for Asset {
    fn from(address: TokenAddress) -> Self {
        Self::Token(address)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Token(address) => write!(f, "{address}"),
        }
    }
}

/// Replaces every native marker in `assets` with `wrapped_native`.
#[must_use]
pub fn normalize(assets: &[Asset], wrapped_native: TokenAddress) -> Vec<TokenAddress> {
    assets.iter().map(|a| a.resolve(wrapped_native)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_substitutes_native_only() {
        let weth = TokenAddress::from_bytes([0xee; 32]);
        let usdc = TokenAddress::from_bytes([1u8; 32]);
        let tokens = normalize(&[Asset::Native, Asset::Token(usdc)], weth);
        assert_eq!(tokens, vec![weth, usdc]);
    }

    #[test]
    fn display() {
        assert_eq!(Asset::Native.to_string(), "native");
    }
}
