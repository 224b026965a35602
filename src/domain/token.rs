//! Registered token metadata.

use core::fmt;

use super::{Amount, Decimals, TokenAddress};

/// A token as the registry records it: address plus decimal places.
///
/// Quotes report amounts in the output token's base units; the decimals
/// let callers scale them without another lookup. Pair ordering only looks
/// at the address.
///
/// ```
/// use twap_router::domain::{Amount, Decimals, Token, TokenAddress};
///
/// let Ok(six) = Decimals::new(6) else { panic!() };
/// let usdc = Token::new(TokenAddress::from_bytes([1u8; 32]), six);
/// assert_eq!(usdc.units(990), Some(Amount::new(990_000_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    address: TokenAddress,
    decimals: Decimals,
}

impl Token {
    /// Pairs an address with its decimal places.
    #[must_use]
    pub const fn new(address: TokenAddress, decimals: Decimals) -> Self {
        Self { address, decimals }
    }

    #[must_use]
    pub const fn address(&self) -> TokenAddress {
        self.address
    }

    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// `whole` tokens in base units, or `None` on overflow.
    #[must_use]
    pub const fn units(&self, whole: u128) -> Option<Amount> {
        match whole.checked_mul(self.decimals.one()) {
            Some(v) => Some(Amount::new(v)),
            None => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}dp", self.address, self.decimals.get())
    }
}
