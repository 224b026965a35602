//! Canonically ordered pair of distinct tokens.

use super::{Token, TokenAddress};
use crate::error::RouterError;

/// A pair of distinct, non-null tokens sorted by address.
///
/// The canonical ordering guarantees `low().address() < high().address()`,
/// so `(A, B)` and `(B, A)` build the same pair. This is what makes trust
/// in the registry bidirectional.
///
/// # Examples
///
/// ```
/// use twap_router::domain::{Decimals, Token, TokenAddress, TokenPair};
///
/// let a = Token::new(TokenAddress::from_bytes([1u8; 32]), Decimals::new(6).expect("valid"));
/// let b = Token::new(TokenAddress::from_bytes([2u8; 32]), Decimals::new(18).expect("valid"));
///
/// let pair = TokenPair::new(b, a).expect("distinct tokens");
/// assert_eq!(pair.low(), a);
/// assert_eq!(pair.high(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPair {
    low: Token,
    high: Token,
}

impl TokenPair {
    /// Creates a new canonically-ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidInput`] if either address is null or
    /// both tokens share an address.
    pub fn new(token1: Token, token2: Token) -> Result<Self, RouterError> {
        if token1.address().is_zero() || token2.address().is_zero() {
            return Err(RouterError::InvalidInput("token address must be non-zero"));
        }
        if token1.address() == token2.address() {
            return Err(RouterError::InvalidInput(
                "token pair requires two distinct addresses",
            ));
        }
        let (low, high) = sort_addresses_by(token1, token2);
        Ok(Self { low, high })
    }

    /// Returns the lower-addressed token.
    #[must_use]
    pub const fn low(&self) -> Token {
        self.low
    }

    /// Returns the higher-addressed token.
    #[must_use]
    pub const fn high(&self) -> Token {
        self.high
    }

    /// Returns the member of the pair with the given address, if any.
    #[must_use]
    pub fn token(&self, address: TokenAddress) -> Option<Token> {
        if self.low.address() == address {
            Some(self.low)
        } else if self.high.address() == address {
            Some(self.high)
        } else {
            None
        }
    }
}

/// Sorts two addresses into `(low, high)`.
#[must_use]
pub fn sort_addresses(a: TokenAddress, b: TokenAddress) -> (TokenAddress, TokenAddress) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn sort_addresses_by(a: Token, b: Token) -> (Token, Token) {
    if a.address() < b.address() {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Decimals;

    fn tok(addr_byte: u8, dec: u8) -> Token {
        let Ok(d) = Decimals::new(dec) else {
            panic!("invalid decimals in test: {dec}");
        };
        Token::new(TokenAddress::from_bytes([addr_byte; 32]), d)
    }

    #[test]
    fn sorts_reversed_input() {
        let a = tok(1, 6);
        let b = tok(2, 18);
        let Ok(pair) = TokenPair::new(b, a) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.low(), a);
        assert_eq!(pair.high(), b);
    }

    #[test]
    fn order_independent_equality() {
        let a = tok(1, 6);
        let b = tok(2, 18);
        assert_eq!(TokenPair::new(a, b), TokenPair::new(b, a));
    }

    #[test]
    fn rejects_same_address() {
        let Err(e) = TokenPair::new(tok(1, 6), tok(1, 18)) else {
            panic!("expected Err");
        };
        assert_eq!(
            e,
            RouterError::InvalidInput("token pair requires two distinct addresses")
        );
    }

    #[test]
    fn rejects_null_address() {
        let Err(e) = TokenPair::new(tok(0, 6), tok(1, 18)) else {
            panic!("expected Err");
        };
        assert_eq!(e, RouterError::InvalidInput("token address must be non-zero"));
    }

    #[test]
    fn token_lookup() {
        let a = tok(1, 6);
        let b = tok(2, 18);
        let Ok(pair) = TokenPair::new(a, b) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.token(a.address()), Some(a));
        assert_eq!(pair.token(TokenAddress::from_bytes([9u8; 32])), None);
    }

    #[test]
    fn sort_addresses_is_symmetric() {
        let x = TokenAddress::from_bytes([3u8; 32]);
        let y = TokenAddress::from_bytes([4u8; 32]);
        assert_eq!(sort_addresses(x, y), sort_addresses(y, x));
    }
}
