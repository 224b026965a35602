//! Multihop path wire format.
//!
//! A path interleaves token addresses with the fee of the hop between them:
//!
//! ```text
//! token(32) ‖ fee(3, pips, big-endian) ‖ token(32) ‖ fee(3) ‖ … ‖ token(32)
//! ```
//!
//! Exact-input swaps use the forward encoding (input token first);
//! exact-output swaps use the reversed encoding (output token first).
//! Native markers are replaced by the wrapped-native token before encoding.

use core::fmt;

use crate::domain::{normalize, Asset, FeeTier, TokenAddress};
use crate::error::RouterError;

const ADDRESS_BYTES: usize = TokenAddress::LEN;
const FEE_BYTES: usize = 3;
const HOP_BYTES: usize = FEE_BYTES + ADDRESS_BYTES;

/// An encoded multihop path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwapPath(Vec<u8>);

impl SwapPath {
    /// Wraps raw path bytes without validation; see [`decode`](Self::decode).
    #[must_use]
    pub const fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of hops, assuming a well-formed path.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(ADDRESS_BYTES) / HOP_BYTES
    }

    /// Splits the path back into tokens and fees.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::MalformedPath`] if the length is not
    /// `32 + k * 35` for some `k >= 1` or a fee is not a standard tier.
    pub fn decode(&self) -> Result<(Vec<TokenAddress>, Vec<FeeTier>), RouterError> {
        let bytes = self.0.as_slice();
        if bytes.len() < ADDRESS_BYTES + HOP_BYTES
            || (bytes.len() - ADDRESS_BYTES) % HOP_BYTES != 0
        {
            return Err(RouterError::MalformedPath("length is not 32 + 35k"));
        }

        let hops = self.hops();
        let mut tokens = Vec::with_capacity(hops + 1);
        let mut fees = Vec::with_capacity(hops);
        tokens.push(read_token(&bytes[..ADDRESS_BYTES])?);
        for hop in bytes[ADDRESS_BYTES..].chunks_exact(HOP_BYTES) {
            let pips = u32::from_be_bytes([0, hop[0], hop[1], hop[2]]);
            let fee = FeeTier::from_pips(pips)
                .map_err(|_| RouterError::MalformedPath("fee is not a standard tier"))?;
            fees.push(fee);
            tokens.push(read_token(&hop[FEE_BYTES..])?);
        }
        Ok((tokens, fees))
    }
}

impl AsRef<[u8]> for SwapPath {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for SwapPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

fn read_token(bytes: &[u8]) -> Result<TokenAddress, RouterError> {
    let raw: [u8; ADDRESS_BYTES] = bytes
        .try_into()
        .map_err(|_| RouterError::MalformedPath("truncated token"))?;
    Ok(TokenAddress::from_bytes(raw))
}

/// Builds forward and reversed paths for the execution engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathCodec {
    wrapped_native: TokenAddress,
}

impl PathCodec {
    /// Creates a codec that encodes the native asset as `wrapped_native`.
    #[must_use]
    pub const fn new(wrapped_native: TokenAddress) -> Self {
        Self { wrapped_native }
    }

    /// Encodes `assets` from first to last.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::LengthMismatch`] unless there is at least one
    /// hop and `fees.len() + 1 == assets.len()`.
    pub fn encode_forward(&self, assets: &[Asset], fees: &[FeeTier]) -> Result<SwapPath, RouterError> {
        check_lengths(assets.len(), fees.len())?;
        let tokens = normalize(assets, self.wrapped_native);
        Ok(encode(tokens.iter(), fees.iter()))
    }

    /// Encodes `assets` from last to first.
    ///
    /// # Errors
    ///
    /// Same as [`encode_forward`](Self::encode_forward).
    pub fn encode_reversed(&self, assets: &[Asset], fees: &[FeeTier]) -> Result<SwapPath, RouterError> {
        check_lengths(assets.len(), fees.len())?;
        let tokens = normalize(assets, self.wrapped_native);
        Ok(encode(tokens.iter().rev(), fees.iter().rev()))
    }

    /// Inverse of the encoders.
    ///
    /// # Errors
    ///
    /// See [`SwapPath::decode`].
    pub fn decode(&self, path: &SwapPath) -> Result<(Vec<TokenAddress>, Vec<FeeTier>), RouterError> {
        path.decode()
    }
}

fn check_lengths(tokens: usize, fees: usize) -> Result<(), RouterError> {
    if fees == 0 || fees + 1 != tokens {
        return Err(RouterError::LengthMismatch { tokens, fees });
    }
    Ok(())
}

fn encode<'a>(
    mut tokens: impl Iterator<Item = &'a TokenAddress>,
    fees: impl Iterator<Item = &'a FeeTier>,
) -> SwapPath {
    let mut out = Vec::new();
    if let Some(first) = tokens.next() {
        out.extend_from_slice(first.as_bytes());
    }
    for (fee, token) in fees.zip(tokens) {
        out.extend_from_slice(&fee.pips().to_be_bytes()[1..]);
        out.extend_from_slice(token.as_bytes());
    }
    SwapPath(out)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn addr(b: u8) -> TokenAddress {
        TokenAddress::from_bytes([b; 32])
    }

    fn codec() -> PathCodec {
        PathCodec::new(addr(0xee))
    }

    #[test]
    fn forward_layout() {
        let Ok(path) = codec().encode_forward(
            &[Asset::Token(addr(1)), Asset::Token(addr(2))],
            &[FeeTier::TIER_0_30_PERCENT],
        ) else {
            panic!("expected Ok");
        };
        let bytes = path.as_bytes();
        assert_eq!(bytes.len(), 67);
        assert_eq!(&bytes[..32], &[1u8; 32]);
        // 3000 pips = 0x000bb8
        assert_eq!(&bytes[32..35], &[0x00, 0x0b, 0xb8]);
        assert_eq!(&bytes[35..], &[2u8; 32]);
        assert_eq!(path.hops(), 1);
    }

    #[test]
    fn native_is_encoded_as_wrapped() {
        let Ok(path) = codec().encode_forward(
            &[Asset::Native, Asset::Token(addr(2))],
            &[FeeTier::TIER_0_05_PERCENT],
        ) else {
            panic!("expected Ok");
        };
        let Ok((tokens, fees)) = path.decode() else {
            panic!("expected Ok");
        };
        assert_eq!(tokens, vec![addr(0xee), addr(2)]);
        assert_eq!(fees, vec![FeeTier::TIER_0_05_PERCENT]);
    }

    #[test]
    fn reversed_walks_backwards() {
        let assets = [Asset::Token(addr(1)), Asset::Token(addr(2)), Asset::Native];
        let fees = [FeeTier::TIER_0_01_PERCENT, FeeTier::TIER_1_00_PERCENT];
        let Ok(path) = codec().encode_reversed(&assets, &fees) else {
            panic!("expected Ok");
        };
        let Ok((tokens, decoded)) = codec().decode(&path) else {
            panic!("expected Ok");
        };
        assert_eq!(tokens, vec![addr(0xee), addr(2), addr(1)]);
        assert_eq!(
            decoded,
            vec![FeeTier::TIER_1_00_PERCENT, FeeTier::TIER_0_01_PERCENT]
        );
    }

    #[test]
    fn length_mismatch() {
        let err = codec().encode_forward(
            &[Asset::Token(addr(1)), Asset::Token(addr(2))],
            &[FeeTier::TIER_0_30_PERCENT, FeeTier::TIER_0_30_PERCENT],
        );
        assert_eq!(err, Err(RouterError::LengthMismatch { tokens: 2, fees: 2 }));
        let err = codec().encode_reversed(&[Asset::Token(addr(1))], &[]);
        assert_eq!(err, Err(RouterError::LengthMismatch { tokens: 1, fees: 0 }));
    }

    #[test]
    fn decode_rejects_bad_length() {
        for len in [0usize, 32, 66, 68, 100] {
            let path = SwapPath::from_bytes(vec![1u8; len]);
            assert!(matches!(path.decode(), Err(RouterError::MalformedPath(_))));
        }
    }

    #[test]
    fn decode_rejects_non_standard_fee() {
        let mut bytes = vec![1u8; 32];
        bytes.extend_from_slice(&[0x00, 0x0b, 0xb9]);
        bytes.extend_from_slice(&[2u8; 32]);
        assert_eq!(
            SwapPath::from_bytes(bytes).decode(),
            Err(RouterError::MalformedPath("fee is not a standard tier"))
        );
    }

    #[test]
    fn display_is_hex() {
        let path = SwapPath::from_bytes(vec![0xab, 0x01]);
        assert_eq!(path.to_string(), "0xab01");
    }
}
