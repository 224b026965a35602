//! Tick-to-ratio conversion and the tick-based TWAP quote.
//!
//! Pools express price as `1.0001^tick` units of `token1` per unit of
//! `token0` (tokens in canonical order). The oracle reports the arithmetic
//! mean tick over a window; [`quote_at_tick`] turns that tick back into an
//! output amount for an input amount.
//!
//! All conversions are integer-only. [`sqrt_ratio_at_tick`] produces the
//! square root of the price as a Q64.96 fixed-point number, and quotes are
//! floored products of that ratio. Amounts of any size keep every digit.
//!
//! # Examples
//!
//! ```
//! use twap_router::domain::{Amount, Tick, TokenAddress};
//! use twap_router::math::quote_at_tick;
//!
//! let low = TokenAddress::from_bytes([1u8; 32]);
//! let high = TokenAddress::from_bytes([2u8; 32]);
//! let amount = Amount::new(123_456_789_012_345_678_901);
//! assert_eq!(quote_at_tick(Tick::ZERO, amount, low, high), Ok(amount));
//! ```

use num_bigint::BigUint;

use crate::domain::{Amount, Tick, TokenAddress};
use crate::error::RouterError;

/// `sqrt(1.0001^-1) * 2^128`, the factor for an odd tick.
const ODD_TICK_FACTOR: u128 = 0xfffc_b933_bd6f_ad37_aa2d_162d_1a59_4001;

/// `sqrt(1.0001^-bit) * 2^128` for every higher bit of `|tick|`.
const BIT_FACTORS: [(u32, u128); 19] = [
    (0x2, 0xfff9_7272_373d_4132_59a4_6990_580e_213a),
    (0x4, 0xfff2_e50f_5f65_6932_ef12_357c_f3c7_fdcc),
    (0x8, 0xffe5_caca_7e10_e4e6_1c36_24ea_a094_1cd0),
    (0x10, 0xffcb_9843_d60f_6159_c9db_5883_5c92_6644),
    (0x20, 0xff97_3b41_fa98_c081_472e_6896_dfb2_54c0),
    (0x40, 0xff2e_a164_66c9_6a38_43ec_78b3_26b5_2861),
    (0x80, 0xfe5d_ee04_6a99_a2a8_11c4_61f1_969c_3053),
    (0x100, 0xfcbe_86c7_900a_88ae_dcff_c83b_479a_a3a4),
    (0x200, 0xf987_a725_3ac4_1317_6f2b_074c_f781_5e54),
    (0x400, 0xf339_2b08_22b7_0005_940c_7a39_8e4b_70f3),
    (0x800, 0xe715_9475_a2c2_9b74_43b2_9c7f_a6e8_89d9),
    (0x1000, 0xd097_f3bd_fd20_22b8_845a_d8f7_92aa_5825),
    (0x2000, 0xa9f7_4646_2d87_0fdf_8a65_dc1f_90e0_61e5),
    (0x4000, 0x70d8_69a1_56d2_a1b8_90bb_3df6_2baf_32f7),
    (0x8000, 0x31be_135f_97d0_8fd9_8123_1505_542f_cfa6),
    (0x1_0000, 0x9aa_508b_5b7a_84e1_c677_de54_f3e9_9bc9),
    (0x2_0000, 0x5d_6af8_dedb_8119_6699_c329_225e_e604),
    (0x4_0000, 0x2216_e584_f5fa_1ea9_2604_1bed_fe98),
    (0x8_0000, 0x48a_1703_91f7_dc42_444e_8fa2),
];

fn pow2(bits: u32) -> BigUint {
    BigUint::from(1u8) << bits
}

fn sqrt_ratio_at(tick: i32) -> BigUint {
    let abs = tick.unsigned_abs();
    let mut ratio = if abs & 1 != 0 {
        BigUint::from(ODD_TICK_FACTOR)
    } else {
        pow2(128)
    };
    for (bit, factor) in BIT_FACTORS {
        if abs & bit != 0 {
            ratio = (ratio * factor) >> 128u32;
        }
    }
    if tick > 0 {
        ratio = (pow2(256) - 1u8) / ratio;
    }
    // Q128.128 -> Q64.96, rounded up.
    let rounds_up = ratio.trailing_zeros().is_some_and(|zeros| zeros < 32);
    let mut sqrt = ratio >> 32u32;
    if rounds_up {
        sqrt += 1u8;
    }
    sqrt
}

/// Returns `sqrt(1.0001^tick) * 2^96`.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use twap_router::domain::Tick;
/// use twap_router::math::sqrt_ratio_at_tick;
///
/// assert_eq!(sqrt_ratio_at_tick(Tick::ZERO), BigUint::from(1u128 << 96));
/// assert_eq!(sqrt_ratio_at_tick(Tick::MIN), BigUint::from(4_295_128_739u64));
/// ```
#[must_use]
pub fn sqrt_ratio_at_tick(tick: Tick) -> BigUint {
    sqrt_ratio_at(tick.get())
}

/// Returns the greatest tick whose price is at most
/// `numerator / denominator` units of `token1` per unit of `token0`.
///
/// Rates above the price of [`Tick::MAX`] map to [`Tick::MAX`].
///
/// # Errors
///
/// - [`RouterError::DivisionByZero`] if `denominator` is zero.
/// - [`RouterError::InvalidPrice`] if `numerator` is zero.
/// - [`RouterError::InvalidTick`] if the rate is below the price of
///   [`Tick::MIN`].
pub fn tick_at_ratio(numerator: u128, denominator: u128) -> crate::error::Result<Tick> {
    if denominator == 0 {
        return Err(RouterError::DivisionByZero);
    }
    if numerator == 0 {
        return Err(RouterError::InvalidPrice("rate must be positive"));
    }
    // price(t) <= n/d  <=>  sqrt(t)^2 * d <= n * 2^192
    let target = BigUint::from(numerator) << 192u32;
    let denominator = BigUint::from(denominator);
    let fits = |tick: i32| {
        let sqrt = sqrt_ratio_at(tick);
        &sqrt * &sqrt * &denominator <= target
    };

    let (mut lo, mut hi) = (Tick::MIN.get(), Tick::MAX.get());
    if !fits(lo) {
        return Err(RouterError::InvalidTick("rate is below the minimum tick price"));
    }
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if fits(mid) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    Tick::new(lo)
}

/// Converts `amount` of `base` into `quote` at the price implied by `tick`.
///
/// When `base` sorts below `quote` it is the pool's `token0` and the amount
/// is multiplied by the tick price; otherwise it is divided. The result is
/// floored.
///
/// # Errors
///
/// - [`RouterError::InvalidInput`] if `base == quote`.
/// - [`RouterError::AmountTooLarge`] if the result does not fit an [`Amount`].
pub fn quote_at_tick(
    tick: Tick,
    amount: Amount,
    base: TokenAddress,
    quote: TokenAddress,
) -> crate::error::Result<Amount> {
    if base == quote {
        return Err(RouterError::InvalidInput("quote requires two distinct tokens"));
    }
    let sqrt = sqrt_ratio_at_tick(tick);
    let amount = BigUint::from(amount.get());

    // Below 2^128 the squared ratio keeps full Q192 precision; above it the
    // ratio is narrowed to Q128 first.
    let out = if sqrt.bits() <= 128 {
        let ratio = &sqrt * &sqrt;
        if base < quote {
            (ratio * amount) >> 192u32
        } else {
            (pow2(192) * amount) / ratio
        }
    } else {
        let ratio = (&sqrt * &sqrt) >> 64u32;
        if base < quote {
            (ratio * amount) >> 128u32
        } else {
            (pow2(128) * amount) / ratio
        }
    };
    u128::try_from(&out)
        .map(Amount::new)
        .map_err(|_| RouterError::AmountTooLarge)
}
