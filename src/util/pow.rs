// SPDX-License-Identifier: CC0-1.0

//! Proof-of-work related integer types.
//!
//! Targets are arbitrary-precision unsigned integers. The compact ("nBits")
//! encoding packs a target into 32 bits: the high byte is the size of the
//! target in bytes and the low 23 bits are its most significant bytes. Bit 23
//! is a sign bit that valid targets never set.
//!

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// Returns `(1 << bits) - 1`, the largest target a network with a
/// `bits`-bit proof-of-work ceiling accepts.
pub fn max_target(bits: u32) -> BigUint { (BigUint::one() << bits as usize) - BigUint::one() }

/// Proof-of-work ceiling of mainnet and of the fractal test network,
/// `2^224 - 1`.
pub fn mainnet_pow_limit() -> BigUint { max_target(224) }

/// Proof-of-work ceiling of the regression and simulation test networks,
/// `2^255 - 1`.
pub fn regtest_pow_limit() -> BigUint { max_target(255) }

/// Decodes a compact target.
///
/// Encodings with the sign bit set describe negative numbers, which are never
/// valid targets; they decode to zero.
pub fn compact_to_target(compact: u32) -> BigUint {
    let mantissa = compact & 0x007f_ffff;
    let is_negative = compact & 0x0080_0000 != 0;
    let exponent = compact >> 24;

    if is_negative && mantissa != 0 {
        return BigUint::zero();
    }
    if exponent <= 3 {
        BigUint::from(mantissa >> (8 * (3 - exponent)))
    } else {
        BigUint::from(mantissa) << (8 * (exponent - 3)) as usize
    }
}

/// Largest value the compact encoding can express, `0x7fffff << (8 * 252)`.
pub const MAX_COMPACT: u32 = 0xff7f_ffff;

/// Encodes a target in compact form.
///
/// Precision beyond the three most significant bytes is dropped, so
/// `compact_to_target(target_to_compact(t)) <= t`. Targets too large for a
/// one-byte exponent saturate to [`MAX_COMPACT`].
pub fn target_to_compact(target: &BigUint) -> u32 {
    if target.is_zero() {
        return 0;
    }

    let mut size = ((target.bits() + 7) / 8) as u32;
    // At most three significant bytes survive the shift.
    let mut mantissa = if size <= 3 {
        target.to_u32().unwrap_or(0) << (8 * (3 - size))
    } else {
        (target >> (8 * (size - 3)) as usize).to_u32().unwrap_or(0)
    };

    // Keep the sign bit clear by moving into the next exponent.
    if mantissa & 0x0080_0000 != 0 {
        mantissa >>= 8;
        size += 1;
    }
    if size > 0xff {
        return MAX_COMPACT;
    }
    (size << 24) | mantissa
}
