//! Prime-field parameter sets (spec §4.2, §4 concrete instantiations).
//!
//! `FpParams` is the trait-based stand-in for the teacher crate's
//! compile-time constant block (`field.rs`'s `MODULUS`/`R2`/`N0`): a
//! zero-sized type implementing it carries every constant `fp::FpElement`
//! needs, selected at compile time the way spec §9 asks for ("trait per
//! primitive plus a build-time selected concrete type").
//!
//! Rather than hand-transcribing the Montgomery constants `N0` and `R^2` as
//! magic hex literals (error-prone and, worse, unverifiable without running
//! the toolchain), both are derived here from the modulus digits alone using
//! the already-implemented `bn` layer — `N0` via the extended Euclidean
//! algorithm, `R^2` via repeated doubling-and-reduce. Only the modulus
//! itself is a literal.

use crate::bn::BigInt;
use crate::dv::{Digit, DigitVec, DIGIT_BITS};

/// A prime modulus and the Montgomery/sparse-reduction constants derived
/// from it, fixed at compile time for one field.
pub trait FpParams: Clone + Copy + PartialEq + Eq + std::fmt::Debug + 'static {
    /// Number of [`Digit`]s needed to hold a value below the modulus.
    const DIGITS: usize;

    /// The modulus, little-endian digits, length [`FpParams::DIGITS`].
    fn modulus() -> &'static [Digit];

    /// `true` when the modulus has the sparse (Solinas-style) shape that lets
    /// [`crate::fp::rdcs`] reduce without a full Montgomery multiplication —
    /// e.g. secp256k1's `p = 2^256 - 2^32 - 977`.
    fn has_sparse_form() -> bool {
        false
    }

    /// For sparse moduli, the list of `(bit_position, coefficient)` pairs
    /// such that `modulus = 2^(DIGITS*DIGIT_BITS) - Σ coefficient * 2^bit_position`.
    /// Empty for dense (Montgomery-only) moduli.
    fn sparse_terms() -> &'static [(usize, i64)] {
        &[]
    }

    /// The modulus as a [`BigInt`].
    fn modulus_bigint() -> BigInt {
        let mut digits = vec![0 as Digit; Self::DIGITS];
        digits.copy_from_slice(Self::modulus());
        let mut magnitude = DigitVec::from_digits(digits);
        magnitude.trim();
        BigInt {
            sign: crate::bn::Sign::Positive,
            magnitude,
        }
    }

    /// `-modulus^-1 mod 2^DIGIT_BITS`, the Montgomery REDC constant, derived
    /// via the extended Euclidean algorithm on the least significant digit.
    fn montgomery_n0() -> Digit {
        let base = BigInt::one().shl(DIGIT_BITS as usize);
        let m0 = BigInt::from_u64(u64::from(Self::modulus()[0]));
        let inverse = m0
            .mod_inverse(&base)
            .expect("modulus must be odd, so its low digit is invertible mod 2^W");
        let neg_inverse = base.sub(&inverse);
        neg_inverse.low_bits(DIGIT_BITS) as Digit
    }

    /// `R^2 mod modulus`, where `R = 2^(DIGITS * DIGIT_BITS)`, used to carry
    /// values into Montgomery form. Computed by doubling `1` modulo the
    /// modulus `2 * DIGITS * DIGIT_BITS` times.
    fn montgomery_r2() -> Vec<Digit> {
        let modulus = Self::modulus_bigint();
        let mut value = BigInt::one();
        for _ in 0..(2 * Self::DIGITS * DIGIT_BITS as usize) {
            value = value.shl(1);
            if value.compare(&modulus) != std::cmp::Ordering::Less {
                let (_, remainder) = value.div_rem(&modulus).expect("modulus is nonzero");
                value = remainder;
            }
        }
        let mut digits = vec![0 as Digit; Self::DIGITS];
        for (index, slot) in digits.iter_mut().enumerate() {
            *slot = value.magnitude.get(index);
        }
        digits
    }
}

/// secp256k1's base field: `p = 2^256 - 2^32 - 977`.
///
/// Grounded on the teacher crate's `field.rs::apply_solinas_reduction_internal`,
/// which special-cases exactly this modulus shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1Fp;

impl FpParams for Secp256k1Fp {
    const DIGITS: usize = 4; // 4 * 64 = 256 bits

    fn modulus() -> &'static [Digit] {
        // p = 0xFFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE FFFFFC2F
        &[
            0xFFFF_FFFF_FFFF_FC2F,
            0xFFFF_FFFF_FFFF_FFFF,
            0xFFFF_FFFF_FFFF_FFFF,
            0xFFFF_FFFF_FFFF_FFFF,
        ]
    }

    fn has_sparse_form() -> bool {
        true
    }

    fn sparse_terms() -> &'static [(usize, i64)] {
        // p = 2^256 - 2^32 - 977
        &[(32, 1), (0, 977)]
    }
}

/// NIST P-256's base field: `p = 2^256 - 2^224 + 2^192 + 2^96 - 1`.
///
/// Has no sparse-friendly `rdcs` path worth special-casing the way secp256k1
/// does; `fp::rdcn` (generic Montgomery REDC) is the only back-end exercised
/// against it, matching spec §4's scenario 1/2 grounding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct P256Fp;

impl FpParams for P256Fp {
    const DIGITS: usize = 4;

    fn modulus() -> &'static [Digit] {
        // p = 0xFFFFFFFF 00000001 00000000 00000000 00000000 FFFFFFFF FFFFFFFF FFFFFFFF
        &[
            0xFFFF_FFFF_FFFF_FFFF,
            0x0000_0000_FFFF_FFFF,
            0x0000_0000_0000_0000,
            0xFFFF_FFFF_0000_0001,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secp256k1_n0_satisfies_montgomery_identity() {
        let n0 = Secp256k1Fp::montgomery_n0();
        let m0 = Secp256k1Fp::modulus()[0];
        // m0 * n0 = -1 mod 2^DIGIT_BITS, i.e. m0*n0 + 1 == 0 mod 2^64.
        let product = (m0 as u128 * n0 as u128) as u64;
        assert_eq!(product.wrapping_add(1), 0);
    }

    #[test]
    fn p256_n0_satisfies_montgomery_identity() {
        let n0 = P256Fp::montgomery_n0();
        let m0 = P256Fp::modulus()[0];
        let product = (m0 as u128 * n0 as u128) as u64;
        assert_eq!(product.wrapping_add(1), 0);
    }

    #[test]
    fn montgomery_r2_is_below_modulus() {
        let r2 = Secp256k1Fp::montgomery_r2();
        let r2_bigint = BigInt {
            sign: crate::bn::Sign::Positive,
            magnitude: {
                let mut v = DigitVec::from_digits(r2);
                v.trim();
                v
            },
        };
        assert_eq!(
            r2_bigint.compare(&Secp256k1Fp::modulus_bigint()),
            std::cmp::Ordering::Less
        );
    }
}
