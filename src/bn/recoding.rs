//! Scalar recoding strategies (spec §4.1): NAF, windowed NAF, joint sparse
//! form, τ-NAF over the Koblitz ring `Z[τ]`, and a regular (constant-time)
//! signed-digit recoding.
//!
//! Every function here returns the digits least-significant-first, with the
//! invariant `k = Σ dᵢ · 2ⁱ` (or, for τ-NAF, `k = Σ dᵢ · τⁱ`) checked by the
//! unit tests below rather than asserted at runtime — recoding is a hot path
//! and the teacher crate does not re-validate arithmetic it already trusts.

use crate::bn::BigInt;
use crate::errors::MathError;
use std::cmp::Ordering;

/// `value mod 2^w` as a non-negative residue in `[0, 2^w)`, correct for
/// negative `value` (needed by τ-NAF, whose running remainder crosses zero).
fn mod_pow2_signed(value: &BigInt, w: u32) -> i64 {
    let radix = 1i64 << w;
    let magnitude_bits = value.low_bits(w) as i64;
    if value.is_negative() && magnitude_bits != 0 {
        radix - magnitude_bits
    } else {
        magnitude_bits
    }
}

/// Non-adjacent form of `k`, radix `2^w`. Digits are odd, lie in
/// `(-2^(w-1), 2^(w-1))`, and no two nonzero digits are closer than `w`
/// positions apart (spec §4.1's standard NAF property).
#[must_use]
pub fn naf(k: &BigInt, w: u32) -> Vec<i64> {
    assert!(w >= 2, "NAF window width must be at least 2");
    let radix = 1i64 << w;
    let half = radix / 2;
    let mut remaining = k.clone();
    let mut digits = Vec::new();
    while !remaining.is_zero() {
        if remaining.is_odd() {
            let window = mod_pow2_signed(&remaining, w);
            let digit = if window >= half { window - radix } else { window };
            digits.push(digit);
            remaining = sub_i64(&remaining, digit);
        } else {
            digits.push(0);
        }
        remaining = remaining.shr(1);
    }
    digits
}

/// Joint sparse form of `(k0, k1)`: a pair of equal-length digit sequences
/// in `{-1, 0, 1}` with `k0 = Σ uᵢ2ⁱ` and `k1 = Σ vᵢ2ⁱ`.
///
/// Unlike running two ordinary NAFs independently (which never lets either
/// coordinate's decision depend on the other), this shares one pair of
/// carry bits `(d0, d1)` across both coordinates, exactly as [`naf`] would
/// if it were generalized to remember a pending `+1` instead of directly
/// subtracting it. Most steps are still forced (a remainder's parity
/// dictates whether that coordinate's digit is `0`), but whenever *both*
/// coordinates are simultaneously forced to a nonzero digit and their
/// locally-optimal ("natural") signs disagree, the conflict is broken by
/// keeping the natural sign of whichever coordinate currently has the
/// smaller remaining magnitude and overriding the other coordinate's digit
/// to match it — sacrificing that coordinate's own non-adjacent-form
/// property in exchange for a shared column. That override is where the
/// two coordinates actually couple; without it this degenerates to exactly
/// [`naf`] run twice.
///
/// This is this crate's own reconstruction of Solinas' joint-carry
/// automaton, not a transcription of the original paper's published
/// minimal-weight table: that table was judged unverifiable to reproduce
/// bit-for-bit from memory with no toolchain or network access in this
/// environment to check it against. A naive tie-break tried during
/// development (always favor one fixed coordinate) measurably *increased*
/// the joint nonzero-column count on the `(0xD5, 0x87)` case relative to
/// doing nothing — getting this conflict rule right is not cosmetic. The
/// smaller-magnitude tie-break shipped here was hand-traced against that
/// case and confirmed both to reconstruct exactly and to not regress past
/// two independent NAFs; see `DESIGN.md` and
/// `tests/golden_vectors.rs::scenario_jsf_reconstruction_for_0xd5_and_0x87`.
#[must_use]
pub fn jsf(k0: &BigInt, k1: &BigInt) -> (Vec<i64>, Vec<i64>) {
    let mut r0 = k0.clone();
    let mut r1 = k1.clone();
    let mut d0 = false;
    let mut d1 = false;
    let mut u = Vec::new();
    let mut v = Vec::new();

    while !r0.is_zero() || !r1.is_zero() || d0 || d1 {
        let cur0 = i64::from(r0.is_odd()) + i64::from(d0);
        let cur1 = i64::from(r1.is_odd()) + i64::from(d1);

        let (digit0, digit1) = match (cur0, cur1) {
            (1, 1) => {
                let n0 = natural_sign(&r0, d0);
                let n1 = natural_sign(&r1, d1);
                if n0 == n1 {
                    (n0, n1)
                } else if r0.compare(&r1) == Ordering::Less {
                    (n0, n0)
                } else {
                    (n1, n1)
                }
            }
            (1, _) => (natural_sign(&r0, d0), 0),
            (_, 1) => (0, natural_sign(&r1, d1)),
            _ => (0, 0),
        };

        d0 = next_carry(cur0, digit0);
        d1 = next_carry(cur1, digit1);
        u.push(digit0);
        v.push(digit1);
        r0 = r0.shr(1);
        r1 = r1.shr(1);
    }
    (u, v)
}

/// The sign a lone coordinate's NAF would pick at an odd step: `+1` when
/// the current value (after folding in a pending carry) is `1 mod 4`,
/// `-1` when it is `3 mod 4`.
fn natural_sign(remaining: &BigInt, carry: bool) -> i64 {
    let effective_mod4 = if carry {
        remaining.add(&BigInt::one()).low_bits(2)
    } else {
        remaining.low_bits(2)
    };
    if effective_mod4 == 1 {
        1
    } else {
        -1
    }
}

/// The carry a coordinate leaves behind after this step, derived from
/// conservation (`remaining + carry_in` must halve exactly): `0` when the
/// position was already even, `1` when an unresolved `+1` still needs
/// folding in (the position read `2` under carry), and otherwise `1` iff
/// the emitted digit was `-1`.
fn next_carry(cur: i64, digit: i64) -> bool {
    match cur {
        0 => false,
        2 => true,
        _ => digit == -1,
    }
}

/// τ-adic NAF of `k` over the Koblitz ring `Z[τ]`, `τ² − μτ + 2 = 0`.
///
/// Implements the generalization of Solinas' Algorithm (Hankerson §3.69) to
/// window width `w`: at each step the digit is the signed residue of the
/// running value modulo `2^w` (odd digits only, magnitude below `2^(w-1)`),
/// and the running value is divided by τ using the reduction rule
/// `(r0, r1) / τ = (r1/2 + μ·r0/2, -r0/2)` when both remainders are even
/// after adjusting with the emitted digit — mirroring one ordinary NAF
/// division step but in the two-coordinate `a + bτ` basis.
#[must_use]
pub fn tau_naf(k: &BigInt, mu: i64, w: u32) -> Vec<i64> {
    assert!(w >= 2, "tau-NAF window width must be at least 2");
    let radix = 1i64 << w;
    let half = radix / 2;
    let (mut r0, mut r1) = (k.clone(), BigInt::zero());
    let mut digits = Vec::new();
    let mut iterations = 0usize;
    let max_iterations = k.bit_length() * 4 + 64;
    while (!r0.is_zero() || !r1.is_zero()) && iterations < max_iterations {
        iterations += 1;
        let digit = if r0.is_odd() {
            let window = mod_pow2_signed(&r0, w);
            let candidate = if window >= half { window - radix } else { window };
            // Keep the digit odd: if subtracting it would make r0 even in a
            // way inconsistent with the required odd residue, fall back to
            // the minimal odd representative.
            if candidate % 2 == 0 {
                if candidate > 0 {
                    candidate - 1
                } else {
                    candidate + 1
                }
            } else {
                candidate
            }
        } else {
            0
        };
        digits.push(digit);
        let adjusted_r0 = sub_i64(&r0, digit);
        // Divide (adjusted_r0, r1) by tau: tau satisfies tau^2 = mu*tau - 2,
        // so 1/tau = (mu - tau)/2, giving (a + b*tau)/tau = b + (a - mu*b)/2 ... tau^-1.
        // Equivalently or (r0, r1) / tau = (r1 + mu*q, -q) where q = r0/2 is
        // only valid when r0 is even; since adjusted_r0 is even by
        // construction (digit matches its parity), this always divides.
        let q = adjusted_r0.shr(1);
        let new_r0 = r1.add(&scale_i64(&q, mu));
        let new_r1 = q.neg();
        r0 = new_r0;
        r1 = new_r1;
    }
    digits
}

/// Constant-time regular recoding: every digit is odd and nonzero, giving a
/// fixed-length sequence with no data-dependent zero runs.
///
/// Requires `k` to be odd (the standard precondition for this family of
/// recodings — callers performing scalar multiplication over a group of odd
/// order `n` arrange this by using `k` or `k + n`, whichever is odd).
///
/// # Errors
/// Returns [`MathError::InvalidInput`] if `k` is even or zero.
pub fn regular_recode(k: &BigInt) -> Result<Vec<i64>, MathError> {
    if k.is_zero() || k.is_even() {
        return Err(MathError::InvalidInput(
            "regular recoding requires a strictly positive odd scalar",
        ));
    }
    let l = k.bit_length();
    // e = (k + 2^(l+1) - 1) / 2, so that d_i = 2*bit(e, i) - 1 for i in 0..=l
    // reconstructs k exactly: sum(d_i * 2^i) = 2*e - (2^(l+1) - 1) = k.
    let bias = BigInt::one().shl(l + 1).sub(&BigInt::one());
    let e = k.add(&bias).shr(1);
    let mut digits = Vec::with_capacity(l + 1);
    for i in 0..=l {
        digits.push(if e.get_bit(i) { 1 } else { -1 });
    }
    Ok(digits)
}

fn sub_i64(value: &BigInt, digit: i64) -> BigInt {
    if digit >= 0 {
        value.sub(&BigInt::from_u64(digit as u64))
    } else {
        value.add(&BigInt::from_u64((-digit) as u64))
    }
}

fn scale_i64(value: &BigInt, factor: i64) -> BigInt {
    if factor >= 0 {
        value.mul(&BigInt::from_u64(factor as u64))
    } else {
        value.mul(&BigInt::from_u64((-factor) as u64)).neg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(digits: &[i64]) -> BigInt {
        let mut total = BigInt::zero();
        for (i, &d) in digits.iter().enumerate() {
            total = total.add(&sub_i64(&BigInt::zero(), -d).shl(i));
        }
        total
    }

    #[test]
    fn naf_reconstructs_value() {
        let k = BigInt::from_u64(0xD5);
        let digits = naf(&k, 2);
        assert_eq!(reconstruct(&digits), k);
        for window in digits.windows(2) {
            if window[0] != 0 {
                // no two consecutive nonzero digits in width-2 NAF
                assert_eq!(window[1], 0);
            }
        }
    }

    #[test]
    fn naf_handles_zero() {
        assert!(naf(&BigInt::zero(), 2).iter().all(|&d| d == 0) || naf(&BigInt::zero(), 2).is_empty());
    }

    #[test]
    fn jsf_reconstructs_both_values() {
        let k0 = BigInt::from_u64(0xD5);
        let k1 = BigInt::from_u64(0x87);
        let (u, v) = jsf(&k0, &k1);
        assert_eq!(reconstruct(&u), k0);
        assert_eq!(reconstruct(&v), k1);
        assert!(u.iter().all(|&d| (-1..=1).contains(&d)));
        assert!(v.iter().all(|&d| (-1..=1).contains(&d)));
    }

    #[test]
    fn tau_naf_reconstructs_value_for_mu_one() {
        // For mu=1 (Koblitz curve with trace 1), tau satisfies tau^2 = tau - 2.
        // Verify reconstruction in the (a, b) basis: k = a + b*tau, using the
        // same division rule applied forward from the recoded digits.
        let k = BigInt::from_u64(45);
        let digits = tau_naf(&k, 1, 2);
        let (mut a, mut b) = (BigInt::zero(), BigInt::zero());
        for (i, &d) in digits.iter().enumerate().rev() {
            // Rebuild via Horner's rule in tau: value = d_n; value = value*tau + d_{n-1}
            let _ = i;
            let new_a = sub_i64(&BigInt::zero(), -d).add(&scale_i64(&b, -2));
            let new_b = a.add(&scale_i64(&b, 1));
            a = new_a;
            b = new_b;
        }
        assert_eq!(a, k);
        assert!(b.is_zero());
    }

    #[test]
    fn regular_recode_reconstructs_odd_value() {
        let k = BigInt::from_u64(0xCAFEBABE ^ 1 | 1);
        let digits = regular_recode(&k).unwrap();
        assert!(digits.iter().all(|&d| d == 1 || d == -1));
        assert_eq!(reconstruct(&digits), k);
    }

    #[test]
    fn regular_recode_rejects_even_input() {
        assert!(regular_recode(&BigInt::from_u64(8)).is_err());
    }
}
