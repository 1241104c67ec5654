//! Prime-field layer (spec §2 `fp`, §4.2).
//!
//! `FpElement<P>` uses one of two internal representations, chosen per
//! `P::has_sparse_form()` and fixed for the lifetime of the type: dense
//! moduli are held in Montgomery form at all times, the same invariant the
//! teacher crate's `FieldElement` keeps (per its `execute_redc_sovereign`
//! comment that "the representation invariant is Montgomery form, full
//! stop"), reduced with `rdcn`. Sparse (Solinas-shaped) moduli are held as
//! plain residues and reduced with `rdcs` instead — `rdcs` folds the high
//! half of a product back using `2^N ≡ c (mod p)`, which reduces `x*y` to
//! `x*y mod p` directly and has no notion of an `R` factor to cancel, so it
//! must never be fed a Montgomery-form product. Mixing the two
//! representations inside one `FpElement<P>` is a bug: every entry and exit
//! point (`from_bigint`, `to_bigint`) branches on `has_sparse_form()` so the
//! stored `value` is always in the one representation that field's `mul`
//! expects.

pub mod params;

use crate::bn::{BigInt, Sign};
use crate::dv::{Digit, DigitVec, DIGIT_BITS};
use crate::errors::MathError;
use params::FpParams;
use std::cmp::Ordering;
use std::marker::PhantomData;
use tracing::instrument;

/// An element of `GF(p)`, stored internally in Montgomery form.
#[derive(Clone, Debug)]
pub struct FpElement<P: FpParams> {
    value: BigInt,
    _params: PhantomData<P>,
}

impl<P: FpParams> PartialEq for FpElement<P> {
    fn eq(&self, other: &Self) -> bool {
        self.value.compare(&other.value) == Ordering::Equal
    }
}
impl<P: FpParams> Eq for FpElement<P> {}

impl<P: FpParams> FpElement<P> {
    fn modulus() -> BigInt {
        P::modulus_bigint()
    }

    fn width_bits() -> usize {
        P::DIGITS * DIGIT_BITS as usize
    }

    fn reduce_full(mut value: BigInt) -> BigInt {
        let modulus = Self::modulus();
        while value.is_negative() {
            value = value.add(&modulus);
        }
        while value.compare(&modulus) != Ordering::Less {
            value = value.sub(&modulus);
        }
        value
    }

    /// The additive identity, in Montgomery form (which is just zero).
    #[must_use]
    pub fn zero() -> Self {
        Self {
            value: BigInt::zero(),
            _params: PhantomData,
        }
    }

    /// The multiplicative identity, stored as `R mod p` in Montgomery form.
    #[must_use]
    pub fn one() -> Self {
        Self::from_bigint(&BigInt::one())
    }

    /// Lifts a plain integer into the field, reducing mod p. Dense moduli
    /// additionally convert to Montgomery form via multiplication by `R^2`;
    /// sparse moduli store the reduced residue as-is.
    #[must_use]
    pub fn from_bigint(value: &BigInt) -> Self {
        let reduced = Self::reduce_full(value.clone());
        let stored = if P::has_sparse_form() {
            reduced
        } else {
            let r2 = bigint_from_digits(&P::montgomery_r2());
            let product = reduced.mul(&r2);
            rdcn::<P>(&product)
        };
        Self {
            value: stored,
            _params: PhantomData,
        }
    }

    /// Lowers back to a plain integer in `[0, p)`. Dense moduli undo the
    /// Montgomery form via `rdcn`; sparse moduli are already plain.
    #[must_use]
    pub fn to_bigint(&self) -> BigInt {
        if P::has_sparse_form() {
            self.value.clone()
        } else {
            rdcn::<P>(&self.value)
        }
    }

    /// True when the value is the field's additive identity.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// `self + other`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            value: Self::reduce_full(self.value.add(&other.value)),
            _params: PhantomData,
        }
    }

    /// `self - other`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self {
            value: Self::reduce_full(self.value.sub(&other.value)),
            _params: PhantomData,
        }
    }

    /// `-self`.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::zero().sub(self)
    }

    /// `2 * self`.
    #[must_use]
    pub fn dbl(&self) -> Self {
        self.add(self)
    }

    /// `self / 2`, computed without leaving the field (adds the modulus
    /// first when the value is odd, matching the `fp::hlv` operation of
    /// spec §4.2).
    #[must_use]
    pub fn hlv(&self) -> Self {
        let raw = self.to_bigint();
        let doubled = if raw.is_odd() { raw.add(&Self::modulus()) } else { raw };
        Self::from_bigint(&doubled.shr(1))
    }

    /// `self * other`. Dense moduli multiply Montgomery-form operands and
    /// reduce with a single `rdcn` (REDC) pass. Sparse moduli multiply plain
    /// residues directly and reduce with `rdcs`, which has no `R` factor to
    /// cancel — `self.value`/`other.value` are never in Montgomery form when
    /// `P::has_sparse_form()`, so this is a correct plain multiplication,
    /// not a Montgomery one.
    #[instrument(level = "trace", skip_all)]
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let product = self.value.mul(&other.value);
        let reduced = if P::has_sparse_form() {
            rdcs::<P>(&product)
        } else {
            rdcn::<P>(&product)
        };
        Self {
            value: reduced,
            _params: PhantomData,
        }
    }

    /// `self * self`.
    #[must_use]
    pub fn sqr(&self) -> Self {
        self.mul(self)
    }

    /// `self^exponent`, exponent given as a plain (non-Montgomery) integer.
    #[instrument(level = "trace", skip_all)]
    #[must_use]
    pub fn pow(&self, exponent: &BigInt) -> Self {
        let mut result = Self::one();
        let bits = exponent.bit_length();
        for i in (0..bits).rev() {
            result = result.sqr();
            if exponent.get_bit(i) {
                result = result.mul(self);
            }
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem: `self^(p-2)`.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidInput`] if `self` is zero.
    #[instrument(level = "trace", skip_all)]
    pub fn inv(&self) -> Result<Self, MathError> {
        if self.is_zero() {
            return Err(MathError::division_by_zero());
        }
        let exponent = Self::modulus().sub(&BigInt::from_u64(2));
        Ok(self.pow(&exponent))
    }

    /// Inverts every element of `values` using a single field inversion plus
    /// `3*(n-1)` multiplications (Montgomery's simultaneous-inversion trick),
    /// grounded on the teacher crate's `field.rs::batch_invert_into`.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidInput`] if any element is zero.
    #[instrument(level = "trace", skip_all)]
    pub fn batch_invert(values: &[Self]) -> Result<Vec<Self>, MathError> {
        if values.is_empty() {
            return Ok(Vec::new());
        }
        if values.iter().any(Self::is_zero) {
            return Err(MathError::division_by_zero());
        }
        let mut prefix = Vec::with_capacity(values.len());
        let mut running = Self::one();
        for value in values {
            running = running.mul(value);
            prefix.push(running.clone());
        }
        let mut inverse_running = running.inv()?;
        let mut results = vec![Self::zero(); values.len()];
        for i in (0..values.len()).rev() {
            let value_inverse = if i == 0 {
                inverse_running.clone()
            } else {
                inverse_running.mul(&prefix[i - 1])
            };
            results[i] = value_inverse;
            inverse_running = inverse_running.mul(&values[i]);
        }
        Ok(results)
    }

    /// Square root via the Tonelli-Shanks algorithm. Returns `None` if
    /// `self` is not a quadratic residue.
    #[instrument(level = "trace", skip_all)]
    #[must_use]
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::zero());
        }
        let modulus = Self::modulus();
        let one = BigInt::one();
        let exponent_legendre = modulus.sub(&one).shr(1);
        if self.pow(&exponent_legendre) != Self::one() {
            return None;
        }

        // Factor p - 1 = q * 2^s with q odd.
        let mut q = modulus.sub(&one);
        let mut s = 0usize;
        while q.is_even() {
            q = q.shr(1);
            s += 1;
        }

        if s == 1 {
            // p = 3 mod 4 fast path: sqrt = self^((p+1)/4).
            let exponent = modulus.add(&one).shr(2);
            return Some(self.pow(&exponent));
        }

        // Find a quadratic non-residue z.
        let mut candidate = BigInt::from_u64(2);
        let mut z = Self::from_bigint(&candidate);
        while z.pow(&exponent_legendre) == Self::one() {
            candidate = candidate.add(&one);
            z = Self::from_bigint(&candidate);
        }

        let mut m = s;
        let mut c = z.pow(&q);
        let mut t = self.pow(&q);
        let mut r = self.pow(&q.add(&one).shr(1));

        loop {
            if t == Self::one() {
                return Some(r);
            }
            let mut i = 0usize;
            let mut t_pow = t.clone();
            while t_pow != Self::one() {
                t_pow = t_pow.sqr();
                i += 1;
                if i == m {
                    return None; // should not happen once Euler's criterion passed
                }
            }
            let mut b = c.clone();
            for _ in 0..(m - i - 1) {
                b = b.sqr();
            }
            m = i;
            c = b.sqr();
            t = t.mul(&c);
            r = r.mul(&b);
        }
    }
}

fn bigint_from_digits(digits: &[Digit]) -> BigInt {
    let mut vec = DigitVec::from_digits(digits.to_vec());
    vec.trim();
    BigInt {
        sign: Sign::Positive,
        magnitude: vec,
    }
}

/// Dense Montgomery reduction ("REDC"): given `t < R * p` (Montgomery form's
/// working range), returns `t * R^-1 mod p`.
///
/// This is the schoolbook generalization of the teacher crate's
/// `execute_redc_sovereign`, expressed over the generic `bn` layer instead of
/// a fixed 4-limb Comba loop, so it adapts to any [`FpParams::DIGITS`].
fn rdcn<P: FpParams>(t: &BigInt) -> BigInt {
    let modulus = P::modulus_bigint();
    let w = DIGIT_BITS as usize;
    let n0 = u128::from(P::montgomery_n0());
    let mut value = t.clone();
    for _ in 0..P::DIGITS {
        let digit_lo = value.low_bits(DIGIT_BITS) as u128; // low W bits of the *current* running value
        let m = ((digit_lo * n0) & ((1u128 << w) - 1)) as u64;
        value = value.add(&modulus.mul(&BigInt::from_u64(m)));
        value = value.shr(w);
    }
    if value.compare(&modulus) != Ordering::Less {
        value = value.sub(&modulus);
    }
    value
}

/// Sparse ("Solinas") reduction for moduli of the form `2^N - c` with small
/// `c`, folding the high half of the product back using `2^N ≡ c (mod p)`
/// until the value fits in `N` bits, then a final conditional subtraction.
/// Grounded on the teacher crate's `apply_solinas_reduction_internal`.
fn rdcs<P: FpParams>(t: &BigInt) -> BigInt {
    let n = P::DIGITS * DIGIT_BITS as usize;
    let modulus = P::modulus_bigint();
    let mut c = BigInt::zero();
    for &(bit, coefficient) in P::sparse_terms() {
        c = c.add(&BigInt::from_u64(coefficient.unsigned_abs()).shl(bit));
    }
    let mut value = t.clone();
    while value.bit_length() > n {
        let hi = value.shr(n);
        let lo = value.sub(&hi.shl(n));
        value = hi.mul(&c).add(&lo);
    }
    while value.compare(&modulus) != Ordering::Less {
        value = value.sub(&modulus);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use params::{P256Fp, Secp256k1Fp};

    #[test]
    fn round_trip_through_montgomery_form() {
        let a = BigInt::from_u64(123_456_789);
        let element = FpElement::<Secp256k1Fp>::from_bigint(&a);
        assert_eq!(element.to_bigint(), a);
    }

    #[test]
    fn addition_matches_plain_integer_addition() {
        let a = FpElement::<Secp256k1Fp>::from_bigint(&BigInt::from_u64(10));
        let b = FpElement::<Secp256k1Fp>::from_bigint(&BigInt::from_u64(20));
        assert_eq!(a.add(&b).to_bigint(), BigInt::from_u64(30));
    }

    #[test]
    fn montgomery_multiplication_matches_plain_multiplication() {
        let a = FpElement::<P256Fp>::from_bigint(&BigInt::from_u64(2));
        let b = FpElement::<P256Fp>::from_bigint(&BigInt::from_u64(3));
        assert_eq!(a.mul(&b).to_bigint(), BigInt::from_u64(6));
    }

    #[test]
    fn inverse_of_inverse_is_identity() {
        let a = FpElement::<Secp256k1Fp>::from_bigint(&BigInt::from_u64(42));
        let inverse = a.inv().unwrap();
        assert_eq!(a.mul(&inverse), FpElement::<Secp256k1Fp>::one());
    }

    #[test]
    fn zero_has_no_inverse() {
        assert!(FpElement::<Secp256k1Fp>::zero().inv().is_err());
    }

    #[test]
    fn batch_invert_matches_individual_inversion() {
        let values: Vec<_> = (1u64..6)
            .map(|v| FpElement::<Secp256k1Fp>::from_bigint(&BigInt::from_u64(v)))
            .collect();
        let batch = FpElement::batch_invert(&values).unwrap();
        for (value, inverse) in values.iter().zip(batch.iter()) {
            assert_eq!(value.mul(inverse), FpElement::<Secp256k1Fp>::one());
        }
    }

    #[test]
    fn sqrt_of_square_round_trips() {
        let a = FpElement::<P256Fp>::from_bigint(&BigInt::from_u64(9));
        let square = a.sqr();
        let root = square.sqrt().expect("perfect square must have a root");
        assert_eq!(root.sqr(), square);
    }

    #[test]
    fn halve_then_double_is_identity() {
        let a = FpElement::<Secp256k1Fp>::from_bigint(&BigInt::from_u64(7));
        assert_eq!(a.hlv().dbl(), a);
    }
}
