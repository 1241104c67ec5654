//! Scalar-multiplication strategies over binary curves (spec §4.5, §4.6).
//!
//! Grounded on the same shape as `ep::mul`, generalized to the
//! [`EbPoint`] representation and to the Koblitz-specific `τ`-adic
//! recoding this field's curves admit. [`mul_ladder`] is the one strategy
//! spec §4.6 requires to run in constant time, so unlike every other
//! function here it does not call [`EbPoint::add`]/[`EbPoint::double`] at
//! all — see its doc comment.

use super::params::EbParams;
use super::EbPoint;
use crate::bn::recoding::tau_naf;
use crate::bn::BigInt;
use crate::errors::MathError;
use crate::fb::FbElement;

/// Basic left-to-right double-and-add.
#[must_use]
pub fn mul_basic<P: EbParams>(k: &BigInt, point: &EbPoint<P>) -> EbPoint<P> {
    let mut result = EbPoint::infinity();
    for i in (0..k.bit_length()).rev() {
        result = result.double();
        if k.get_bit(i) {
            result = result.add(point);
        }
    }
    result
}

/// `(X:Z) -> (2X:2Z)` in the x-only projective form `x = X/Z`: derived from
/// the affine doubling law by substituting `μ = y/x` (so `x3 = λ²+λ+a` with
/// `λ=x+μ`) and using the curve equation `μ²+μ = x+a+b/x²` to eliminate `μ`
/// entirely, leaving `x3 = x² + b/x²` — independent of `a` and of `y`. See
/// `DESIGN.md` for the full derivation.
fn double_xz<P: EbParams>(x: &FbElement<P::Field>, z: &FbElement<P::Field>) -> (FbElement<P::Field>, FbElement<P::Field>) {
    let x2 = x.sqr();
    let z2 = z.sqr();
    let z3 = x2.mul(&z2);
    let x3 = x2.sqr().add(&P::b().mul(&z2.sqr()));
    (x3, z3)
}

/// `(X1:Z1), (X2:Z2) -> (X3:Z3)` where `R3 = R1 + R2` and `R1 - R2` is the
/// fixed affine point with x-coordinate `x_diff`: derived from the
/// y-independent identity `x(P+Q) + x(P-Q) = x(P)x(Q) / (x(P)+x(Q))²`, which
/// itself falls out of the two addition-law instances for `P+Q` and
/// `P+(-Q)` after eliminating every `y`-dependent term. See `DESIGN.md`.
fn diff_add<P: EbParams>(
    x1: &FbElement<P::Field>,
    z1: &FbElement<P::Field>,
    x2: &FbElement<P::Field>,
    z2: &FbElement<P::Field>,
    x_diff: &FbElement<P::Field>,
) -> (FbElement<P::Field>, FbElement<P::Field>) {
    let w = x1.mul(z2).add(&x2.mul(z1));
    let z3 = w.sqr();
    let x3 = x1.mul(x2).mul(z1).mul(z2).add(&x_diff.mul(&z3));
    (x3, z3)
}

fn cswap<P: EbParams>(bit: bool, a: &mut FbElement<P::Field>, b: &mut FbElement<P::Field>) {
    let new_a = FbElement::select(bit, a, b);
    let new_b = FbElement::select(bit, b, a);
    *a = new_a;
    *b = new_b;
}

/// Montgomery ladder over the x-only projective curve model: maintains
/// `(X0:Z0) ~ vP`, `(X1:Z1) ~ (v+1)P` for the running prefix `v` of `k`'s
/// bits, using [`double_xz`] and [`diff_add`] so every iteration runs the
/// exact same sequence of field multiplications regardless of the bit's
/// value — the only bit-dependent step is [`cswap`], a masked select with
/// no data-dependent branch. Unlike [`EbPoint::double`]/[`EbPoint::add`],
/// this never inverts a field element inside the loop; the only inversions
/// happen once, after the loop, to recover `kP`'s affine coordinates (spec
/// §4.6's constant-time requirement is about the scalar-dependent loop body,
/// not this fixed-shape epilogue).
#[must_use]
pub fn mul_ladder<P: EbParams>(k: &BigInt, point: &EbPoint<P>) -> EbPoint<P> {
    if k.is_zero() || point.is_infinity() {
        return EbPoint::infinity();
    }
    let (px, _py) = point.to_affine().expect("checked non-infinity above");
    let bits = k.bit_length();

    let mut x0 = px.clone();
    let mut z0 = FbElement::one();
    let mut x1 = px.sqr().sqr().add(&P::b());
    let mut z1 = px.sqr();

    for i in (0..bits - 1).rev() {
        let bit = k.get_bit(i);
        cswap::<P>(bit, &mut x0, &mut x1);
        cswap::<P>(bit, &mut z0, &mut z1);
        let (nx1, nz1) = diff_add::<P>(&x0, &z0, &x1, &z1, &px);
        let (nx0, nz0) = double_xz::<P>(&x0, &z0);
        x0 = nx0;
        z0 = nz0;
        x1 = nx1;
        z1 = nz1;
        cswap::<P>(bit, &mut x0, &mut x1);
        cswap::<P>(bit, &mut z0, &mut z1);
    }

    recover_point::<P>(&x0, &z0, &x1, &z1, point)
}

/// Recovers the full affine point from the ladder's final `(X0:Z0)~kP`,
/// `(X1:Z1)~(k+1)P` pair: `x`-coordinates come straight from one inversion
/// each, and `y` is found the same way [`EbPoint::generator`] finds one
/// (solving `μ²+μ = x+a+b/x²` by half-trace) — which yields one of the two
/// points sharing that `x`, disambiguated by checking which one, added to
/// the original `point`, lands on `(k+1)P`'s recovered `x`-coordinate.
fn recover_point<P: EbParams>(
    x0: &FbElement<P::Field>,
    z0: &FbElement<P::Field>,
    x1: &FbElement<P::Field>,
    z1: &FbElement<P::Field>,
    point: &EbPoint<P>,
) -> EbPoint<P> {
    if z0.is_zero() {
        return EbPoint::infinity();
    }
    let z0_inv = crate::fb::inversion::fermat(z0).expect("checked nonzero above");
    let rx0 = x0.mul(&z0_inv);
    let rx1 = if z1.is_zero() {
        FbElement::zero()
    } else {
        x1.mul(&crate::fb::inversion::fermat(z1).expect("checked nonzero above"))
    };

    let rx0_inv = crate::fb::inversion::fermat(&rx0).expect("kP has nonzero x for 0 < k < order");
    let rhs = rx0.add(&P::a()).add(&P::b().mul(&rx0_inv.sqr()));
    debug_assert!(!rhs.trace(), "x-coordinate of a curve point must solve μ²+μ=x+a+b/x²");
    let mu = rhs.half_trace();
    let y_candidate = mu.mul(&rx0);
    let y_alt = rx0.add(&y_candidate);

    let candidate = EbPoint::from_affine_unchecked(rx0.clone(), y_candidate);
    let sum = candidate.add(point);
    if !sum.is_infinity() {
        if let Ok((sum_x, _)) = sum.to_affine() {
            if sum_x == rx1 {
                return candidate;
            }
        }
    }
    EbPoint::from_affine_unchecked(rx0, y_alt)
}

fn odd_multiples<P: EbParams>(point: &EbPoint<P>, w: u32) -> Vec<EbPoint<P>> {
    let count = 1usize << (w - 2);
    let double = point.double();
    let mut table = Vec::with_capacity(count);
    table.push(point.clone());
    for i in 1..count {
        table.push(table[i - 1].add(&double));
    }
    table
}

fn table_lookup<P: EbParams>(table: &[EbPoint<P>], digit: i64) -> EbPoint<P> {
    debug_assert!(digit != 0 && digit % 2 != 0);
    let index = (digit.unsigned_abs() as usize - 1) / 2;
    if digit > 0 {
        table[index].clone()
    } else {
        table[index].neg()
    }
}

/// `τ`-adic NAF scalar multiplication for Koblitz curves: recodes `k` in the
/// ring `Z[τ]` (`τ² − μτ + 2 = 0`) and evaluates by Horner's rule over `τ`,
/// replacing every doubling with one field squaring on each coordinate via
/// [`EbPoint::frobenius`].
#[must_use]
pub fn mul_tau_naf<P: EbParams>(k: &BigInt, point: &EbPoint<P>) -> EbPoint<P> {
    let w = 4;
    let digits = tau_naf(k, P::mu(), w);
    let table = odd_multiples(point, w);
    let mut result = EbPoint::infinity();
    for &digit in digits.iter().rev() {
        result = result.frobenius();
        if digit != 0 {
            result = result.add(&table_lookup(&table, digit));
        }
    }
    result
}

/// Halving-based scalar multiplication (Knudsen): since halving a point of
/// odd order `n` is multiplication by `2^-1 mod n`, `k` is first rescaled by
/// `2^l mod n` (`l` the bit length used below) so the halving loop lands on
/// `kP` exactly instead of `(k * 2^-l mod n) * P`.
///
/// # Errors
/// Returns whatever [`EbPoint::half`] returns if an intermediate point has
/// no half in the group (should not occur for points of odd order `n`).
pub fn mul_halving<P: EbParams>(k: &BigInt, point: &EbPoint<P>) -> Result<EbPoint<P>, MathError> {
    let n = P::order();
    let l = n.bit_length();
    let scaled = k.mul(&BigInt::one().shl(l));
    let (_, k_prime) = scaled.div_rem(&n)?;
    let mut result = EbPoint::infinity();
    for i in (0..l).rev() {
        if k_prime.get_bit(i) {
            result = result.add(point);
        }
        result = result.half()?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eb::params::B283Koblitz;

    #[test]
    fn basic_and_ladder_agree() {
        let g = EbPoint::<B283Koblitz>::generator();
        let k = BigInt::from_u64(12345);
        assert_eq!(mul_basic(&k, &g), mul_ladder(&k, &g));
    }

    #[test]
    fn tau_naf_matches_basic() {
        let g = EbPoint::<B283Koblitz>::generator();
        let k = BigInt::from_u64(777);
        assert_eq!(mul_basic(&k, &g), mul_tau_naf(&k, &g));
    }

    #[test]
    fn scalar_zero_gives_infinity() {
        let g = EbPoint::<B283Koblitz>::generator();
        assert!(mul_basic(&BigInt::zero(), &g).is_infinity());
        assert!(mul_ladder(&BigInt::zero(), &g).is_infinity());
    }
}
