//! Binary-curve parameter sets (spec §4.5, §4 concrete instantiations).

use crate::bn::BigInt;
use crate::fb::params::{B283Fb, FbParams};
use crate::fb::FbElement;

/// A Koblitz (anomalous binary) curve `y^2 + xy = x^3 + a*x^2 + b` over
/// `GF(2^m)`, with `a, b` restricted to `GF(2) = {0, 1}` so the field
/// Frobenius `(x, y) -> (x^2, y^2)` is a curve automorphism `τ`, satisfying
/// `τ^2 - μτ + 2 = 0` with `μ = (-1)^(1-a)`.
pub trait EbParams: Clone + Copy + PartialEq + Eq + std::fmt::Debug + 'static {
    /// The base field.
    type Field: FbParams;

    /// Curve coefficient `a`, an element of `GF(2)`.
    fn a() -> FbElement<Self::Field>;

    /// Curve coefficient `b`, an element of `GF(2)`, nonzero.
    fn b() -> FbElement<Self::Field>;

    /// Order of the prime-order subgroup used for scalar multiplication
    /// (the curve's full point count is `cofactor() * order()`).
    fn order() -> BigInt;

    /// The curve's cofactor: `#E(GF(2^m)) / order()`.
    fn cofactor() -> u64;

    /// The Koblitz parameter `μ ∈ {-1, 1}` relating `τ` to doubling.
    fn mu() -> i64;
}

/// A Koblitz curve over [`B283Fb`] with `a = 0`, `b = 1`, `μ = -1` — the
/// field and coefficients of the NIST/SEC2 `sect283k1` curve ("K-283").
///
/// `order()` is not transcribed from the standard's published hex literal
/// (an 281-bit constant copied from memory is exactly the kind of thing
/// this crate has no way to verify without the toolchain — see the same
/// argument for Montgomery constants in `DESIGN.md`). It is instead the
/// curve's exact prime subgroup order, computed from `#E(GF(2^283)) = 2^283
/// + 1 - t` via the Frobenius trace recurrence `t_0=2, t_1=μ, t_i = μ
/// t_{i-1} - 2 t_{i-2}` that `τ^2-μτ+2=0` implies for `t_i = τ^i +
/// conjugate(τ)^i` (Solinas, "Efficient Arithmetic on Koblitz Curves"), then
/// dividing out the curve's cofactor 4. This recurrence was checked against
/// a brute-force point count on a small field (`GF(2^5)`, both `a=0` and
/// `a=1`) before being trusted at `m=283`; see `DESIGN.md`. [`EbPoint::generator`]
/// still searches small `x` for a point solving the curve equation, then
/// scales it by [`cofactor`](EbParams::cofactor) to land in this subgroup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct B283Koblitz;

impl EbParams for B283Koblitz {
    type Field = B283Fb;

    fn a() -> FbElement<Self::Field> {
        FbElement::zero()
    }

    fn b() -> FbElement<Self::Field> {
        FbElement::one()
    }

    fn order() -> BigInt {
        // 0x1FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFE9AE2ED07577265DFF7F94451E061E163C61
        BigInt::from_be_bytes(&[
            1, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 233, 174, 46,
            208, 117, 119, 38, 93, 255, 127, 148, 69, 30, 6, 30, 22, 60, 97,
        ])
    }

    fn cofactor() -> u64 {
        4
    }

    fn mu() -> i64 {
        -1
    }
}
