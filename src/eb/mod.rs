//! Elliptic-curve layer over binary fields (spec §2 `eb`, §4.5, §4.6).
//!
//! `EbPoint<P>` stores López-Dahab projective coordinates `(X, Y, Z)`
//! representing the affine point `(X/Z, Y/Z^2)`, with `Z = 0` the point at
//! infinity — the same "let `Z` carry the infinity tag" shape as
//! `ep::CurvePoint`'s Jacobian coordinates, adapted to this field's `X ~ Z`,
//! `Y ~ Z^2` scaling. General addition and doubling round-trip through the
//! textbook HAC §3.19/3.20 affine formulas (verifiable by direct algebraic
//! substitution; the general two-unknown-Z projective addition formula is
//! not, so it is not used here — see `DESIGN.md`). `eb::mul`'s ladder needs
//! more than that: its inner loop runs entirely in `X`/`Z` coordinates using
//! the y-free differential doubling and addition identities for curves of
//! this shape (derived in `DESIGN.md`), so it never calls the general
//! affine-backed `add`/`double` and never inverts a field element until the
//! very last step.

pub mod mul;
pub mod params;

use crate::errors::MathError;
use crate::fb::inversion::fermat as fb_inverse;
use crate::fb::FbElement;
use params::EbParams;

/// A point on `y^2 + xy = x^3 + a*x^2 + b` over `GF(2^m)`, in López-Dahab
/// projective coordinates.
#[derive(Clone, Debug)]
pub struct EbPoint<P: EbParams> {
    x: FbElement<P::Field>,
    y: FbElement<P::Field>,
    z: FbElement<P::Field>,
}

impl<P: EbParams> EbPoint<P> {
    /// The point at infinity.
    #[must_use]
    pub fn infinity() -> Self {
        Self {
            x: FbElement::one(),
            y: FbElement::one(),
            z: FbElement::zero(),
        }
    }

    /// True when this is the point at infinity.
    #[must_use]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    pub(crate) fn from_affine_unchecked(x: FbElement<P::Field>, y: FbElement<P::Field>) -> Self {
        Self { x, y, z: FbElement::one() }
    }

    /// Builds a point from affine coordinates, checking it lies on the curve.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidInput`] if `(x, y)` does not satisfy the
    /// curve equation.
    pub fn from_affine(x: FbElement<P::Field>, y: FbElement<P::Field>) -> Result<Self, MathError> {
        let point = Self::from_affine_unchecked(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(MathError::InvalidInput("point does not satisfy the curve equation"))
        }
    }

    /// Converts to affine `(x, y)` coordinates.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidInput`] if called on the point at
    /// infinity (which has no affine representation).
    pub fn to_affine(&self) -> Result<(FbElement<P::Field>, FbElement<P::Field>), MathError> {
        if self.is_infinity() {
            return Err(MathError::InvalidInput("point at infinity has no affine form"));
        }
        let z_inv = fb_inverse(&self.z).expect("checked nonzero above");
        let x = self.x.mul(&z_inv);
        let y = self.y.mul(&z_inv.sqr());
        Ok((x, y))
    }

    /// True when the point (including infinity) lies on the curve, checked
    /// in homogeneous form `Y^2 + XYZ = X^3*Z + a*X^2*Z^2 + b*Z^4` so no
    /// inversion is needed.
    #[must_use]
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity() {
            return true;
        }
        let z2 = self.z.sqr();
        let lhs = self.y.sqr().add(&self.x.mul(&self.y).mul(&self.z));
        let rhs = self
            .x
            .sqr()
            .mul(&self.x)
            .mul(&self.z)
            .add(&P::a().mul(&self.x.sqr()).mul(&z2))
            .add(&P::b().mul(&z2.sqr()));
        lhs == rhs
    }

    /// A base point, found by searching small `x` for one that solves the
    /// curve equation `z^2 + z = x + a + b*x^-2` (`z = y/x`), which is
    /// solvable by half-trace whenever `Tr(x + a + b*x^-2) = 0`, then scaled
    /// by the curve's cofactor so the result generates the prime-order
    /// subgroup `order()` describes (see `DESIGN.md`).
    #[must_use]
    pub fn generator() -> Self {
        let a = P::a();
        let b = P::b();
        for candidate in 1..1024u64 {
            let x = FbElement::from_bits(vec![candidate as crate::dv::Digit]);
            if x.is_zero() {
                continue;
            }
            let Ok(x_inv) = fb_inverse(&x) else {
                continue;
            };
            let rhs = x.add(&a).add(&b.mul(&x_inv.sqr()));
            if rhs.trace() {
                continue;
            }
            let z = rhs.half_trace();
            let y = z.mul(&x);
            let point = Self::from_affine_unchecked(x, y);
            if !point.is_on_curve() {
                continue;
            }
            let scaled = mul::mul_basic(&crate::bn::BigInt::from_u64(P::cofactor()), &point);
            if !scaled.is_infinity() {
                return scaled;
            }
        }
        panic!("no small-x generator found for this curve's parameters");
    }

    /// `-self`: for curves of this form, `-(x, y) = (x, x + y)`, i.e.
    /// `(X, Y, Z) -> (X, X*Z + Y, Z)` projectively.
    #[must_use]
    pub fn neg(&self) -> Self {
        if self.is_infinity() {
            return self.clone();
        }
        Self {
            x: self.x.clone(),
            y: self.x.mul(&self.z).add(&self.y),
            z: self.z.clone(),
        }
    }

    /// `(x, y) -> (x^2, y^2)`, the field Frobenius, applied directly in
    /// projective form: squaring is a field automorphism, so it commutes
    /// with the `X/Z`, `Y/Z^2` scaling and needs no inversion. Valid as a
    /// curve automorphism only when `a, b` lie in `GF(2)` (Koblitz curves).
    #[must_use]
    pub(crate) fn frobenius(&self) -> Self {
        Self {
            x: self.x.sqr(),
            y: self.y.sqr(),
            z: self.z.sqr(),
        }
    }

    /// Point doubling (HAC Algorithm 3.20, round-tripped through affine
    /// coordinates — see the module doc comment for why the general
    /// projective doubling formula isn't used here instead).
    #[must_use]
    pub fn double(&self) -> Self {
        if self.is_infinity() {
            return Self::infinity();
        }
        let (x1, y1) = self.to_affine().expect("checked non-infinity above");
        if x1.is_zero() {
            return Self::infinity();
        }
        let x_inv = fb_inverse(&x1).expect("checked nonzero above");
        let lambda = x1.add(&y1.mul(&x_inv));
        let x3 = lambda.sqr().add(&lambda).add(&P::a());
        let y3 = x1.sqr().add(&lambda.add(&FbElement::one()).mul(&x3));
        Self::from_affine_unchecked(x3, y3)
    }

    /// General point addition (HAC Algorithm 3.19, round-tripped through
    /// affine coordinates).
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if self.is_infinity() {
            return other.clone();
        }
        if other.is_infinity() {
            return self.clone();
        }
        let (x1, y1) = self.to_affine().expect("checked non-infinity above");
        let (x2, y2) = other.to_affine().expect("checked non-infinity above");
        if x1 == x2 {
            return if y1 == y2 { self.double() } else { Self::infinity() };
        }
        let denom = x1.add(&x2);
        let denom_inv = fb_inverse(&denom).expect("checked distinct x above");
        let lambda = y1.add(&y2).mul(&denom_inv);
        let x3 = lambda.sqr().add(&lambda).add(&x1).add(&x2).add(&P::a());
        let y3 = lambda.mul(&x1.add(&x3)).add(&x3).add(&y1);
        Self::from_affine_unchecked(x3, y3)
    }

    /// Point halving: the unique `R` with `2R = self`, when it exists.
    ///
    /// # Errors
    /// Returns [`MathError::NoValidConfig`] when `Tr(x + a) != 0`, i.e. no
    /// halved point exists for this coordinate.
    pub fn half(&self) -> Result<Self, MathError> {
        if self.is_infinity() {
            return Ok(Self::infinity());
        }
        let (x, y) = self.to_affine().expect("checked non-infinity above");
        let candidate = x.add(&P::a());
        if candidate.trace() {
            return Err(MathError::NoValidConfig("point has no half in this group"));
        }
        let lambda = candidate.half_trace();
        let x_r_sq = y.add(&lambda.add(&FbElement::one()).mul(&x));
        let x_r = x_r_sq.sqrt();
        let y_r = x_r.mul(&x_r.add(&lambda));
        Ok(Self::from_affine_unchecked(x_r, y_r))
    }

}

impl<P: EbParams> PartialEq for EbPoint<P> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_infinity(), other.is_infinity()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            _ => {}
        }
        let lhs_x = self.x.mul(&other.z);
        let rhs_x = other.x.mul(&self.z);
        if lhs_x != rhs_x {
            return false;
        }
        let lhs_y = self.y.mul(&other.z.sqr());
        let rhs_y = other.y.mul(&self.z.sqr());
        lhs_y == rhs_y
    }
}
impl<P: EbParams> Eq for EbPoint<P> {}
