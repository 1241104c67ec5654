//! Elliptic-curve layer over prime fields (spec §2 `ep`, §4.4).
//!
//! `CurvePoint<C>` stores Jacobian coordinates `(X, Y, Z)` representing the
//! affine point `(X/Z^2, Y/Z^3)`, with `Z = 0` the point at infinity — the
//! "tagged-variant point representation" design note from spec §9, realized
//! by letting `Z` itself carry the tag instead of a separate enum, matching
//! the teacher crate's `JacobianPoint` in `point.rs`.

pub mod mul;
pub mod params;

use crate::bn::BigInt;
use crate::errors::MathError;
use crate::fp::FpElement;
use params::CurveParams;
use tracing::instrument;

/// A point on a short-Weierstrass curve over `GF(p)`, in Jacobian
/// coordinates.
#[derive(Clone, Debug)]
pub struct CurvePoint<C: CurveParams> {
    x: FpElement<C::Field>,
    y: FpElement<C::Field>,
    z: FpElement<C::Field>,
}

impl<C: CurveParams> CurvePoint<C> {
    /// The point at infinity (the group identity).
    #[must_use]
    pub fn infinity() -> Self {
        Self {
            x: FpElement::one(),
            y: FpElement::one(),
            z: FpElement::zero(),
        }
    }

    /// True when this is the point at infinity.
    #[must_use]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Builds a point from affine coordinates, checking it lies on the curve.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidInput`] if `(x, y)` does not satisfy the
    /// curve equation.
    pub fn from_affine(x: &BigInt, y: &BigInt) -> Result<Self, MathError> {
        let point = Self {
            x: FpElement::from_bigint(x),
            y: FpElement::from_bigint(y),
            z: FpElement::one(),
        };
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(MathError::InvalidInput("point does not satisfy the curve equation"))
        }
    }

    /// The conventional base point for this curve.
    #[must_use]
    pub fn generator() -> Self {
        Self::from_affine(&C::generator_x(), &C::generator_y())
            .expect("curve parameters must describe a point on the curve")
    }

    /// Converts back to affine coordinates.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidInput`] if called on the point at
    /// infinity (which has no affine representation).
    pub fn to_affine(&self) -> Result<(BigInt, BigInt), MathError> {
        if self.is_infinity() {
            return Err(MathError::InvalidInput("point at infinity has no affine form"));
        }
        let z_inv = self.z.inv()?;
        let z_inv_sqr = z_inv.sqr();
        let z_inv_cub = z_inv_sqr.mul(&z_inv);
        let x = self.x.mul(&z_inv_sqr);
        let y = self.y.mul(&z_inv_cub);
        Ok((x.to_bigint(), y.to_bigint()))
    }

    /// True when the point (including infinity) lies on the curve.
    #[must_use]
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity() {
            return true;
        }
        // Homogeneous form: Y^2 = X^3 + a*X*Z^4 + b*Z^6.
        let z2 = self.z.sqr();
        let z4 = z2.sqr();
        let z6 = z4.mul(&z2);
        let lhs = self.y.sqr();
        let rhs = self
            .x
            .sqr()
            .mul(&self.x)
            .add(&C::a().mul(&self.x).mul(&z4))
            .add(&C::b().mul(&z6));
        lhs == rhs
    }

    /// `-self` (negating the affine y-coordinate).
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            x: self.x.clone(),
            y: self.y.neg(),
            z: self.z.clone(),
        }
    }

    /// Point doubling, via the generic (any-`a`) Jacobian doubling formula.
    #[instrument(level = "trace", skip_all)]
    #[must_use]
    pub fn double(&self) -> Self {
        if self.is_infinity() || self.y.is_zero() {
            return Self::infinity();
        }
        let xx = self.x.sqr();
        let yy = self.y.sqr();
        let yyyy = yy.sqr();
        let zz = self.z.sqr();
        let s = self.x.mul(&yy).dbl().dbl();
        let m = xx.dbl().add(&xx).add(&C::a().mul(&zz.sqr()));
        let x3 = m.sqr().sub(&s.dbl());
        let y3 = m.mul(&s.sub(&x3)).sub(&yyyy.dbl().dbl().dbl());
        let z3 = self.y.mul(&self.z).dbl();
        Self { x: x3, y: y3, z: z3 }
    }

    /// General Jacobian point addition.
    #[instrument(level = "trace", skip_all)]
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if self.is_infinity() {
            return other.clone();
        }
        if other.is_infinity() {
            return self.clone();
        }
        let z1z1 = self.z.sqr();
        let z2z2 = other.z.sqr();
        let u1 = self.x.mul(&z2z2);
        let u2 = other.x.mul(&z1z1);
        let s1 = self.y.mul(&other.z).mul(&z2z2);
        let s2 = other.y.mul(&self.z).mul(&z1z1);
        if u1 == u2 {
            return if s1 == s2 { self.double() } else { Self::infinity() };
        }
        let h = u2.sub(&u1);
        let r = s2.sub(&s1);
        let hh = h.sqr();
        let hhh = hh.mul(&h);
        let v = u1.mul(&hh);
        let x3 = r.sqr().sub(&hhh).sub(&v.dbl());
        let y3 = r.mul(&v.sub(&x3)).sub(&s1.mul(&hhh));
        let z3 = self.z.mul(&other.z).mul(&h);
        Self { x: x3, y: y3, z: z3 }
    }
}

impl<C: CurveParams> PartialEq for CurvePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_infinity(), other.is_infinity()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            _ => {}
        }
        let z1z1 = self.z.sqr();
        let z2z2 = other.z.sqr();
        let lhs_x = self.x.mul(&z2z2);
        let rhs_x = other.x.mul(&z1z1);
        if lhs_x != rhs_x {
            return false;
        }
        let lhs_y = self.y.mul(&other.z).mul(&z2z2);
        let rhs_y = other.y.mul(&self.z).mul(&z1z1);
        lhs_y == rhs_y
    }
}
impl<C: CurveParams> Eq for CurvePoint<C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use params::{NistP256, Secp256k1};

    #[test]
    fn generator_is_on_curve() {
        assert!(CurvePoint::<NistP256>::generator().is_on_curve());
        assert!(CurvePoint::<Secp256k1>::generator().is_on_curve());
    }

    #[test]
    fn doubling_matches_self_addition() {
        let g = CurvePoint::<Secp256k1>::generator();
        assert_eq!(g.double(), g.add(&g));
    }

    #[test]
    fn adding_infinity_is_identity() {
        let g = CurvePoint::<NistP256>::generator();
        assert_eq!(g.add(&CurvePoint::infinity()), g);
    }

    #[test]
    fn point_plus_its_negation_is_infinity() {
        let g = CurvePoint::<NistP256>::generator();
        assert!(g.add(&g.neg()).is_infinity());
    }

    #[test]
    fn affine_round_trip() {
        let g = CurvePoint::<Secp256k1>::generator();
        let (x, y) = g.to_affine().unwrap();
        let rebuilt = CurvePoint::<Secp256k1>::from_affine(&x, &y).unwrap();
        assert_eq!(g, rebuilt);
    }
}
