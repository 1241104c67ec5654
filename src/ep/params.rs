//! Prime-curve parameter sets (spec §4.4, §4 concrete instantiations).

use crate::bn::BigInt;
use crate::fp::params::{FpParams, P256Fp, Secp256k1Fp};
use crate::fp::FpElement;

/// A short-Weierstrass curve `y^2 = x^3 + a*x + b` over `GF(p)`.
pub trait CurveParams: Clone + Copy + PartialEq + Eq + std::fmt::Debug + 'static {
    /// The base field.
    type Field: FpParams;

    /// Curve coefficient `a`.
    fn a() -> FpElement<Self::Field>;

    /// Curve coefficient `b`.
    fn b() -> FpElement<Self::Field>;

    /// Affine x-coordinate of the conventional base point.
    fn generator_x() -> BigInt;

    /// Affine y-coordinate of the conventional base point.
    fn generator_y() -> BigInt;

    /// Order of the cyclic subgroup generated by the base point.
    fn order() -> BigInt;
}

/// NIST P-256: `y^2 = x^3 - 3x + b` over [`P256Fp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NistP256;

impl CurveParams for NistP256 {
    type Field = P256Fp;

    fn a() -> FpElement<Self::Field> {
        FpElement::from_bigint(&BigInt::from_u64(3)).neg()
    }

    fn b() -> FpElement<Self::Field> {
        // b = 0x5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604d
        FpElement::from_bigint(&BigInt::from_be_bytes(&[
            0x5a, 0xc6, 0x35, 0xd8, 0xaa, 0x3a, 0x93, 0xe7, 0xb3, 0xeb, 0xbd, 0x55, 0x76, 0x98,
            0x86, 0xbc, 0x65, 0x1d, 0x06, 0xb0, 0xcc, 0x53, 0xb0, 0xf6, 0x3b, 0xce, 0x3c, 0x3e,
            0x27, 0xd2, 0x60, 0x4b,
        ]))
    }

    fn generator_x() -> BigInt {
        BigInt::from_be_bytes(&[
            0x6b, 0x17, 0xd1, 0xf2, 0xe1, 0x2c, 0x42, 0x47, 0xf8, 0xbc, 0xe6, 0xe5, 0x63, 0xa4,
            0x40, 0xf2, 0x77, 0x03, 0x7d, 0x81, 0x2d, 0xeb, 0x33, 0xa0, 0xf4, 0xa1, 0x39, 0x45,
            0xd8, 0x98, 0xc2, 0x96,
        ])
    }

    fn generator_y() -> BigInt {
        BigInt::from_be_bytes(&[
            0x4f, 0xe3, 0x42, 0xe2, 0xfe, 0x1a, 0x7f, 0x9b, 0x8e, 0xe7, 0xeb, 0x4a, 0x7c, 0x0f,
            0x9e, 0x16, 0x2b, 0xce, 0x33, 0x57, 0x6b, 0x31, 0x5e, 0xce, 0xcb, 0xb6, 0x40, 0x68,
            0x37, 0xbf, 0x51, 0xf5,
        ])
    }

    fn order() -> BigInt {
        BigInt::from_be_bytes(&[
            0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xbc, 0xe6, 0xfa, 0xad, 0xa7, 0x17, 0x9e, 0x84, 0xf3, 0xb9, 0xca, 0xc2,
            0xfc, 0x63, 0x25, 0x51,
        ])
    }
}

/// secp256k1: `y^2 = x^3 + 7` over [`Secp256k1Fp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1;

impl CurveParams for Secp256k1 {
    type Field = Secp256k1Fp;

    fn a() -> FpElement<Self::Field> {
        FpElement::zero()
    }

    fn b() -> FpElement<Self::Field> {
        FpElement::from_bigint(&BigInt::from_u64(7))
    }

    fn generator_x() -> BigInt {
        BigInt::from_be_bytes(&[
            0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62, 0x95, 0xce, 0x87,
            0x0b, 0x07, 0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9, 0x59, 0xf2, 0x81, 0x5b,
            0x16, 0xf8, 0x17, 0x98,
        ])
    }

    fn generator_y() -> BigInt {
        BigInt::from_be_bytes(&[
            0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65, 0x5d, 0xa4, 0xfb, 0xfc, 0x0e, 0x11,
            0x08, 0xa8, 0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19, 0x9c, 0x47, 0xd0, 0x8f,
            0xfb, 0x10, 0xd4, 0xb8,
        ])
    }

    fn order() -> BigInt {
        BigInt::from_be_bytes(&[
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c,
            0xd0, 0x36, 0x41, 0x41,
        ])
    }
}
