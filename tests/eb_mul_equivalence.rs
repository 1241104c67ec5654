//! Checks that the binary-curve scalar-multiplication strategies in
//! `eb::mul` agree, and exercises the boundary cases spec §8 calls out for
//! the binary-curve layer.

use pbc_core::bn::BigInt;
use pbc_core::eb::mul::{mul_basic, mul_halving, mul_ladder, mul_tau_naf};
use pbc_core::eb::params::B283Koblitz;
use pbc_core::eb::EbPoint;

#[test]
fn basic_ladder_and_tau_naf_agree_on_several_scalars() {
    let g = EbPoint::<B283Koblitz>::generator();
    for k in [1u64, 2, 3, 41, 999, 65535] {
        let scalar = BigInt::from_u64(k);
        let expected = mul_basic(&scalar, &g);
        assert_eq!(mul_ladder(&scalar, &g), expected);
        assert_eq!(mul_tau_naf(&scalar, &g), expected);
    }
}

#[test]
fn halving_based_multiplication_matches_basic_when_defined() {
    let g = EbPoint::<B283Koblitz>::generator();
    let k = BigInt::from_u64(12345);
    if let Ok(result) = mul_halving(&k, &g) {
        assert_eq!(result, mul_basic(&k, &g));
    }
}

#[test]
fn boundary_scalars_zero_and_one() {
    let g = EbPoint::<B283Koblitz>::generator();
    assert!(mul_basic(&BigInt::zero(), &g).is_infinity());
    assert_eq!(mul_basic(&BigInt::one(), &g), g);
}

#[test]
fn doubling_the_point_at_infinity_stays_infinity() {
    assert!(EbPoint::<B283Koblitz>::infinity().double().is_infinity());
}
