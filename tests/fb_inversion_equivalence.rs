//! Checks that every `fb::inversion` strategy agrees on the same inputs,
//! the equivalence spec §8 requires across interchangeable variants.

use pbc_core::fb::inversion::{almost_inverse, binary, extended_euclidean, fermat, itoh_tsuji};
use pbc_core::fb::params::B283Fb;
use pbc_core::fb::FbElement;

fn sample_elements() -> Vec<FbElement<B283Fb>> {
    vec![
        FbElement::from_bits(vec![1]),
        FbElement::from_bits(vec![0b1011]),
        FbElement::from_bits(vec![0x1234_5678_9abc_def0]),
        FbElement::from_bits(vec![u64::MAX, 0x7]),
    ]
}

#[test]
fn all_five_variants_agree_on_every_sample() {
    for a in sample_elements() {
        let reference = extended_euclidean(&a).unwrap();
        assert_eq!(fermat(&a).unwrap(), reference);
        assert_eq!(itoh_tsuji(&a).unwrap(), reference);
        assert_eq!(binary(&a).unwrap(), reference);
        assert_eq!(almost_inverse(&a).unwrap(), reference);
    }
}

#[test]
fn every_variant_round_trips_via_multiplication() {
    for a in sample_elements() {
        for inverse in [
            fermat(&a).unwrap(),
            itoh_tsuji(&a).unwrap(),
            extended_euclidean(&a).unwrap(),
            binary(&a).unwrap(),
            almost_inverse(&a).unwrap(),
        ] {
            assert_eq!(a.mul(&inverse), FbElement::one());
        }
    }
}

#[test]
fn gf_2_283_a_equals_z_plus_one_five_variant_inversion_agrees() {
    // a = z + 1, i.e. bits 0 and 1 set.
    let a = FbElement::<B283Fb>::from_bits(vec![0b11]);
    let reference = extended_euclidean(&a).unwrap();
    assert_eq!(fermat(&a).unwrap(), reference);
    assert_eq!(itoh_tsuji(&a).unwrap(), reference);
    assert_eq!(binary(&a).unwrap(), reference);
    assert_eq!(almost_inverse(&a).unwrap(), reference);
    assert_eq!(a.mul(&reference), FbElement::one());
}
