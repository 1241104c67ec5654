//! Scalar-multiplication strategies over prime curves (spec §4.4).
//!
//! Every variant here computes the same `k*P` (or, for the simultaneous
//! variants, `k*P + l*Q`); `tests/ep_mul_equivalence.rs` checks them against
//! each other. Grounded on the teacher crate's
//! `point.rs::from_private_scalar_windowed` windowed-table approach,
//! generalized from its fixed secp256k1-only table to any [`CurveParams`].

use super::params::CurveParams;
use super::CurvePoint;
use crate::bn::recoding::{jsf, naf};
use crate::bn::BigInt;

/// Precomputes the odd multiples `1*P, 3*P, 5*P, ..., (2^(w-1)-1)*P` needed
/// by the windowed-NAF variants.
fn odd_multiples<C: CurveParams>(point: &CurvePoint<C>, w: u32) -> Vec<CurvePoint<C>> {
    let count = 1usize << (w - 2);
    let double = point.double();
    let mut table = Vec::with_capacity(count);
    table.push(point.clone());
    for i in 1..count {
        table.push(table[i - 1].add(&double));
    }
    table
}

fn table_lookup<C: CurveParams>(table: &[CurvePoint<C>], digit: i64) -> CurvePoint<C> {
    debug_assert!(digit != 0 && digit % 2 != 0);
    let index = (digit.unsigned_abs() as usize - 1) / 2;
    if digit > 0 {
        table[index].clone()
    } else {
        table[index].neg()
    }
}

/// Basic left-to-right double-and-add, scanning `k`'s bits MSB first.
#[must_use]
pub fn mul_basic<C: CurveParams>(k: &BigInt, point: &CurvePoint<C>) -> CurvePoint<C> {
    let mut result = CurvePoint::infinity();
    for i in (0..k.bit_length()).rev() {
        result = result.double();
        if k.get_bit(i) {
            result = result.add(point);
        }
    }
    result
}

/// Left-to-right windowed-NAF scalar multiplication with a precomputed table
/// of odd multiples.
#[must_use]
pub fn mul_wnaf<C: CurveParams>(k: &BigInt, point: &CurvePoint<C>, w: u32) -> CurvePoint<C> {
    let digits = naf(k, w);
    let table = odd_multiples(point, w);
    let mut result = CurvePoint::infinity();
    for &digit in digits.iter().rev() {
        result = result.double();
        if digit != 0 {
            result = result.add(&table_lookup(&table, digit));
        }
    }
    result
}

/// Right-to-left windowed-NAF scalar multiplication: accumulates into the
/// result while repeatedly doubling the base point instead of the result.
#[must_use]
pub fn mul_wnaf_right_to_left<C: CurveParams>(k: &BigInt, point: &CurvePoint<C>, w: u32) -> CurvePoint<C> {
    let digits = naf(k, w);
    let radix = 1i64 << (w - 1);
    let half = radix / 2;
    let mut accumulators: Vec<CurvePoint<C>> = (0..half).map(|_| CurvePoint::infinity()).collect();
    let mut running = point.clone();
    for &digit in &digits {
        if digit != 0 {
            let index = (digit.unsigned_abs() as usize - 1) / 2;
            accumulators[index] = if digit > 0 {
                accumulators[index].add(&running)
            } else {
                accumulators[index].add(&running.neg())
            };
        }
        running = running.double();
    }
    // Combine buckets: total = sum_i accumulators[i] * (2*i+1). The bucket
    // count is small (2^(w-2)), so a direct weighted sum is simplest.
    let mut result = CurvePoint::infinity();
    for (index, accumulator) in accumulators.iter().enumerate() {
        let weight = BigInt::from_u64((2 * index + 1) as u64);
        result = result.add(&mul_basic(&weight, accumulator));
    }
    result
}

/// Simultaneous multiplication `k*P + l*Q` using a 4-entry table
/// `{O, P, Q, P+Q}` indexed by the simultaneous bit pair of `k` and `l`
/// (Shamir's trick — the basic and "trick" variants coincide for this
/// table shape).
#[must_use]
pub fn mul_simultaneous<C: CurveParams>(
    k: &BigInt,
    point: &CurvePoint<C>,
    l: &BigInt,
    other: &CurvePoint<C>,
) -> CurvePoint<C> {
    let sum = point.add(other);
    let bits = k.bit_length().max(l.bit_length());
    let mut result = CurvePoint::infinity();
    for i in (0..bits).rev() {
        result = result.double();
        match (k.get_bit(i), l.get_bit(i)) {
            (false, false) => {}
            (true, false) => result = result.add(point),
            (false, true) => result = result.add(other),
            (true, true) => result = result.add(&sum),
        }
    }
    result
}

/// Interleaved simultaneous multiplication: independent windowed-NAF
/// recodings of `k` and `l`, sharing one doubling pass.
#[must_use]
pub fn mul_interleaved<C: CurveParams>(
    k: &BigInt,
    point: &CurvePoint<C>,
    l: &BigInt,
    other: &CurvePoint<C>,
    w: u32,
) -> CurvePoint<C> {
    let mut digits_k = naf(k, w);
    let mut digits_l = naf(l, w);
    let len = digits_k.len().max(digits_l.len());
    digits_k.resize(len, 0);
    digits_l.resize(len, 0);
    let table_k = odd_multiples(point, w);
    let table_l = odd_multiples(other, w);
    let mut result = CurvePoint::infinity();
    for i in (0..len).rev() {
        result = result.double();
        if digits_k[i] != 0 {
            result = result.add(&table_lookup(&table_k, digits_k[i]));
        }
        if digits_l[i] != 0 {
            result = result.add(&table_lookup(&table_l, digits_l[i]));
        }
    }
    result
}

/// Joint-sparse-form simultaneous multiplication: a single recoding pass
/// over `(k, l)` instead of two independent ones.
#[must_use]
pub fn mul_joint<C: CurveParams>(
    k: &BigInt,
    point: &CurvePoint<C>,
    l: &BigInt,
    other: &CurvePoint<C>,
) -> CurvePoint<C> {
    let (u, v) = jsf(k, l);
    let neg_point = point.neg();
    let neg_other = other.neg();
    let mut result = CurvePoint::infinity();
    for i in (0..u.len()).rev() {
        result = result.double();
        match u[i] {
            1 => result = result.add(point),
            -1 => result = result.add(&neg_point),
            _ => {}
        }
        match v[i] {
            1 => result = result.add(other),
            -1 => result = result.add(&neg_other),
            _ => {}
        }
    }
    result
}
