//! Binary-field parameter sets (spec §4.3, §4 concrete instantiations).

/// Degree and reduction polynomial of one `GF(2^m)` field.
pub trait FbParams: Clone + Copy + PartialEq + Eq + std::fmt::Debug + 'static {
    /// Field degree `m`.
    const DEGREE: usize;

    /// Number of [`Digit`]s needed to hold a polynomial of degree `< m`.
    const DIGITS: usize;

    /// Exponents of the irreducible reduction polynomial, excluding the
    /// leading `z^DEGREE` term, e.g. `&[12, 7, 5, 0]` for
    /// `z^283 + z^12 + z^7 + z^5 + 1`.
    fn reduction_terms() -> &'static [usize];
}

/// NIST B-283: `GF(2^283)`, reduction polynomial
/// `z^283 + z^12 + z^7 + z^5 + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct B283Fb;

impl FbParams for B283Fb {
    const DEGREE: usize = 283;
    const DIGITS: usize = (283 + crate::dv::DIGIT_BITS as usize - 1) / crate::dv::DIGIT_BITS as usize;

    fn reduction_terms() -> &'static [usize] {
        &[12, 7, 5, 0]
    }
}
