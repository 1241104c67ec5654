//! `pbc_core`: multi-precision, prime-field, binary-field and elliptic-curve
//! arithmetic for pairing-based and EC cryptography.
//!
//! The crate is layered bottom-up, each module depending only on the ones
//! above it in this list:
//!
//! - [`dv`] — fixed-width digit storage (`Digit`, `DigitVec`).
//! - [`bn`] — arbitrary-precision integers and scalar recoding.
//! - [`fp`] — prime-field elements (Montgomery/sparse reduction).
//! - [`fb`] — binary-field elements (`GF(2^m)`, five inversion strategies).
//! - [`ep`] — elliptic curves over prime fields, Jacobian coordinates.
//! - [`eb`] — elliptic curves over binary fields, Koblitz `τ`-NAF support.
//! - [`context`] — task-local scratch-storage arena.
//! - [`table`] — cacheable precomputation tables for repeated scalar mult.
//!
//! Every fallible operation returns [`errors::MathError`]; see that module
//! for the full error catalog.

pub mod bn;
pub mod context;
pub mod dv;
pub mod eb;
pub mod ep;
pub mod errors;
pub mod fb;
pub mod fp;
pub mod table;

/// Re-exports of the types most callers need, so `use pbc_core::prelude::*;`
/// covers the common case without reaching into every submodule.
pub mod prelude {
    pub use crate::bn::{BigInt, Sign};
    pub use crate::context::ScratchArena;
    pub use crate::eb::params::{B283Koblitz, EbParams};
    pub use crate::eb::EbPoint;
    pub use crate::ep::params::{CurveParams, NistP256, Secp256k1};
    pub use crate::ep::CurvePoint;
    pub use crate::errors::MathError;
    pub use crate::fb::params::{B283Fb, FbParams};
    pub use crate::fb::FbElement;
    pub use crate::fp::params::{FpParams, P256Fp, Secp256k1Fp};
    pub use crate::fp::FpElement;
    pub use crate::table::PrecompTable;
}
