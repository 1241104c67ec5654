//! Catalog of failure kinds produced by the arithmetic core (spec §7).
//!
//! Every fallible public operation in `pbc_core` returns `Result<T, MathError>`.
//! No layer suppresses an error internally; it is always propagated to the
//! nearest caller boundary, releasing any scratch resources it holds on the
//! way out (see `context::ScratchArena`, whose `Drop` impl makes this
//! automatic rather than a manually-tracked cleanup path).

use thiserror::Error;

/// The five error kinds named in spec §7.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Scratch arena or heap exhausted while acquiring `requested` digits.
    #[error("out of memory acquiring {requested} digits of scratch storage")]
    OutOfMemory {
        /// Number of digits the failed allocation asked for.
        requested: usize,
    },

    /// A value was requested at a precision larger than the compiled-in
    /// maximum for the active digit width / field width.
    #[error("precision exceeded: requested {requested} bits, compiled maximum is {max}")]
    PrecisionExceeded {
        /// Bits requested by the caller.
        requested: usize,
        /// Compiled-in maximum bit width.
        max: usize,
    },

    /// Inversion of zero, division by zero, or a malformed point that fails
    /// an on-curve check.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A variant was invoked in a configuration that does not support it,
    /// e.g. LODAH on a supersingular binary curve.
    #[error("no valid configuration for this variant: {0}")]
    NoValidConfig(&'static str),

    /// Unreachable-state assertion; should never occur in correct code.
    #[error("internal invariant violated: {0}")]
    Internal(&'static str),
}

impl MathError {
    /// Shorthand for the most common `InvalidInput` case: inverting zero.
    #[must_use]
    pub fn division_by_zero() -> Self {
        MathError::InvalidInput("division by zero")
    }
}
