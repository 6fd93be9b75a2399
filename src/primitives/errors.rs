//! Error types for unialg operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur across the
//! crate: byte-region bounds violations, stride misalignment, solver
//! parameter problems, and bisection failure modes.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the relevant values (e.g., actual vs.
//!   required region lengths) for diagnosis.
//! * **No-std**: All variants are `String`-free so the enum works without
//!   `alloc`.
//! * **Trait Implementation**: Implements `Display` and
//!   `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Region errors**: A byte region is too small or its length is not
//!    a multiple of the element stride.
//! 2. **Parameter errors**: Invalid tolerance, interval, or iteration cap
//!    supplied to the bisection builder/solver.
//! 3. **Solver outcomes**: A bracket without a sign change, or an
//!    exhausted iteration budget, surfaced explicitly rather than looping
//!    or returning a meaningless midpoint.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same scale as the public API
//!   (parameters are reported as `f64`).
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for unialg operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnialgError {
    /// A byte region holds fewer bytes than the operation requires.
    RegionTooSmall {
        /// Number of bytes the region actually holds.
        got: usize,
        /// Number of bytes the operation needs.
        need: usize,
    },

    /// Element stride must be nonzero for an erased sequence.
    ZeroStride,

    /// Byte-region length is not a whole number of elements.
    MisalignedSequence {
        /// Length of the byte region.
        len: usize,
        /// Element stride in bytes.
        stride: usize,
    },

    /// Convergence tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// Interval bounds must be finite with `a < b`.
    InvalidInterval {
        /// Lower interval bound.
        a: f64,
        /// Upper interval bound.
        b: f64,
    },

    /// The target function does not change sign over the interval.
    InvalidBracket {
        /// Function value at the lower bound.
        fa: f64,
        /// Function value at the upper bound.
        fb: f64,
    },

    /// Iteration cap must be in `[1, 1000]`.
    InvalidIterations(usize),

    /// The solver exhausted its iteration budget before reaching the
    /// requested tolerance.
    NoConvergence {
        /// Number of iterations performed.
        iterations: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for UnialgError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::RegionTooSmall { got, need } => {
                write!(f, "Region too small: holds {got} bytes, need {need}")
            }
            Self::ZeroStride => write!(f, "Element stride must be nonzero"),
            Self::MisalignedSequence { len, stride } => {
                write!(
                    f,
                    "Misaligned sequence: {len} bytes is not a multiple of stride {stride}"
                )
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::InvalidInterval { a, b } => {
                write!(f, "Invalid interval: [{a}, {b}] (must be finite with a < b)")
            }
            Self::InvalidBracket { fa, fb } => {
                write!(
                    f,
                    "Invalid bracket: f(a)={fa} and f(b)={fb} do not change sign"
                )
            }
            Self::InvalidIterations(iter) => {
                write!(f, "Invalid max_iterations: {iter} (must be in [1, 1000])")
            }
            Self::NoConvergence { iterations } => {
                write!(f, "No convergence after {iterations} iterations")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for UnialgError {}
