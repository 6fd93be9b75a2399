//! Parameter validation for the bisection solver.
//!
//! ## Purpose
//!
//! This module provides validation functions for solver configuration
//! and solve-time inputs: tolerance bounds, interval ordering, iteration
//! caps, and builder hygiene.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical
//!   constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not evaluate the target function or run the
//!   solve itself.
//! * This module does not provide automatic correction of invalid
//!   inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::UnialgError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for solver configuration and inputs.
///
/// Provides static methods returning `Result<(), UnialgError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the convergence tolerance.
    ///
    /// # Notes
    ///
    /// * A tolerance tighter than the scalar type's machine epsilon may
    ///   stagnate; that is a caller error surfaced at solve time as
    ///   `NoConvergence`, not rejected here.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), UnialgError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(UnialgError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the iteration cap.
    ///
    /// # Notes
    ///
    /// * At least 1 iteration is required for the solver to make
    ///   progress.
    /// * Maximum of 1000 iterations to prevent excessive computation;
    ///   each iteration halves the bracket, so 1000 is far beyond any
    ///   representable precision.
    pub fn validate_max_iterations(max_iterations: usize) -> Result<(), UnialgError> {
        const MAX_ITERATIONS: usize = 1000;
        if max_iterations == 0 || max_iterations > MAX_ITERATIONS {
            return Err(UnialgError::InvalidIterations(max_iterations));
        }
        Ok(())
    }

    // ========================================================================
    // Solve-Time Validation
    // ========================================================================

    /// Validate the search interval bounds.
    pub fn validate_interval<T: Float>(a: T, b: T) -> Result<(), UnialgError> {
        if !a.is_finite() || !b.is_finite() || a >= b {
            return Err(UnialgError::InvalidInterval {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Builder Hygiene
    // ========================================================================

    /// Validate that no parameters were set multiple times in the
    /// builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), UnialgError> {
        if let Some(parameter) = duplicate_param {
            return Err(UnialgError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
