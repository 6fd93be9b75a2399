//! High-level API for the algorithm toolkit.
//!
//! ## Purpose
//!
//! This module is the user-facing surface of the crate. It re-exports
//! the sequence algorithms and byte primitives, and provides the fluent
//! [`Bisection`] builder for configuring the root-finder.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters.
//! * **Validated**: Parameters are validated when `build()` is called;
//!   interval and bracket are validated at solve time.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`Bisection`] builder via `Bisection::new()`.
//! 2. Chain configuration methods (`.tolerance()`, `.max_iterations()`).
//! 3. Call `.build()` to obtain a validated [`BisectionSolver`].
//! 4. Call `.solve(a, b, f)` as many times as needed.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::bisection::bisect;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::bisection::BisectionFit;
pub use crate::algorithms::erased::{
    greater_f32, greater_f64, greater_i32, greater_i64, sort_erased,
};
pub use crate::algorithms::sort::bubble_sort;
pub use crate::algorithms::traversal::{fill_with, for_each};
pub use crate::primitives::bytes::{copy_region, swap_regions};
pub use crate::primitives::errors::UnialgError;
pub use crate::primitives::grid::Grid;

// ============================================================================
// Defaults
// ============================================================================

/// Default convergence tolerance.
const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Default iteration cap.
///
/// Each iteration halves the bracket, so 128 halvings exceed the
/// precision of any supported float type for realistic intervals.
const DEFAULT_MAX_ITERATIONS: usize = 128;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a bisection solver.
///
/// ```rust
/// use unialg::prelude::*;
///
/// let solver = Bisection::new()
///     .tolerance(1e-5)
///     .max_iterations(200)
///     .build()?;
///
/// let fit = solver.solve(1.0, 2.0, |x: f64| x * x - 2.0)?;
/// assert!(fit.residual.abs() <= 1e-5);
/// # Result::<(), UnialgError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct Bisection<T> {
    /// Convergence tolerance on `|f(c)|`.
    pub tolerance: Option<T>,

    /// Cap on bracket-halving iterations.
    pub max_iterations: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for Bisection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Bisection<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tolerance: None,
            max_iterations: None,
            duplicate_param: None,
        }
    }

    /// Set the convergence tolerance on `|f(c)|`.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the iteration cap (must be in `[1, 1000]`).
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Validate the configuration and produce a solver.
    ///
    /// # Errors
    ///
    /// * [`UnialgError::DuplicateParameter`] if a parameter was set more
    ///   than once.
    /// * [`UnialgError::InvalidTolerance`] if the tolerance is not
    ///   positive and finite.
    /// * [`UnialgError::InvalidIterations`] if the cap is outside
    ///   `[1, 1000]`.
    pub fn build(self) -> Result<BisectionSolver<T>, UnialgError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let tolerance = self
            .tolerance
            .unwrap_or_else(|| T::from(DEFAULT_TOLERANCE).unwrap_or_else(T::epsilon));
        let max_iterations = self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS);

        Validator::validate_tolerance(tolerance)?;
        Validator::validate_max_iterations(max_iterations)?;

        Ok(BisectionSolver {
            tolerance,
            max_iterations,
        })
    }
}

// ============================================================================
// Solver
// ============================================================================

/// A validated, reusable bisection solver.
#[derive(Debug, Clone, Copy)]
pub struct BisectionSolver<T> {
    /// Convergence tolerance on `|f(c)|`.
    tolerance: T,

    /// Cap on bracket-halving iterations.
    max_iterations: usize,
}

impl<T: Float> BisectionSolver<T> {
    /// The tolerance this solver converges to.
    #[inline]
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// The iteration cap this solver enforces.
    #[inline]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Find an approximate root of `f` in `[a, b]`.
    ///
    /// Requires `a < b` with both bounds finite, and `f(a)`, `f(b)` of
    /// opposite signs.
    ///
    /// # Errors
    ///
    /// * [`UnialgError::InvalidInterval`] if the bounds are not finite
    ///   with `a < b`.
    /// * [`UnialgError::InvalidBracket`] if `f` does not change sign
    ///   over the interval.
    /// * [`UnialgError::NoConvergence`] if the iteration cap is reached
    ///   first.
    pub fn solve<F>(&self, a: T, b: T, f: F) -> Result<BisectionFit<T>, UnialgError>
    where
        F: Fn(T) -> T,
    {
        Validator::validate_interval(a, b)?;
        bisect(a, b, self.tolerance, self.max_iterations, f)
    }
}
