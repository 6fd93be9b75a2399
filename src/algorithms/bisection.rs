//! Bisection (bracket-halving) root-finder.
//!
//! ## Purpose
//!
//! This module provides the scalar root-finding algorithm: given an
//! interval bracketing a sign change of the target function, it halves
//! the bracket until the midpoint's function value falls within the
//! requested tolerance.
//!
//! ## Design notes
//!
//! * **Function value as parameter**: The target function is an ordinary
//!   callable parameter; the algorithm shares nothing else with the
//!   sequence algorithms beyond that idea.
//! * **Hardened outcomes**: A same-sign (or non-finite) bracket is
//!   detected up front and returned as
//!   [`InvalidBracket`](UnialgError::InvalidBracket), and every solve
//!   carries an iteration cap whose exhaustion is returned as
//!   [`NoConvergence`](UnialgError::NoConvergence), so a violated
//!   precondition can never loop forever or yield a meaningless
//!   midpoint.
//! * **Tolerance floor**: A tolerance below the scalar type's machine
//!   epsilon can stagnate; with the iteration cap this surfaces as
//!   `NoConvergence` instead of a hang.
//!
//! ## Invariants
//!
//! * The bracket `[a, b]` contains a sign change of `f` at every
//!   iteration.
//! * Each iteration halves the bracket width, so the iteration count is
//!   bounded by `log2((b - a) / target_width)`.
//!
//! ## Non-goals
//!
//! * This module does not validate tolerance, interval, or iteration-cap
//!   parameters; the engine validator does that before the algorithm
//!   runs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::UnialgError;

// ============================================================================
// Output
// ============================================================================

/// Result of a converged bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionFit<T> {
    /// Approximate root `c` with `|f(c)| <= tolerance`.
    pub root: T,

    /// Function value at the root, `f(root)`.
    pub residual: T,

    /// Number of bracket-halving iterations performed.
    pub iterations: usize,
}

// ============================================================================
// Bisection Algorithm
// ============================================================================

/// Find an approximate root of `f` in `[a, b]` by bracket halving.
///
/// Requires `f(a)` and `f(b)` to have opposite signs. Maintains the
/// sign-change bracket, replacing whichever endpoint shares the
/// midpoint's sign, until `|f(c)| <= tolerance` or the iteration cap is
/// exhausted.
///
/// An endpoint already within tolerance is returned immediately with
/// zero iterations.
///
/// # Errors
///
/// * [`UnialgError::InvalidBracket`] if `f(a)` and `f(b)` do not change
///   sign, or either is non-finite.
/// * [`UnialgError::NoConvergence`] if the cap is reached before the
///   residual falls within tolerance.
pub fn bisect<T, F>(
    a: T,
    b: T,
    tolerance: T,
    max_iterations: usize,
    f: F,
) -> Result<BisectionFit<T>, UnialgError>
where
    T: Float,
    F: Fn(T) -> T,
{
    let two = T::from(2.0).unwrap_or_else(|| T::one() + T::one());

    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let fb = f(b);

    // An endpoint may already satisfy the tolerance.
    if fa.abs() <= tolerance {
        return Ok(BisectionFit {
            root: a,
            residual: fa,
            iterations: 0,
        });
    }
    if fb.abs() <= tolerance {
        return Ok(BisectionFit {
            root: b,
            residual: fb,
            iterations: 0,
        });
    }

    // The bracket must straddle a sign change.
    if !fa.is_finite() || !fb.is_finite() || (fa < T::zero()) == (fb < T::zero()) {
        return Err(UnialgError::InvalidBracket {
            fa: fa.to_f64().unwrap_or(f64::NAN),
            fb: fb.to_f64().unwrap_or(f64::NAN),
        });
    }

    let mut c = (a + b) / two;
    let mut fc = f(c);
    let mut iterations = 0;

    // A NaN midpoint value keeps iterating toward the cap instead of
    // being reported as a root.
    while fc.is_nan() || fc.abs() > tolerance {
        if iterations == max_iterations {
            return Err(UnialgError::NoConvergence { iterations });
        }

        // Shrink toward the half that preserves the sign change.
        if (fc < T::zero()) != (fa < T::zero()) {
            b = c;
        } else {
            a = c;
            fa = fc;
        }

        c = (a + b) / two;
        fc = f(c);
        iterations += 1;
    }

    Ok(BisectionFit {
        root: c,
        residual: fc,
        iterations,
    })
}
