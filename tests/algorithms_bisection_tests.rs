//! Tests for the bisection root-finder.
//!
//! These tests verify bracket-halving convergence and the hardened
//! failure modes:
//! - Convergence to known roots (√2, π/6)
//! - Residual guarantee `|f(c)| <= tolerance`
//! - Invalid-bracket and no-convergence outcomes
//! - Interval validation
//!
//! ## Test Organization
//!
//! 1. **Convergence Scenarios** - known analytic roots
//! 2. **Fit Contents** - root, residual, iteration count
//! 3. **Endpoint Shortcuts** - endpoints already within tolerance
//! 4. **Failure Modes** - invalid bracket, exhausted cap
//! 5. **Input Validation** - malformed intervals
//! 6. **Precision** - f32 solves

use approx::assert_relative_eq;
use core::f64::consts::PI;

use unialg::prelude::*;

// ============================================================================
// Convergence Scenario Tests
// ============================================================================

/// Test convergence to √2 for f(x) = x² - 2 on [1, 2].
#[test]
fn test_solve_sqrt_two() {
    let solver = Bisection::new().tolerance(1e-5).build().unwrap();

    let fit = solver.solve(1.0, 2.0, |x| x * x - 2.0).unwrap();

    assert!(
        (fit.root - 2.0_f64.sqrt()).abs() < 1e-5,
        "Root should approximate sqrt(2), got {}",
        fit.root
    );
}

/// Test convergence to π/6 for f(x) = sin(x) - 0.5 on [0, π/2].
#[test]
fn test_solve_sine_half() {
    let solver = Bisection::new().tolerance(1e-5).build().unwrap();

    let fit = solver.solve(0.0, PI / 2.0, |x: f64| x.sin() - 0.5).unwrap();

    assert_relative_eq!(fit.root, PI / 6.0, epsilon = 1e-4);
    assert!(
        (fit.root.sin() - 0.5).abs() <= 1e-5,
        "sin(root) should approximate 0.5"
    );
}

/// Test a root on the negative axis with a decreasing function.
#[test]
fn test_solve_decreasing_function() {
    let solver = Bisection::new().tolerance(1e-6).build().unwrap();

    let fit = solver.solve(-5.0, 0.0, |x| -x - 3.0).unwrap();

    assert_relative_eq!(fit.root, -3.0, epsilon = 1e-5);
}

// ============================================================================
// Fit Content Tests
// ============================================================================

/// Test that the fit reports the residual at the returned root.
#[test]
fn test_fit_residual_matches_root() {
    let solver = Bisection::new().build().unwrap();
    let f = |x: f64| x * x * x - 2.0;

    let fit = solver.solve(1.0, 2.0, f).unwrap();

    assert_eq!(fit.residual, f(fit.root));
    assert!(fit.residual.abs() <= solver.tolerance());
}

/// Test the iteration bound: each halving shrinks the bracket, so the
/// count stays within log2 of the width ratio.
#[test]
fn test_iteration_count_bounded() {
    let solver = Bisection::new().tolerance(1e-5).build().unwrap();

    let fit = solver.solve(1.0, 2.0, |x| x * x - 2.0).unwrap();

    assert!(fit.iterations > 0, "A nontrivial solve should iterate");
    assert!(
        fit.iterations <= 64,
        "Halving a unit bracket to 1e-5 residual needs far fewer than 64 passes, got {}",
        fit.iterations
    );
}

// ============================================================================
// Endpoint Shortcut Tests
// ============================================================================

/// Test that a lower endpoint already within tolerance returns at once.
#[test]
fn test_solve_root_at_lower_endpoint() {
    let solver = Bisection::new().tolerance(1e-5).build().unwrap();

    let fit = solver.solve(2.0, 3.0, |x| x - 2.0).unwrap();

    assert_eq!(fit.root, 2.0);
    assert_eq!(fit.iterations, 0);
}

/// Test that an upper endpoint already within tolerance returns at once.
#[test]
fn test_solve_root_at_upper_endpoint() {
    let solver = Bisection::new().tolerance(1e-5).build().unwrap();

    let fit = solver.solve(0.0, 2.0, |x| x - 2.0).unwrap();

    assert_eq!(fit.root, 2.0);
    assert_eq!(fit.iterations, 0);
}

// ============================================================================
// Failure Mode Tests
// ============================================================================

/// Test that a same-sign bracket is rejected up front.
///
/// f(x) = x² + 1 has no real root; neither endpoint changes sign.
#[test]
fn test_solve_invalid_bracket() {
    let solver = Bisection::new().build().unwrap();

    let err = solver.solve(1.0, 2.0, |x| x * x + 1.0).unwrap_err();

    assert_eq!(err, UnialgError::InvalidBracket { fa: 2.0, fb: 5.0 });
}

/// Test that a non-finite endpoint value is rejected as an invalid
/// bracket.
#[test]
fn test_solve_non_finite_endpoint_value() {
    let solver = Bisection::new().build().unwrap();

    // f(0) is +inf; the bracket cannot be trusted.
    let err = solver.solve(0.0, 1.0, |x| 1.0 / x).unwrap_err();

    assert!(matches!(err, UnialgError::InvalidBracket { .. }));
}

/// Test that exhausting the iteration cap reports no convergence.
#[test]
fn test_solve_no_convergence() {
    let solver = Bisection::new()
        .tolerance(1e-12)
        .max_iterations(1)
        .build()
        .unwrap();

    let err = solver.solve(1.0, 2.0, |x| x * x * x - 2.0).unwrap_err();

    assert_eq!(err, UnialgError::NoConvergence { iterations: 1 });
}

// ============================================================================
// Input Validation Tests
// ============================================================================

/// Test that a reversed interval is rejected.
#[test]
fn test_solve_reversed_interval() {
    let solver = Bisection::new().build().unwrap();

    let err = solver.solve(2.0, 1.0, |x| x).unwrap_err();

    assert_eq!(err, UnialgError::InvalidInterval { a: 2.0, b: 1.0 });
}

/// Test that a degenerate (zero-width) interval is rejected.
#[test]
fn test_solve_degenerate_interval() {
    let solver = Bisection::new().build().unwrap();

    let err = solver.solve(1.0, 1.0, |x| x).unwrap_err();

    assert_eq!(err, UnialgError::InvalidInterval { a: 1.0, b: 1.0 });
}

/// Test that non-finite bounds are rejected.
#[test]
fn test_solve_non_finite_bounds() {
    let solver = Bisection::new().build().unwrap();

    assert!(matches!(
        solver.solve(f64::NAN, 1.0, |x| x),
        Err(UnialgError::InvalidInterval { .. })
    ));
    assert!(matches!(
        solver.solve(0.0, f64::INFINITY, |x| x),
        Err(UnialgError::InvalidInterval { .. })
    ));
}

// ============================================================================
// Precision Tests
// ============================================================================

/// Test an f32 solve end to end.
#[test]
fn test_solve_f32() {
    let solver = Bisection::new().tolerance(1e-4f32).build().unwrap();

    let fit = solver.solve(1.0f32, 2.0f32, |x| x * x - 2.0).unwrap();

    assert_relative_eq!(fit.root, core::f32::consts::SQRT_2, epsilon = 1e-3);
}
