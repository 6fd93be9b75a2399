//! Tests for the stride-backed 2-D grid buffer.
//!
//! These tests verify the contiguous row-major grid:
//! - Construction (uniform fill, per-cell function)
//! - Element and row access, checked and panicking
//! - Bulk mutation through the generator fill
//! - Degenerate dimensions
//!
//! ## Test Organization
//!
//! 1. **Construction** - `new`, `from_fn`
//! 2. **Element Access** - `get`, `get_mut`, tuple indexing
//! 3. **Row Access** - stride-aligned row slices
//! 4. **Bulk Mutation** - row-major generator fill
//! 5. **Edge Cases** - zero rows/cols, out-of-range panics

use unialg::prelude::*;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test uniform construction and dimensions.
#[test]
fn test_new_dimensions() {
    let grid = Grid::new(3, 4, 0i32);

    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.cols(), 4);
    assert_eq!(grid.len(), 12);
    assert!(!grid.is_empty());
    assert!(grid.as_slice().iter().all(|&v| v == 0));
}

/// Test per-cell construction with products of indices.
///
/// Fills a 3x4 grid with `row * col`, the classic multiplication-table
/// layout.
#[test]
fn test_from_fn_products() {
    let grid = Grid::from_fn(3, 4, |r, c| r * c);

    assert_eq!(grid[(0, 0)], 0);
    assert_eq!(grid[(1, 2)], 2);
    assert_eq!(grid[(2, 3)], 6);
    assert_eq!(grid.row(2), Some(&[0, 2, 4, 6][..]));
}

// ============================================================================
// Element Access Tests
// ============================================================================

/// Test checked element access in and out of range.
#[test]
fn test_get_checked() {
    let grid = Grid::from_fn(2, 2, |r, c| (r, c));

    assert_eq!(grid.get(1, 1), Some(&(1, 1)));
    assert_eq!(grid.get(2, 0), None, "Row out of range");
    assert_eq!(grid.get(0, 2), None, "Column out of range");
}

/// Test checked mutable element access.
#[test]
fn test_get_mut() {
    let mut grid = Grid::new(2, 2, 0);

    *grid.get_mut(0, 1).unwrap() = 42;

    assert_eq!(grid[(0, 1)], 42);
    assert!(grid.get_mut(5, 5).is_none());
}

/// Test tuple index assignment.
#[test]
fn test_index_mut() {
    let mut grid = Grid::new(2, 3, 0);

    grid[(1, 2)] = 7;

    assert_eq!(grid[(1, 2)], 7);
    assert_eq!(grid.as_slice(), &[0, 0, 0, 0, 0, 7]);
}

// ============================================================================
// Row Access Tests
// ============================================================================

/// Test that rows are stride-aligned views into the flat buffer.
#[test]
fn test_row_layout() {
    let grid = Grid::from_fn(3, 2, |r, c| r * 2 + c);

    assert_eq!(grid.row(0), Some(&[0, 1][..]));
    assert_eq!(grid.row(1), Some(&[2, 3][..]));
    assert_eq!(grid.row(2), Some(&[4, 5][..]));
    assert_eq!(grid.row(3), None);
    assert_eq!(grid.as_slice(), &[0, 1, 2, 3, 4, 5]);
}

/// Test mutating a whole row in place.
#[test]
fn test_row_mut() {
    let mut grid = Grid::new(2, 3, 0);

    grid.row_mut(1).unwrap().copy_from_slice(&[9, 8, 7]);

    assert_eq!(grid.as_slice(), &[0, 0, 0, 9, 8, 7]);
    assert!(grid.row_mut(2).is_none());
}

// ============================================================================
// Bulk Mutation Tests
// ============================================================================

/// Test that the generator fill lands in row-major order.
#[test]
fn test_fill_with_row_major() {
    let mut grid = Grid::new(2, 3, 0u32);
    let mut next = 0;

    grid.fill_with(|| {
        next += 1;
        next
    });

    assert_eq!(grid.as_slice(), &[1, 2, 3, 4, 5, 6]);
    assert_eq!(grid.row(1), Some(&[4, 5, 6][..]));
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test a grid with zero rows.
#[test]
fn test_zero_rows() {
    let grid = Grid::new(0, 4, 0i32);

    assert!(grid.is_empty());
    assert_eq!(grid.row(0), None);
    assert_eq!(grid.get(0, 0), None);
}

/// Test a grid with zero columns.
#[test]
fn test_zero_cols() {
    let grid = Grid::new(3, 0, 0i32);

    assert!(grid.is_empty());
    assert_eq!(grid.row(0), Some(&[][..]), "Rows exist but are empty");
    assert_eq!(grid.get(0, 0), None);
}

/// Test that tuple indexing panics out of range.
#[test]
#[should_panic(expected = "out of range")]
fn test_index_out_of_range_panics() {
    let grid = Grid::new(2, 2, 0);
    let _ = grid[(2, 0)];
}
