//! Stride-backed 2-D grid buffer.
//!
//! ## Purpose
//!
//! This module provides [`Grid`], an owned two-dimensional buffer over a
//! single contiguous allocation, replacing the hand-built
//! index-array-plus-flat-buffer pattern of manually managed 2-D arrays.
//!
//! ## Design notes
//!
//! * **Contiguous**: All elements live in one `Vec<T>` in row-major
//!   order, preserving the cache behavior of a flat buffer.
//! * **Stride-based**: Row `r` is `data[r * cols .. (r + 1) * cols]`; no
//!   per-row pointer bookkeeping exists.
//! * **Checked access**: `get`/`row` return `Option`; tuple indexing
//!   panics on out-of-range access exactly like slice indexing.
//!
//! ## Invariants
//!
//! * `data.len() == rows * cols` at all times.
//! * Row slices never overlap and always have length `cols`.
//!
//! ## Non-goals
//!
//! * This module does not support jagged rows or resizing after
//!   construction.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Index, IndexMut};

// ============================================================================
// Grid
// ============================================================================

/// An owned `rows x cols` buffer stored contiguously in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    /// Flat element storage, row-major.
    data: Vec<T>,

    /// Number of rows.
    rows: usize,

    /// Number of elements per row (the row stride).
    cols: usize,
}

impl<T> Grid<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a grid with every element set to `value`.
    pub fn new(rows: usize, cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a grid by evaluating `f(row, col)` for every cell in
    /// row-major order.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { data, rows, cols }
    }

    // ========================================================================
    // Dimensions
    // ========================================================================

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of elements per row.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the grid holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // ========================================================================
    // Element Access
    // ========================================================================

    /// Get a reference to the element at `(row, col)`, if in range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Get a mutable reference to the element at `(row, col)`, if in
    /// range.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    // ========================================================================
    // Row Access
    // ========================================================================

    /// Get row `r` as a slice, if in range.
    #[inline]
    pub fn row(&self, r: usize) -> Option<&[T]> {
        if r < self.rows {
            Some(&self.data[r * self.cols..(r + 1) * self.cols])
        } else {
            None
        }
    }

    /// Get row `r` as a mutable slice, if in range.
    #[inline]
    pub fn row_mut(&mut self, r: usize) -> Option<&mut [T]> {
        if r < self.rows {
            Some(&mut self.data[r * self.cols..(r + 1) * self.cols])
        } else {
            None
        }
    }

    /// View the whole grid as its flat row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    // ========================================================================
    // Bulk Mutation
    // ========================================================================

    /// Overwrite every element with successive generator results, in
    /// row-major index order.
    pub fn fill_with<G>(&mut self, mut generator: G)
    where
        G: FnMut() -> T,
    {
        for slot in self.data.iter_mut() {
            *slot = generator();
        }
    }
}

// ============================================================================
// Indexing
// ============================================================================

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "grid index ({row}, {col}) out of range for {}x{} grid",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "grid index ({row}, {col}) out of range for {}x{} grid",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}
