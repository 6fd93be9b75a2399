//! Typed comparison sort.
//!
//! ## Purpose
//!
//! This module provides the typed rendition of the comparison sort: the
//! same bubble-sort algorithm as the erased variant, expressed over a
//! generic slice with a closure comparator instead of a byte stride and a
//! byte comparator.
//!
//! ## Design notes
//!
//! * **Parametric, not erased**: The element type is a type parameter and
//!   element exchange is `slice::swap`; no byte-level bookkeeping exists
//!   here.
//! * **Strict order**: `greater_than(a, b)` must return `true` iff `a`
//!   sorts strictly after `b`. Equal elements must compare `false` in
//!   both directions, which also makes the sort stable.
//!
//! ## Invariants
//!
//! * The output is a permutation of the input (elements are only ever
//!   swapped).
//! * After outer pass `p`, the `p` largest elements occupy the trailing
//!   `p` positions in final sorted order.
//! * Zero- and one-element slices perform no comparisons and no swaps.
//!
//! ## Non-goals
//!
//! * This module does not aim for production sorting performance; bubble
//!   sort is O(n²) by design.

// ============================================================================
// Typed Sort
// ============================================================================

/// Sort a slice in place into non-descending order under `greater_than`.
///
/// Adjacent elements are compared and swapped whenever the first sorts
/// strictly after the second, for `seq.len() - 1` passes.
///
/// ```rust
/// use unialg::prelude::bubble_sort;
///
/// let mut values = [2.1, 2.3, -1.2, 0.0, 5.0];
/// bubble_sort(&mut values, |a, b| a > b);
/// assert_eq!(values, [-1.2, 0.0, 2.1, 2.3, 5.0]);
/// ```
pub fn bubble_sort<T, F>(seq: &mut [T], greater_than: F)
where
    F: Fn(&T, &T) -> bool,
{
    let count = seq.len();

    // Guard before computing count - 1: count is unsigned.
    if count < 2 {
        return;
    }

    for pass in 0..count - 1 {
        for idx in 0..count - 1 - pass {
            if greater_than(&seq[idx], &seq[idx + 1]) {
                seq.swap(idx, idx + 1);
            }
        }
    }
}
