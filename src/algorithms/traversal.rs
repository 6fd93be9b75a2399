//! Generator fill and for-each traversal.
//!
//! ## Purpose
//!
//! This module provides the two sequence-traversal algorithms: a
//! generator-driven fill that populates a slice one element at a time,
//! and a visitor that applies an action to each element.
//!
//! ## Design notes
//!
//! * **Deliberately narrower than the sort**: Both routines are generic
//!   over a single element type per call site and are not byte-erased.
//!   Only the sort and the byte movers cross the erasure boundary;
//!   fill and for-each stay type-specialized.
//! * **Stateful callables**: The generator and the action take `FnMut`,
//!   so pseudo-random generators, counters, and collecting visitors all
//!   work without interior mutability.
//!
//! ## Invariants
//!
//! * Both routines visit indices in order `0..len`, calling the callable
//!   exactly once per element.
//! * `for_each` never mutates the sequence.
//! * Generator and action calls are assumed infallible; there is no
//!   partial-failure path.
//!
//! ## Non-goals
//!
//! * This module does not offer early termination or fallible visitors.

// ============================================================================
// Generator Fill
// ============================================================================

/// Overwrite every element of `seq` with successive generator results.
///
/// The generator is invoked once per element, in index order `0..len`,
/// and its result is stored at that index. The generator may carry
/// arbitrary internal state (e.g., a pseudo-random sequence).
///
/// ```rust
/// use unialg::prelude::fill_with;
///
/// let mut seq = [0u32; 4];
/// let mut next = 0;
/// fill_with(&mut seq, || {
///     next += 1;
///     next
/// });
/// assert_eq!(seq, [1, 2, 3, 4]);
/// ```
#[inline]
pub fn fill_with<T, G>(seq: &mut [T], mut generator: G)
where
    G: FnMut() -> T,
{
    for slot in seq.iter_mut() {
        *slot = generator();
    }
}

// ============================================================================
// For-Each Visitor
// ============================================================================

/// Invoke `action` once per element, in index order, passing each
/// element by copy.
///
/// Purely a traversal primitive; the sequence itself is never mutated.
#[inline]
pub fn for_each<T, A>(seq: &[T], mut action: A)
where
    T: Copy,
    A: FnMut(T),
{
    for &value in seq.iter() {
        action(value);
    }
}
