//! Type-erased comparison sort over byte regions.
//!
//! ## Purpose
//!
//! This module provides a comparison sort that operates on an opaque byte
//! region, parameterized by an element stride and a caller-supplied byte
//! comparator. The sort never learns the concrete element type; the
//! stride and the comparator together carry everything it needs.
//!
//! ## Design notes
//!
//! * **Erasure via stride**: Element `i` is the byte view
//!   `bytes[i * stride .. (i + 1) * stride]`. All element movement goes
//!   through the byte swapper, so any element size works, including sizes
//!   that are not word multiples.
//! * **Caller-matched comparators**: A comparator reinterprets its two
//!   byte views as an agreed concrete type. Selecting the instance that
//!   matches the sequence's real element type is the caller's
//!   responsibility; the sort performs no type validation.
//! * **Bubble sort**: A deliberate simplicity-over-performance choice.
//!   Any faster comparison sort is a valid substitution as long as it
//!   preserves the stride + comparator + byte-swap contract.
//!
//! ## Key concepts
//!
//! * **Strict order**: `greater_than(a, b)` must return `true` iff the
//!   element at `a` sorts strictly after the element at `b`; equal
//!   elements must compare `false` in both directions.
//! * **Pass invariant**: After outer pass `p`, the `p` largest elements
//!   occupy the trailing `p` positions in final sorted order.
//!
//! ## Invariants
//!
//! * The sorted region is a byte-level permutation of the input, moved in
//!   whole-stride units.
//! * Zero- and one-element sequences perform no comparisons and no swaps.
//!
//! ## Non-goals
//!
//! * This module does not validate that the comparator matches the
//!   element type stored in the region.
//! * This module does not promise stability beyond what the strict order
//!   implies.

// Internal dependencies
use crate::primitives::bytes::swap_regions;
use crate::primitives::errors::UnialgError;

// ============================================================================
// Erased Sort
// ============================================================================

/// Sort a byte region in place as a sequence of `stride`-byte elements.
///
/// Reorders the sequence into non-descending order under the strict order
/// defined by `greater_than`, using only stride arithmetic, the
/// comparator, and byte-level swaps.
///
/// # Errors
///
/// * [`UnialgError::ZeroStride`] if `stride == 0`.
/// * [`UnialgError::MisalignedSequence`] if `bytes.len()` is not a
///   multiple of `stride`.
pub fn sort_erased<F>(bytes: &mut [u8], stride: usize, greater_than: F) -> Result<(), UnialgError>
where
    F: Fn(&[u8], &[u8]) -> bool,
{
    if stride == 0 {
        return Err(UnialgError::ZeroStride);
    }
    if bytes.len() % stride != 0 {
        return Err(UnialgError::MisalignedSequence {
            len: bytes.len(),
            stride,
        });
    }

    let count = bytes.len() / stride;

    // Guard before computing count - 1: count is unsigned.
    if count < 2 {
        return Ok(());
    }

    for pass in 0..count - 1 {
        for idx in 0..count - 1 - pass {
            let offset = idx * stride;
            let a = &bytes[offset..offset + stride];
            let b = &bytes[offset + stride..offset + 2 * stride];

            if greater_than(a, b) {
                // Split at the element boundary so both views are
                // independently mutable.
                let (head, tail) = bytes.split_at_mut(offset + stride);
                swap_regions(&mut head[offset..], &mut tail[..stride], stride)?;
            }
        }
    }

    Ok(())
}

// ============================================================================
// Byte Comparators
// ============================================================================

/// Strict-order comparator for `i32` elements stored in native-endian
/// byte views.
///
/// # Panics
///
/// Panics if either view holds fewer than 4 bytes. The caller guarantees
/// the views come from a sequence of stride `size_of::<i32>()`.
#[inline]
pub fn greater_i32(a: &[u8], b: &[u8]) -> bool {
    read_i32(a) > read_i32(b)
}

/// Strict-order comparator for `i64` elements stored in native-endian
/// byte views.
///
/// # Panics
///
/// Panics if either view holds fewer than 8 bytes.
#[inline]
pub fn greater_i64(a: &[u8], b: &[u8]) -> bool {
    read_i64(a) > read_i64(b)
}

/// Strict-order comparator for `f32` elements stored in native-endian
/// byte views.
///
/// NaN compares greater-than nothing under `>`, so NaN payloads violate
/// the strict-total-order requirement and leave the result order
/// unspecified (but safe).
///
/// # Panics
///
/// Panics if either view holds fewer than 4 bytes.
#[inline]
pub fn greater_f32(a: &[u8], b: &[u8]) -> bool {
    read_f32(a) > read_f32(b)
}

/// Strict-order comparator for `f64` elements stored in native-endian
/// byte views.
///
/// Same NaN caveat as [`greater_f32`].
///
/// # Panics
///
/// Panics if either view holds fewer than 8 bytes.
#[inline]
pub fn greater_f64(a: &[u8], b: &[u8]) -> bool {
    read_f64(a) > read_f64(b)
}

// ============================================================================
// Native-Endian Decoding
// ============================================================================

#[inline]
fn read_i32(bytes: &[u8]) -> i32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&bytes[..4]);
    i32::from_ne_bytes(buf)
}

#[inline]
fn read_i64(bytes: &[u8]) -> i64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[..8]);
    i64::from_ne_bytes(buf)
}

#[inline]
fn read_f32(bytes: &[u8]) -> f32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&bytes[..4]);
    f32::from_ne_bytes(buf)
}

#[inline]
fn read_f64(bytes: &[u8]) -> f64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[..8]);
    f64::from_ne_bytes(buf)
}
