//! Byte-region copy and swap primitives.
//!
//! ## Purpose
//!
//! This module provides the two byte-level movers the erased algorithms
//! are built on: an address-order copy between two regions and a
//! byte-for-byte exchange of two regions.
//!
//! ## Design notes
//!
//! * **Opaque**: A region is just a byte slice; no element type is
//!   attached at this boundary. Interpretation of the bytes is entirely
//!   the caller's concern.
//! * **Checked**: A region shorter than the requested count is an
//!   explicit [`RegionTooSmall`](UnialgError::RegionTooSmall) error, not
//!   unchecked access.
//! * **Non-aliasing**: Copy takes `&`/`&mut` and swap takes two `&mut`
//!   slices, so overlapping regions are ruled out at the type level.
//!
//! ## Key concepts
//!
//! * **Byte granularity**: Both movers operate one byte at a time in
//!   address order, so any element size is handled correctly, including
//!   sizes that are not multiples of a machine word.
//! * **Involution**: Swapping the same two regions twice restores both.
//!
//! ## Invariants
//!
//! * Copy mutates only the destination region; the source is unchanged.
//! * Swap mutates exactly the first `count` bytes of each region.
//! * A zero count is a no-op and always succeeds.
//!
//! ## Non-goals
//!
//! * This module does not interpret element types or strides.
//! * This module does not allocate; both regions are caller-owned.

// External dependencies
use core::mem::swap;

// Internal dependencies
use crate::primitives::errors::UnialgError;

// ============================================================================
// Region Copy
// ============================================================================

/// Copy `count` bytes from the front of `src` to the front of `dst`.
///
/// Bytes are transferred in address order. Only the destination is
/// mutated.
///
/// # Errors
///
/// Returns [`UnialgError::RegionTooSmall`] if either region holds fewer
/// than `count` bytes.
#[inline]
pub fn copy_region(src: &[u8], dst: &mut [u8], count: usize) -> Result<(), UnialgError> {
    if src.len() < count {
        return Err(UnialgError::RegionTooSmall {
            got: src.len(),
            need: count,
        });
    }
    if dst.len() < count {
        return Err(UnialgError::RegionTooSmall {
            got: dst.len(),
            need: count,
        });
    }

    dst[..count].copy_from_slice(&src[..count]);
    Ok(())
}

// ============================================================================
// Region Swap
// ============================================================================

/// Exchange the first `count` bytes of `a` and `b`, byte for byte.
///
/// Correct for any `count`, including element sizes that are not
/// multiples of a machine word. Applying the swap twice restores both
/// regions.
///
/// # Errors
///
/// Returns [`UnialgError::RegionTooSmall`] if either region holds fewer
/// than `count` bytes.
#[inline]
pub fn swap_regions(a: &mut [u8], b: &mut [u8], count: usize) -> Result<(), UnialgError> {
    if a.len() < count {
        return Err(UnialgError::RegionTooSmall {
            got: a.len(),
            need: count,
        });
    }
    if b.len() < count {
        return Err(UnialgError::RegionTooSmall {
            got: b.len(),
            need: count,
        });
    }

    for (x, y) in a[..count].iter_mut().zip(b[..count].iter_mut()) {
        swap(x, y);
    }
    Ok(())
}
