//! # unialg: type-erased and generic sequence algorithms
//!
//! A small toolkit of algorithms that operate uninformed of the concrete
//! element type they work on. The element type is expressed either as an
//! explicit byte stride over an opaque region (the *erased* family) or as
//! a type parameter paired with a caller-supplied callable (the *typed*
//! family):
//!
//! - byte-region **copy** and **swap** primitives,
//! - a comparator-driven **bubble sort**, in both an erased (byte stride +
//!   byte comparator) and a typed (generic slice + closure) rendition,
//! - a generator-driven **fill** and a **for-each** visitor,
//! - a **bisection** root-finder parameterized by the target function,
//! - a stride-backed 2-D [`Grid`](prelude::Grid) buffer.
//!
//! ## Quick start
//!
//! ### Typed sorting
//!
//! ```rust
//! use unialg::prelude::*;
//!
//! let mut values = [2, 3, 4, 1, -4];
//! bubble_sort(&mut values, |a, b| a > b);
//! assert_eq!(values, [-4, 1, 2, 3, 4]);
//! ```
//!
//! ### Erased sorting
//!
//! The erased sort sees only a byte region and a stride. The caller picks
//! the comparator that matches the element type actually stored there:
//!
//! ```rust
//! use core::mem::size_of;
//! use unialg::prelude::*;
//!
//! let values: [i32; 5] = [2, 3, 4, 1, -4];
//! let mut bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
//!
//! sort_erased(&mut bytes, size_of::<i32>(), greater_i32)?;
//!
//! let sorted: Vec<i32> = bytes
//!     .chunks_exact(size_of::<i32>())
//!     .map(|c| i32::from_ne_bytes(c.try_into().unwrap()))
//!     .collect();
//! assert_eq!(sorted, [-4, 1, 2, 3, 4]);
//! # Result::<(), UnialgError>::Ok(())
//! ```
//!
//! ### Root finding
//!
//! ```rust
//! use unialg::prelude::*;
//!
//! let solver = Bisection::new().tolerance(1e-5).build()?;
//! let fit = solver.solve(1.0, 2.0, |x| x * x - 2.0)?;
//! assert!((fit.root - 2.0_f64.sqrt()).abs() < 1e-5);
//! # Result::<(), UnialgError>::Ok(())
//! ```
//!
//! ## Contracts at a glance
//!
//! The erased routines never inspect or validate the element type behind
//! the bytes they are handed; they check only what a byte region can
//! express (lengths and strides). Pairing a sequence with a comparator of
//! the wrong concrete type reorders bytes meaninglessly but safely; that
//! pairing is the caller's responsibility, and the routines perform no
//! type validation.
//!
//! Bubble sort is a deliberate simplicity-over-performance choice. Any
//! faster comparison sort is a valid substitution as long as it preserves
//! the "strict order via caller-supplied comparator, erased via stride +
//! byte swapper" contract.
//!
//! ## `no_std` support
//!
//! The crate is `no_std` by default with the `std` feature disabled; only
//! the [`Grid`](prelude::Grid) buffer requires `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - byte regions, buffers, and error types.
mod primitives;

// Layer 2: Algorithms - erased/typed sorting, traversal, bisection.
mod algorithms;

// Layer 3: Engine - parameter validation.
mod engine;

// High-level API: builder, solver, and re-exports.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        Bisection, BisectionFit, BisectionSolver, Grid, UnialgError, bubble_sort, copy_region,
        fill_with, for_each, greater_f32, greater_f64, greater_i32, greater_i64, sort_erased,
        swap_regions,
    };
}
