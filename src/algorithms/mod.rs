//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer provides the core algorithms: the erased and typed
//! comparison sorts, the generator fill and for-each traversal, and the
//! bisection root-finder. Everything here is a single-pass or
//! nested-loop routine over caller-owned data; nothing allocates or
//! retains state across calls.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Bisection root-finding.
pub mod bisection;

/// Type-erased sorting over byte regions.
pub mod erased;

/// Typed comparison sorting.
pub mod sort;

/// Generator fill and for-each traversal.
pub mod traversal;
