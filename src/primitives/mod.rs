//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions the algorithms are
//! built on: opaque byte regions with their copy/swap movers, the
//! contiguous 2-D grid buffer, and the shared error type. It has zero
//! internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Byte-region copy and swap movers.
pub mod bytes;

/// Shared error types.
pub mod errors;

/// Contiguous 2-D grid buffer.
pub mod grid;
