//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer validates solver configuration and solve-time inputs
//! before the algorithms run.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Parameter validation.
pub mod validator;
