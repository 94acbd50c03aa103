//! # Graph Store Core
//!
//! Core value types for a tree-shaped graph-store wire protocol.
//!
//! This crate provides:
//! - [`Index`]: a hierarchical, arbitrary-precision node identifier with a
//!   canonical path-like string encoding, usable as a map key
//! - [`GraphUpdate`]: the three-variant update message, with a hand-written
//!   codec for its single-key-discriminated JSON shape
//!
//! ## Design Principles
//!
//! 1. **Pure values**: no I/O, no clocks beyond an optional convenience
//!    constructor, no shared state; everything is safe to share across
//!    concurrent readers
//! 2. **Wire fidelity over tidiness**: the canonical string asymmetry and
//!    the `mark` null/absent collapse are protocol facts, preserved as-is
//! 3. **Total parsing**: untrusted strings either yield a whole value or
//!    nothing
//!
//! ## Example
//!
//! ```
//! use graph_store_core::Index;
//!
//! let idx = Index::parse("/1/23/456").unwrap();
//! assert_eq!(idx.canonical_string(), "/1/23/456");
//! assert_eq!(idx.grouped_string(), "/1/23/456");
//! assert!(idx < Index::parse("/1/24").unwrap());
//! ```

pub mod error;
pub mod index;
pub mod resource;
pub mod update;

// Re-export main types
pub use error::{Error, Result};
pub use index::Index;
pub use resource::{Graph, Keys, Mark, Resource};
pub use update::GraphUpdate;
