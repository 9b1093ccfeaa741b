//! Core Module - Higher-Order Functions & Structural Algorithms
//!
//! Sorting, grouping, set operations, composition, currying, timers and
//! deep object operations.

pub mod curry;
pub mod fp;
pub mod group;
pub mod object;
pub mod sort;
pub mod timing;

pub use curry::*;
pub use fp::*;
pub use group::*;
pub use object::*;
pub use sort::*;
pub use timing::*;
