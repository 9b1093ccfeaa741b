//! Utils Module - Helper Functions & Shared Utilities
//!
//! Encodings, type guards, memoization, strings, randomness and file sizes.
//! Single Source of Truth for shared constants lives in `constants`.

pub mod cache;
pub mod constants;
pub mod encoding;
pub mod files;
pub mod guards;
pub mod random;
pub mod string;

pub use cache::*;
pub use constants::*;
pub use encoding::*;
pub use files::*;
pub use guards::*;
pub use random::*;
pub use string::*;
