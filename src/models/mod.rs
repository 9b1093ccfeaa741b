//! Models Module - Data Structures & Configuration
//!
//! Single source of truth for the dynamic `Value`, the error taxonomy and
//! every options struct. No hardcoded defaults outside this module and
//! `utils::constants`.

pub mod config;
pub mod errors;
pub mod value;

pub use config::*;
pub use errors::*;
pub use value::*;
