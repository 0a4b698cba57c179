//! Core traits module
//!
//! Traits that let generic code order timestamps without knowing the
//! concrete timestamp type.

pub mod ordering;

// Re-export main traits
pub use ordering::{WrapOrd, earliest, latest};
