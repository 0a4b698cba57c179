//! Error handling module for pts-algebra
//!
//! The timestamp algebra itself never fails. These types are only returned by
//! the opt-in checked paths: range-validated construction and policy validation.

pub mod types;

// Re-export main types
pub use types::{PtsError, PtsResult};
