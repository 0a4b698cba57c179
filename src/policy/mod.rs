//! Rollover policy module
//!
//! A rollover policy fixes, at compile time, how close to zero and to the
//! maximum two timestamps must be before the algebra assumes the counter
//! wrapped between them.

pub mod config;
pub mod macros;

pub use config::{LongWindowPolicy, RolloverPolicy, ShortWindowPolicy, StandardPolicy};
pub use macros::define_rollover_policy;
