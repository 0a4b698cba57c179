#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! **Wraparound-aware MPEG presentation timestamps**
//!
//! pts-algebra is a `no_std` Rust library for ordering, diffing and offsetting
//! the 33-bit Presentation Timestamps (PTS) carried in MPEG transport and
//! program stream packets. The counter ticks at 90 kHz and wraps to zero
//! roughly every 26.5 hours, so a long-running stream cannot be ordered with
//! plain integer comparison.
//!
//! Rollover is inferred at comparison time with a fixed threshold heuristic:
//! a value within 30 minutes of zero paired with a value within 30 minutes of
//! the maximum is read as "the small value came after a wrap". No epoch or
//! cycle count is stored anywhere.
//!
//! ## Features
//!
//! - **Pure values** - every operation is a total, allocation-free function over `Copy` types
//! - **Typed sentinels** - [`PtsBound`] carries unbounded past and future without magic integers
//! - **Configurable windows** - [`RolloverPolicy`] fixes the thresholds at compile time
//!
//! ### Optional Features
//! - `serde` - Serde serialization support (no_std compatible)
//! - `log` - trace-level records whenever a rollover is inferred or an addition folds
//!
//! ## Quick Start
//!
//! ```rust
//! use pts_algebra::prelude::*;
//!
//! // Samples a parser pulled out of consecutive PES headers
//! let last = Pts::new(8_589_900_000);
//! let next = Pts::new(100);
//!
//! assert!(next.after(last));
//! assert_eq!(next.duration_from(last), 34_692);
//!
//! // Open-ended ranges
//! let until = PtsBound::PositiveInfinity;
//! assert!(until.after(PtsBound::from(next)));
//! ```
//!
//! ## Addition
//!
//! [`Pts::add`] folds sums above the maximum by subtracting [`PTS_MAX`], not
//! 2^33, matching what existing stream producers emit. [`Pts::wrapping_add`]
//! is the exact modulo-2^33 variant.
//!
//! [`PtsBound`]: crate::clock::PtsBound
//! [`RolloverPolicy`]: crate::policy::RolloverPolicy
//! [`Pts::add`]: crate::clock::Pts::add
//! [`Pts::wrapping_add`]: crate::clock::Pts::wrapping_add
//! [`PTS_MAX`]: crate::clock::PTS_MAX

#![no_std]
#![deny(missing_docs)]
#![warn(clippy::all)]

mod trace;

pub mod clock;
pub mod error;
pub mod policy;
pub mod traits;

/// Prelude module of pts-algebra
///
/// Convenient re-exports for common timestamp types and traits
pub mod prelude {
    // Re-export clock types and constants
    pub use crate::clock::{
        LOWER_ROLLOVER_THRESHOLD, PTS_CLOCK_HZ, PTS_MAX, PTS_MODULUS, Pts, PtsBound,
        UPPER_ROLLOVER_THRESHOLD,
    };

    // Re-export error types
    pub use crate::error::{PtsError, PtsResult};

    // Re-export rollover policies
    pub use crate::policy::{
        LongWindowPolicy, RolloverPolicy, ShortWindowPolicy, StandardPolicy, define_rollover_policy,
    };

    // Re-export core traits
    pub use crate::traits::WrapOrd;
}
