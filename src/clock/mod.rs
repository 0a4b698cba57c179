//! Presentation timestamp algebra
//!
//! This module provides the [`Pts`] value type and the [`PtsBound`] wrapper
//! that adds unbounded past and future sentinels. A PTS is a 33-bit counter
//! that wraps to zero, so ordering and distances are computed with a rollover
//! heuristic rather than plain integer comparison.
//!
//! No epoch or cycle count is stored. Two timestamps are treated as straddling
//! a wrap when one lies below [`LOWER_ROLLOVER_THRESHOLD`] and the other above
//! [`UPPER_ROLLOVER_THRESHOLD`].
//!
//! # Known limitation
//!
//! The heuristic only recognizes "shortly after a wrap" against "shortly
//! before the same wrap". Timestamps more than one full cycle apart, or a
//! stream that legitimately starts near zero while another sample sits near
//! the maximum, are misclassified. That degrades to a wrong boolean or
//! duration, never to a panic or an error.

pub mod bound;
pub mod constants;
pub mod pts;

pub use bound::PtsBound;
pub use constants::{
    LOWER_ROLLOVER_THRESHOLD, PTS_CLOCK_HZ, PTS_MAX, PTS_MODULUS, ROLLOVER_WINDOW_TICKS,
    UPPER_ROLLOVER_THRESHOLD,
};
pub use pts::Pts;
