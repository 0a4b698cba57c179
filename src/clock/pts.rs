//! The `Pts` value type
//!
//! All arithmetic here is wrapping on `u64`, so values outside the 33-bit
//! range produce meaningless results instead of panics.

use core::fmt;
use core::ops;

use crate::clock::constants::{PTS_MAX, PTS_MODULUS};
use crate::error::{PtsError, PtsResult};
use crate::policy::{RolloverPolicy, StandardPolicy};
use crate::trace::pts_trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 33-bit presentation timestamp in 90 kHz ticks
///
/// `Pts` intentionally has no `PartialOrd`/`Ord`: numeric order stops being
/// chronological order once the counter wraps. Use [`Pts::after`],
/// [`Pts::greater_or_equal`] or [`WrapOrd`](crate::traits::WrapOrd) instead.
///
/// # Example
/// ```rust
/// use pts_algebra::prelude::*;
///
/// let before_wrap = Pts::new(8_589_900_000);
/// let after_wrap = Pts::new(100);
///
/// assert!(after_wrap.after(before_wrap));
/// assert_eq!(after_wrap.duration_from(before_wrap), 34_692);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct Pts(u64);

impl Pts {
    /// Timestamp zero
    pub const ZERO: Self = Self(0);

    /// Largest 33-bit timestamp
    pub const MAX: Self = Self(PTS_MAX);

    /// Creates a timestamp from raw ticks without range checking
    pub const fn new(ticks: u64) -> Self {
        Self(ticks)
    }

    /// Creates a timestamp, rejecting values wider than 33 bits
    pub const fn try_new(ticks: u64) -> PtsResult<Self> {
        if ticks > PTS_MAX {
            Err(PtsError::OutOfRange(ticks))
        } else {
            Ok(Self(ticks))
        }
    }

    /// Creates a timestamp from the low 33 bits of `raw`
    pub const fn from_masked(raw: u64) -> Self {
        Self(raw & PTS_MAX)
    }

    /// Returns the raw tick count
    pub const fn ticks(&self) -> u64 {
        self.0
    }

    /// Returns the timestamp as u64
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Returns true if the value fits in 33 bits
    pub const fn is_valid(&self) -> bool {
        self.0 <= PTS_MAX
    }

    /// Returns true if the value lies in either rollover band
    pub fn is_near_rollover(self) -> bool {
        self.is_near_rollover_with::<StandardPolicy>()
    }

    /// [`is_near_rollover`](Self::is_near_rollover) under a custom policy
    pub fn is_near_rollover_with<P: RolloverPolicy>(self) -> bool {
        self.0 < P::LOWER_THRESHOLD || self.0 > P::UPPER_THRESHOLD
    }

    /// Returns true if `self` was sampled just after a wrap and `other` just
    /// before it
    ///
    /// This is not a cycle detector. It holds exactly when `self` is below the
    /// lower threshold and `other` is above the upper threshold.
    pub fn rolled_over(self, other: Self) -> bool {
        self.rolled_over_with::<StandardPolicy>(other)
    }

    /// [`rolled_over`](Self::rolled_over) under a custom policy
    pub fn rolled_over_with<P: RolloverPolicy>(self, other: Self) -> bool {
        let rolled = self.0 < P::LOWER_THRESHOLD && other.0 > P::UPPER_THRESHOLD;
        if rolled {
            pts_trace!("rollover inferred: {} follows {}", self.0, other.0);
        }
        rolled
    }

    /// Returns true if `self` is strictly later than `other`
    ///
    /// A detected rollover overrides numeric order, so a small value can be
    /// after a large one.
    pub fn after(self, other: Self) -> bool {
        self.after_with::<StandardPolicy>(other)
    }

    /// [`after`](Self::after) under a custom policy
    pub fn after_with<P: RolloverPolicy>(self, other: Self) -> bool {
        if self.rolled_over_with::<P>(other) {
            true
        } else if other.rolled_over_with::<P>(self) {
            false
        } else {
            self.0 > other.0
        }
    }

    /// Returns true if `self` is strictly earlier than `other`
    pub fn before(self, other: Self) -> bool {
        other.after(self)
    }

    /// Returns true if `self` equals `other` or is after it
    pub fn greater_or_equal(self, other: Self) -> bool {
        self.greater_or_equal_with::<StandardPolicy>(other)
    }

    /// [`greater_or_equal`](Self::greater_or_equal) under a custom policy
    pub fn greater_or_equal_with<P: RolloverPolicy>(self, other: Self) -> bool {
        self == other || self.after_with::<P>(other)
    }

    /// Elapsed ticks between `from` and `self`
    ///
    /// The result is a magnitude. Swapping the arguments gives the same
    /// value; use [`after`](Self::after) when direction matters.
    pub fn duration_from(self, from: Self) -> u64 {
        self.duration_from_with::<StandardPolicy>(from)
    }

    /// [`duration_from`](Self::duration_from) under a custom policy
    pub fn duration_from_with<P: RolloverPolicy>(self, from: Self) -> u64 {
        if self.rolled_over_with::<P>(from) {
            PTS_MODULUS.wrapping_sub(from.0).wrapping_add(self.0)
        } else if from.rolled_over_with::<P>(self) {
            PTS_MODULUS.wrapping_sub(self.0).wrapping_add(from.0)
        } else if self.0 < from.0 {
            from.0 - self.0
        } else {
            self.0 - from.0
        }
    }

    /// Adds an offset, folding sums above the maximum back by subtracting
    /// [`PTS_MAX`]
    ///
    /// The fold subtracts `PTS_MAX`, not the modulus, so `MAX + 1` lands on 1
    /// rather than 0. Stream producers depend on this exact result. Use
    /// [`wrapping_add`](Self::wrapping_add) for true modulo-2^33 arithmetic.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, offset: Self) -> Self {
        let sum = self.0.wrapping_add(offset.0);
        if sum > PTS_MAX {
            let folded = sum - PTS_MAX;
            pts_trace!("add folded {} + {} to {}", self.0, offset.0, folded);
            Self(folded)
        } else {
            Self(sum)
        }
    }

    /// Adds an offset modulo 2^33
    pub const fn wrapping_add(self, offset: Self) -> Self {
        Self(self.0.wrapping_add(offset.0) & PTS_MAX)
    }

    /// Returns whichever timestamp is chronologically later
    pub fn latest(self, other: Self) -> Self {
        if other.after(self) { other } else { self }
    }

    /// Returns whichever timestamp is chronologically earlier
    pub fn earliest(self, other: Self) -> Self {
        if other.after(self) { self } else { other }
    }
}

impl ops::Add for Pts {
    type Output = Pts;

    fn add(self, rhs: Pts) -> Pts {
        Pts::add(self, rhs)
    }
}

impl From<u64> for Pts {
    fn from(ticks: u64) -> Self {
        Self(ticks)
    }
}

impl From<Pts> for u64 {
    fn from(pts: Pts) -> Self {
        pts.0
    }
}

impl fmt::Display for Pts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
