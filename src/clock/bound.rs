//! Timestamps extended with unbounded past and future
//!
//! Sentinels are enum variants rather than reserved integers, so no legitimate
//! 33-bit value can collide with them.

use core::fmt;

use crate::clock::pts::Pts;
use crate::policy::{RolloverPolicy, StandardPolicy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A [`Pts`] or one of the two infinities
///
/// `PositiveInfinity` is after every other bound except itself.
/// `NegativeInfinity` is before every other bound except itself.
///
/// # Example
/// ```rust
/// use pts_algebra::prelude::*;
///
/// let open_end = PtsBound::PositiveInfinity;
/// let sample = PtsBound::from(Pts::new(1_000));
///
/// assert!(open_end.after(sample));
/// assert!(!sample.after(open_end));
/// assert!(sample.after(PtsBound::NegativeInfinity));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PtsBound {
    /// Before every finite timestamp
    NegativeInfinity,
    /// A finite timestamp
    Finite(Pts),
    /// After every finite timestamp
    PositiveInfinity,
}

impl PtsBound {
    /// Returns the finite timestamp, if any
    pub const fn finite(&self) -> Option<Pts> {
        match self {
            Self::Finite(pts) => Some(*pts),
            _ => None,
        }
    }

    /// Returns true for [`PtsBound::Finite`]
    pub const fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns true for either infinity
    pub const fn is_infinite(&self) -> bool {
        !self.is_finite()
    }

    /// Returns true if `self` is strictly later than `other`
    ///
    /// Infinities are resolved first. Two finite bounds defer to
    /// [`Pts::after`], which applies the rollover heuristic.
    pub fn after(self, other: Self) -> bool {
        self.after_with::<StandardPolicy>(other)
    }

    /// [`after`](Self::after) under a custom policy
    pub fn after_with<P: RolloverPolicy>(self, other: Self) -> bool {
        match (self, other) {
            (_, Self::PositiveInfinity) => false,
            (Self::NegativeInfinity, Self::NegativeInfinity) => false,
            (_, Self::NegativeInfinity) => true,
            (Self::PositiveInfinity, Self::Finite(_)) => true,
            (Self::NegativeInfinity, Self::Finite(_)) => false,
            (Self::Finite(a), Self::Finite(b)) => a.after_with::<P>(b),
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
}

impl From<Pts> for PtsBound {
    fn from(pts: Pts) -> Self {
        Self::Finite(pts)
    }
}

impl fmt::Display for PtsBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeInfinity => f.write_str("-inf"),
            Self::Finite(pts) => fmt::Display::fmt(pts, f),
            Self::PositiveInfinity => f.write_str("+inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    const POS: PtsBound = PtsBound::PositiveInfinity;
    const NEG: PtsBound = PtsBound::NegativeInfinity;

    fn finite(ticks: u64) -> PtsBound {
        PtsBound::Finite(Pts::new(ticks))
    }

    #[test]
    fn test_nothing_is_after_positive_infinity() {
        assert!(!finite(0).after(POS));
        assert!(!finite(8_589_934_591).after(POS));
        assert!(!NEG.after(POS));
        assert!(!POS.after(POS));
    }

    #[test]
    fn test_everything_is_after_negative_infinity() {
        assert!(finite(0).after(NEG));
        assert!(finite(8_589_934_591).after(NEG));
        assert!(POS.after(NEG));
        assert!(!NEG.after(NEG));
    }

    #[test]
    fn test_infinity_against_finite() {
        assert!(POS.after(finite(100)));
        assert!(!NEG.after(finite(100)));
        assert!(NEG.before(finite(100)));
        assert!(finite(100).before(POS));
    }

    #[test]
    fn test_finite_defers_to_rollover() {
        assert!(finite(100).after(finite(8_589_900_000)));
        assert!(!finite(8_589_900_000).after(finite(100)));
        assert!(finite(5000).after(finite(1000)));
    }

    #[test]
    fn test_greater_or_equal_reflexive() {
        assert!(POS.greater_or_equal(POS));
        assert!(NEG.greater_or_equal(NEG));
        assert!(finite(7).greater_or_equal(finite(7)));
        assert!(!NEG.greater_or_equal(POS));
        assert!(POS.greater_or_equal(NEG));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(finite(9).finite(), Some(Pts::new(9)));
        assert_eq!(POS.finite(), None);
        assert!(finite(9).is_finite());
        assert!(NEG.is_infinite());
        assert_eq!(PtsBound::from(Pts::new(3)), finite(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(POS.to_string(), "+inf");
        assert_eq!(NEG.to_string(), "-inf");
        assert_eq!(finite(42).to_string(), "42");
    }
}
