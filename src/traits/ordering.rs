//! Wrap-aware ordering trait
//!
//! This module defines the ordering contract shared by [`Pts`] and
//! [`PtsBound`], so generic code can order either one without caring whether
//! sentinels are possible.

use core::cmp::Ordering;

use crate::clock::{Pts, PtsBound};

/// Chronological ordering over a wrapping clock
///
/// Unlike [`Ord`], this relation is not transitive across a rollover: with a
/// long enough chain of samples, `a` after `b` after `c` can still leave `c`
/// after `a`. Only sort with [`wrap_cmp`](Self::wrap_cmp) when every pair in
/// the slice is within one rollover window of each other or all on the same
/// side of the wrap. On a set that is not totally ordered, `sort_by` and
/// `sort_unstable_by` may panic (Rust 1.81 and later detect inconsistent
/// comparators) or leave the slice in an unspecified order.
pub trait WrapOrd: Copy + PartialEq {
    /// Returns true if `self` is strictly later than `other`
    fn is_after(&self, other: &Self) -> bool;

    /// Returns true if `self` is strictly earlier than `other`
    fn is_before(&self, other: &Self) -> bool {
        other.is_after(self)
    }

    /// Returns true if `self` equals `other` or is after it
    fn is_at_or_after(&self, other: &Self) -> bool {
        self == other || self.is_after(other)
    }

    /// Three-way chronological comparison
    fn wrap_cmp(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if self.is_after(other) {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

impl WrapOrd for Pts {
    fn is_after(&self, other: &Self) -> bool {
        self.after(*other)
    }
}

impl WrapOrd for PtsBound {
    fn is_after(&self, other: &Self) -> bool {
        self.after(*other)
    }
}

/// Returns the chronologically latest item, if any
pub fn latest<T: WrapOrd>(items: impl IntoIterator<Item = T>) -> Option<T> {
    items
        .into_iter()
        .reduce(|best, item| if item.is_after(&best) { item } else { best })
}

/// Returns the chronologically earliest item, if any
pub fn earliest<T: WrapOrd>(items: impl IntoIterator<Item = T>) -> Option<T> {
    items
        .into_iter()
        .reduce(|best, item| if best.is_after(&item) { item } else { best })
}
