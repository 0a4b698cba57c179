//! Rollover policy trait and presets

use crate::clock::{LOWER_ROLLOVER_THRESHOLD, PTS_CLOCK_HZ, PTS_MAX, UPPER_ROLLOVER_THRESHOLD};
use crate::error::{PtsError, PtsResult};
use crate::policy::define_rollover_policy;

/// Compile-time rollover window
///
/// A value below `LOWER_THRESHOLD` paired with a value above
/// `UPPER_THRESHOLD` is read as "the low value was sampled after the counter
/// wrapped, the high value before it".
///
/// Only the band widths are configurable. Every policy works on the 33-bit
/// range ending at [`PTS_MAX`].
pub trait RolloverPolicy {
    /// Values strictly below this are candidates for the post-wrap side
    const LOWER_THRESHOLD: u64;

    /// Values strictly above this are candidates for the pre-wrap side
    const UPPER_THRESHOLD: u64;

    /// Width of the lower band in ticks
    fn window_ticks() -> u64 {
        Self::LOWER_THRESHOLD
    }

    /// Checks that the two bands are non-empty and do not overlap
    fn validate() -> PtsResult<()> {
        if Self::LOWER_THRESHOLD == 0 {
            return Err(PtsError::InvalidPolicy("lower threshold is zero"));
        }
        if Self::UPPER_THRESHOLD >= PTS_MAX {
            return Err(PtsError::InvalidPolicy(
                "upper threshold leaves no room below the maximum",
            ));
        }
        if Self::LOWER_THRESHOLD > Self::UPPER_THRESHOLD {
            return Err(PtsError::InvalidPolicy(
                "lower threshold is above the upper threshold",
            ));
        }
        Ok(())
    }
}

/// Thirty minutes of 90 kHz ticks on either side of the wrap
///
/// These are the thresholds every un-suffixed operation on
/// [`Pts`](crate::clock::Pts) uses. Changing them breaks compatibility with
/// streams validated against this behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardPolicy;

impl RolloverPolicy for StandardPolicy {
    const LOWER_THRESHOLD: u64 = LOWER_ROLLOVER_THRESHOLD;
    const UPPER_THRESHOLD: u64 = UPPER_ROLLOVER_THRESHOLD;
}

define_rollover_policy! {
    /// Five-minute window, for callers that only compare adjacent packets
    name: ShortWindowPolicy,
    lower: 5 * 60 * PTS_CLOCK_HZ,
}

define_rollover_policy! {
    /// Sixty-minute window, for sparse streams with long gaps between samples
    name: LongWindowPolicy,
    lower: 60 * 60 * PTS_CLOCK_HZ,
}
