//! Timestamp constants

/// Ticks per second of the MPEG system time base used by PTS
pub const PTS_CLOCK_HZ: u64 = 90_000;

/// Largest value a 33-bit PTS can hold, 2^33 - 1
pub const PTS_MAX: u64 = (1 << 33) - 1;

/// Number of distinct PTS values, 2^33
pub const PTS_MODULUS: u64 = PTS_MAX + 1;

/// Thirty minutes of ticks, the width of each rollover band
pub const ROLLOVER_WINDOW_TICKS: u64 = 30 * 60 * PTS_CLOCK_HZ;

/// Values below this may have been sampled just after a wrap
pub const LOWER_ROLLOVER_THRESHOLD: u64 = ROLLOVER_WINDOW_TICKS;

/// Values above this may have been sampled just before a wrap
pub const UPPER_ROLLOVER_THRESHOLD: u64 = PTS_MAX - ROLLOVER_WINDOW_TICKS;
