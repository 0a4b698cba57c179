//! Core error types for pts-algebra

use core::fmt;

/// Error type for the checked timestamp paths
///
/// Comparison, duration and addition are total over `u64` and never produce
/// this type. It is returned only where a caller explicitly asks for
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PtsError {
    /// Raw value does not fit in 33 bits
    OutOfRange(u64),
    /// Rollover thresholds are inconsistent with each other or with the maximum
    InvalidPolicy(&'static str),
}

impl PtsError {
    /// Returns true if this error came from timestamp construction
    pub const fn is_range_error(&self) -> bool {
        matches!(self, Self::OutOfRange(_))
    }

    /// Returns the error category as a string
    pub const fn category(&self) -> &'static str {
        match self {
            Self::OutOfRange(_) => "Range",
            Self::InvalidPolicy(_) => "Policy",
        }
    }
}

impl fmt::Display for PtsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(value) => write!(
                f,
                "timestamp {} exceeds the 33-bit maximum {}",
                value,
                crate::clock::PTS_MAX
            ),
            Self::InvalidPolicy(reason) => write!(f, "invalid rollover policy: {}", reason),
        }
    }
}

impl core::error::Error for PtsError {}

/// Result type for checked timestamp operations
pub type PtsResult<T> = Result<T, PtsError>;
