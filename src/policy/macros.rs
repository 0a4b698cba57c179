//! Rollover policy macros

/// Macro to define a custom rollover policy
///
/// `upper` defaults to the maximum minus `lower`, which mirrors the window on
/// both sides of the wrap.
///
/// # Example
///
/// ```rust
/// use pts_algebra::policy::{RolloverPolicy, define_rollover_policy};
///
/// define_rollover_policy! {
///     name: TenMinutePolicy,
///     lower: 10 * 60 * 90_000,
/// }
///
/// assert!(TenMinutePolicy::validate().is_ok());
/// assert_eq!(TenMinutePolicy::UPPER_THRESHOLD, 8_589_934_591 - 54_000_000);
/// ```
#[macro_export]
macro_rules! define_rollover_policy {
    (
        $(#[$meta:meta])*
        name: $name:ident,
        lower: $lower:expr
        $(, upper: $upper:expr)?
        $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl $crate::policy::RolloverPolicy for $name {
            const LOWER_THRESHOLD: u64 = $lower;
            const UPPER_THRESHOLD: u64 =
                $crate::define_rollover_policy!(@default $($upper)?, $crate::clock::PTS_MAX - $lower);
        }
    };

    (@default $value:expr, $default:expr) => { $value };
    (@default , $default:expr) => { $default };
}

pub use define_rollover_policy;

#[cfg(test)]
mod tests {
    use crate::clock::PTS_MAX;
    use crate::policy::RolloverPolicy;

    define_rollover_policy! {
        name: MirroredPolicy,
        lower: 1_000,
    }

    define_rollover_policy! {
        name: SkewedPolicy,
        lower: 1_000,
        upper: PTS_MAX - 50,
    }

    #[test]
    fn test_macro_defaults_upper() {
        assert_eq!(MirroredPolicy::LOWER_THRESHOLD, 1_000);
        assert_eq!(MirroredPolicy::UPPER_THRESHOLD, PTS_MAX - 1_000);
        assert!(MirroredPolicy::validate().is_ok());
    }

    #[test]
    fn test_macro_explicit_upper() {
        assert_eq!(SkewedPolicy::UPPER_THRESHOLD, PTS_MAX - 50);
        assert_eq!(SkewedPolicy::window_ticks(), 1_000);
    }
}
