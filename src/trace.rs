//! Internal trace hook
//!
//! With the `log` feature, `pts_trace!` forwards to `log::trace!` under the
//! `pts_algebra::clock` target. Without it the macro expands to nothing and its
//! arguments are never evaluated.

#[cfg(feature = "log")]
macro_rules! pts_trace {
    ($($arg:tt)+) => {
        ::log::trace!(target: "pts_algebra::clock", $($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! pts_trace {
    ($($arg:tt)+) => {};
}

pub(crate) use pts_trace;
