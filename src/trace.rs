//! Optional diagnostics.
//!
//! `trace_event!` forwards to `tracing::trace!` when the `tracing` feature is
//! enabled and expands to nothing otherwise, so call sites stay free of `cfg`
//! attributes.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

pub(crate) use trace_event;
