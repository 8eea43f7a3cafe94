//! Logging shim for the interpreter.
//!
//! With the `tracing` feature `debug!` goes to `tracing`; without it the
//! calls compile away.

#[cfg(feature = "tracing")]
pub use tracing::debug;

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::debug;
