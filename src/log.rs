//! `debug!` and `info!` for composer and CLI diagnostics.
//!
//! Builds with the `tracing` feature get the real macros. Other builds, such
//! as the wasm wrapper, compile every call site away so the library never
//! pulls in a subscriber.

#[cfg(feature = "tracing")]
pub use tracing::{debug, info};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, info};
