//! Crate-internal logging shims.
//!
//! `debug!` and `warn!` forward to `tracing` when the `tracing` feature is
//! enabled and discard their arguments otherwise. Neither is exported.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($field:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! warn_ {
    ($($field:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use debug;
#[cfg(not(feature = "tracing"))]
pub(crate) use warn_ as warn;
