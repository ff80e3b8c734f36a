#![forbid(unsafe_code)]

//! Core: geometry, colour, rotation, and border primitives for slate.

pub mod align;
pub mod border;
pub mod color;
pub mod geometry;
pub mod logging;
pub mod rotation;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
