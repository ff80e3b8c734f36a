#![forbid(unsafe_code)]

//! Raster collaborator for slate: the [`Surface`] seam the layout core
//! draws through, and [`Canvas`], its `image`-backed implementation.

pub mod canvas;
pub mod surface;

#[cfg(any(test, feature = "test-helpers"))]
pub mod trace;

pub use canvas::{Canvas, ImageMode, RasterError};
pub use surface::Surface;
