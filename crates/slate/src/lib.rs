#![forbid(unsafe_code)]

//! Slate public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a lightweight
//! prelude for day-to-day usage.
//!
//! ```
//! use slate::prelude::*;
//!
//! let mut tree = LayoutTree::<Canvas>::new(
//!     DEFAULT_DISPLAY_SIZE,
//!     NodeSpec::horizontal().border((1, Rgba::BLACK)),
//! )?;
//! tree.add_child(tree.root(), NodeSpec::new())?;
//! tree.add_child(tree.root(), NodeSpec::new().bias(3))?;
//! let image = tree.draw()?;
//! # let _ = image;
//! # Ok::<(), slate::Error>(())
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use slate_core::align::{Alignment, Anchor};
pub use slate_core::border::{Border, BorderSpec, InvalidBorderSpec};
pub use slate_core::color::Rgba;
pub use slate_core::geometry::{DEFAULT_DISPLAY_SIZE, Point, Rect, Sides, Size};
pub use slate_core::rotation::Rotation;

// --- Raster re-exports -----------------------------------------------------

pub use slate_raster::{Canvas, ImageMode, RasterError, Surface};

// --- Layout re-exports -----------------------------------------------------

pub use slate_layout::index_order::alternating;
pub use slate_layout::{
    Axis, Bias, ContentPainter, Distribution, InvalidBias, LayoutError, LayoutNode, LayoutTree,
    NodeId, NodeSpec, distribute,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for slate applications.
#[derive(Debug)]
pub enum Error {
    /// Malformed border specification.
    Border(InvalidBorderSpec),
    /// Tree construction or mutation failure.
    Layout(LayoutError),
    /// Raster backend failure.
    Raster(RasterError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Border(err) => err.fmt(f),
            Self::Layout(err) => err.fmt(f),
            Self::Raster(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Border(err) => Some(err),
            Self::Layout(err) => Some(err),
            Self::Raster(err) => Some(err),
        }
    }
}

impl From<InvalidBorderSpec> for Error {
    fn from(err: InvalidBorderSpec) -> Self {
        Self::Border(err)
    }
}

impl From<LayoutError> for Error {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

impl From<RasterError> for Error {
    fn from(err: RasterError) -> Self {
        Self::Raster(err)
    }
}

/// Standard result type for slate APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Axis, Bias, Border, Canvas, ContentPainter, DEFAULT_DISPLAY_SIZE, Error, ImageMode,
        LayoutTree, NodeId, NodeSpec, Point, Rect, Result, Rgba, Rotation, Sides, Size, Surface,
    };

    pub use crate::{core, layout, raster};
}

pub use slate_core as core;
pub use slate_layout as layout;
pub use slate_raster as raster;
