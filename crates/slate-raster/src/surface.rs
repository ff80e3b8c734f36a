#![forbid(unsafe_code)]

//! The raster operations the layout core consumes.
//!
//! The core never touches pixels directly: it composites through this trait,
//! so geometry can be tested against a call-recording fake and the pixel
//! backend can be swapped without touching the layout algebra.
//!
//! # Invariants
//!
//! 1. `crop` regions extending past the source are padded with transparent
//!    pixels, never clamped away (a crop always has the requested size).
//! 2. `paste_onto` overwrites destination pixels (no alpha blending) and
//!    clips to the target's bounds.
//! 3. `rotated` takes degrees in multiples of 90, counter-clockwise for
//!    positive values, and expands the output to fit the rotated bounds.
//! 4. Drawing operations clip to the surface; out-of-bounds coordinates are
//!    ignored rather than an error.

use std::path::Path;

use slate_core::color::Rgba;
use slate_core::geometry::{Point, Rect, Size};

use crate::canvas::{ImageMode, RasterError};

/// An owned rectangular pixel buffer with the operations layout needs.
pub trait Surface: Sized {
    /// Create a blank surface filled with a single colour.
    ///
    /// `mode` is an opaque pixel-format tag carried through from layout
    /// configuration; implementations may use it to pick an encoding.
    fn blank(size: Size, fill: Rgba, mode: ImageMode) -> Self;

    /// Dimensions of the surface.
    fn size(&self) -> Size;

    /// Copy out a region, padding anything outside the source bounds.
    fn crop(&self, rect: Rect) -> Self;

    /// Overwrite a region of `target` with this surface's pixels, clipped
    /// to the target's bounds.
    fn paste_onto(&self, target: &mut Self, at: Point);

    /// A copy rotated counter-clockwise by `degrees` (a multiple of 90),
    /// with the canvas expanded to the rotated bounds.
    fn rotated(&self, degrees: i32) -> Self;

    /// Draw a rectangle outline of the given stroke width, inset inside
    /// `rect`.
    fn draw_rect_outline(&mut self, rect: Rect, colour: Rgba, width: u32);

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, colour: Rgba);

    /// Encode and write the surface to `path` (format from the extension).
    fn save(&self, path: &Path) -> Result<(), RasterError>;
}
