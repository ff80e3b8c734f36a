#![forbid(unsafe_code)]

//! A call-recording [`Surface`] for geometry-only tests.
//!
//! Tracks sizes and operations without touching pixels, so layout tests can
//! assert exactly what the compositor asked the raster side to do.

use std::path::Path;

use slate_core::color::Rgba;
use slate_core::geometry::{Point, Rect, Size};

use crate::canvas::{ImageMode, RasterError};
use crate::surface::Surface;

/// One recorded raster operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceOp {
    Blank { size: Size, fill: Rgba },
    Crop { rect: Rect },
    Paste { at: Point, size: Size },
    Rotate { degrees: i32 },
    Outline { rect: Rect, width: u32 },
    Fill { rect: Rect },
}

/// A surface that records operations instead of producing pixels.
///
/// Derived surfaces (crops, rotations) inherit the history of the surface
/// they came from, so the trace on a final composited output lists the
/// whole pipeline in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TraceSurface {
    size: Size,
    ops: Vec<TraceOp>,
}

impl TraceSurface {
    /// All recorded operations, oldest first.
    pub fn ops(&self) -> &[TraceOp] {
        &self.ops
    }

    /// Number of recorded operations matching `pred`.
    pub fn count(&self, pred: impl Fn(&TraceOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for TraceSurface {
    fn blank(size: Size, fill: Rgba, _mode: ImageMode) -> Self {
        Self {
            size,
            ops: vec![TraceOp::Blank { size, fill }],
        }
    }

    fn size(&self) -> Size {
        self.size
    }

    fn crop(&self, rect: Rect) -> Self {
        let mut ops = self.ops.clone();
        ops.push(TraceOp::Crop { rect });
        Self {
            size: rect.size(),
            ops,
        }
    }

    fn paste_onto(&self, target: &mut Self, at: Point) {
        target.ops.push(TraceOp::Paste {
            at,
            size: self.size,
        });
    }

    fn rotated(&self, degrees: i32) -> Self {
        let turns = degrees.rem_euclid(360) / 90;
        let size = if turns % 2 == 1 {
            self.size.swapped()
        } else {
            self.size
        };
        let mut ops = self.ops.clone();
        ops.push(TraceOp::Rotate { degrees });
        Self { size, ops }
    }

    fn draw_rect_outline(&mut self, rect: Rect, _colour: Rgba, width: u32) {
        self.ops.push(TraceOp::Outline { rect, width });
    }

    fn fill_rect(&mut self, rect: Rect, _colour: Rgba) {
        self.ops.push(TraceOp::Fill { rect });
    }

    fn save(&self, _path: &Path) -> Result<(), RasterError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{TraceOp, TraceSurface};
    use crate::canvas::ImageMode;
    use crate::surface::Surface;
    use slate_core::color::Rgba;
    use slate_core::geometry::{Point, Rect, Size};

    #[test]
    fn blank_records_itself() {
        let s = TraceSurface::blank(Size::new(10, 5), Rgba::WHITE, ImageMode::RGB);
        assert_eq!(s.size(), Size::new(10, 5));
        assert_eq!(
            s.ops(),
            &[TraceOp::Blank {
                size: Size::new(10, 5),
                fill: Rgba::WHITE
            }]
        );
    }

    #[test]
    fn crop_inherits_history_and_resizes() {
        let s = TraceSurface::blank(Size::new(10, 5), Rgba::WHITE, ImageMode::RGB);
        let cut = s.crop(Rect::new(2, 1, 4, 3));
        assert_eq!(cut.size(), Size::new(4, 3));
        assert_eq!(cut.ops().len(), 2);
    }

    #[test]
    fn rotation_tracks_dimension_swap() {
        let s = TraceSurface::blank(Size::new(10, 5), Rgba::WHITE, ImageMode::RGB);
        assert_eq!(s.rotated(-90).size(), Size::new(5, 10));
        assert_eq!(s.rotated(-180).size(), Size::new(10, 5));
    }

    #[test]
    fn paste_records_on_target() {
        let mut base = TraceSurface::blank(Size::new(10, 5), Rgba::WHITE, ImageMode::RGB);
        let patch = TraceSurface::blank(Size::new(2, 2), Rgba::BLACK, ImageMode::RGB);
        patch.paste_onto(&mut base, Point::new(3, 1));
        assert_eq!(
            base.ops().last(),
            Some(&TraceOp::Paste {
                at: Point::new(3, 1),
                size: Size::new(2, 2)
            })
        );
        assert_eq!(base.count(|op| matches!(op, TraceOp::Paste { .. })), 1);
    }
}
