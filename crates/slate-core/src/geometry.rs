#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All dimensions are pixel counts in `u32` (the raster backend indexes with
//! `u32`) with origin at the top-left. Arithmetic saturates rather than
//! wrapping so degenerate inputs collapse to empty shapes instead of
//! panicking.

/// A pixel dimension pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Area in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The same size with width and height exchanged.
    #[inline]
    pub const fn swapped(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Native resolution of the small e-paper panel this engine originally
/// targeted. A convenient default for root layouts.
pub const DEFAULT_DISPLAY_SIZE: Size = Size::new(250, 122);

/// A pixel position, relative to some enclosing rectangle's top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    /// Horizontal offset.
    pub x: u32,
    /// Vertical offset.
    pub y: u32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// A rectangle for slots, crop regions, and drawable bounds.
///
/// Uses pixel coordinates (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u32,
    /// Top edge (inclusive).
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Top-left corner.
    #[inline]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Dimensions.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Left edge (inclusive). Alias for `self.x`.
    #[inline]
    pub const fn left(&self) -> u32 {
        self.x
    }

    /// Top edge (inclusive). Alias for `self.y`.
    #[inline]
    pub const fn top(&self) -> u32 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Area in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a pixel is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns an empty rectangle if the rectangles don't overlap.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Rect {
        self.intersection_opt(other).unwrap_or_default()
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    #[inline]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Create a new rectangle inside the current one with the given margin.
    pub fn inner(&self, margin: Sides) -> Rect {
        let x = self.x.saturating_add(margin.left);
        let y = self.y.saturating_add(margin.top);
        let width = self
            .width
            .saturating_sub(margin.left)
            .saturating_sub(margin.right);
        let height = self
            .height
            .saturating_sub(margin.top)
            .saturating_sub(margin.bottom);

        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

/// Per-edge widths for borders and margins, in CSS order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Sides {
    /// Create new sides with equal values.
    pub const fn all(val: u32) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Create new sides with specific values.
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }

    /// Largest of the four widths.
    #[inline]
    pub const fn max_width(&self) -> u32 {
        let v = if self.top > self.right {
            self.top
        } else {
            self.right
        };
        let h = if self.bottom > self.left {
            self.bottom
        } else {
            self.left
        };
        if v > h { v } else { h }
    }
}

impl From<u32> for Sides {
    fn from(val: u32) -> Self {
        Self::all(val)
    }
}

impl From<(u32, u32)> for Sides {
    fn from((vertical, horizontal): (u32, u32)) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl From<(u32, u32, u32, u32)> for Sides {
    fn from((top, right, bottom, left): (u32, u32, u32, u32)) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect, Sides, Size};

    // --- Size ---

    #[test]
    fn size_area_and_empty() {
        assert_eq!(Size::new(10, 20).area(), 200);
        assert!(Size::new(0, 5).is_empty());
        assert!(Size::new(5, 0).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    #[test]
    fn size_swapped() {
        assert_eq!(Size::new(200, 100).swapped(), Size::new(100, 200));
        assert_eq!(Size::new(7, 7).swapped(), Size::new(7, 7));
    }

    // --- Rect constructors and accessors ---

    #[test]
    fn rect_new_and_default() {
        let r = Rect::new(5, 10, 20, 15);
        assert_eq!(r.x, 5);
        assert_eq!(r.y, 10);
        assert_eq!(r.width, 20);
        assert_eq!(r.height, 15);
        assert_eq!(Rect::default(), Rect::new(0, 0, 0, 0));
    }

    #[test]
    fn rect_from_size() {
        let r = Rect::from_size(Size::new(250, 122));
        assert_eq!(r.position(), Point::ZERO);
        assert_eq!(r.size(), Size::new(250, 122));
    }

    #[test]
    fn rect_left_top_right_bottom() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.top(), 20);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
    }

    #[test]
    fn rect_right_bottom_saturating() {
        let r = Rect::new(u32::MAX - 5, u32::MAX - 3, 100, 100);
        assert_eq!(r.right(), u32::MAX);
        assert_eq!(r.bottom(), u32::MAX);
    }

    // --- Contains ---

    #[test]
    fn rect_contains_boundary_conditions() {
        let r = Rect::new(0, 0, 5, 5);
        assert!(r.contains(0, 0));
        assert!(r.contains(4, 4));
        // Right and bottom edges are exclusive
        assert!(!r.contains(5, 0));
        assert!(!r.contains(0, 5));
    }

    #[test]
    fn rect_contains_empty_rect() {
        let r = Rect::new(5, 5, 0, 0);
        assert!(!r.contains(5, 5));
    }

    // --- Intersection ---

    #[test]
    fn rect_intersection_overlaps() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 2, 4, 4);
        assert_eq!(a.intersection(&b), Rect::new(2, 2, 2, 2));
    }

    #[test]
    fn rect_intersection_no_overlap_is_empty() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(3, 3, 2, 2);
        assert_eq!(a.intersection(&b), Rect::default());
        assert_eq!(a.intersection_opt(&b), None);
    }

    // --- Inner ---

    #[test]
    fn rect_inner_reduces() {
        let rect = Rect::new(0, 0, 10, 10);
        let inner = rect.inner(Sides::new(1, 2, 3, 4));
        assert_eq!(inner, Rect::new(4, 1, 4, 6));
    }

    #[test]
    fn rect_inner_collapses_when_margin_exceeds() {
        let rect = Rect::new(0, 0, 3, 3);
        let inner = rect.inner(Sides::all(2));
        assert!(inner.is_empty());
    }

    // --- Sides ---

    #[test]
    fn sides_constructors_and_conversions() {
        assert_eq!(Sides::all(3), Sides::from(3));
        assert_eq!(Sides::from((1, 2)), Sides::new(1, 2, 1, 2));
        assert_eq!(Sides::from((1, 2, 3, 4)), Sides::new(1, 2, 3, 4));
    }

    #[test]
    fn sides_sums() {
        let sides = Sides::new(1, 2, 3, 4);
        assert_eq!(sides.horizontal_sum(), 6);
        assert_eq!(sides.vertical_sum(), 4);
        assert_eq!(sides.max_width(), 4);
    }
}
