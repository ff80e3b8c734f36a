#![forbid(unsafe_code)]

//! Quarter-turn orientation for layout regions.
//!
//! # Invariants
//!
//! 1. Rotation is fixed per node at construction and never re-derived from
//!    ancestors.
//! 2. Sideways rotations (`Right`, `Left`) swap a region's stored
//!    width/height, so all sizing runs on the rotation-adjusted frame.
//! 3. At render time the composited buffer is rotated by `-degrees()` with
//!    canvas expansion, restoring the dimensions the parent allocated.

use crate::geometry::Size;

/// Orientation of a region's content, in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(u8)]
pub enum Rotation {
    /// Content reads upright.
    #[default]
    Up = 0,
    /// Content reads top-to-bottom along the right edge.
    Right = 1,
    /// Content reads upside down.
    Down = 2,
    /// Content reads top-to-bottom along the left edge.
    Left = 3,
}

impl Rotation {
    /// Number of clockwise quarter turns from `Up`.
    #[inline]
    pub const fn quarter_turns(self) -> u32 {
        self as u32
    }

    /// Rotation angle in degrees (`90 x quarter turns`).
    #[inline]
    pub const fn degrees(self) -> i32 {
        self.quarter_turns() as i32 * 90
    }

    /// Whether this rotation exchanges the horizontal and vertical axes.
    #[inline]
    pub const fn is_sideways(self) -> bool {
        self.quarter_turns() % 2 == 1
    }

    /// Adjust a requested size into this rotation's working frame.
    ///
    /// Sideways rotations swap width and height; the other two leave the
    /// size untouched.
    #[inline]
    pub const fn apply(self, size: Size) -> Size {
        if self.is_sideways() {
            size.swapped()
        } else {
            size
        }
    }
}
