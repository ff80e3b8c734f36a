#![forbid(unsafe_code)]

//! Anchor points for placing content inside a region.

use crate::geometry::{Point, Size};

/// Position along a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Alignment {
    /// Flush with the leading edge (left or top).
    #[default]
    Start,
    /// Centered, biased toward the leading edge on odd remainders.
    Center,
    /// Flush with the trailing edge (right or bottom).
    End,
}

impl Alignment {
    /// Offset of an `inner` extent placed inside an `outer` extent.
    ///
    /// When `inner` exceeds `outer` the offset clamps to zero.
    #[inline]
    pub const fn place(self, inner: u32, outer: u32) -> u32 {
        match self {
            Self::Start => 0,
            Self::Center => outer.saturating_sub(inner) / 2,
            Self::End => outer.saturating_sub(inner),
        }
    }
}

/// A two-axis anchor, one of the nine classic positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Anchor {
    pub horizontal: Alignment,
    pub vertical: Alignment,
}

impl Anchor {
    pub const TOP_LEFT: Self = Self::new(Alignment::Start, Alignment::Start);
    pub const TOP_CENTER: Self = Self::new(Alignment::Center, Alignment::Start);
    pub const TOP_RIGHT: Self = Self::new(Alignment::End, Alignment::Start);
    pub const MIDDLE_LEFT: Self = Self::new(Alignment::Start, Alignment::Center);
    pub const MIDDLE_CENTER: Self = Self::new(Alignment::Center, Alignment::Center);
    pub const MIDDLE_RIGHT: Self = Self::new(Alignment::End, Alignment::Center);
    pub const BOTTOM_LEFT: Self = Self::new(Alignment::Start, Alignment::End);
    pub const BOTTOM_CENTER: Self = Self::new(Alignment::Center, Alignment::End);
    pub const BOTTOM_RIGHT: Self = Self::new(Alignment::End, Alignment::End);

    /// Create an anchor from per-axis alignments.
    #[inline]
    pub const fn new(horizontal: Alignment, vertical: Alignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Top-left offset of an `inner` size placed inside an `outer` size.
    #[inline]
    pub const fn place(self, inner: Size, outer: Size) -> Point {
        Point::new(
            self.horizontal.place(inner.width, outer.width),
            self.vertical.place(inner.height, outer.height),
        )
    }
}
