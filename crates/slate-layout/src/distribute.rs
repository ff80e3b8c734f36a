#![forbid(unsafe_code)]

//! The partition algorithm: exact integer subdivision of a region's drawable
//! area among weighted children.
//!
//! [`distribute`] is a pure function from a node's size, borders, packing
//! axis, and its children's biases to concrete per-child slot sizes, spacer
//! widths, rounding paddings, and top-left offsets. Slot widths are floors of
//! the ideal weighted share; the entire rounding remainder is paid out one
//! pixel at a time into the spacer gaps in [`alternating`] order, so slots,
//! spacers, and borders always reconstruct the parent dimension exactly.

use std::fmt;
use std::num::NonZeroU32;

use smallvec::{SmallVec, smallvec};

use slate_core::geometry::{Point, Rect, Sides, Size};

use crate::index_order::alternating;

/// Direction along which a region distributes its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Axis {
    /// Children side by side, left to right.
    #[default]
    Horizontal,
    /// Children stacked, top to bottom.
    Vertical,
}

impl Axis {
    /// The extent of `size` along this axis.
    #[inline]
    pub const fn main(self, size: Size) -> u32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// The extent of `size` perpendicular to this axis.
    #[inline]
    pub const fn cross(self, size: Size) -> u32 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Assemble a size from main- and cross-axis extents.
    #[inline]
    pub const fn size(self, main: u32, cross: u32) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    /// Assemble a point from main- and cross-axis offsets.
    #[inline]
    pub const fn point(self, main: u32, cross: u32) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }

    /// The leading border edge on this axis (left or top).
    #[inline]
    pub const fn leading(self, borders: Sides) -> u32 {
        match self {
            Self::Horizontal => borders.left,
            Self::Vertical => borders.top,
        }
    }

    /// The leading border edge perpendicular to this axis.
    #[inline]
    pub const fn leading_cross(self, borders: Sides) -> u32 {
        match self {
            Self::Horizontal => borders.top,
            Self::Vertical => borders.left,
        }
    }
}

/// A child's relative weight when siblings compete for space.
///
/// Always positive; a zero weight is rejected at the boundary with
/// [`InvalidBias`] rather than producing a degenerate division downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bias(NonZeroU32);

impl Bias {
    /// The default weight.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Validate a raw weight.
    pub fn new(raw: u32) -> Result<Self, InvalidBias> {
        NonZeroU32::new(raw)
            .map(Self)
            .ok_or(InvalidBias { bias: raw })
    }

    /// The raw weight (always > 0).
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Bias {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Zero packing bias supplied where a positive weight is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBias {
    /// The rejected raw value.
    pub bias: u32,
}

impl fmt::Display for InvalidBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid packing bias {} (must be >= 1)", self.bias)
    }
}

impl std::error::Error for InvalidBias {}

/// Per-child geometry computed by [`distribute`].
///
/// All sequences are indexed in child insertion order; `spacers` and
/// `paddings` have one entry per gap between consecutive children
/// (`len() - 1`, or zero for a single child).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Distribution {
    /// Allocated size per child, cross axis already filled in.
    pub slots: SmallVec<[Size; 8]>,
    /// Final gap widths between consecutive children (ideal + padding).
    pub spacers: SmallVec<[u32; 8]>,
    /// Extra pixels absorbed by each gap to consume the rounding remainder.
    pub paddings: SmallVec<[u32; 8]>,
    /// Top-left offset per child, relative to the parent's outer rectangle.
    pub top_lefts: SmallVec<[Point; 8]>,
    /// Set when the drawable area was too small for the child count and
    /// slots were clamped to zero on the packing axis. The exact-partition
    /// invariant is waived in this state.
    pub clamped: bool,
}

impl Distribution {
    /// Number of children covered by this distribution.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the distribution covers no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Partition a region's drawable area among weighted children.
///
/// `size` is the region's outer size, `borders` its per-edge widths, `axis`
/// the packing direction, and `biases` the children's weights in insertion
/// order. The spacer between adjacent children is as wide as the region's
/// leading border edge on the packing axis, so a borderless region packs its
/// children with zero-width gaps.
///
/// Guarantees, whenever `clamped` is false and `biases` is non-empty:
///
/// - sum of slot extents + sum of spacers + leading and trailing borders
///   equals `size` on the packing axis, exactly;
/// - equal biases receive identical slots (the remainder goes to spacers,
///   never to slots);
/// - every `top_lefts[i] + slots[i]` fits inside the drawable rectangle.
pub fn distribute(size: Size, borders: Sides, axis: Axis, biases: &[Bias]) -> Distribution {
    let count = biases.len();
    if count == 0 {
        return Distribution::default();
    }

    let drawable = Rect::from_size(size).inner(borders);
    let origin = Point::new(borders.left, borders.top);

    if count == 1 {
        // No spacers: the only child takes the full drawable area.
        return Distribution {
            slots: smallvec![drawable.size()],
            spacers: SmallVec::new(),
            paddings: SmallVec::new(),
            top_lefts: smallvec![origin],
            clamped: false,
        };
    }

    let main = axis.main(drawable.size());
    let cross = axis.cross(drawable.size());
    let ideal_spacer = axis.leading(borders);
    let gaps = count - 1;

    let total_weight: u32 = biases.iter().map(|b| b.get()).sum();
    let available = main.saturating_sub(ideal_spacer.saturating_mul(gaps as u32));
    let unit = available / total_weight;

    let clamped = unit == 0;
    if clamped {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            width = size.width,
            height = size.height,
            children = count,
            total_weight,
            available,
            "insufficient space: slots clamped to zero on the packing axis"
        );
    }

    // Slots are floors; the leftover is paid into the gaps one pixel at a
    // time, alternating from both ends inward and cycling when the biases
    // make the remainder exceed the gap count.
    let mut paddings: SmallVec<[u32; 8]> = smallvec![0; gaps];
    if !clamped {
        let leftover = available - unit * total_weight;
        let order = alternating(gaps);
        for k in 0..leftover as usize {
            paddings[order[k % gaps]] += 1;
        }
    }
    let spacers: SmallVec<[u32; 8]> = paddings.iter().map(|p| ideal_spacer + p).collect();

    let lead_cross = axis.leading_cross(borders);
    let mut slots = SmallVec::with_capacity(count);
    let mut top_lefts = SmallVec::with_capacity(count);
    let mut cursor = axis.leading(borders);
    for (i, bias) in biases.iter().enumerate() {
        let extent = unit * bias.get();
        slots.push(axis.size(extent, cross));
        top_lefts.push(axis.point(cursor, lead_cross));
        cursor += extent;
        if i < gaps {
            cursor += spacers[i];
        }
    }

    Distribution {
        slots,
        spacers,
        paddings,
        top_lefts,
        clamped,
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, Bias, InvalidBias, distribute};
    use slate_core::geometry::{Point, Sides, Size};

    fn biases(raw: &[u32]) -> Vec<Bias> {
        raw.iter().map(|&b| Bias::new(b).unwrap()).collect()
    }

    // --- Bias validation ---

    #[test]
    fn zero_bias_is_rejected() {
        assert_eq!(Bias::new(0), Err(InvalidBias { bias: 0 }));
        assert_eq!(Bias::new(3).unwrap().get(), 3);
        assert_eq!(Bias::default().get(), 1);
    }

    // --- Degenerate child counts ---

    #[test]
    fn no_children_is_a_no_op() {
        let d = distribute(Size::new(100, 50), Sides::all(2), Axis::Horizontal, &[]);
        assert!(d.is_empty());
        assert!(d.spacers.is_empty());
        assert!(!d.clamped);
    }

    #[test]
    fn single_child_takes_full_drawable() {
        let d = distribute(
            Size::new(100, 50),
            Sides::all(2),
            Axis::Horizontal,
            &biases(&[5]),
        );
        assert_eq!(d.slots.as_slice(), &[Size::new(96, 46)]);
        assert_eq!(d.top_lefts.as_slice(), &[Point::new(2, 2)]);
        assert!(d.spacers.is_empty());
        assert!(d.paddings.is_empty());
    }

    // --- Bias proportionality ---

    #[test]
    fn bias_three_to_one_splits_200() {
        let d = distribute(
            Size::new(200, 100),
            Sides::all(0),
            Axis::Horizontal,
            &biases(&[3, 1]),
        );
        assert_eq!(
            d.slots.as_slice(),
            &[Size::new(150, 100), Size::new(50, 100)]
        );
        assert_eq!(d.top_lefts.as_slice(), &[Point::ZERO, Point::new(150, 0)]);
        assert_eq!(d.spacers.as_slice(), &[0]);
    }

    // --- Spacer coupling to borders ---

    #[test]
    fn spacer_width_equals_packing_axis_border() {
        let d = distribute(
            Size::new(200, 300),
            Sides::all(1),
            Axis::Vertical,
            &biases(&[1, 1, 1, 1]),
        );
        // drawable height 298, 3 ideal spacers of 1 leave 295; unit 73,
        // remainder 3 pads every gap once.
        assert_eq!(d.slots.as_slice(), &[Size::new(198, 73); 4]);
        assert_eq!(d.spacers.as_slice(), &[2, 2, 2]);
        assert_eq!(d.paddings.as_slice(), &[1, 1, 1]);
        let ys: Vec<u32> = d.top_lefts.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![1, 76, 151, 226]);
        assert!(d.top_lefts.iter().all(|p| p.x == 1));
    }

    #[test]
    fn borderless_region_has_zero_gaps() {
        let d = distribute(
            Size::new(10, 4),
            Sides::all(0),
            Axis::Horizontal,
            &biases(&[1, 1, 1]),
        );
        // unit 3, leftover 1 goes to the first gap.
        assert_eq!(d.spacers.as_slice(), &[1, 0]);
        assert_eq!(d.paddings.as_slice(), &[1, 0]);
        assert_eq!(d.slots.as_slice(), &[Size::new(3, 4); 3]);
    }

    // --- Remainder distribution ---

    #[test]
    fn remainder_alternates_from_both_ends() {
        // width 23, 5 children, no border: unit 4, leftover 3.
        // alternating(4) = [0, 3, 1, 2] so gaps 0, 3, 1 get the pixels.
        let d = distribute(
            Size::new(23, 10),
            Sides::all(0),
            Axis::Horizontal,
            &biases(&[1; 5]),
        );
        assert_eq!(d.paddings.as_slice(), &[1, 1, 0, 1]);
    }

    #[test]
    fn large_remainder_cycles_the_order() {
        // Biases sum to 10 with 2 children: leftover can reach 9, larger
        // than the single gap, which then absorbs all of it.
        let d = distribute(
            Size::new(19, 5),
            Sides::all(0),
            Axis::Horizontal,
            &biases(&[7, 3]),
        );
        // unit 1, leftover 9, one gap.
        assert_eq!(d.slots.as_slice(), &[Size::new(7, 5), Size::new(3, 5)]);
        assert_eq!(d.spacers.as_slice(), &[9]);
        assert_eq!(7 + 9 + 3, 19);
    }

    // --- Exact partition ---

    #[test]
    fn slots_spacers_and_borders_reconstruct_the_size() {
        for (w, n, b) in [(250u32, 4usize, 1u32), (123, 5, 2), (97, 3, 0), (64, 2, 7)] {
            let d = distribute(
                Size::new(w, 40),
                Sides::all(b),
                Axis::Horizontal,
                &biases(&vec![1; n]),
            );
            assert!(!d.clamped);
            let total: u32 = d.slots.iter().map(|s| s.width).sum::<u32>()
                + d.spacers.iter().sum::<u32>()
                + 2 * b;
            assert_eq!(total, w, "partition leaked pixels for w={w} n={n} b={b}");
        }
    }

    // --- Insufficient space ---

    #[test]
    fn too_small_drawable_clamps_to_zero() {
        let d = distribute(
            Size::new(4, 10),
            Sides::all(1),
            Axis::Horizontal,
            &biases(&[1, 1, 1]),
        );
        assert!(d.clamped);
        assert!(d.slots.iter().all(|s| s.width == 0));
        assert_eq!(d.spacers.as_slice(), &[1, 1]);
        assert_eq!(d.paddings.as_slice(), &[0, 0]);
    }

    #[test]
    fn vertical_axis_swaps_roles() {
        let d = distribute(
            Size::new(50, 100),
            Sides::all(0),
            Axis::Vertical,
            &biases(&[1, 1]),
        );
        assert_eq!(d.slots.as_slice(), &[Size::new(50, 50); 2]);
        assert_eq!(d.top_lefts.as_slice(), &[Point::ZERO, Point::new(0, 50)]);
    }
}
