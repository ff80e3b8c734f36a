#![forbid(unsafe_code)]

//! Border specification and normalization.
//!
//! A border is given in one of three legal width shapes, normalized here to
//! four independent edges plus a colour:
//!
//! - scalar `w` — uniform on all edges;
//! - `(vertical, horizontal)` — top/bottom take `vertical`, left/right take
//!   `horizontal`;
//! - `(top, right, bottom, left)` — used directly.
//!
//! Any other shape is rejected with [`InvalidBorderSpec`] at construction.

use std::fmt;

use crate::color::Rgba;
use crate::geometry::Sides;

/// One of the legal border-width shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderSpec {
    /// The same width on all four edges.
    Uniform(u32),
    /// One width for top/bottom, another for left/right.
    Symmetric { vertical: u32, horizontal: u32 },
    /// Independent widths in CSS order.
    PerEdge {
        top: u32,
        right: u32,
        bottom: u32,
        left: u32,
    },
}

impl BorderSpec {
    /// Build a spec from a runtime-shaped width list.
    ///
    /// Accepts exactly 1, 2, or 4 entries; anything else is a malformed
    /// shape and fails fatally for the node being constructed.
    pub fn from_widths(widths: &[u32]) -> Result<Self, InvalidBorderSpec> {
        match *widths {
            [w] => Ok(Self::Uniform(w)),
            [vertical, horizontal] => Ok(Self::Symmetric {
                vertical,
                horizontal,
            }),
            [top, right, bottom, left] => Ok(Self::PerEdge {
                top,
                right,
                bottom,
                left,
            }),
            _ => Err(InvalidBorderSpec {
                count: widths.len(),
            }),
        }
    }

    /// Normalize to four edge widths.
    pub const fn widths(self) -> Sides {
        match self {
            Self::Uniform(w) => Sides::all(w),
            Self::Symmetric {
                vertical,
                horizontal,
            } => Sides::new(vertical, horizontal, vertical, horizontal),
            Self::PerEdge {
                top,
                right,
                bottom,
                left,
            } => Sides::new(top, right, bottom, left),
        }
    }

    /// Attach a colour, producing the resolved form.
    pub const fn with_colour(self, colour: Rgba) -> Border {
        Border {
            widths: self.widths(),
            colour,
        }
    }
}

impl From<u32> for BorderSpec {
    fn from(w: u32) -> Self {
        Self::Uniform(w)
    }
}

impl From<(u32, u32)> for BorderSpec {
    fn from((vertical, horizontal): (u32, u32)) -> Self {
        Self::Symmetric {
            vertical,
            horizontal,
        }
    }
}

impl From<(u32, u32, u32, u32)> for BorderSpec {
    fn from((top, right, bottom, left): (u32, u32, u32, u32)) -> Self {
        Self::PerEdge {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// A normalized border: four edge widths and a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    /// Edge widths in pixels.
    pub widths: Sides,
    /// Colour used for border rings and spacer fills.
    pub colour: Rgba,
}

impl Border {
    /// Create a border from any legal width shape and an explicit colour.
    pub fn new(spec: impl Into<BorderSpec>, colour: Rgba) -> Self {
        spec.into().with_colour(colour)
    }

    /// Whether every edge has zero width.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.widths.max_width() == 0
    }
}

impl Default for Border {
    /// No border, black ink.
    fn default() -> Self {
        Self {
            widths: Sides::all(0),
            colour: Rgba::BLACK,
        }
    }
}

impl From<u32> for Border {
    fn from(w: u32) -> Self {
        Self::new(w, Rgba::BLACK)
    }
}

impl From<BorderSpec> for Border {
    fn from(spec: BorderSpec) -> Self {
        spec.with_colour(Rgba::BLACK)
    }
}

impl<W: Into<BorderSpec>> From<(W, Rgba)> for Border {
    fn from((spec, colour): (W, Rgba)) -> Self {
        Self::new(spec, colour)
    }
}

/// Malformed border width shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBorderSpec {
    /// Number of width entries supplied.
    pub count: usize,
}

impl fmt::Display for InvalidBorderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid border spec: {} width entries (expected 1, 2, or 4)",
            self.count
        )
    }
}

impl std::error::Error for InvalidBorderSpec {}

#[cfg(test)]
mod tests {
    use super::{Border, BorderSpec, InvalidBorderSpec};
    use crate::color::Rgba;
    use crate::geometry::Sides;

    // --- Shape normalization ---

    #[test]
    fn uniform_fills_all_edges() {
        assert_eq!(BorderSpec::Uniform(3).widths(), Sides::all(3));
    }

    #[test]
    fn symmetric_maps_vertical_then_horizontal() {
        let widths = BorderSpec::from((1, 2)).widths();
        assert_eq!(widths, Sides::new(1, 2, 1, 2));
    }

    #[test]
    fn per_edge_is_css_order() {
        let widths = BorderSpec::from((1, 2, 3, 4)).widths();
        assert_eq!(widths.top, 1);
        assert_eq!(widths.right, 2);
        assert_eq!(widths.bottom, 3);
        assert_eq!(widths.left, 4);
    }

    // --- Runtime-shaped input ---

    #[test]
    fn from_widths_accepts_legal_arities() {
        assert_eq!(
            BorderSpec::from_widths(&[5]).unwrap(),
            BorderSpec::Uniform(5)
        );
        assert_eq!(
            BorderSpec::from_widths(&[1, 2]).unwrap(),
            BorderSpec::Symmetric {
                vertical: 1,
                horizontal: 2
            }
        );
        assert_eq!(
            BorderSpec::from_widths(&[1, 2, 3, 4]).unwrap(),
            BorderSpec::PerEdge {
                top: 1,
                right: 2,
                bottom: 3,
                left: 4
            }
        );
    }

    #[test]
    fn from_widths_rejects_other_arities() {
        for bad in [0usize, 3, 5, 7] {
            let widths = vec![1u32; bad];
            assert_eq!(
                BorderSpec::from_widths(&widths),
                Err(InvalidBorderSpec { count: bad })
            );
        }
    }

    // --- Resolved border ---

    #[test]
    fn border_default_is_invisible_black() {
        let border = Border::default();
        assert!(border.is_none());
        assert_eq!(border.colour, Rgba::BLACK);
    }

    #[test]
    fn border_from_scalar_and_tuple() {
        let plain = Border::from(2u32);
        assert_eq!(plain.widths, Sides::all(2));
        assert_eq!(plain.colour, Rgba::BLACK);

        let red = Border::from(((1, 2), Rgba::RED));
        assert_eq!(red.widths, Sides::new(1, 2, 1, 2));
        assert_eq!(red.colour, Rgba::RED);
    }

    #[test]
    fn error_message_names_the_count() {
        let err = InvalidBorderSpec { count: 3 };
        assert_eq!(
            err.to_string(),
            "invalid border spec: 3 width entries (expected 1, 2, or 4)"
        );
    }
}
