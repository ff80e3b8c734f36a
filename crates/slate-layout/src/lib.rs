#![forbid(unsafe_code)]

//! Recursive pixel-exact layout for small fixed-resolution displays.
//!
//! This crate provides the layout algebra and the tree that drives it:
//!
//! - [`distribute`] - exact integer partition of a region among weighted
//!   children, with the rounding remainder spread across the spacer gaps
//! - [`index_order::alternating`] - the fairness permutation that picks
//!   which gaps absorb remainder pixels
//! - [`LayoutTree`] / [`LayoutNode`] - the region tree: top-down resize
//!   propagation, bottom-up draw composition over any [`Surface`]
//! - [`ContentPainter`] - the capability for custom per-node content
//!
//! # Example
//!
//! ```
//! use slate_layout::{LayoutTree, NodeSpec};
//! use slate_raster::Canvas;
//! use slate_core::geometry::Size;
//!
//! let mut tree = LayoutTree::<Canvas>::new(
//!     Size::new(200, 300),
//!     NodeSpec::vertical().border(1u32),
//! ).unwrap();
//! for _ in 0..4 {
//!     tree.add_child(tree.root(), NodeSpec::new()).unwrap();
//! }
//! // Drawable height 298 minus 3 unit spacers = 295; floor(295 / 4) = 73.
//! let first = tree.node(tree.root()).unwrap().children()[0];
//! assert_eq!(tree.node(first).unwrap().size(), Size::new(198, 73));
//! ```
//!
//! [`Surface`]: slate_raster::Surface

pub mod distribute;
pub mod index_order;
pub mod tree;

pub use distribute::{Axis, Bias, Distribution, InvalidBias, distribute};
pub use tree::{ContentPainter, LayoutError, LayoutNode, LayoutTree, NodeId, NodeSpec};
