#![forbid(unsafe_code)]

//! The layout tree: nested regions, resize propagation, and draw
//! composition.
//!
//! Nodes live in an arena keyed by [`NodeId`], the parent/child structure is
//! explicit, and every structural change (adding a child, resizing a node)
//! eagerly recomputes the affected subtree's [`Distribution`] so the
//! partition invariants are always observable. Sizing flows top-down;
//! drawing flows bottom-up through [`LayoutTree::draw`], which composites
//! each child's finished buffer onto its parent, draws border and spacer
//! bands, and rotates the result into the orientation the parent allocated.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use slate_core::border::Border;
use slate_core::color::Rgba;
use slate_core::geometry::{Point, Rect, Sides, Size};
use slate_core::rotation::Rotation;
use slate_raster::{ImageMode, RasterError, Surface};

use crate::distribute::{Axis, Bias, Distribution, InvalidBias, distribute};

/// Stable identifier for layout nodes.
///
/// `0` is reserved/invalid so IDs are always non-zero. IDs are assigned
/// sequentially in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Lowest valid node ID; always the root of a tree.
    pub const MIN: Self = Self(1);

    /// Create a node ID, rejecting 0.
    pub fn new(raw: u64) -> Result<Self, LayoutError> {
        if raw == 0 {
            return Err(LayoutError::ZeroNodeId);
        }
        Ok(Self(raw))
    }

    /// The raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The next ID, or an error on overflow.
    fn checked_next(self) -> Result<Self, LayoutError> {
        let Some(next) = self.0.checked_add(1) else {
            return Err(LayoutError::NodeIdOverflow { current: self });
        };
        Self::new(next)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Construction policy for a layout node.
///
/// A builder in the usual style; the defaults are a borderless horizontal
/// region with unit bias, upright rotation, RGB buffers, and a white fill
/// for lazily synthesized blanks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSpec {
    /// Axis along which this node packs its children.
    pub axis: Axis,
    /// Border widths and colour.
    pub border: Border,
    /// This node's weight among its siblings. Validated (>= 1) when the
    /// node enters a tree.
    pub bias: u32,
    /// Orientation, fixed for the node's lifetime.
    pub rotation: Rotation,
    /// Pixel-format tag for synthesized buffers, opaque to the core.
    pub mode: ImageMode,
    /// Fill colour for lazily synthesized blank buffers.
    pub fill: Rgba,
}

impl Default for NodeSpec {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            border: Border::default(),
            bias: 1,
            rotation: Rotation::Up,
            mode: ImageMode::RGB,
            fill: Rgba::WHITE,
        }
    }
}

impl NodeSpec {
    /// A spec with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A spec packing children left to right.
    #[must_use]
    pub fn horizontal() -> Self {
        Self::default()
    }

    /// A spec packing children top to bottom.
    #[must_use]
    pub fn vertical() -> Self {
        Self {
            axis: Axis::Vertical,
            ..Self::default()
        }
    }

    /// Set the packing axis.
    #[must_use]
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the border from any legal shape.
    #[must_use]
    pub fn border(mut self, border: impl Into<Border>) -> Self {
        self.border = border.into();
        self
    }

    /// Set the packing bias.
    #[must_use]
    pub fn bias(mut self, bias: u32) -> Self {
        self.bias = bias;
        self
    }

    /// Set the rotation.
    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the pixel-format tag for synthesized buffers.
    #[must_use]
    pub fn mode(mut self, mode: ImageMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the fill colour for synthesized buffers.
    #[must_use]
    pub fn fill(mut self, fill: Rgba) -> Self {
        self.fill = fill;
        self
    }
}

/// Draw-override capability: paints a node's own content onto its buffer
/// before children are composited.
///
/// Implemented for any `FnMut(&mut S, Rect)` closure; the `Rect` is the
/// node's drawable area (its size inset by its borders).
pub trait ContentPainter<S: Surface> {
    /// Paint onto `surface`, which has the node's working-frame size.
    fn paint(&mut self, surface: &mut S, drawable: Rect);
}

impl<S: Surface, F: FnMut(&mut S, Rect)> ContentPainter<S> for F {
    fn paint(&mut self, surface: &mut S, drawable: Rect) {
        self(surface, drawable)
    }
}

/// One region in the tree.
///
/// The stored `size` is the working frame: the caller-requested size with
/// width/height already swapped for sideways rotations.
pub struct LayoutNode<S> {
    id: NodeId,
    depth: u32,
    size: Size,
    top_left: Point,
    borders: Sides,
    border_colour: Rgba,
    axis: Axis,
    bias: Bias,
    rotation: Rotation,
    mode: ImageMode,
    fill: Rgba,
    children: Vec<NodeId>,
    image: Option<S>,
    painter: Option<Box<dyn ContentPainter<S>>>,
    distribution: Distribution,
}

impl<S: Surface> LayoutNode<S> {
    /// Build a detached node from a spec, for [`LayoutTree::add_child_node`].
    ///
    /// The node has a placeholder ID, zero size, and depth 0 until it is
    /// attached; the parent's distributor assigns its real geometry.
    pub fn detached(spec: NodeSpec) -> Result<Self, LayoutError> {
        let bias = Bias::new(spec.bias)?;
        Ok(Self {
            id: NodeId::MIN,
            depth: 0,
            size: Size::default(),
            top_left: Point::ZERO,
            borders: spec.border.widths,
            border_colour: spec.border.colour,
            axis: spec.axis,
            bias,
            rotation: spec.rotation,
            mode: spec.mode,
            fill: spec.fill,
            children: Vec::new(),
            image: None,
            painter: None,
            distribution: Distribution::default(),
        })
    }

    /// Attach a content painter, builder style.
    #[must_use]
    pub fn with_painter(mut self, painter: Box<dyn ContentPainter<S>>) -> Self {
        self.painter = Some(painter);
        self
    }

    /// This node's ID.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Tree level, 0 for the root. Diagnostic only.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Working-frame size (rotation swap already applied).
    pub fn size(&self) -> Size {
        self.size
    }

    /// Offset within the parent's drawable area; (0,0) for the root.
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    /// Border widths per edge.
    pub fn borders(&self) -> Sides {
        self.borders
    }

    /// Border and spacer colour.
    pub fn border_colour(&self) -> Rgba {
        self.border_colour
    }

    /// Packing axis for this node's children.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// This node's weight among its siblings.
    pub fn bias(&self) -> Bias {
        self.bias
    }

    /// Fixed orientation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Child IDs in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The cached distributor output for this node's children.
    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    /// The explicitly set or adopted buffer, if any.
    pub fn image(&self) -> Option<&S> {
        self.image.as_ref()
    }

    /// The node's size inset by its borders.
    pub fn drawable(&self) -> Rect {
        Rect::from_size(self.size).inner(self.borders)
    }

    fn policy(&self) -> NodeSpec {
        NodeSpec {
            axis: self.axis,
            border: Border {
                widths: self.borders,
                colour: self.border_colour,
            },
            bias: self.bias.get(),
            rotation: self.rotation,
            mode: self.mode,
            fill: self.fill,
        }
    }
}

impl<S: Surface> fmt::Debug for LayoutNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutNode")
            .field("id", &self.id)
            .field("depth", &self.depth)
            .field("size", &self.size)
            .field("top_left", &self.top_left)
            .field("axis", &self.axis)
            .field("bias", &self.bias)
            .field("rotation", &self.rotation)
            .field("children", &self.children)
            .field("has_image", &self.image.is_some())
            .field("has_painter", &self.painter.is_some())
            .finish()
    }
}

impl<S: Surface> fmt::Display for LayoutNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{id}/{depth}/{bias}/{children}:({x},{y})-({w}x{h})",
            id = self.id,
            depth = self.depth,
            bias = self.bias,
            children = self.children.len(),
            x = self.top_left.x,
            y = self.top_left.y,
            w = self.size.width,
            h = self.size.height,
        )
    }
}

/// A tree of layout nodes over a raster surface type.
///
/// Owns every node; the root always exists and has ID [`NodeId::MIN`].
pub struct LayoutTree<S: Surface> {
    nodes: BTreeMap<NodeId, LayoutNode<S>>,
    root: NodeId,
    next: NodeId,
}

impl<S: Surface> LayoutTree<S> {
    /// Create a tree from a root size and policy.
    ///
    /// Sideways rotations swap the stored width/height, so all subsequent
    /// sizing runs on the rotation-adjusted frame.
    pub fn new(size: Size, spec: NodeSpec) -> Result<Self, LayoutError> {
        let mut root = LayoutNode::detached(spec)?;
        root.size = root.rotation.apply(size);
        let root_id = NodeId::MIN;
        root.id = root_id;
        let mut nodes = BTreeMap::new();
        nodes.insert(root_id, root);
        Ok(Self {
            nodes,
            root: root_id,
            next: root_id.checked_next()?,
        })
    }

    /// The root node's ID.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Total number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root exists for the tree's lifetime.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Result<&LayoutNode<S>, LayoutError> {
        self.nodes.get(&id).ok_or(LayoutError::UnknownNode { id })
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut LayoutNode<S>, LayoutError> {
        self.nodes
            .get_mut(&id)
            .ok_or(LayoutError::UnknownNode { id })
    }

    /// Construct a child from `spec` and append it under `parent`.
    ///
    /// The parent's distributor re-runs immediately, resizing every existing
    /// child as well (the weight distribution changed).
    pub fn add_child(&mut self, parent: NodeId, spec: NodeSpec) -> Result<NodeId, LayoutError> {
        let child = LayoutNode::detached(spec)?;
        self.attach(parent, child)
    }

    /// Append a caller-constructed detached node under `parent`.
    ///
    /// This is the hook for nodes with custom content painters. The node
    /// must not carry children of its own.
    pub fn add_child_node(
        &mut self,
        parent: NodeId,
        node: LayoutNode<S>,
    ) -> Result<NodeId, LayoutError> {
        if !node.children.is_empty() {
            return Err(LayoutError::DetachedChildren { id: node.id });
        }
        self.attach(parent, node)
    }

    /// Append a child cloning an existing node's policy (axis, border, bias,
    /// rotation, image mode, fill).
    pub fn add_child_like(
        &mut self,
        parent: NodeId,
        template: NodeId,
    ) -> Result<NodeId, LayoutError> {
        let spec = self.node(template)?.policy();
        self.add_child(parent, spec)
    }

    fn attach(&mut self, parent: NodeId, mut child: LayoutNode<S>) -> Result<NodeId, LayoutError> {
        let parent_depth = self.node(parent)?.depth;
        let id = self.next;
        self.next = id.checked_next()?;
        child.id = id;
        child.depth = parent_depth + 1;
        self.nodes.insert(id, child);
        self.node_mut(parent)?.children.push(id);
        self.redistribute(parent)?;
        Ok(id)
    }

    /// Resize a node and recompute its whole subtree.
    ///
    /// The stored size is rotation-adjusted; any existing buffer is cropped
    /// to the new frame.
    pub fn resize(&mut self, id: NodeId, size: Size) -> Result<(), LayoutError> {
        let node = self.node_mut(id)?;
        node.size = node.rotation.apply(size);
        if let Some(image) = node.image.take() {
            node.image = Some(image.crop(Rect::from_size(node.size)));
        }
        self.redistribute(id)
    }

    /// Set a node's buffer, cropping it to the node's size.
    ///
    /// Returns the stored (possibly cropped) buffer.
    pub fn set_image(&mut self, id: NodeId, raster: S) -> Result<&S, LayoutError> {
        let node = self.node_mut(id)?;
        let stored = node.image.insert(raster.crop(Rect::from_size(node.size)));
        Ok(&*stored)
    }

    /// Attach a content painter to a node.
    pub fn set_painter(
        &mut self,
        id: NodeId,
        painter: Box<dyn ContentPainter<S>>,
    ) -> Result<(), LayoutError> {
        self.node_mut(id)?.painter = Some(painter);
        Ok(())
    }

    /// Re-run the distributor on `id` and push the results down.
    fn redistribute(&mut self, id: NodeId) -> Result<(), LayoutError> {
        let node = self.node(id)?;
        let children = node.children.clone();
        if children.is_empty() {
            self.node_mut(id)?.distribution = Distribution::default();
            return Ok(());
        }

        let mut biases = Vec::with_capacity(children.len());
        for child in &children {
            biases.push(self.node(*child)?.bias);
        }
        let node = self.node(id)?;
        let dist = distribute(node.size, node.borders, node.axis, &biases);

        let mut assignments = Vec::with_capacity(children.len());
        for (i, child) in children.iter().enumerate() {
            assignments.push((*child, dist.slots[i], dist.top_lefts[i]));
        }
        self.node_mut(id)?.distribution = dist;

        for (child, slot, top_left) in assignments {
            self.node_mut(child)?.top_left = top_left;
            self.resize(child, slot)?;
        }
        Ok(())
    }

    /// Draw the whole tree, returning the root's composited buffer.
    pub fn draw(&mut self) -> Result<S, LayoutError> {
        self.draw_node(self.root)
    }

    /// Draw the subtree rooted at `id`.
    ///
    /// Post-order: children render first (bordered and rotated), then the
    /// parent composites them at their top-lefts, draws its border and
    /// spacer bands, and rotates the result. Idempotent with respect to the
    /// tree structure. A subtree with no raster content anywhere yields a
    /// blank buffer and a diagnostic.
    pub fn draw_node(&mut self, id: NodeId) -> Result<S, LayoutError> {
        match self.render(id)? {
            Some(buffer) => Ok(buffer),
            None => {
                // Contentless subtrees still get their chrome: a blank base
                // with the node's border and spacer bands.
                #[cfg(feature = "tracing")]
                tracing::warn!(node = %id, "missing image: no content anywhere in subtree");
                let node = self.node(id)?;
                let mut blank = S::blank(node.size, node.fill, node.mode);
                draw_borders(&mut blank, node.size, node.borders, node.border_colour);
                draw_spacers(
                    &mut blank,
                    &node.distribution,
                    node.size,
                    node.borders,
                    node.axis,
                    node.border_colour,
                );
                Ok(finish(blank, node.rotation))
            }
        }
    }

    /// Draw a node and write it plus all descendants to derived paths
    /// (`out.png`, `out-0.png`, `out-0-1.png`, …).
    pub fn write(&mut self, path: impl AsRef<Path>) -> Result<(), LayoutError> {
        self.write_node(self.root, path.as_ref())
    }

    fn write_node(&mut self, id: NodeId, path: &Path) -> Result<(), LayoutError> {
        let buffer = self.draw_node(id)?;
        buffer.save(path)?;
        let children = self.node(id)?.children.clone();
        for (index, child) in children.into_iter().enumerate() {
            self.write_node(child, &child_path(path, index))?;
        }
        Ok(())
    }

    /// Bottom-up composition. Returns `None` when the subtree has no raster
    /// content at all (no image, no painter, nothing from children).
    fn render(&mut self, id: NodeId) -> Result<Option<S>, LayoutError> {
        let children = self.node(id)?.children.clone();

        let mut rendered: Vec<Option<S>> = Vec::with_capacity(children.len());
        for child in &children {
            rendered.push(self.render(*child)?);
        }

        let mut child_offsets = Vec::with_capacity(children.len());
        for child in &children {
            child_offsets.push(self.node(*child)?.top_left);
        }

        let node = self.node_mut(id)?;
        let size = node.size;
        let borders = node.borders;
        let colour = node.border_colour;
        let axis = node.axis;
        let rotation = node.rotation;
        let fill = node.fill;
        let mode = node.mode;
        let distribution = node.distribution.clone();
        let mut painter = node.painter.take();
        let full = Rect::from_size(size);
        let mut base = node.image.as_ref().map(|image| image.crop(full));

        // Children that rendered nothing get a diagnostic and are skipped;
        // the adopted first buffer is consumed, not missing.
        let missing: Vec<bool> = rendered.iter().map(|r| r.is_none()).collect();

        if base.is_none()
            && let Some(first) = rendered.iter().position(|r| r.is_some())
        {
            // Adopt a copy of the first rendered child's buffer as the base;
            // it is not pasted again at its own offset.
            let adopted = rendered[first].take();
            base = adopted.map(|buffer| buffer.crop(full));
        }
        if base.is_none() && painter.is_some() {
            base = Some(S::blank(size, fill, mode));
        }

        let Some(mut canvas) = base else {
            self.node_mut(id)?.painter = painter;
            return Ok(None);
        };

        if let Some(p) = painter.as_mut() {
            p.paint(&mut canvas, full.inner(borders));
        }

        for (index, buffer) in rendered.into_iter().enumerate() {
            match buffer {
                Some(buffer) => buffer.paste_onto(&mut canvas, child_offsets[index]),
                None if missing[index] => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        node = %id,
                        child = %children[index],
                        "missing image: child skipped during composition"
                    );
                }
                None => {} // adopted as the base
            }
        }

        draw_borders(&mut canvas, size, borders, colour);
        draw_spacers(&mut canvas, &distribution, size, borders, axis, colour);

        self.node_mut(id)?.painter = painter;
        Ok(Some(finish(canvas, rotation)))
    }
}

/// Rotate a finished buffer into the orientation the parent allocated.
fn finish<S: Surface>(buffer: S, rotation: Rotation) -> S {
    let degrees = rotation.degrees();
    if degrees == 0 {
        buffer
    } else {
        buffer.rotated(-degrees)
    }
}

/// Per-edge border bands, equivalent to concentric 1px rings.
fn draw_borders<S: Surface>(canvas: &mut S, size: Size, borders: Sides, colour: Rgba) {
    let bands = [
        Rect::new(0, 0, size.width, borders.top),
        Rect::new(
            0,
            size.height.saturating_sub(borders.bottom),
            size.width,
            borders.bottom,
        ),
        Rect::new(0, 0, borders.left, size.height),
        Rect::new(
            size.width.saturating_sub(borders.right),
            0,
            borders.right,
            size.height,
        ),
    ];
    for band in bands {
        if !band.is_empty() {
            canvas.fill_rect(band, colour);
        }
    }
}

/// Fill the gaps between children in the border colour.
///
/// Pure rounding gaps (zero packing-axis border) stay background.
fn draw_spacers<S: Surface>(
    canvas: &mut S,
    distribution: &Distribution,
    size: Size,
    borders: Sides,
    axis: Axis,
    colour: Rgba,
) {
    if axis.leading(borders) == 0 || distribution.spacers.is_empty() {
        return;
    }
    let drawable = Rect::from_size(size).inner(borders);
    let cross = axis.cross(drawable.size());
    let lead_cross = axis.leading_cross(borders);
    let mut cursor = axis.leading(borders);
    for (i, spacer) in distribution.spacers.iter().enumerate() {
        cursor += axis.main(distribution.slots[i]);
        let origin = axis.point(cursor, lead_cross);
        let extent = axis.size(*spacer, cross);
        canvas.fill_rect(
            Rect::new(origin.x, origin.y, extent.width, extent.height),
            colour,
        );
        cursor += spacer;
    }
}

/// Derive the output path for child `index` (`out.png` → `out-0.png`).
fn child_path(path: &Path, index: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("layer");
    let name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}-{index}.{ext}"),
        None => format!("{stem}-{index}"),
    };
    path.with_file_name(name)
}

/// Failure in tree construction or mutation.
#[derive(Debug)]
pub enum LayoutError {
    /// A node ID that is not in this tree.
    UnknownNode { id: NodeId },
    /// Node ID 0 is reserved.
    ZeroNodeId,
    /// Ran out of node IDs.
    NodeIdOverflow { current: NodeId },
    /// A packing bias below 1.
    InvalidBias(InvalidBias),
    /// A detached node offered for attachment already carries children.
    DetachedChildren { id: NodeId },
    /// The raster backend failed while writing output.
    Raster(RasterError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode { id } => write!(f, "unknown node {id}"),
            Self::ZeroNodeId => write!(f, "node id 0 is reserved"),
            Self::NodeIdOverflow { current } => {
                write!(f, "node id overflow after {current}")
            }
            Self::InvalidBias(err) => err.fmt(f),
            Self::DetachedChildren { id } => {
                write!(f, "detached node {id} already has children")
            }
            Self::Raster(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidBias(err) => Some(err),
            Self::Raster(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InvalidBias> for LayoutError {
    fn from(err: InvalidBias) -> Self {
        Self::InvalidBias(err)
    }
}

impl From<RasterError> for LayoutError {
    fn from(err: RasterError) -> Self {
        Self::Raster(err)
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutError, LayoutNode, LayoutTree, NodeId, NodeSpec, child_path};
    use crate::distribute::Axis;
    use slate_core::color::Rgba;
    use slate_core::geometry::{Point, Size};
    use slate_core::rotation::Rotation;
    use slate_raster::trace::TraceSurface;
    use std::path::Path;

    fn tree(size: Size, spec: NodeSpec) -> LayoutTree<TraceSurface> {
        LayoutTree::new(size, spec).unwrap()
    }

    // --- Construction ---

    #[test]
    fn root_gets_the_lowest_id() {
        let t = tree(Size::new(100, 50), NodeSpec::new());
        assert_eq!(t.root(), NodeId::MIN);
        assert_eq!(t.len(), 1);
        assert_eq!(t.node(t.root()).unwrap().depth(), 0);
    }

    #[test]
    fn sideways_root_swaps_its_frame() {
        let t = tree(
            Size::new(200, 100),
            NodeSpec::new().rotation(Rotation::Left),
        );
        assert_eq!(t.node(t.root()).unwrap().size(), Size::new(100, 200));
    }

    #[test]
    fn zero_bias_fails_at_add_time() {
        let mut t = tree(Size::new(100, 50), NodeSpec::new());
        let err = t.add_child(t.root(), NodeSpec::new().bias(0)).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidBias(_)));
    }

    #[test]
    fn unknown_node_is_reported() {
        let t = tree(Size::new(100, 50), NodeSpec::new());
        let missing = NodeId::new(99).unwrap();
        assert!(matches!(
            t.node(missing),
            Err(LayoutError::UnknownNode { .. })
        ));
    }

    // --- Structure ---

    #[test]
    fn children_get_sequential_ids_and_depths() {
        let mut t = tree(Size::new(100, 50), NodeSpec::new());
        let a = t.add_child(t.root(), NodeSpec::new()).unwrap();
        let b = t.add_child(t.root(), NodeSpec::new()).unwrap();
        let aa = t.add_child(a, NodeSpec::new()).unwrap();
        assert_eq!(a.get(), 2);
        assert_eq!(b.get(), 3);
        assert_eq!(aa.get(), 4);
        assert_eq!(t.node(a).unwrap().depth(), 1);
        assert_eq!(t.node(aa).unwrap().depth(), 2);
        assert_eq!(t.node(t.root()).unwrap().children(), &[a, b]);
    }

    #[test]
    fn add_child_like_clones_policy() {
        let mut t = tree(Size::new(100, 50), NodeSpec::new());
        let template = t
            .add_child(
                t.root(),
                NodeSpec::vertical()
                    .border((2, Rgba::RED))
                    .bias(3)
                    .rotation(Rotation::Down),
            )
            .unwrap();
        let copy = t.add_child_like(t.root(), template).unwrap();
        let node = t.node(copy).unwrap();
        assert_eq!(node.axis(), Axis::Vertical);
        assert_eq!(node.bias().get(), 3);
        assert_eq!(node.border_colour(), Rgba::RED);
        assert_eq!(node.rotation(), Rotation::Down);
    }

    #[test]
    fn detached_node_attaches_with_new_identity() {
        let mut t = tree(Size::new(100, 50), NodeSpec::new());
        let node = LayoutNode::<TraceSurface>::detached(NodeSpec::new().bias(2)).unwrap();
        let id = t.add_child_node(t.root(), node).unwrap();
        assert_eq!(t.node(id).unwrap().depth(), 1);
        assert_eq!(t.node(id).unwrap().bias().get(), 2);
    }

    // --- Resize propagation ---

    #[test]
    fn adding_a_sibling_shrinks_the_first_child() {
        let mut t = tree(Size::new(200, 100), NodeSpec::new());
        let first = t.add_child(t.root(), NodeSpec::new()).unwrap();
        assert_eq!(t.node(first).unwrap().size(), Size::new(200, 100));

        t.add_child(t.root(), NodeSpec::new()).unwrap();
        assert_eq!(t.node(first).unwrap().size(), Size::new(100, 100));
    }

    #[test]
    fn resize_cascades_to_grandchildren() {
        let mut t = tree(Size::new(100, 100), NodeSpec::new());
        let child = t.add_child(t.root(), NodeSpec::vertical()).unwrap();
        let grandchild = t.add_child(child, NodeSpec::new()).unwrap();

        t.resize(t.root(), Size::new(60, 40)).unwrap();
        assert_eq!(t.node(child).unwrap().size(), Size::new(60, 40));
        assert_eq!(t.node(grandchild).unwrap().size(), Size::new(60, 40));
    }

    #[test]
    fn sideways_child_swaps_its_slot() {
        let mut t = tree(Size::new(200, 100), NodeSpec::new());
        let child = t
            .add_child(t.root(), NodeSpec::new().rotation(Rotation::Right))
            .unwrap();
        // Slot is 200x100; the child's working frame is the swap.
        assert_eq!(t.node(child).unwrap().size(), Size::new(100, 200));
    }

    #[test]
    fn child_top_left_respects_borders() {
        let mut t = tree(Size::new(100, 50), NodeSpec::new().border(3u32));
        let child = t.add_child(t.root(), NodeSpec::new()).unwrap();
        assert_eq!(t.node(child).unwrap().top_left(), Point::new(3, 3));
        assert_eq!(t.node(child).unwrap().size(), Size::new(94, 44));
    }

    // --- Display ---

    #[test]
    fn node_display_lists_identity_and_geometry() {
        let mut t = tree(Size::new(100, 50), NodeSpec::new());
        let child = t.add_child(t.root(), NodeSpec::new().bias(2)).unwrap();
        assert_eq!(
            t.node(child).unwrap().to_string(),
            "2/1/2/0:(0,0)-(100x50)"
        );
    }

    // --- Path derivation ---

    #[test]
    fn child_paths_suffix_before_the_extension() {
        assert_eq!(
            child_path(Path::new("out.png"), 0),
            Path::new("out-0.png")
        );
        assert_eq!(
            child_path(Path::new("dir/out-0.png"), 2),
            Path::new("dir/out-0-2.png")
        );
        assert_eq!(child_path(Path::new("bare"), 1), Path::new("bare-1"));
    }
}
