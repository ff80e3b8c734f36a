#![forbid(unsafe_code)]

//! Slate demo showcase binary.
//!
//! Assembles a small dashboard for a 250x122 e-paper panel: a sideways
//! gauge strip on the left, a header bar, and a 2x2 body grid with weighted
//! columns. Writes the composited output (and every node's own buffer) as
//! PNG files.
//!
//! Usage: `slate-demo-showcase [OUTPUT.png]`

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use slate::Anchor;
use slate::prelude::*;

/// Fill a fraction of the drawable area from the bottom up, gauge style.
fn gauge_painter(level: f32, colour: Rgba) -> impl FnMut(&mut Canvas, Rect) {
    move |canvas: &mut Canvas, drawable: Rect| {
        canvas.fill_rect(drawable, Rgba::WHITE);
        let filled = (drawable.height as f32 * level.clamp(0.0, 1.0)) as u32;
        let bar = Rect::new(
            drawable.x,
            drawable.y + (drawable.height - filled),
            drawable.width,
            filled,
        );
        canvas.fill_rect(bar, colour);
    }
}

/// A centered solid block over a white background.
fn tile_painter(colour: Rgba) -> impl FnMut(&mut Canvas, Rect) {
    move |canvas: &mut Canvas, drawable: Rect| {
        canvas.fill_rect(drawable, Rgba::WHITE);
        let inner = Size::new(drawable.width / 2, drawable.height / 2);
        let offset = Anchor::MIDDLE_CENTER.place(inner, drawable.size());
        canvas.fill_rect(
            Rect::new(
                drawable.x + offset.x,
                drawable.y + offset.y,
                inner.width,
                inner.height,
            ),
            colour,
        );
    }
}

fn build_dashboard() -> Result<LayoutTree<Canvas>> {
    let mut tree = LayoutTree::new(
        DEFAULT_DISPLAY_SIZE,
        NodeSpec::horizontal().border((1, Rgba::BLACK)),
    )?;
    let root = tree.root();

    // Sideways gauge strip on the left edge.
    let gauge = tree.add_child(
        root,
        NodeSpec::vertical().rotation(Rotation::Left).bias(1),
    )?;
    tree.set_painter(gauge, Box::new(gauge_painter(0.7, Rgba::RED)))?;

    // The body takes three quarters of the width.
    let body = tree.add_child(root, NodeSpec::vertical().bias(3).border(1u32))?;

    let header = tree.add_child(body, NodeSpec::horizontal())?;
    tree.set_painter(
        header,
        Box::new(|canvas: &mut Canvas, drawable: Rect| {
            canvas.fill_rect(drawable, Rgba::BLACK);
        }),
    )?;

    // Two content rows below the header, each split 1:2.
    for _ in 0..2 {
        let row = tree.add_child(body, NodeSpec::horizontal().bias(2))?;
        let left = tree.add_child(row, NodeSpec::new())?;
        tree.set_painter(left, Box::new(tile_painter(Rgba::RED)))?;
        let right = tree.add_child(row, NodeSpec::new().bias(2))?;
        tree.set_painter(right, Box::new(tile_painter(Rgba::BLACK)))?;
    }

    Ok(tree)
}

fn run(output: PathBuf) -> Result<()> {
    let mut tree = build_dashboard()?;

    let root = tree.node(tree.root())?;
    tracing::info!(
        width = root.size().width,
        height = root.size().height,
        nodes = tree.len(),
        "dashboard assembled"
    );
    for &child in root.children() {
        tracing::debug!(node = %tree.node(child)?, "child geometry");
    }

    tree.write(&output)?;
    tracing::info!(path = %output.display(), "wrote dashboard");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let output = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("slate-demo.png"));

    match run(output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "demo failed");
            ExitCode::FAILURE
        }
    }
}
