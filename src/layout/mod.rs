//! Layout engine: geometry, circular placement, edge clipping and the graph IR.

pub mod circular;
pub mod clip;
pub mod geometry;
pub mod graph;
pub mod types;

pub use circular::layout_circular;
pub use clip::clip_edge;
pub use geometry::Point;
pub use graph::GraphIR;
pub use types::{ClippedEdge, LayoutNode, Positions};

/// Lay out every node of the IR on a `width` x `height` canvas.
pub fn layout_graph(gir: &GraphIR, width: f64, height: f64) -> Positions {
    layout_circular(gir.nodes().map(|n| n.id.as_str()), width, height)
}
