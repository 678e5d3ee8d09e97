//! Edge clipping against circular node boundaries.

use super::geometry::{Point, unit_direction};
use super::types::ClippedEdge;

/// Trim the segment between two node centers so it starts and ends on the
/// boundary of circles of `radius` around each center.
///
/// `from` and `to` must be distinct. Self-loops and unresolved endpoints are
/// filtered out by [`GraphIR`](super::graph::GraphIR) before clipping.
pub fn clip_edge(from: Point, to: Point, radius: f64) -> ClippedEdge {
    let dir = unit_direction(from, to);
    ClippedEdge {
        start: from.offset(dir, radius),
        end: to.offset(dir, -radius),
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_clip.rs"]
mod tests;
