//! Circular layout: nodes evenly spaced on one circle, first node at the top.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::geometry::{Point, point_on_circle};
use super::types::Positions;

/// Angle of node `index` out of `count`: `2π·i/n − π/2`.
///
/// Index 0 sits straight above the center; later indices follow clockwise
/// in screen coordinates (y grows downward).
pub fn node_angle(index: usize, count: usize) -> f64 {
    TAU * index as f64 / count as f64 - FRAC_PI_2
}

/// Radius of the layout circle for a `width` x `height` canvas.
pub fn layout_radius(width: f64, height: f64) -> f64 {
    width.min(height) / 3.0
}

/// Place `ids` in order around a circle centered in the canvas.
///
/// An empty input yields empty positions; callers are expected to render an
/// empty state before getting here.
pub fn layout_circular<'a, I>(ids: I, width: f64, height: f64) -> Positions
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: ExactSizeIterator,
{
    let ids = ids.into_iter();
    let count = ids.len();
    let center = Point::new(width / 2.0, height / 2.0);
    let radius = layout_radius(width, height);

    let mut positions = Positions::new(center, radius);
    for (i, id) in ids.enumerate() {
        positions.insert(id, point_on_circle(center, radius, node_angle(i, count)));
    }
    positions
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_circular.rs"]
mod tests;
