//! Vector primitives shared by the layout engine and the edge clipper.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `self + v * k`
    pub fn offset(self, v: Point, k: f64) -> Point {
        Point::new(self.x + v.x * k, self.y + v.y * k)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Unit vector pointing from `a` to `b`.
///
/// `a` and `b` must be distinct; for coincident points the components are NaN.
pub fn unit_direction(a: Point, b: Point) -> Point {
    let len = distance(a, b);
    Point::new((b.x - a.x) / len, (b.y - a.y) / len)
}

/// `center + radius * (cos angle, sin angle)`, angle in radians.
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(center.x + radius * cos, center.y + radius * sin)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_geometry.rs"]
mod tests;
