use super::*;
use crate::layout::geometry::distance;
use proptest::prelude::*;

const EPS: f64 = 1e-9;

#[test]
fn test_horizontal_edge() {
    let e = clip_edge(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 35.0);
    assert!((e.start.x - 35.0).abs() < EPS && e.start.y.abs() < EPS);
    assert!((e.end.x - 65.0).abs() < EPS && e.end.y.abs() < EPS);
}

#[test]
fn test_reverse_direction() {
    let e = clip_edge(Point::new(0.0, 100.0), Point::new(0.0, 0.0), 10.0);
    assert!((e.start.y - 90.0).abs() < EPS);
    assert!((e.end.y - 10.0).abs() < EPS);
}

#[test]
fn test_overlapping_circles_cross_over() {
    // Centers closer than 2r: the segment is inverted but each end still
    // sits on its own boundary.
    let e = clip_edge(Point::new(0.0, 0.0), Point::new(40.0, 0.0), 35.0);
    assert!((e.start.x - 35.0).abs() < EPS);
    assert!((e.end.x - 5.0).abs() < EPS);
}

proptest! {
    #[test]
    fn prop_endpoints_lie_on_boundaries(
        ax in -1000.0f64..1000.0, ay in -1000.0f64..1000.0,
        bx in -1000.0f64..1000.0, by in -1000.0f64..1000.0,
        r in 1.0f64..50.0,
    ) {
        let from = Point::new(ax, ay);
        let to = Point::new(bx, by);
        let len = distance(from, to);
        prop_assume!(len > 1e-3);

        let e = clip_edge(from, to, r);
        prop_assert!((distance(from, e.start) - r).abs() < 1e-6);
        prop_assert!((distance(to, e.end) - r).abs() < 1e-6);

        // start lies on the ray from -> to, end on the ray to -> from
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let cross_start = dx * (e.start.y - from.y) - dy * (e.start.x - from.x);
        let cross_end = dx * (e.end.y - to.y) - dy * (e.end.x - to.x);
        prop_assert!(cross_start.abs() < 1e-6 * len);
        prop_assert!(cross_end.abs() < 1e-6 * len);
        prop_assert!(dx * (e.start.x - from.x) + dy * (e.start.y - from.y) > 0.0);
        prop_assert!(dx * (e.end.x - to.x) + dy * (e.end.y - to.y) < 0.0);
    }
}
