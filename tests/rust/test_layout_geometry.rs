use super::*;
use std::f64::consts::{FRAC_PI_2, PI};

const EPS: f64 = 1e-9;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
}

#[test]
fn test_distance_pythagorean() {
    let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
    assert!((d - 5.0).abs() < EPS);
}

#[test]
fn test_distance_symmetric() {
    let a = Point::new(-2.5, 7.0);
    let b = Point::new(10.0, -1.0);
    assert_eq!(distance(a, b), distance(b, a));
}

#[test]
fn test_unit_direction() {
    let u = unit_direction(Point::new(1.0, 1.0), Point::new(4.0, 5.0));
    assert!(close(u, Point::new(0.6, 0.8)));
}

#[test]
fn test_unit_direction_points_backwards_when_swapped() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(0.0, -10.0);
    assert!(close(unit_direction(a, b), Point::new(0.0, -1.0)));
    assert!(close(unit_direction(b, a), Point::new(0.0, 1.0)));
}

#[test]
fn test_unit_direction_coincident_points_is_nan() {
    let p = Point::new(2.0, 2.0);
    let u = unit_direction(p, p);
    assert!(u.x.is_nan() && u.y.is_nan());
}

#[test]
fn test_point_on_circle_cardinal_angles() {
    let c = Point::new(100.0, 50.0);
    assert!(close(point_on_circle(c, 10.0, 0.0), Point::new(110.0, 50.0)));
    assert!(close(point_on_circle(c, 10.0, FRAC_PI_2), Point::new(100.0, 60.0)));
    assert!(close(point_on_circle(c, 10.0, PI), Point::new(90.0, 50.0)));
    assert!(close(point_on_circle(c, 10.0, -FRAC_PI_2), Point::new(100.0, 40.0)));
}

#[test]
fn test_offset() {
    let p = Point::new(1.0, 2.0).offset(Point::new(1.0, 0.0), -3.0);
    assert!(close(p, Point::new(-2.0, 2.0)));
}
