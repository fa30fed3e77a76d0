#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_is_finite_rejects_nan_and_inf() {
    assert!(Point::new(1.0, 2.0).is_finite());
    assert!(!Point::new(f64::NAN, 2.0).is_finite());
    assert!(!Point::new(1.0, f64::INFINITY).is_finite());
}

#[test]
fn point_rotated_quarter_turn() {
    let p = Point::new(10.0, 0.0).rotated_about(Point::default(), 90.0);
    assert!(approx_eq(p.x, 0.0));
    assert!(approx_eq(p.y, 10.0));
}

#[test]
fn point_rotated_about_pivot() {
    let p = Point::new(20.0, 10.0).rotated_about(Point::new(10.0, 10.0), 180.0);
    assert!(approx_eq(p.x, 0.0));
    assert!(approx_eq(p.y, 10.0));
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn bounds_from_corners_sorts() {
    let b = Bounds::from_corners(Point::new(10.0, 0.0), Point::new(0.0, 20.0));
    assert_eq!(b.min_x, 0.0);
    assert_eq!(b.min_y, 0.0);
    assert_eq!(b.max_x, 10.0);
    assert_eq!(b.max_y, 20.0);
    assert_eq!(b.width(), 10.0);
    assert_eq!(b.height(), 20.0);
}

#[test]
fn bounds_from_points_covers_all() {
    let b = Bounds::from_points([Point::new(1.0, 5.0), Point::new(-3.0, 2.0), Point::new(4.0, -1.0)]);
    assert_eq!(b, Some(Bounds { min_x: -3.0, min_y: -1.0, max_x: 4.0, max_y: 5.0 }));
}

#[test]
fn bounds_from_points_empty_is_none() {
    assert!(Bounds::from_points(Vec::new()).is_none());
}

#[test]
fn bounds_from_points_non_finite_is_none() {
    assert!(Bounds::from_points([Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)]).is_none());
}

#[test]
fn bounds_contains_is_inclusive() {
    let b = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    assert!(b.contains(Point::new(0.0, 0.0)));
    assert!(b.contains(Point::new(10.0, 10.0)));
    assert!(b.contains(Point::new(5.0, 5.0)));
    assert!(!b.contains(Point::new(10.1, 5.0)));
}

#[test]
fn bounds_union() {
    let a = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    let b = Bounds::from_corners(Point::new(5.0, -5.0), Point::new(20.0, 5.0));
    let u = a.union(&b);
    assert_eq!(u, Bounds { min_x: 0.0, min_y: -5.0, max_x: 20.0, max_y: 10.0 });
}

// =============================================================
// MarqueeRect
// =============================================================

#[test]
fn marquee_starts_with_zero_extent() {
    let m = MarqueeRect::at(Point::new(4.0, 5.0));
    assert_eq!(m.width, 0.0);
    assert_eq!(m.height, 0.0);
}

#[test]
fn marquee_stretch_allows_negative_extent() {
    let mut m = MarqueeRect::at(Point::new(50.0, 50.0));
    m.stretch_to(Point::new(20.0, 10.0));
    assert_eq!(m.width, -30.0);
    assert_eq!(m.height, -40.0);
    let b = m.normalized();
    assert_eq!(b, Bounds { min_x: 20.0, min_y: 10.0, max_x: 50.0, max_y: 50.0 });
}

// =============================================================
// Clamping
// =============================================================

#[test]
fn finite_or_zero_coerces() {
    assert_eq!(finite_or_zero(3.5), 3.5);
    assert_eq!(finite_or_zero(f64::NAN), 0.0);
    assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
}

#[test]
fn clamp_size_applies_floor() {
    assert_eq!(clamp_size(2.0, 5.0), 5.0);
    assert_eq!(clamp_size(12.0, 5.0), 12.0);
}

#[test]
fn clamp_size_takes_absolute_value() {
    assert_eq!(clamp_size(-12.0, 5.0), 12.0);
}

#[test]
fn clamp_size_degenerate_falls_to_floor() {
    assert_eq!(clamp_size(0.0, 5.0), 5.0);
    assert_eq!(clamp_size(f64::NAN, 5.0), 5.0);
    assert_eq!(clamp_size(f64::INFINITY, 5.0), 5.0);
}

// =============================================================
// Coordinate transforms
// =============================================================

#[test]
fn screen_to_scene_inverts_scene_to_screen() {
    let offset = Point::new(30.0, -20.0);
    let scene = Point::new(12.0, 7.0);
    let screen = scene_to_screen(scene, 2.5, offset);
    let back = screen_to_scene(screen, 2.5, offset);
    let back = back.unwrap_or_default();
    assert!(approx_eq(back.x, 12.0));
    assert!(approx_eq(back.y, 7.0));
}

#[test]
fn screen_to_scene_rejects_zero_scale() {
    assert!(screen_to_scene(Point::new(1.0, 1.0), 0.0, Point::default()).is_none());
}

#[test]
fn screen_to_scene_rejects_nan_input() {
    assert!(screen_to_scene(Point::new(f64::NAN, 1.0), 1.0, Point::default()).is_none());
}

#[test]
fn distance_to_segment_interior_and_ends() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 0.0);
    assert!(approx_eq(distance_to_segment(Point::new(5.0, 3.0), a, b), 3.0));
    assert!(approx_eq(distance_to_segment(Point::new(-3.0, 4.0), a, b), 5.0));
}

#[test]
fn distance_to_degenerate_segment_is_point_distance() {
    let a = Point::new(1.0, 1.0);
    assert!(approx_eq(distance_to_segment(Point::new(4.0, 5.0), a, a), 5.0));
}
