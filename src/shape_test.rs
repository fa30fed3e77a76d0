#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn style() -> ShapeStyle {
    ShapeStyle { fill: None, stroke: "#000".to_owned(), stroke_width: 2.0 }
}

fn make_shape(kind: ShapeKind, x: f64, y: f64) -> Shape {
    Shape::new(kind, pt(x, y), style())
}

/// Every size field of `g` is at or above its committed floor.
fn respects_floors(g: &Geometry) -> bool {
    match *g {
        Geometry::Rect { width, height } | Geometry::Diamond { width, height } => {
            width >= MIN_SIZE && height >= MIN_SIZE
        }
        Geometry::Circle { radius } => radius >= MIN_SIZE,
        Geometry::Ellipse { radius_x, radius_y } => radius_x >= MIN_SIZE && radius_y >= MIN_SIZE,
        Geometry::Star { num_points, inner_radius, outer_radius } => {
            (MIN_STAR_POINTS..=MAX_STAR_POINTS).contains(&num_points) && inner_radius >= MIN_INNER_RADIUS && outer_radius >= MIN_SIZE
        }
        Geometry::Arrow { dx, dy, .. } | Geometry::Line { dx, dy } => dx.is_finite() && dy.is_finite(),
    }
}

// =============================================================
// EntityId
// =============================================================

#[test]
fn generated_ids_are_unique_and_prefixed() {
    let a = EntityId::generate("shape");
    let b = EntityId::generate("shape");
    assert_ne!(a, b);
    assert!(a.as_str().starts_with("shape_"));
}

#[test]
fn id_display_matches_str() {
    let id = EntityId::from("shape_abc");
    assert_eq!(id.to_string(), "shape_abc");
}

#[test]
fn id_serializes_as_plain_string() {
    let id = EntityId::from("shape_1");
    assert_eq!(serde_json::to_string(&id).unwrap_or_default(), "\"shape_1\"");
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_kind() {
    for kind in ShapeKind::ALL {
        assert_eq!(kind.create_default().kind(), kind);
    }
}

#[test]
fn default_geometries() {
    assert_eq!(ShapeKind::Rect.create_default(), Geometry::Rect { width: 20.0, height: 20.0 });
    assert_eq!(ShapeKind::Circle.create_default(), Geometry::Circle { radius: 10.0 });
    assert_eq!(ShapeKind::Ellipse.create_default(), Geometry::Ellipse { radius_x: 15.0, radius_y: 10.0 });
    assert_eq!(
        ShapeKind::Star.create_default(),
        Geometry::Star { num_points: 5, inner_radius: 8.0, outer_radius: 15.0 }
    );
    assert_eq!(
        ShapeKind::Arrow.create_default(),
        Geometry::Arrow { dx: 20.0, dy: 0.0, pointer_length: 10.0, pointer_width: 8.0 }
    );
    assert_eq!(ShapeKind::Line.create_default(), Geometry::Line { dx: 20.0, dy: 20.0 });
    assert_eq!(ShapeKind::Diamond.create_default(), Geometry::Diamond { width: 20.0, height: 20.0 });
}

#[test]
fn new_shape_has_defaults() {
    let s = make_shape(ShapeKind::Rect, 3.0, 4.0);
    assert_eq!(s.kind(), ShapeKind::Rect);
    assert_eq!(s.position(), pt(3.0, 4.0));
    assert_eq!(s.rotation, 0.0);
    assert_eq!(s.opacity, 1.0);
    assert!(s.style.fill.is_none());
}

#[test]
fn new_shape_coerces_non_finite_position() {
    let s = Shape::new(ShapeKind::Circle, pt(f64::NAN, f64::INFINITY), style());
    assert_eq!(s.x, 0.0);
    assert_eq!(s.y, 0.0);
}

// =============================================================
// resize_from_drag
// =============================================================

#[test]
fn drag_rect_boxes_min_max() {
    let (pos, g) = ShapeKind::Rect.create_default().resize_from_drag(pt(100.0, 100.0), pt(50.0, 60.0));
    assert_eq!(pos, pt(50.0, 60.0));
    assert_eq!(g, Geometry::Rect { width: 50.0, height: 40.0 });
}

#[test]
fn drag_rect_small_extent_floors_at_ten() {
    let (_, g) = ShapeKind::Rect.create_default().resize_from_drag(pt(0.0, 0.0), pt(3.0, 2.0));
    assert_eq!(g, Geometry::Rect { width: 10.0, height: 10.0 });
}

#[test]
fn drag_circle_uses_half_smaller_extent() {
    let (pos, g) = ShapeKind::Circle.create_default().resize_from_drag(pt(0.0, 0.0), pt(30.0, 40.0));
    assert_eq!(pos, pt(0.0, 0.0));
    assert_eq!(g, Geometry::Circle { radius: 15.0 });
}

#[test]
fn drag_circle_zero_extent_floors() {
    let (_, g) = ShapeKind::Circle.create_default().resize_from_drag(pt(5.0, 5.0), pt(5.0, 5.0));
    assert_eq!(g, Geometry::Circle { radius: MIN_SIZE });
}

#[test]
fn drag_ellipse_centers_in_box() {
    let (pos, g) = ShapeKind::Ellipse.create_default().resize_from_drag(pt(0.0, 0.0), pt(40.0, 20.0));
    assert_eq!(pos, pt(20.0, 10.0));
    assert_eq!(g, Geometry::Ellipse { radius_x: 20.0, radius_y: 10.0 });
}

#[test]
fn drag_star_inner_is_half_outer() {
    let (pos, g) = ShapeKind::Star.create_default().resize_from_drag(pt(10.0, 10.0), pt(70.0, 90.0));
    assert_eq!(pos, pt(10.0, 10.0));
    assert_eq!(g, Geometry::Star { num_points: 5, inner_radius: 15.0, outer_radius: 30.0 });
}

#[test]
fn drag_star_small_floors() {
    let (_, g) = ShapeKind::Star.create_default().resize_from_drag(pt(0.0, 0.0), pt(2.0, 2.0));
    assert_eq!(g, Geometry::Star { num_points: 5, inner_radius: 5.0, outer_radius: 10.0 });
}

#[test]
fn drag_arrow_is_relative_vector() {
    let (pos, g) = ShapeKind::Arrow.create_default().resize_from_drag(pt(10.0, 20.0), pt(4.0, 50.0));
    assert_eq!(pos, pt(10.0, 20.0));
    assert_eq!(g, Geometry::Arrow { dx: -6.0, dy: 30.0, pointer_length: 10.0, pointer_width: 8.0 });
}

#[test]
fn drag_line_is_relative_vector() {
    let (_, g) = ShapeKind::Line.create_default().resize_from_drag(pt(0.0, 0.0), pt(-10.0, 5.0));
    assert_eq!(g, Geometry::Line { dx: -10.0, dy: 5.0 });
}

#[test]
fn drag_diamond_box_and_vertices() {
    let (pos, g) = ShapeKind::Diamond.create_default().resize_from_drag(pt(10.0, 10.0), pt(50.0, 30.0));
    assert_eq!(pos, pt(10.0, 10.0));
    assert_eq!(g, Geometry::Diamond { width: 40.0, height: 20.0 });
    assert_eq!(g.points(), vec![pt(20.0, 0.0), pt(40.0, 10.0), pt(20.0, 20.0), pt(0.0, 10.0)]);
}

#[test]
fn drag_to_non_finite_point_stays_valid() {
    for kind in ShapeKind::ALL {
        let (pos, g) = kind.create_default().resize_from_drag(pt(1.0, 1.0), pt(f64::NAN, f64::INFINITY));
        assert!(pos.is_finite(), "{kind:?} position not finite");
        assert!(respects_floors(&g), "{kind:?} geometry {g:?}");
    }
}

// =============================================================
// apply_scale
// =============================================================

#[test]
fn scale_rect_per_axis() {
    let g = Geometry::Rect { width: 100.0, height: 50.0 }.apply_scale(2.0, 0.5);
    assert_eq!(g, Geometry::Rect { width: 200.0, height: 25.0 });
}

#[test]
fn scale_rect_negative_uses_magnitude() {
    let g = Geometry::Rect { width: 100.0, height: 50.0 }.apply_scale(-1.5, 1.0);
    assert_eq!(g, Geometry::Rect { width: 150.0, height: 50.0 });
}

#[test]
fn scale_rect_floors_at_ten() {
    let g = Geometry::Rect { width: 100.0, height: 50.0 }.apply_scale(0.01, 0.01);
    assert_eq!(g, Geometry::Rect { width: 10.0, height: 10.0 });
}

#[test]
fn scale_circle_uses_min_magnitude() {
    let g = Geometry::Circle { radius: 20.0 }.apply_scale(3.0, -0.5);
    assert_eq!(g, Geometry::Circle { radius: 10.0 });
}

#[test]
fn scale_ellipse_per_axis() {
    let g = Geometry::Ellipse { radius_x: 10.0, radius_y: 20.0 }.apply_scale(2.0, 3.0);
    assert_eq!(g, Geometry::Ellipse { radius_x: 20.0, radius_y: 60.0 });
}

#[test]
fn scale_star_uniform_with_floors() {
    let g = Geometry::Star { num_points: 6, inner_radius: 10.0, outer_radius: 20.0 }.apply_scale(2.0, 4.0);
    assert_eq!(g, Geometry::Star { num_points: 6, inner_radius: 20.0, outer_radius: 40.0 });

    let tiny = Geometry::Star { num_points: 5, inner_radius: 10.0, outer_radius: 20.0 }.apply_scale(0.1, 0.1);
    assert_eq!(tiny, Geometry::Star { num_points: 5, inner_radius: 3.0, outer_radius: 8.0 });
}

#[test]
fn scale_line_keeps_sign() {
    let g = Geometry::Line { dx: 10.0, dy: -4.0 }.apply_scale(-2.0, 0.5);
    assert_eq!(g, Geometry::Line { dx: -20.0, dy: -2.0 });
}

#[test]
fn scale_diamond_per_axis() {
    let g = Geometry::Diamond { width: 20.0, height: 20.0 }.apply_scale(2.0, 0.1);
    assert_eq!(g, Geometry::Diamond { width: 40.0, height: MIN_SIZE });
}

// =============================================================
// Validation
// =============================================================

#[test]
fn clamped_repairs_every_kind() {
    let broken = [
        Geometry::Rect { width: -1.0, height: f64::NAN },
        Geometry::Circle { radius: 0.0 },
        Geometry::Ellipse { radius_x: f64::INFINITY, radius_y: 1.0 },
        Geometry::Star { num_points: 0, inner_radius: 0.5, outer_radius: -2.0 },
        Geometry::Arrow { dx: f64::NAN, dy: 3.0, pointer_length: 0.0, pointer_width: 0.0 },
        Geometry::Line { dx: f64::INFINITY, dy: f64::NAN },
        Geometry::Diamond { width: 0.0, height: 0.0 },
    ];
    for g in broken {
        let fixed = g.clamped();
        assert!(respects_floors(&fixed), "{g:?} -> {fixed:?}");
        assert_eq!(fixed.kind(), g.kind());
    }
}

#[test]
fn clamped_caps_star_points() {
    let g = Geometry::Star { num_points: u32::MAX, inner_radius: 8.0, outer_radius: 15.0 };
    assert_eq!(
        g.clamped(),
        Geometry::Star { num_points: MAX_STAR_POINTS, inner_radius: 8.0, outer_radius: 15.0 }
    );
}

#[test]
fn star_points_with_huge_count_stay_bounded() {
    let g = Geometry::Star { num_points: u32::MAX, inner_radius: 8.0, outer_radius: 15.0 };
    assert_eq!(g.points().len(), 128);
}

#[test]
fn corner_size_only_for_corner_positioned_kinds() {
    assert_eq!(Geometry::Rect { width: 30.0, height: 20.0 }.corner_size(), Some((30.0, 20.0)));
    assert_eq!(Geometry::Diamond { width: 8.0, height: 9.0 }.corner_size(), Some((8.0, 9.0)));
    assert_eq!(Geometry::Circle { radius: 10.0 }.corner_size(), None);
    assert_eq!(Geometry::Line { dx: 1.0, dy: 1.0 }.corner_size(), None);
}

#[test]
fn validate_clamps_opacity_and_rotation() {
    let mut s = make_shape(ShapeKind::Rect, 0.0, 0.0);
    s.opacity = 4.0;
    s.rotation = f64::NAN;
    s.validate();
    assert_eq!(s.opacity, 1.0);
    assert_eq!(s.rotation, 0.0);

    s.opacity = -1.0;
    s.validate();
    assert_eq!(s.opacity, 0.0);
}

// =============================================================
// apply_patch
// =============================================================

#[test]
fn patch_applies_present_fields_only() {
    let mut s = make_shape(ShapeKind::Rect, 1.0, 2.0);
    let ok = s.apply_patch(&ShapePatch { x: Some(50.0), rotation: Some(30.0), ..Default::default() });
    assert!(ok);
    assert_eq!(s.x, 50.0);
    assert_eq!(s.y, 2.0);
    assert_eq!(s.rotation, 30.0);
}

#[test]
fn patch_revalidates_geometry() {
    let mut s = make_shape(ShapeKind::Circle, 0.0, 0.0);
    s.apply_patch(&ShapePatch { geometry: Some(Geometry::Circle { radius: 1.0 }), ..Default::default() });
    assert_eq!(s.geometry, Geometry::Circle { radius: MIN_SIZE });
}

#[test]
fn patch_with_other_kind_is_rejected_whole() {
    let mut s = make_shape(ShapeKind::Circle, 0.0, 0.0);
    let before = s.clone();
    let ok = s.apply_patch(&ShapePatch {
        x: Some(99.0),
        geometry: Some(Geometry::Rect { width: 10.0, height: 10.0 }),
        ..Default::default()
    });
    assert!(!ok);
    assert_eq!(s, before);
}

#[test]
fn patch_can_clear_fill() {
    let mut s = make_shape(ShapeKind::Rect, 0.0, 0.0);
    s.apply_patch(&ShapePatch { fill: Some(Some("#fff".to_owned())), ..Default::default() });
    assert_eq!(s.style.fill.as_deref(), Some("#fff"));
    s.apply_patch(&ShapePatch { fill: Some(None), ..Default::default() });
    assert!(s.style.fill.is_none());
}

// =============================================================
// Bounds and points
// =============================================================

#[test]
fn rect_bounds_unrotated() {
    let mut s = make_shape(ShapeKind::Rect, 10.0, 20.0);
    s.geometry = Geometry::Rect { width: 30.0, height: 40.0 };
    assert_eq!(s.bounds(), Some(Bounds { min_x: 10.0, min_y: 20.0, max_x: 40.0, max_y: 60.0 }));
}

#[test]
fn circle_bounds_centered() {
    let s = make_shape(ShapeKind::Circle, 0.0, 0.0);
    assert_eq!(s.bounds(), Some(Bounds { min_x: -10.0, min_y: -10.0, max_x: 10.0, max_y: 10.0 }));
}

#[test]
fn rect_bounds_rotated_quarter_turn() {
    let mut s = make_shape(ShapeKind::Rect, 0.0, 0.0);
    s.geometry = Geometry::Rect { width: 30.0, height: 10.0 };
    s.rotation = 90.0;
    let b = s.bounds().unwrap_or(Bounds::from_corners(pt(0.0, 0.0), pt(0.0, 0.0)));
    assert!(approx_eq(b.min_x, -10.0));
    assert!(approx_eq(b.max_x, 0.0));
    assert!(approx_eq(b.min_y, 0.0));
    assert!(approx_eq(b.max_y, 30.0));
}

#[test]
fn star_points_alternate_radii() {
    let g = Geometry::Star { num_points: 5, inner_radius: 5.0, outer_radius: 10.0 };
    let pts = g.points();
    assert_eq!(pts.len(), 10);
    assert!(approx_eq(pts[0].x, 0.0));
    assert!(approx_eq(pts[0].y, -10.0));
    assert!(approx_eq(pts[1].x.hypot(pts[1].y), 5.0));
}

#[test]
fn shape_serializes_with_type_tag() {
    let s = make_shape(ShapeKind::Ellipse, 1.0, 2.0);
    let v = serde_json::to_value(&s).unwrap_or_default();
    assert_eq!(v["type"], "Ellipse");
    assert_eq!(v["radius_x"], 15.0);
    assert_eq!(v["stroke"], "#000");
}
