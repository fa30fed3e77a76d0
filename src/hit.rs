#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Viewport;
use crate::consts::{HANDLE_RADIUS_PX, ROTATE_HANDLE_OFFSET_PX};
use crate::doc::Scene;
use crate::geom::{Bounds, Point, distance_to_segment};
use crate::selection::{Selection, selection_bounds};
use crate::shape::{EntityId, Geometry, Shape};

/// What a pointer landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// The body of a shape.
    Shape(EntityId),
    /// One of the transform handles around the current selection.
    Handle(Handle),
}

/// A transform handle on the selection bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Resize(ResizeAnchor),
    Rotate,
}

/// Anchor position for resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    pub const ALL: [ResizeAnchor; 8] = [Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W, Self::Nw];

    /// Where this handle sits on `b`.
    #[must_use]
    pub fn position(self, b: &Bounds) -> Point {
        let c = b.center();
        match self {
            Self::N => Point::new(c.x, b.min_y),
            Self::Ne => Point::new(b.max_x, b.min_y),
            Self::E => Point::new(b.max_x, c.y),
            Self::Se => Point::new(b.max_x, b.max_y),
            Self::S => Point::new(c.x, b.max_y),
            Self::Sw => Point::new(b.min_x, b.max_y),
            Self::W => Point::new(b.min_x, c.y),
            Self::Nw => Point::new(b.min_x, b.min_y),
        }
    }

    /// The handle across the box, which stays fixed while this one is dragged.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::N => Self::S,
            Self::Ne => Self::Sw,
            Self::E => Self::W,
            Self::Se => Self::Nw,
            Self::S => Self::N,
            Self::Sw => Self::Ne,
            Self::W => Self::E,
            Self::Nw => Self::Se,
        }
    }

    /// Whether dragging this handle scales along x and along y.
    #[must_use]
    pub fn axes(self) -> (bool, bool) {
        match self {
            Self::N | Self::S => (false, true),
            Self::E | Self::W => (true, false),
            Self::Ne | Self::Se | Self::Sw | Self::Nw => (true, true),
        }
    }
}

/// Scene-space position of the rotate handle above `b`.
#[must_use]
pub fn rotate_handle_position(b: &Bounds, viewport: &Viewport) -> Point {
    Point::new(b.center().x, b.min_y - viewport.screen_dist_to_scene(ROTATE_HANDLE_OFFSET_PX))
}

/// Test which handle or shape (if any) is under `world_pt`.
///
/// Handles of a non-empty selection win over shape bodies. Among shapes the
/// topmost (last drawn) wins.
#[must_use]
pub fn hit_test(world_pt: Point, scene: &Scene, viewport: &Viewport, selection: &Selection) -> Option<Hit> {
    if !world_pt.is_finite() {
        return None;
    }
    if let Some(bounds) = selection_bounds(scene, selection) {
        if let Some(handle) = hit_handle(world_pt, &bounds, viewport) {
            return Some(Hit::Handle(handle));
        }
    }
    hit_shape(world_pt, scene, viewport).map(Hit::Shape)
}

/// The topmost shape whose body contains `world_pt`.
#[must_use]
pub fn hit_shape(world_pt: Point, scene: &Scene, viewport: &Viewport) -> Option<EntityId> {
    let slop = viewport.screen_dist_to_scene(HANDLE_RADIUS_PX);
    scene.shapes.iter().rev().find(|s| shape_contains(s, world_pt, slop)).map(|s| s.id.clone())
}

/// A handle on `bounds` within hit slop of `world_pt`.
#[must_use]
pub fn hit_handle(world_pt: Point, bounds: &Bounds, viewport: &Viewport) -> Option<Handle> {
    let slop = viewport.screen_dist_to_scene(HANDLE_RADIUS_PX);
    let near = |p: Point| (p.x - world_pt.x).hypot(p.y - world_pt.y) <= slop;

    if near(rotate_handle_position(bounds, viewport)) {
        return Some(Handle::Rotate);
    }
    ResizeAnchor::ALL.into_iter().find(|a| near(a.position(bounds))).map(Handle::Resize)
}

/// Whether `p` (scene space) lies on the shape. `slop` widens thin kinds.
#[must_use]
pub fn shape_contains(shape: &Shape, p: Point, slop: f64) -> bool {
    let origin = shape.position();
    let unrotated = p.rotated_about(origin, -shape.rotation);
    let lx = unrotated.x - origin.x;
    let ly = unrotated.y - origin.y;

    match shape.geometry {
        Geometry::Rect { width, height } => lx >= 0.0 && lx <= width && ly >= 0.0 && ly <= height,
        Geometry::Circle { radius } => lx.hypot(ly) <= radius,
        Geometry::Ellipse { radius_x, radius_y } => (lx / radius_x).powi(2) + (ly / radius_y).powi(2) <= 1.0,
        Geometry::Star { outer_radius, .. } => lx.hypot(ly) <= outer_radius,
        Geometry::Diamond { width, height } => {
            let hw = width / 2.0;
            let hh = height / 2.0;
            ((lx - hw) / hw).abs() + ((ly - hh) / hh).abs() <= 1.0
        }
        Geometry::Arrow { dx, dy, .. } | Geometry::Line { dx, dy } => {
            let reach = (shape.style.stroke_width / 2.0).max(slop);
            distance_to_segment(Point::new(lx, ly), Point::default(), Point::new(dx, dy)) <= reach
        }
    }
}
