//! Shape data: kinds, per-kind geometry, style, and sparse updates.
//!
//! Per-kind behavior lives on [`Geometry`], a closed tagged variant. The three
//! geometry rules the editor needs (default geometry at pointer-down, geometry
//! from a creation drag, and geometry after a handle transform) are methods on
//! it, and every one of them ends in the same floor clamp.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{
    DRAG_MIN_RECT, DRAG_MIN_STAR_INNER, DRAG_MIN_STAR_OUTER, MAX_STAR_POINTS, MIN_INNER_RADIUS, MIN_SIZE, MIN_STAR_POINTS,
    STAR_INNER_RATIO, TRANSFORM_MIN_RECT, TRANSFORM_MIN_STAR_INNER, TRANSFORM_MIN_STAR_OUTER,
};
use crate::geom::{Bounds, Point, clamp_size, finite_or_zero};

/// Globally unique identifier for a stroke or shape.
///
/// Generated from a time-ordered UUID so ids are unique across sessions; the
/// ordering carries no meaning to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Generate a fresh id with the given prefix (`shape`, `stroke`).
    #[must_use]
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{prefix}_{}", Uuid::now_v7().simple()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The kind of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Axis-aligned box from its top-left corner.
    Rect,
    /// Circle centered on its position.
    Circle,
    /// Ellipse centered on its position.
    Ellipse,
    /// Star polygon centered on its position.
    Star,
    /// Line with an arrowhead at the far end.
    Arrow,
    /// Straight line segment.
    Line,
    /// Rhombus with vertices at the midpoints of its bounding box.
    Diamond,
}

impl ShapeKind {
    /// Every kind, in toolbar order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Rect,
        ShapeKind::Circle,
        ShapeKind::Arrow,
        ShapeKind::Star,
        ShapeKind::Ellipse,
        ShapeKind::Line,
        ShapeKind::Diamond,
    ];

    /// Geometry placed at pointer-down, before any drag.
    #[must_use]
    pub fn create_default(self) -> Geometry {
        match self {
            Self::Rect => Geometry::Rect { width: 20.0, height: 20.0 },
            Self::Circle => Geometry::Circle { radius: 10.0 },
            Self::Ellipse => Geometry::Ellipse { radius_x: 15.0, radius_y: 10.0 },
            Self::Star => Geometry::Star { num_points: 5, inner_radius: 8.0, outer_radius: 15.0 },
            Self::Arrow => Geometry::Arrow { dx: 20.0, dy: 0.0, pointer_length: 10.0, pointer_width: 8.0 },
            Self::Line => Geometry::Line { dx: 20.0, dy: 20.0 },
            Self::Diamond => Geometry::Diamond { width: 20.0, height: 20.0 },
        }
    }
}

/// Kind-specific geometry, measured relative to the shape's position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Rect {
        width: f64,
        height: f64,
    },
    Circle {
        radius: f64,
    },
    Ellipse {
        radius_x: f64,
        radius_y: f64,
    },
    Star {
        num_points: u32,
        inner_radius: f64,
        outer_radius: f64,
    },
    /// Endpoint vector `(dx, dy)` from the position, plus arrowhead size.
    Arrow {
        dx: f64,
        dy: f64,
        pointer_length: f64,
        pointer_width: f64,
    },
    /// Endpoint vector `(dx, dy)` from the position.
    Line {
        dx: f64,
        dy: f64,
    },
    Diamond {
        width: f64,
        height: f64,
    },
}

impl Geometry {
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rect { .. } => ShapeKind::Rect,
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Ellipse { .. } => ShapeKind::Ellipse,
            Self::Star { .. } => ShapeKind::Star,
            Self::Arrow { .. } => ShapeKind::Arrow,
            Self::Line { .. } => ShapeKind::Line,
            Self::Diamond { .. } => ShapeKind::Diamond,
        }
    }

    /// Apply the committed-model floors: size fields ≥ [`MIN_SIZE`], inner radius
    /// ≥ [`MIN_INNER_RADIUS`], star points within
    /// [`MIN_STAR_POINTS`]..=[`MAX_STAR_POINTS`], endpoint vectors finite.
    #[must_use]
    pub fn clamped(&self) -> Geometry {
        match *self {
            Self::Rect { width, height } => {
                Self::Rect { width: clamp_size(width, MIN_SIZE), height: clamp_size(height, MIN_SIZE) }
            }
            Self::Circle { radius } => Self::Circle { radius: clamp_size(radius, MIN_SIZE) },
            Self::Ellipse { radius_x, radius_y } => Self::Ellipse {
                radius_x: clamp_size(radius_x, MIN_SIZE),
                radius_y: clamp_size(radius_y, MIN_SIZE),
            },
            Self::Star { num_points, inner_radius, outer_radius } => Self::Star {
                num_points: num_points.clamp(MIN_STAR_POINTS, MAX_STAR_POINTS),
                inner_radius: clamp_size(inner_radius, MIN_INNER_RADIUS),
                outer_radius: clamp_size(outer_radius, MIN_SIZE),
            },
            Self::Arrow { dx, dy, pointer_length, pointer_width } => Self::Arrow {
                dx: finite_or_zero(dx),
                dy: finite_or_zero(dy),
                pointer_length: clamp_size(pointer_length, MIN_INNER_RADIUS),
                pointer_width: clamp_size(pointer_width, MIN_INNER_RADIUS),
            },
            Self::Line { dx, dy } => Self::Line { dx: finite_or_zero(dx), dy: finite_or_zero(dy) },
            Self::Diamond { width, height } => {
                Self::Diamond { width: clamp_size(width, MIN_SIZE), height: clamp_size(height, MIN_SIZE) }
            }
        }
    }

    /// Recompute geometry while dragging out a new shape from `anchor` to `current`.
    ///
    /// Returns the shape's new position and geometry. Settings that a drag does
    /// not control (star point count, arrowhead size) are kept.
    #[must_use]
    pub fn resize_from_drag(&self, anchor: Point, current: Point) -> (Point, Geometry) {
        let width = (current.x - anchor.x).abs();
        let height = (current.y - anchor.y).abs();
        let corner = Point::new(finite_or_zero(current.x.min(anchor.x)), finite_or_zero(current.y.min(anchor.y)));

        let (position, geometry) = match *self {
            Self::Rect { .. } => {
                (corner, Self::Rect { width: width.max(DRAG_MIN_RECT), height: height.max(DRAG_MIN_RECT) })
            }
            Self::Circle { .. } => (anchor, Self::Circle { radius: (width.min(height) / 2.0).max(MIN_SIZE) }),
            Self::Ellipse { .. } => (
                Point::new(corner.x + width / 2.0, corner.y + height / 2.0),
                Self::Ellipse { radius_x: (width / 2.0).max(MIN_SIZE), radius_y: (height / 2.0).max(MIN_SIZE) },
            ),
            Self::Star { num_points, .. } => {
                let outer = (width.min(height) / 2.0).max(DRAG_MIN_STAR_OUTER);
                (
                    anchor,
                    Self::Star {
                        num_points,
                        inner_radius: (outer * STAR_INNER_RATIO).max(DRAG_MIN_STAR_INNER),
                        outer_radius: outer,
                    },
                )
            }
            Self::Arrow { pointer_length, pointer_width, .. } => (
                anchor,
                Self::Arrow { dx: current.x - anchor.x, dy: current.y - anchor.y, pointer_length, pointer_width },
            ),
            Self::Line { .. } => (anchor, Self::Line { dx: current.x - anchor.x, dy: current.y - anchor.y }),
            Self::Diamond { .. } => (corner, Self::Diamond { width, height }),
        };

        (Point::new(finite_or_zero(position.x), finite_or_zero(position.y)), geometry.clamped())
    }

    /// Fold a visual scale into the native size fields.
    ///
    /// Uniform kinds (circle, star) scale by `min(|sx|, |sy|)`; the rest scale
    /// per axis. Endpoint vectors keep their sign so mirrored lines stay mirrored.
    #[must_use]
    pub fn apply_scale(&self, scale_x: f64, scale_y: f64) -> Geometry {
        let sx = scale_x.abs();
        let sy = scale_y.abs();
        let uniform = sx.min(sy);

        let geometry = match *self {
            Self::Rect { width, height } => Self::Rect {
                width: (width * sx).max(TRANSFORM_MIN_RECT),
                height: (height * sy).max(TRANSFORM_MIN_RECT),
            },
            Self::Circle { radius } => Self::Circle { radius: (radius * uniform).max(MIN_SIZE) },
            Self::Ellipse { radius_x, radius_y } => Self::Ellipse {
                radius_x: (radius_x * sx).max(MIN_SIZE),
                radius_y: (radius_y * sy).max(MIN_SIZE),
            },
            Self::Star { num_points, inner_radius, outer_radius } => Self::Star {
                num_points,
                inner_radius: (inner_radius * uniform).max(TRANSFORM_MIN_STAR_INNER),
                outer_radius: (outer_radius * uniform).max(TRANSFORM_MIN_STAR_OUTER),
            },
            Self::Arrow { dx, dy, pointer_length, pointer_width } => {
                Self::Arrow { dx: dx * scale_x, dy: dy * scale_y, pointer_length, pointer_width }
            }
            Self::Line { dx, dy } => Self::Line { dx: dx * scale_x, dy: dy * scale_y },
            Self::Diamond { width, height } => Self::Diamond { width: width * sx, height: height * sy },
        };
        geometry.clamped()
    }

    /// Unrotated bounds relative to the shape's position.
    #[must_use]
    pub fn local_bounds(&self) -> Bounds {
        let origin = Point::default();
        match *self {
            Self::Rect { width, height } | Self::Diamond { width, height } => {
                Bounds::from_corners(origin, Point::new(width, height))
            }
            Self::Circle { radius } => Bounds::from_corners(Point::new(-radius, -radius), Point::new(radius, radius)),
            Self::Ellipse { radius_x, radius_y } => {
                Bounds::from_corners(Point::new(-radius_x, -radius_y), Point::new(radius_x, radius_y))
            }
            Self::Star { outer_radius, .. } => {
                Bounds::from_corners(Point::new(-outer_radius, -outer_radius), Point::new(outer_radius, outer_radius))
            }
            Self::Arrow { dx, dy, .. } | Self::Line { dx, dy } => Bounds::from_corners(origin, Point::new(dx, dy)),
        }
    }

    /// Width and height for kinds positioned by their top-left corner.
    #[must_use]
    pub fn corner_size(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Rect { width, height } | Self::Diamond { width, height } => Some((width, height)),
            Self::Circle { .. }
            | Self::Ellipse { .. }
            | Self::Star { .. }
            | Self::Arrow { .. }
            | Self::Line { .. } => None,
        }
    }

    /// Polyline vertices relative to the position, for kinds drawn as point lists.
    ///
    /// Arrow and line yield their two endpoints; a diamond yields its four
    /// edge midpoints (top, right, bottom, left); a star yields its alternating
    /// outer/inner vertices starting straight up. Other kinds yield nothing.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        match *self {
            Self::Arrow { dx, dy, .. } | Self::Line { dx, dy } => vec![Point::default(), Point::new(dx, dy)],
            Self::Diamond { width, height } => vec![
                Point::new(width / 2.0, 0.0),
                Point::new(width, height / 2.0),
                Point::new(width / 2.0, height),
                Point::new(0.0, height / 2.0),
            ],
            Self::Star { num_points, inner_radius, outer_radius } => {
                let num_points = num_points.clamp(MIN_STAR_POINTS, MAX_STAR_POINTS);
                let step = std::f64::consts::PI / f64::from(num_points);
                (0..num_points * 2)
                    .map(|i| {
                        let r = if i % 2 == 0 { outer_radius } else { inner_radius };
                        let angle = f64::from(i) * step - std::f64::consts::FRAC_PI_2;
                        Point::new(r * angle.cos(), r * angle.sin())
                    })
                    .collect()
            }
            Self::Rect { .. } | Self::Circle { .. } | Self::Ellipse { .. } => Vec::new(),
        }
    }
}

/// Paint style of a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Fill color; `None` leaves the interior transparent.
    pub fill: Option<String>,
    /// Outline color as a CSS color string.
    pub stroke: String,
    /// Outline width in scene units.
    pub stroke_width: f64,
}

/// A committed shape on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: EntityId,
    /// Position in scene space. Top-left for rect/diamond, center for round
    /// kinds, start point for arrow/line.
    pub x: f64,
    pub y: f64,
    #[serde(flatten)]
    pub geometry: Geometry,
    #[serde(flatten)]
    pub style: ShapeStyle,
    /// Clockwise rotation in degrees around the position.
    pub rotation: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Shape {
    /// A new shape of `kind` at `position` with the kind's default geometry.
    #[must_use]
    pub fn new(kind: ShapeKind, position: Point, style: ShapeStyle) -> Self {
        let mut shape = Self {
            id: EntityId::generate("shape"),
            x: position.x,
            y: position.y,
            geometry: kind.create_default(),
            style,
            rotation: 0.0,
            opacity: 1.0,
        };
        shape.validate();
        shape
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Re-apply every numeric invariant in place.
    pub fn validate(&mut self) {
        self.geometry = self.geometry.clamped();
        self.x = finite_or_zero(self.x);
        self.y = finite_or_zero(self.y);
        self.rotation = finite_or_zero(self.rotation);
        self.opacity = if self.opacity.is_finite() { self.opacity.clamp(0.0, 1.0) } else { 1.0 };
        self.style.stroke_width = finite_or_zero(self.style.stroke_width).max(0.0);
    }

    /// Apply a sparse update, then re-validate.
    ///
    /// A patch whose geometry is of a different kind is rejected as a whole and
    /// `false` is returned; the shape is left untouched.
    pub fn apply_patch(&mut self, patch: &ShapePatch) -> bool {
        if let Some(ref geometry) = patch.geometry {
            if geometry.kind() != self.kind() {
                return false;
            }
            self.geometry = geometry.clone();
        }
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(r) = patch.rotation {
            self.rotation = r;
        }
        if let Some(o) = patch.opacity {
            self.opacity = o;
        }
        if let Some(ref fill) = patch.fill {
            self.style.fill.clone_from(fill);
        }
        if let Some(ref stroke) = patch.stroke {
            self.style.stroke.clone_from(stroke);
        }
        if let Some(w) = patch.stroke_width {
            self.style.stroke_width = w;
        }
        self.validate();
        true
    }

    /// Scene-space axis-aligned bounds of the rotated shape, or `None` when the
    /// numbers are unusable.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let origin = self.position();
        let corners = self.geometry.local_bounds().corners();
        Bounds::from_points(
            corners
                .into_iter()
                .map(|c| Point::new(origin.x + c.x, origin.y + c.y).rotated_about(origin, self.rotation)),
        )
    }
}

/// Sparse update for a shape. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Replacement geometry; must be of the shape's kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    /// `Some(None)` clears the fill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}
