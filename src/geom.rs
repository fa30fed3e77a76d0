//! Geometry utilities: points, bounds, finite coercion, and size clamping.
//!
//! Everything here is a pure function over plain values. The scene model and
//! the selection engine lean on these helpers to keep every committed number
//! finite and every size above its floor, whatever the pointer produced.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in either screen or scene space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Rotate this point around `pivot` by `degrees` (clockwise in screen space).
    #[must_use]
    pub fn rotated_about(self, pivot: Point, degrees: f64) -> Point {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Point { x: pivot.x + dx * cos - dy * sin, y: pivot.y + dx * sin + dy * cos }
    }
}

/// An axis-aligned rectangle with `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Build bounds from two arbitrary corners.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self { min_x: a.x.min(b.x), min_y: a.y.min(b.y), max_x: a.x.max(b.x), max_y: a.y.max(b.y) }
    }

    /// Smallest bounds containing every point, or `None` for an empty or non-finite set.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut out: Option<Self> = None;
        for p in points {
            if !p.is_finite() {
                return None;
            }
            out = Some(match out {
                None => Self::from_corners(p, p),
                Some(b) => Self {
                    min_x: b.min_x.min(p.x),
                    min_y: b.min_y.min(p.y),
                    max_x: b.max_x.max(p.x),
                    max_y: b.max_y.max(p.y),
                },
            });
        }
        out
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.min_x + self.max_x) * 0.5, (self.min_y + self.max_y) * 0.5)
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    #[must_use]
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// The four corners, clockwise from top-left.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.min_x, self.max_y),
        ]
    }
}

/// A drag rectangle anchored at its start point. Width and height may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarqueeRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl MarqueeRect {
    /// A zero-extent marquee at `start`.
    #[must_use]
    pub fn at(start: Point) -> Self {
        Self { x: start.x, y: start.y, width: 0.0, height: 0.0 }
    }

    /// Stretch the far corner to `current`.
    pub fn stretch_to(&mut self, current: Point) {
        self.width = current.x - self.x;
        self.height = current.y - self.y;
    }

    /// Bounds with min/max sorted out.
    #[must_use]
    pub fn normalized(&self) -> Bounds {
        Bounds::from_corners(Point::new(self.x, self.y), Point::new(self.x + self.width, self.y + self.height))
    }
}

/// Replace a non-finite value with zero.
#[must_use]
pub fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Clamp a size-like value: absolute value, non-finite or zero falls back to `floor`,
/// and the result is never below `floor`.
#[must_use]
pub fn clamp_size(v: f64, floor: f64) -> f64 {
    let abs = v.abs();
    if !abs.is_finite() || abs == 0.0 {
        return floor;
    }
    abs.max(floor)
}

/// Convert a screen point to scene space for the given scale and offset.
///
/// Returns `None` when the result is not finite (degenerate scale or bad input).
#[must_use]
pub fn screen_to_scene(screen: Point, scale: f64, offset: Point) -> Option<Point> {
    let scene = Point::new((screen.x - offset.x) / scale, (screen.y - offset.y) / scale);
    scene.is_finite().then_some(scene)
}

/// Convert a scene point to screen space for the given scale and offset.
#[must_use]
pub fn scene_to_screen(scene: Point, scale: f64, offset: Point) -> Point {
    Point::new(scene.x * scale + offset.x, scene.y * scale + offset.y)
}

/// Distance from `p` to the segment `a`-`b`.
#[must_use]
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 { (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0) } else { 0.0 };
    let cx = a.x + t * dx;
    let cy = a.y + t * dy;
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}
