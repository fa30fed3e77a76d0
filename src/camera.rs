#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SCALE, MIN_SCALE, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use crate::geom::{Point, scene_to_screen, screen_to_scene};

/// Pan/zoom transform between screen and scene space.
///
/// `offset` is in screen pixels; `scale` is clamped to `[0.1, 5]`.
/// `width` / `height` are the surface size, used as the default zoom pivot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scale: f64,
    pub offset: Point,
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { scale: 1.0, offset: Point::default(), width: 0.0, height: 0.0 }
    }
}

impl Viewport {
    /// Record the surface size in screen pixels.
    pub fn set_size(&mut self, width: f64, height: f64) {
        if width.is_finite() && height.is_finite() {
            self.width = width.max(0.0);
            self.height = height.max(0.0);
        }
    }

    /// Center of the surface in screen pixels.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Zoom to `new_scale`, keeping the scene point under `pivot` (default: the
    /// surface center) fixed on screen.
    pub fn zoom_to(&mut self, new_scale: f64, pivot: Option<Point>) {
        if !new_scale.is_finite() {
            return;
        }
        let new_scale = new_scale.clamp(MIN_SCALE, MAX_SCALE);
        let pivot = match pivot {
            Some(p) if p.is_finite() => p,
            _ => self.center(),
        };
        let ratio = new_scale / self.scale;
        self.offset = Point::new(
            pivot.x - (pivot.x - self.offset.x) * ratio,
            pivot.y - (pivot.y - self.offset.y) * ratio,
        );
        self.scale = new_scale;
    }

    pub fn zoom_in(&mut self) {
        self.zoom_to(self.scale * ZOOM_IN_FACTOR, None);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_to(self.scale * ZOOM_OUT_FACTOR, None);
    }

    /// Back to scale 1 with no offset. Surface size is kept.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.offset = Point::default();
    }

    /// Shift the offset by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if dx.is_finite() && dy.is_finite() {
            self.offset.x += dx;
            self.offset.y += dy;
        }
    }

    /// Convert a screen point to scene space, or `None` if the result is not finite.
    #[must_use]
    pub fn to_scene_point(&self, screen: Point) -> Option<Point> {
        screen_to_scene(screen, self.scale, self.offset)
    }

    /// Convert a scene point to screen pixels.
    #[must_use]
    pub fn to_screen_point(&self, scene: Point) -> Point {
        scene_to_screen(scene, self.scale, self.offset)
    }

    /// Convert a screen-space distance to scene units.
    #[must_use]
    pub fn screen_dist_to_scene(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale
    }
}
