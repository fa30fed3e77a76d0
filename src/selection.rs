//! Selection set, marquee queries, and transform normalization.
//!
//! A handle transform is tracked visually as a scale and rotation applied on top
//! of the stored geometry. When the gesture commits, [`normalize_transform`]
//! folds that visual scale back into the shape's native size fields, so stored
//! shapes never carry a residual scale.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::doc::Scene;
use crate::geom::{Bounds, MarqueeRect, Point};
use crate::shape::{EntityId, Shape, ShapePatch};

/// Failure while turning a visual transform into stored geometry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    #[error("non-finite scale: ({scale_x}, {scale_y})")]
    NonFiniteScale { scale_x: f64, scale_y: f64 },
    #[error("non-finite rotation: {0}")]
    NonFiniteRotation(f64),
    #[error("non-finite position: ({x}, {y})")]
    NonFinitePosition { x: f64, y: f64 },
}

/// Ordered set of selected shape ids. Strokes are never selectable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<EntityId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ids(&self) -> &[EntityId] {
        &self.ids
    }

    #[must_use]
    pub fn contains(&self, id: &EntityId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Replace the selection with exactly `id`.
    pub fn set_single(&mut self, id: EntityId) {
        self.ids.clear();
        self.ids.push(id);
    }

    /// Replace the selection, dropping duplicates.
    pub fn set(&mut self, ids: Vec<EntityId>) {
        self.ids.clear();
        for id in ids {
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// Add `id` if absent, remove it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, id: EntityId) -> bool {
        if let Some(pos) = self.ids.iter().position(|s| s == &id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Clear the selection. Returns whether anything was selected.
    pub fn clear(&mut self) -> bool {
        let had = !self.ids.is_empty();
        self.ids.clear();
        had
    }

    /// Drop ids that no longer name a shape in `scene`. Returns whether any were dropped.
    pub fn retain_existing(&mut self, scene: &Scene) -> bool {
        let before = self.ids.len();
        self.ids.retain(|id| scene.contains_shape(id));
        self.ids.len() != before
    }
}

/// True iff the shape's position point lies within the normalized marquee.
///
/// Only the anchor position is tested, not the full bounds: a large shape whose
/// position falls outside the marquee is not selected.
#[must_use]
pub fn rect_intersect(shape: &Shape, rect: &MarqueeRect) -> bool {
    rect.normalized().contains(shape.position())
}

/// Ids of every shape the marquee selects, bottom to top.
#[must_use]
pub fn marquee_hits(scene: &Scene, rect: &MarqueeRect) -> Vec<EntityId> {
    scene.shapes.iter().filter(|s| rect_intersect(s, rect)).map(|s| s.id.clone()).collect()
}

/// Union of the bounds of every selected shape.
///
/// Shapes whose bounds cannot be computed are left out rather than failing the
/// whole query. Returns `None` when nothing usable remains.
#[must_use]
pub fn selection_bounds(scene: &Scene, selection: &Selection) -> Option<Bounds> {
    let mut out: Option<Bounds> = None;
    for id in selection.ids() {
        let Some(shape) = scene.shape(id) else {
            continue;
        };
        let Some(b) = shape.bounds() else {
            debug!(%id, "excluding shape with unusable bounds from selection bounds");
            continue;
        };
        out = Some(match out {
            Some(acc) => acc.union(&b),
            None => b,
        });
    }
    out
}

/// Fold a visual scale and absolute rotation into geometry fields.
///
/// The returned patch carries the rescaled geometry (clamped to the kind's
/// transform floors) and the rotation in degrees, stored verbatim.
pub fn normalize_transform(
    shape: &Shape,
    scale_x: f64,
    scale_y: f64,
    rotation: f64,
) -> Result<ShapePatch, TransformError> {
    if !(scale_x.is_finite() && scale_y.is_finite()) {
        return Err(TransformError::NonFiniteScale { scale_x, scale_y });
    }
    if !rotation.is_finite() {
        return Err(TransformError::NonFiniteRotation(rotation));
    }
    Ok(ShapePatch {
        geometry: Some(shape.geometry.apply_scale(scale_x, scale_y)),
        rotation: Some(rotation),
        ..Default::default()
    })
}

/// The final state of a transform reported for one shape, in the form a
/// transformer widget reports it: new position, visual scale, absolute rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformEnd {
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
}

impl TransformEnd {
    /// Build the full patch for `shape`: normalized geometry, rotation, position.
    pub fn to_patch(&self, shape: &Shape) -> Result<ShapePatch, TransformError> {
        if !(self.x.is_finite() && self.y.is_finite()) {
            return Err(TransformError::NonFinitePosition { x: self.x, y: self.y });
        }
        let mut patch = normalize_transform(shape, self.scale_x, self.scale_y, self.rotation)?;
        patch.x = Some(self.x);
        patch.y = Some(self.y);
        Ok(patch)
    }
}

/// An in-progress handle transform over the selection, not yet committed.
///
/// Positions map as `rotate(pivot + (p - pivot) * scale, pivot, rotation)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingTransform {
    pub pivot: Point,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Rotation delta in degrees.
    pub rotation: f64,
}

impl PendingTransform {
    /// The identity transform about `pivot`.
    #[must_use]
    pub fn identity(pivot: Point) -> Self {
        Self { pivot, scale_x: 1.0, scale_y: 1.0, rotation: 0.0 }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        (self.scale_x - 1.0).abs() < f64::EPSILON
            && (self.scale_y - 1.0).abs() < f64::EPSILON
            && self.rotation.abs() < f64::EPSILON
    }

    /// Where a scene point ends up under this transform.
    #[must_use]
    pub fn map_point(&self, p: Point) -> Point {
        let scaled = Point::new(
            self.pivot.x + (p.x - self.pivot.x) * self.scale_x,
            self.pivot.y + (p.y - self.pivot.y) * self.scale_y,
        );
        scaled.rotated_about(self.pivot, self.rotation)
    }

    /// The transform-end this pending transform produces for `shape`.
    ///
    /// A corner-positioned shape flipped past the pivot on an axis has its
    /// mapped position on the far edge, so the committed corner moves back by
    /// the committed size along that axis.
    #[must_use]
    pub fn end_for(&self, shape: &Shape) -> TransformEnd {
        let rotation = shape.rotation + self.rotation;
        let mut position = self.map_point(shape.position());
        if let Some((width, height)) = shape.geometry.apply_scale(self.scale_x, self.scale_y).corner_size() {
            let offset = Point::new(
                if self.scale_x < 0.0 { -width } else { 0.0 },
                if self.scale_y < 0.0 { -height } else { 0.0 },
            )
            .rotated_about(Point::default(), rotation);
            position = Point::new(position.x + offset.x, position.y + offset.y);
        }
        TransformEnd { x: position.x, y: position.y, scale_x: self.scale_x, scale_y: self.scale_y, rotation }
    }
}
