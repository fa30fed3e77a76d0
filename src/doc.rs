//! Scene model: freehand strokes, shapes, and the store that owns them.
//!
//! All mutation goes through [`SceneStore::apply`] with a [`SceneCommand`]. The
//! gate re-validates every shape it adds or updates and bumps a version counter
//! whenever the scene actually changes. Nothing in this module writes history;
//! the engine decides where snapshot boundaries fall.
//!
//! Draw order is collection order: later strokes paint over earlier ones, and
//! the last shape is the topmost.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::geom::Point;
use crate::shape::{EntityId, Shape, ShapePatch};

/// Which freehand tool produced a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeTool {
    Pen,
    Eraser,
}

/// How the renderer composites a stroke onto what is already painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Composite {
    /// Paint over existing pixels.
    SourceOver,
    /// Remove existing pixels under the stroke.
    DestinationOut,
}

/// A freehand stroke. Points are in scene space, in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub id: EntityId,
    pub tool: StrokeTool,
    /// Derived from `tool` at creation; carried so the renderer need not know tools.
    pub composite: Composite,
    pub color: String,
    pub width: f64,
    pub points: Vec<Point>,
}

impl Stroke {
    /// Start a stroke with a single point.
    #[must_use]
    pub fn begin(tool: StrokeTool, color: String, width: f64, start: Point) -> Self {
        Self {
            id: EntityId::generate("stroke"),
            tool,
            composite: tool.composite(),
            color,
            width,
            points: vec![start],
        }
    }
}

impl StrokeTool {
    /// Erasers subtract; pens paint over.
    #[must_use]
    pub fn composite(self) -> Composite {
        match self {
            Self::Pen => Composite::SourceOver,
            Self::Eraser => Composite::DestinationOut,
        }
    }
}

/// The full set of strokes and shapes at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub strokes: Vec<Stroke>,
    pub shapes: Vec<Shape>,
}

impl Scene {
    #[must_use]
    pub fn shape(&self, id: &EntityId) -> Option<&Shape> {
        self.shapes.iter().find(|s| &s.id == id)
    }

    #[must_use]
    pub fn contains_shape(&self, id: &EntityId) -> bool {
        self.shapes.iter().any(|s| &s.id == id)
    }

    /// Ids of every shape, bottom to top.
    #[must_use]
    pub fn shape_ids(&self) -> Vec<EntityId> {
        self.shapes.iter().map(|s| s.id.clone()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.shapes.is_empty()
    }
}

/// A single mutation of the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    /// Append a new stroke on top of the existing ones.
    AddStroke(Stroke),
    /// Extend the most recent stroke by one point.
    AppendPoint(Point),
    /// Add a shape on top of the existing ones.
    CreateShape(Shape),
    /// Move a shape by a scene-space delta.
    TranslateShape { id: EntityId, dx: f64, dy: f64 },
    /// Apply a sparse update to a shape (geometry, rotation, style, position).
    TransformShape { id: EntityId, patch: ShapePatch },
    /// Remove every listed shape that exists.
    RemoveShapes(Vec<EntityId>),
    /// Empty both collections.
    Clear,
    /// Replace the whole scene, as undo/redo does.
    Restore(Scene),
}

/// Owner of the live scene.
#[derive(Debug, Default)]
pub struct SceneStore {
    scene: Scene,
    version: u64,
}

impl SceneStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current scene, read-only.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Counter bumped on every effective mutation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn shape(&self, id: &EntityId) -> Option<&Shape> {
        self.scene.shape(id)
    }

    /// The single mutation gate. Returns `true` if the scene changed.
    ///
    /// Commands that name a missing shape, or a point with no stroke to extend,
    /// are no-ops rather than errors.
    pub fn apply(&mut self, command: SceneCommand) -> bool {
        let changed = match command {
            SceneCommand::AddStroke(stroke) => {
                self.scene.strokes.push(stroke);
                true
            }
            SceneCommand::AppendPoint(p) => {
                if !p.is_finite() {
                    warn!(x = p.x, y = p.y, "dropping non-finite stroke point");
                    return false;
                }
                match self.scene.strokes.last_mut() {
                    Some(stroke) => {
                        stroke.points.push(p);
                        true
                    }
                    None => false,
                }
            }
            SceneCommand::CreateShape(mut shape) => {
                shape.validate();
                self.scene.shapes.push(shape);
                true
            }
            SceneCommand::TranslateShape { id, dx, dy } => {
                if !(dx.is_finite() && dy.is_finite()) {
                    return false;
                }
                match self.shape_mut(&id) {
                    Some(shape) => {
                        shape.x += dx;
                        shape.y += dy;
                        shape.validate();
                        true
                    }
                    None => false,
                }
            }
            SceneCommand::TransformShape { id, patch } => match self.shape_mut(&id) {
                Some(shape) => {
                    let accepted = shape.apply_patch(&patch);
                    if !accepted {
                        warn!(%id, "rejected shape update with geometry of another kind");
                    }
                    accepted
                }
                None => false,
            },
            SceneCommand::RemoveShapes(ids) => {
                let before = self.scene.shapes.len();
                self.scene.shapes.retain(|s| !ids.contains(&s.id));
                self.scene.shapes.len() != before
            }
            SceneCommand::Clear => {
                let had_content = !self.scene.is_empty();
                self.scene.strokes.clear();
                self.scene.shapes.clear();
                had_content
            }
            SceneCommand::Restore(mut scene) => {
                for shape in &mut scene.shapes {
                    shape.validate();
                }
                self.scene = scene;
                true
            }
        };
        if changed {
            self.version += 1;
        }
        changed
    }

    // --- Convenience wrappers over `apply` ---

    pub fn add_stroke(&mut self, stroke: Stroke) {
        self.apply(SceneCommand::AddStroke(stroke));
    }

    /// Append a point to the most recent stroke. Returns false if there is none.
    pub fn append_point_to_last_stroke(&mut self, p: Point) -> bool {
        self.apply(SceneCommand::AppendPoint(p))
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.apply(SceneCommand::CreateShape(shape));
    }

    /// Apply a sparse update. Missing ids are a no-op returning false.
    pub fn update_shape(&mut self, id: &EntityId, patch: &ShapePatch) -> bool {
        self.apply(SceneCommand::TransformShape { id: id.clone(), patch: patch.clone() })
    }

    pub fn translate_shape(&mut self, id: &EntityId, dx: f64, dy: f64) -> bool {
        self.apply(SceneCommand::TranslateShape { id: id.clone(), dx, dy })
    }

    /// Remove shapes by id and return the ids that were actually present.
    pub fn remove_shapes(&mut self, ids: &[EntityId]) -> Vec<EntityId> {
        let present: Vec<EntityId> = ids.iter().filter(|id| self.scene.contains_shape(id)).cloned().collect();
        if !present.is_empty() {
            self.apply(SceneCommand::RemoveShapes(present.clone()));
        }
        present
    }

    pub fn clear(&mut self) {
        self.apply(SceneCommand::Clear);
    }

    pub fn restore(&mut self, scene: Scene) {
        self.apply(SceneCommand::Restore(scene));
    }

    fn shape_mut(&mut self, id: &EntityId) -> Option<&mut Shape> {
        self.scene.shapes.iter_mut().find(|s| &s.id == id)
    }
}
