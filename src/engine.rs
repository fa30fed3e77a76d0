//! The editing engine: tool dispatch, gesture lifecycle, keyboard shortcuts,
//! and history boundaries.
//!
//! The host feeds pointer, wheel, and key events in screen coordinates and gets
//! back a list of [`Action`]s describing what it should do next (repaint,
//! change cursor, refresh toolbar state). Every completed discrete action
//! pushes exactly one history snapshot; nothing snapshots mid-drag.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::camera::Viewport;
use crate::config::EngineConfig;
use crate::consts::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
use crate::doc::{Scene, SceneStore, Stroke, StrokeTool};
use crate::geom::{Bounds, MarqueeRect, Point};
use crate::hit::{Handle, Hit, ResizeAnchor, hit_shape, hit_test};
use crate::history::History;
use crate::input::{Button, Cursor, InputState, Key, Modifiers, Tool, WheelDelta};
use crate::selection::{PendingTransform, Selection, TransformEnd, marquee_hits, selection_bounds};
use crate::shape::{EntityId, Shape, ShapeKind, ShapePatch, ShapeStyle};

/// Snap step for rotation while Shift is held, in degrees.
const ROTATION_SNAP_DEG: f64 = 15.0;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The frame changed and should be repainted.
    RenderNeeded,
    /// Show a different pointer cursor.
    SetCursor(Cursor),
    /// The selection changed; carries the new ids.
    SelectionChanged(Vec<EntityId>),
    /// The history cursor moved; toolbar undo/redo buttons may need updating.
    HistoryChanged { can_undo: bool, can_redo: bool },
}

/// Stroke style supplied by the toolbar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
}

/// Read-only view of everything the renderer needs to paint one frame.
#[derive(Debug, Serialize)]
pub struct Frame<'a> {
    pub scene: &'a Scene,
    pub selection: &'a Selection,
    pub viewport: Viewport,
    /// Normalized marquee rectangle while a rubber-band selection is active.
    pub marquee: Option<Bounds>,
    /// Uncommitted handle transform to preview on the selection.
    pub pending_transform: Option<PendingTransform>,
    pub cursor: Cursor,
}

/// The operations toolbar and menu widgets may invoke on the engine.
///
/// UI collaborators receive an implementation of this trait rather than
/// reaching for the engine through shared global state.
pub trait EditorCommands {
    fn undo(&mut self) -> Vec<Action>;
    fn redo(&mut self) -> Vec<Action>;
    fn clear(&mut self) -> Vec<Action>;
    fn zoom_in(&mut self) -> Vec<Action>;
    fn zoom_out(&mut self) -> Vec<Action>;
    fn reset_zoom(&mut self) -> Vec<Action>;
    fn set_tool(&mut self, tool: Tool) -> Vec<Action>;
    fn set_stroke_color(&mut self, color: String);
    fn set_stroke_width(&mut self, width: f64);
}

/// Engine state: scene, history, viewport, selection, and the active gesture.
pub struct Engine {
    pub(crate) store: SceneStore,
    pub(crate) history: History,
    pub(crate) viewport: Viewport,
    pub(crate) selection: Selection,
    pub(crate) input: InputState,
    tool: Tool,
    stroke: StrokeStyle,
    cursor: Cursor,
    eraser_width_factor: f64,
    wheel_zoom_factor: f64,
    /// Last screen position seen, used to end a gesture whose pointer-up was lost.
    last_screen: Option<Point>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(&EngineConfig::default())
    }
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        let config = config.sanitized();
        let tool = config.initial_tool;
        Self {
            store: SceneStore::new(),
            history: History::with_limit(config.history_limit),
            viewport: Viewport::default(),
            selection: Selection::new(),
            input: InputState::Idle,
            tool,
            stroke: StrokeStyle {
                color: config.stroke_color,
                width: clamp_stroke_width(config.stroke_width),
            },
            cursor: tool.idle_cursor(),
            eraser_width_factor: config.eraser_width_factor,
            wheel_zoom_factor: config.wheel_zoom_factor,
            last_screen: None,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn scene(&self) -> &Scene {
        self.store.scene()
    }

    #[must_use]
    pub fn shape(&self, id: &EntityId) -> Option<&Shape> {
        self.store.shape(id)
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    #[must_use]
    pub fn stroke_style(&self) -> &StrokeStyle {
        &self.stroke
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The normalized marquee rectangle, while one is being dragged.
    #[must_use]
    pub fn marquee(&self) -> Option<Bounds> {
        match &self.input {
            InputState::Marquee { rect } => Some(rect.normalized()),
            _ => None,
        }
    }

    /// The uncommitted handle transform, while one is being dragged.
    #[must_use]
    pub fn pending_transform(&self) -> Option<PendingTransform> {
        match &self.input {
            InputState::Transforming { pending, .. } => Some(*pending),
            _ => None,
        }
    }

    /// Everything the renderer needs for one frame.
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            scene: self.store.scene(),
            selection: &self.selection,
            viewport: self.viewport,
            marquee: self.marquee(),
            pending_transform: self.pending_transform(),
            cursor: self.cursor,
        }
    }

    /// The current frame as JSON, for script hosts.
    pub fn frame_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.frame())
    }

    // --- Viewport ---

    /// Update the drawing surface size in screen pixels.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport.set_size(width, height);
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        let mut actions = Vec::new();
        if !self.input.is_idle() {
            debug!("pointer-down during an active gesture; ending it first");
            actions.extend(self.finish_gesture());
        }
        if !screen_pt.is_finite() {
            return actions;
        }
        self.last_screen = Some(screen_pt);

        match button {
            Button::Secondary => return actions,
            Button::Middle => {
                self.begin_pan(screen_pt, &mut actions);
                return actions;
            }
            Button::Primary => {}
        }

        let Some(world) = self.viewport.to_scene_point(screen_pt) else {
            warn!(x = screen_pt.x, y = screen_pt.y, "pointer-down maps to a non-finite scene point");
            return actions;
        };

        match self.tool {
            Tool::Hand => self.begin_pan(screen_pt, &mut actions),
            Tool::Pen => self.begin_stroke(StrokeTool::Pen, world, &mut actions),
            Tool::Eraser => self.begin_stroke(StrokeTool::Eraser, world, &mut actions),
            Tool::Shape(kind) => self.begin_shape(kind, world, &mut actions),
            Tool::Select => self.select_down(world, modifiers, &mut actions),
            Tool::Delete => self.delete_down(world, &mut actions),
        }
        actions
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        if !screen_pt.is_finite() {
            return Vec::new();
        }
        self.last_screen = Some(screen_pt);

        if let InputState::Panning { last_screen } = &mut self.input {
            let (dx, dy) = (screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
            *last_screen = screen_pt;
            self.viewport.pan_by(dx, dy);
            return vec![Action::RenderNeeded];
        }
        if self.input.is_idle() {
            return Vec::new();
        }

        let Some(world) = self.viewport.to_scene_point(screen_pt) else {
            warn!(x = screen_pt.x, y = screen_pt.y, "pointer-move maps to a non-finite scene point");
            return Vec::new();
        };

        match &mut self.input {
            InputState::Drawing { .. } => {
                self.store.append_point_to_last_stroke(world);
            }
            InputState::CreatingShape { id, anchor } => {
                let (id, anchor) = (id.clone(), *anchor);
                self.drag_new_shape(&id, anchor, world);
            }
            InputState::Marquee { rect } => rect.stretch_to(world),
            InputState::DraggingShape { id, last_world, moved } => {
                let (dx, dy) = (world.x - last_world.x, world.y - last_world.y);
                *last_world = world;
                if dx != 0.0 || dy != 0.0 {
                    *moved = true;
                    let id = id.clone();
                    if !self.store.translate_shape(&id, dx, dy) {
                        debug!(%id, "dragged shape no longer exists; ending drag");
                        self.input = InputState::Idle;
                    }
                }
            }
            InputState::Transforming { handle, start_bounds, start_world, pending } => {
                *pending = match *handle {
                    Handle::Resize(anchor) => {
                        resize_transform(anchor, start_bounds, *start_world, world, pending.pivot)
                    }
                    Handle::Rotate => rotate_transform(*start_world, world, pending.pivot, modifiers.shift),
                };
            }
            InputState::Idle | InputState::Panning { .. } => return Vec::new(),
        }
        vec![Action::RenderNeeded]
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, _button: Button, modifiers: Modifiers) -> Vec<Action> {
        let mut actions = Vec::new();
        if screen_pt.is_finite() && self.last_screen != Some(screen_pt) {
            actions.extend(self.on_pointer_move(screen_pt, modifiers));
        }
        actions.extend(self.finish_gesture());
        actions
    }

    /// The pointer left the surface or the pointer-up was lost: end the active
    /// gesture as a release at the last known position.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.finish_gesture()
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, _modifiers: Modifiers) -> Vec<Action> {
        if !delta.dy.is_finite() || delta.dy == 0.0 {
            return Vec::new();
        }
        let scale = self.viewport.scale;
        let target = if delta.dy > 0.0 { scale / self.wheel_zoom_factor } else { scale * self.wheel_zoom_factor };
        self.viewport.zoom_to(target, Some(screen_pt));
        vec![Action::RenderNeeded]
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if modifiers.command() {
            if key.is("z") && !modifiers.shift {
                self.undo()
            } else if key.is("y") || (key.is("z") && modifiers.shift) {
                self.redo()
            } else if key.is("a") {
                self.select_all()
            } else if key.is("0") {
                self.reset_zoom()
            } else if key.is("=") || key.is("+") {
                self.zoom_in()
            } else if key.is("-") {
                self.zoom_out()
            } else {
                Vec::new()
            }
        } else if (key.is("Delete") || key.is("Backspace")) && !self.selection.is_empty() {
            self.delete_selected()
        } else if key.is("Escape") {
            self.escape()
        } else {
            Vec::new()
        }
    }

    // --- Selection commands ---

    /// Select every shape.
    pub fn select_all(&mut self) -> Vec<Action> {
        self.selection.set(self.store.scene().shape_ids());
        vec![self.selection_changed(), Action::RenderNeeded]
    }

    /// Remove the selected shapes as one undoable action.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let ids = self.selection.ids().to_vec();
        let removed = self.store.remove_shapes(&ids);
        let mut actions = Vec::new();
        if self.selection.clear() {
            actions.push(self.selection_changed());
        }
        if !removed.is_empty() {
            info!(count = removed.len(), "deleted selected shapes");
            self.commit(&mut actions);
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Clear the selection and cancel a marquee or handle transform in progress.
    ///
    /// Edits that were already committed stay; only undo reverts those.
    pub fn escape(&mut self) -> Vec<Action> {
        if matches!(self.input, InputState::Marquee { .. } | InputState::Transforming { .. }) {
            self.input = InputState::Idle;
        }
        let mut actions = Vec::new();
        if self.selection.clear() {
            actions.push(self.selection_changed());
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Commit a transform reported by an external transformer widget for one shape.
    ///
    /// A missing shape is a no-op. A transform that cannot be normalized is
    /// logged and dropped without touching the scene or history.
    pub fn commit_transform(&mut self, id: &EntityId, end: TransformEnd) -> Vec<Action> {
        let Some(shape) = self.store.shape(id) else {
            debug!(%id, "transform end for a shape that no longer exists");
            return Vec::new();
        };
        match end.to_patch(shape) {
            Ok(patch) => {
                self.store.update_shape(id, &patch);
                let mut actions = Vec::new();
                self.commit(&mut actions);
                actions.push(Action::RenderNeeded);
                actions
            }
            Err(e) => {
                warn!(error = %e, %id, "transform could not be applied; discarding");
                if matches!(self.input, InputState::Transforming { .. }) {
                    self.input = InputState::Idle;
                }
                vec![Action::RenderNeeded]
            }
        }
    }

    // --- Gesture starts ---

    fn begin_pan(&mut self, screen_pt: Point, actions: &mut Vec<Action>) {
        self.input = InputState::Panning { last_screen: screen_pt };
        self.set_cursor(Cursor::Grabbing, actions);
    }

    fn begin_stroke(&mut self, tool: StrokeTool, world: Point, actions: &mut Vec<Action>) {
        let width = match tool {
            StrokeTool::Pen => self.stroke.width,
            StrokeTool::Eraser => self.stroke.width * self.eraser_width_factor,
        };
        let stroke = Stroke::begin(tool, self.stroke.color.clone(), width, world);
        debug!(id = %stroke.id, ?tool, "stroke started");
        self.input = InputState::Drawing { stroke_id: stroke.id.clone() };
        self.store.add_stroke(stroke);
        actions.push(Action::RenderNeeded);
    }

    fn begin_shape(&mut self, kind: ShapeKind, world: Point, actions: &mut Vec<Action>) {
        let style = ShapeStyle { fill: None, stroke: self.stroke.color.clone(), stroke_width: self.stroke.width };
        let shape = Shape::new(kind, world, style);
        let id = shape.id.clone();
        debug!(%id, ?kind, "shape creation started");
        self.store.add_shape(shape);
        self.selection.set_single(id.clone());
        self.input = InputState::CreatingShape { id, anchor: world };
        actions.push(self.selection_changed());
        actions.push(Action::RenderNeeded);
    }

    fn select_down(&mut self, world: Point, modifiers: Modifiers, actions: &mut Vec<Action>) {
        match hit_test(world, self.store.scene(), &self.viewport, &self.selection) {
            Some(Hit::Handle(handle)) => self.begin_transform(handle, world, actions),
            Some(Hit::Shape(id)) => {
                let selected = if modifiers.command() || modifiers.shift {
                    self.selection.toggle(id.clone())
                } else {
                    if self.selection.ids() != std::slice::from_ref(&id) {
                        self.selection.set_single(id.clone());
                    }
                    true
                };
                actions.push(self.selection_changed());
                if selected {
                    self.input = InputState::DraggingShape { id, last_world: world, moved: false };
                }
                actions.push(Action::RenderNeeded);
            }
            None => {
                if self.selection.clear() {
                    actions.push(self.selection_changed());
                }
                self.input = InputState::Marquee { rect: MarqueeRect::at(world) };
                actions.push(Action::RenderNeeded);
            }
        }
    }

    fn begin_transform(&mut self, handle: Handle, world: Point, actions: &mut Vec<Action>) {
        let Some(bounds) = selection_bounds(self.store.scene(), &self.selection) else {
            return;
        };
        let pivot = match handle {
            Handle::Resize(anchor) => anchor.opposite().position(&bounds),
            Handle::Rotate => bounds.center(),
        };
        debug!(?handle, count = self.selection.len(), "transform started");
        self.input = InputState::Transforming {
            handle,
            start_bounds: bounds,
            start_world: world,
            pending: PendingTransform::identity(pivot),
        };
        actions.push(Action::RenderNeeded);
    }

    fn delete_down(&mut self, world: Point, actions: &mut Vec<Action>) {
        let Some(id) = hit_shape(world, self.store.scene(), &self.viewport) else {
            return;
        };
        self.store.remove_shapes(std::slice::from_ref(&id));
        debug!(%id, "shape deleted");
        if self.selection.clear() {
            actions.push(self.selection_changed());
        }
        self.commit(actions);
        actions.push(Action::RenderNeeded);
    }

    // --- Gesture moves ---

    fn drag_new_shape(&mut self, id: &EntityId, anchor: Point, world: Point) {
        let Some(shape) = self.store.shape(id) else {
            self.input = InputState::Idle;
            return;
        };
        let (position, geometry) = shape.geometry.resize_from_drag(anchor, world);
        let patch = ShapePatch { x: Some(position.x), y: Some(position.y), geometry: Some(geometry), ..Default::default() };
        self.store.update_shape(id, &patch);
    }

    // --- Gesture end ---

    /// End the active gesture: snapshot where the gesture edited the scene,
    /// and return to idle.
    fn finish_gesture(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        match std::mem::take(&mut self.input) {
            InputState::Idle => {}
            InputState::Panning { .. } => {
                self.set_cursor(self.tool.idle_cursor(), &mut actions);
            }
            InputState::Drawing { stroke_id } => {
                debug!(id = %stroke_id, "stroke finished");
                self.commit(&mut actions);
            }
            InputState::CreatingShape { id, .. } => {
                if self.store.shape(&id).is_some() {
                    debug!(%id, "shape created");
                    self.commit(&mut actions);
                }
            }
            InputState::Marquee { rect } => {
                self.selection.set(marquee_hits(self.store.scene(), &rect));
                actions.push(self.selection_changed());
            }
            InputState::DraggingShape { id, moved, .. } => {
                if moved && self.store.shape(&id).is_some() {
                    debug!(%id, "shape moved");
                    self.commit(&mut actions);
                }
            }
            InputState::Transforming { pending, .. } => {
                if !pending.is_identity() {
                    self.apply_pending_transform(&pending, &mut actions);
                }
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Fold a handle transform into every selected shape as one history step.
    ///
    /// All patches are computed before any is applied, so a failure leaves the
    /// scene exactly as it was.
    fn apply_pending_transform(&mut self, pending: &PendingTransform, actions: &mut Vec<Action>) {
        let mut patches = Vec::with_capacity(self.selection.len());
        for id in self.selection.ids() {
            let Some(shape) = self.store.shape(id) else {
                continue;
            };
            match pending.end_for(shape).to_patch(shape) {
                Ok(patch) => patches.push((id.clone(), patch)),
                Err(e) => {
                    warn!(error = %e, %id, "transform could not be applied; discarding");
                    return;
                }
            }
        }
        if patches.is_empty() {
            return;
        }
        for (id, patch) in &patches {
            self.store.update_shape(id, patch);
        }
        debug!(count = patches.len(), "transform committed");
        self.commit(actions);
    }

    // --- Helpers ---

    /// Push a history snapshot of the current scene.
    fn commit(&mut self, actions: &mut Vec<Action>) {
        self.history.snapshot(self.store.scene());
        actions.push(self.history_changed());
    }

    fn restore(&mut self, scene: Scene) {
        self.input = InputState::Idle;
        self.store.restore(scene);
    }

    fn selection_changed(&self) -> Action {
        Action::SelectionChanged(self.selection.ids().to_vec())
    }

    fn history_changed(&self) -> Action {
        Action::HistoryChanged { can_undo: self.history.can_undo(), can_redo: self.history.can_redo() }
    }

    fn set_cursor(&mut self, cursor: Cursor, actions: &mut Vec<Action>) {
        if self.cursor != cursor {
            self.cursor = cursor;
            actions.push(Action::SetCursor(cursor));
        }
    }
}

impl EditorCommands for Engine {
    /// Step back one history entry. Clears the selection.
    fn undo(&mut self) -> Vec<Action> {
        let Some(scene) = self.history.undo().cloned() else {
            return Vec::new();
        };
        self.restore(scene);
        let mut actions = Vec::new();
        if self.selection.clear() {
            actions.push(self.selection_changed());
        }
        actions.push(self.history_changed());
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Step forward one history entry. The selection is kept, minus any shapes
    /// the restored scene does not contain.
    fn redo(&mut self) -> Vec<Action> {
        let Some(scene) = self.history.redo().cloned() else {
            return Vec::new();
        };
        self.restore(scene);
        let mut actions = Vec::new();
        if self.selection.retain_existing(self.store.scene()) {
            actions.push(self.selection_changed());
        }
        actions.push(self.history_changed());
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Empty the board as one undoable action.
    fn clear(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        let scene = self.store.scene();
        info!(strokes = scene.strokes.len(), shapes = scene.shapes.len(), "clearing board");
        self.store.clear();
        let mut actions = Vec::new();
        if self.selection.clear() {
            actions.push(self.selection_changed());
        }
        self.commit(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    fn zoom_in(&mut self) -> Vec<Action> {
        self.viewport.zoom_in();
        vec![Action::RenderNeeded]
    }

    fn zoom_out(&mut self) -> Vec<Action> {
        self.viewport.zoom_out();
        vec![Action::RenderNeeded]
    }

    fn reset_zoom(&mut self) -> Vec<Action> {
        self.viewport.reset();
        vec![Action::RenderNeeded]
    }

    /// Switch tools. Any gesture in progress ends first; leaving for any tool
    /// other than select clears the selection.
    fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        let mut actions = if self.input.is_idle() { Vec::new() } else { self.finish_gesture() };
        if tool == self.tool {
            return actions;
        }
        debug!(from = ?self.tool, to = ?tool, "tool changed");
        self.tool = tool;
        if tool != Tool::Select && self.selection.clear() {
            actions.push(self.selection_changed());
            actions.push(Action::RenderNeeded);
        }
        self.set_cursor(tool.idle_cursor(), &mut actions);
        actions
    }

    fn set_stroke_color(&mut self, color: String) {
        if !color.trim().is_empty() {
            self.stroke.color = color;
        }
    }

    /// Set the stroke width, clamped to `[1, 99]`.
    fn set_stroke_width(&mut self, width: f64) {
        self.stroke.width = clamp_stroke_width(width);
    }
}

fn clamp_stroke_width(width: f64) -> f64 {
    if width.is_finite() { width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH) } else { MIN_STROKE_WIDTH }
}

/// Scale about `pivot` that carries the dragged handle from its start position
/// by the pointer's displacement. Axes the handle does not control stay at 1.
fn resize_transform(
    anchor: ResizeAnchor,
    start_bounds: &Bounds,
    start_world: Point,
    world: Point,
    pivot: Point,
) -> PendingTransform {
    let handle = anchor.position(start_bounds);
    let (scale_x_axis, scale_y_axis) = anchor.axes();
    let axis_scale = |enabled: bool, handle_c: f64, pivot_c: f64, delta: f64| {
        let extent = handle_c - pivot_c;
        if enabled && extent.abs() > f64::EPSILON { (extent + delta) / extent } else { 1.0 }
    };
    PendingTransform {
        pivot,
        scale_x: axis_scale(scale_x_axis, handle.x, pivot.x, world.x - start_world.x),
        scale_y: axis_scale(scale_y_axis, handle.y, pivot.y, world.y - start_world.y),
        rotation: 0.0,
    }
}

/// Rotation about `pivot` swept by the pointer since gesture start, optionally
/// snapped to [`ROTATION_SNAP_DEG`].
fn rotate_transform(start_world: Point, world: Point, pivot: Point, snap: bool) -> PendingTransform {
    let start = (start_world.y - pivot.y).atan2(start_world.x - pivot.x);
    let now = (world.y - pivot.y).atan2(world.x - pivot.x);
    let mut degrees = (now - start).to_degrees();
    if snap {
        degrees = (degrees / ROTATION_SNAP_DEG).round() * ROTATION_SNAP_DEG;
    }
    PendingTransform { rotation: degrees, ..PendingTransform::identity(pivot) }
}
