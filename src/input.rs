//! Input model: tools, modifier keys, mouse buttons, and the gesture state machine.
//!
//! `Tool` and `Modifiers` capture the user's intent at the time of a pointer
//! event. `InputState` is the one gesture being tracked between pointer-down
//! and pointer-up, carrying the context needed to apply incremental moves and
//! decide on release whether a history snapshot is due.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::geom::{Bounds, MarqueeRect, Point};
use crate::hit::Handle;
use crate::selection::PendingTransform;
use crate::shape::{EntityId, ShapeKind};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    /// Pointer / selection tool.
    Select,
    /// Pan the viewport.
    Hand,
    /// Freehand drawing (default).
    #[default]
    Pen,
    /// Freehand erasing.
    Eraser,
    /// Drag out a new shape of the given kind.
    Shape(ShapeKind),
    /// Click a shape to remove it.
    Delete,
}

impl Tool {
    /// The pointer cursor the host should show while this tool is idle.
    #[must_use]
    pub fn idle_cursor(self) -> Cursor {
        match self {
            Self::Select => Cursor::Default,
            Self::Hand => Cursor::Grab,
            Self::Pen | Self::Eraser => Cursor::None,
            Self::Shape(_) => Cursor::Crosshair,
            Self::Delete => Cursor::Pointer,
        }
    }
}

/// Pointer cursor hint for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    Default,
    Pointer,
    Grab,
    Grabbing,
    Crosshair,
    /// Hide the system cursor; the host draws a brush preview instead.
    None,
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger touch).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

/// A keyboard key, named as the browser reports it (`"z"`, `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.to_owned())
    }

    /// Whether this key is `name`, ignoring ASCII case.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// The gesture in progress, if any.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A pen or eraser stroke is being drawn.
    Drawing {
        /// Id of the stroke receiving points.
        stroke_id: EntityId,
    },
    /// A new shape is being sized by dragging away from its anchor.
    CreatingShape {
        /// Id of the provisional shape.
        id: EntityId,
        /// Scene-space point where the drag started.
        anchor: Point,
    },
    /// A rubber-band selection rectangle is being dragged.
    Marquee {
        /// Scene-space rectangle from the start point to the pointer.
        rect: MarqueeRect,
    },
    /// The viewport is being panned.
    Panning {
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
    },
    /// An existing shape is being moved.
    DraggingShape {
        /// Id of the shape being dragged.
        id: EntityId,
        /// Scene-space pointer position at the previous event.
        last_world: Point,
        /// Whether any movement has been applied yet.
        moved: bool,
    },
    /// The selection is being resized or rotated via a handle.
    Transforming {
        /// Which handle is being dragged.
        handle: Handle,
        /// Selection bounds at gesture start.
        start_bounds: Bounds,
        /// Scene-space pointer position at gesture start.
        start_world: Point,
        /// Visual transform accumulated so far.
        pending: PendingTransform,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
