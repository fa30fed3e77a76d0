//! Shared numeric constants for the editing engine.

// ── Size floors ─────────────────────────────────────────────────

/// Floor for every committed size field (width, height, radius, radii, outer radius).
pub const MIN_SIZE: f64 = 5.0;

/// Floor for a star's inner radius.
pub const MIN_INNER_RADIUS: f64 = 2.0;

/// Fewest points a star may have.
pub const MIN_STAR_POINTS: u32 = 3;

/// Most points a star may have.
pub const MAX_STAR_POINTS: u32 = 64;

/// Rect width/height floor while dragging out a new rect.
pub const DRAG_MIN_RECT: f64 = 10.0;

/// Star outer radius floor while dragging out a new star.
pub const DRAG_MIN_STAR_OUTER: f64 = 10.0;

/// Star inner radius floor while dragging out a new star.
pub const DRAG_MIN_STAR_INNER: f64 = 3.0;

/// Rect width/height floor after a handle transform.
pub const TRANSFORM_MIN_RECT: f64 = 10.0;

/// Star inner radius floor after a handle transform.
pub const TRANSFORM_MIN_STAR_INNER: f64 = 3.0;

/// Star outer radius floor after a handle transform.
pub const TRANSFORM_MIN_STAR_OUTER: f64 = 8.0;

/// Inner-to-outer radius ratio for stars.
pub const STAR_INNER_RATIO: f64 = 0.5;

// ── Viewport ────────────────────────────────────────────────────

pub const MIN_SCALE: f64 = 0.1;
pub const MAX_SCALE: f64 = 5.0;

/// Multiplier applied by one zoom-in step.
pub const ZOOM_IN_FACTOR: f64 = 1.2;

/// Multiplier applied by one zoom-out step.
pub const ZOOM_OUT_FACTOR: f64 = 0.8;

// ── Stroke style ────────────────────────────────────────────────

pub const MIN_STROKE_WIDTH: f64 = 1.0;
pub const MAX_STROKE_WIDTH: f64 = 99.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for handles and thin edges.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// Distance from the bounding box edge to the rotate handle, in screen pixels.
pub const ROTATE_HANDLE_OFFSET_PX: f64 = 24.0;
