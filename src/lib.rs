//! Editing engine for a 2D sketch board.
//!
//! This crate owns everything between raw input events and the scene a
//! renderer paints: freehand strokes and geometric shapes, the pan/zoom
//! viewport, the tool and gesture state machine, selection and handle
//! transforms, and linear undo/redo. The host is responsible only for
//! delivering pointer, wheel, and key events in screen coordinates and for
//! painting the [`engine::Frame`] it reads back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Engine`], actions, frame, and the [`engine::EditorCommands`] controller |
//! | [`doc`] | Scene model: strokes, shapes, and the command-gated store |
//! | [`shape`] | Shape kinds, per-kind geometry rules, style, sparse updates |
//! | [`history`] | Undo/redo snapshot stack |
//! | [`camera`] | Pan/zoom viewport and coordinate conversions |
//! | [`selection`] | Selection set, marquee queries, transform normalization |
//! | [`hit`] | Hit-testing against shapes and transform handles |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`geom`] | Points, bounds, clamping, and coordinate helpers |
//! | [`config`] | Engine configuration and environment overrides |
//! | [`consts`] | Shared numeric constants (size floors, zoom limits, hit slop) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod history;
pub mod input;
pub mod selection;
pub mod shape;
