//! Engine configuration with defaults and environment overrides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use tracing::warn;

use crate::consts::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
use crate::history::MIN_HISTORY_LIMIT;
use crate::input::Tool;

pub const DEFAULT_HISTORY_LIMIT: usize = 100;
pub const DEFAULT_STROKE_COLOR: &str = "#3B82F6";
pub const DEFAULT_STROKE_WIDTH: f64 = 5.0;
pub const DEFAULT_ERASER_WIDTH_FACTOR: f64 = 1.5;
pub const DEFAULT_WHEEL_ZOOM_FACTOR: f64 = 1.05;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of history entries kept, including the base state.
    pub history_limit: usize,
    /// Initial stroke color for pen strokes and new shape outlines.
    pub stroke_color: String,
    /// Initial stroke width, clamped to `[1, 99]`.
    pub stroke_width: f64,
    /// Eraser strokes are this many times wider than the pen width.
    pub eraser_width_factor: f64,
    /// Scale multiplier per wheel notch.
    pub wheel_zoom_factor: f64,
    /// Tool active when the engine starts.
    pub initial_tool: Tool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            stroke_color: DEFAULT_STROKE_COLOR.to_owned(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            eraser_width_factor: DEFAULT_ERASER_WIDTH_FACTOR,
            wheel_zoom_factor: DEFAULT_WHEEL_ZOOM_FACTOR,
            initial_tool: Tool::default(),
        }
    }
}

impl EngineConfig {
    /// Build config from environment variables, defaulting anything unset.
    ///
    /// Optional:
    /// - `INKBOARD_HISTORY_LIMIT`: integer ≥ 2, default 100
    /// - `INKBOARD_STROKE_COLOR`: CSS color string, default `#3B82F6`
    /// - `INKBOARD_STROKE_WIDTH`: number in `[1, 99]`, default 5
    /// - `INKBOARD_ERASER_FACTOR`: positive number, default 1.5
    /// - `INKBOARD_WHEEL_ZOOM`: number > 1, default 1.05
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(v) => Some(v),
            Err(_) => None,
        })
    }

    /// Build config from an arbitrary key lookup. `from_env` delegates here.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("INKBOARD_HISTORY_LIMIT") {
            config.history_limit = match raw.trim().parse::<usize>() {
                Ok(n) if n >= MIN_HISTORY_LIMIT => n,
                _ => return Err(invalid("INKBOARD_HISTORY_LIMIT", raw)),
            };
        }
        if let Some(raw) = lookup("INKBOARD_STROKE_COLOR") {
            let color = raw.trim();
            if color.is_empty() {
                return Err(invalid("INKBOARD_STROKE_COLOR", raw));
            }
            config.stroke_color = color.to_owned();
        }
        if let Some(raw) = lookup("INKBOARD_STROKE_WIDTH") {
            config.stroke_width = parse_f64("INKBOARD_STROKE_WIDTH", raw, |w| {
                (MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).contains(&w)
            })?;
        }
        if let Some(raw) = lookup("INKBOARD_ERASER_FACTOR") {
            config.eraser_width_factor = parse_f64("INKBOARD_ERASER_FACTOR", raw, is_eraser_factor)?;
        }
        if let Some(raw) = lookup("INKBOARD_WHEEL_ZOOM") {
            config.wheel_zoom_factor = parse_f64("INKBOARD_WHEEL_ZOOM", raw, is_wheel_zoom_factor)?;
        }

        Ok(config)
    }

    /// Copy with every out-of-range field replaced by its default.
    ///
    /// Configs built by hand or through serde never pass the checks in
    /// [`EngineConfig::from_lookup`], so the engine runs this before use.
    /// Stroke width and history depth are clamped where they are consumed.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let mut config = self.clone();
        if config.stroke_color.trim().is_empty() {
            warn!("empty stroke color; using default");
            config.stroke_color = DEFAULT_STROKE_COLOR.to_owned();
        }
        if !config.stroke_width.is_finite() {
            warn!(width = config.stroke_width, "non-finite stroke width; using default");
            config.stroke_width = DEFAULT_STROKE_WIDTH;
        }
        if !is_eraser_factor(config.eraser_width_factor) {
            warn!(factor = config.eraser_width_factor, "invalid eraser width factor; using default");
            config.eraser_width_factor = DEFAULT_ERASER_WIDTH_FACTOR;
        }
        if !is_wheel_zoom_factor(config.wheel_zoom_factor) {
            warn!(factor = config.wheel_zoom_factor, "invalid wheel zoom factor; using default");
            config.wheel_zoom_factor = DEFAULT_WHEEL_ZOOM_FACTOR;
        }
        config
    }
}

fn is_eraser_factor(f: f64) -> bool {
    f.is_finite() && f > 0.0
}

fn is_wheel_zoom_factor(f: f64) -> bool {
    f.is_finite() && f > 1.0
}

fn parse_f64(var: &'static str, raw: String, valid: impl Fn(f64) -> bool) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && valid(v) => Ok(v),
        _ => Err(invalid(var, raw)),
    }
}

fn invalid(var: &'static str, value: String) -> ConfigError {
    ConfigError::Invalid { var, value }
}
