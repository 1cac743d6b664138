//! User-tunable canvas settings.
//!
//! Settings are stored as JSON in the platform config directory
//! (`<config_dir>/spatial-canvas/settings.json`). Every field has a default,
//! so partial or missing files are fine.

use crate::constants::{
    APP_DIR_NAME, PINCH_ZOOM_SENSITIVITY, SETTINGS_FILE_NAME, STAGE_GAP, STAGE_ITEM_WIDTH,
    STAGE_PADDING, WHEEL_LINE_HEIGHT, WHEEL_ZOOM_SENSITIVITY,
};
use crate::error::CanvasResult;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Input and layout tuning for a canvas session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Zoom change per pixel of modifier-held wheel delta
    pub wheel_zoom_sensitivity: f64,
    /// Zoom change per unit of pinch gesture scale
    pub pinch_zoom_sensitivity: f64,
    /// Pixels per line for line-based wheel deltas
    pub wheel_line_height: f64,
    /// Stage tray layout
    pub stage: StageSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wheel_zoom_sensitivity: WHEEL_ZOOM_SENSITIVITY,
            pinch_zoom_sensitivity: PINCH_ZOOM_SENSITIVITY,
            wheel_line_height: WHEEL_LINE_HEIGHT,
            stage: StageSettings::default(),
        }
    }
}

/// Geometry of templates inside the stage tray, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageSettings {
    pub item_width: f64,
    pub padding: f64,
    pub gap: f64,
}

impl Default for StageSettings {
    fn default() -> Self {
        Self {
            item_width: STAGE_ITEM_WIDTH,
            padding: STAGE_PADDING,
            gap: STAGE_GAP,
        }
    }
}

impl Settings {
    /// Default settings file location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> CanvasResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        info!(path = %path.display(), "loaded settings");
        Ok(settings.sanitized())
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        match Self::load(&path).with_context(|| format!("reading {}", path.display())) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings, using defaults: {e:#}");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> CanvasResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Replace non-finite or non-positive values with their defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let fix = |v: f64, d: f64| if v.is_finite() && v > 0.0 { v } else { d };

        self.wheel_zoom_sensitivity = fix(self.wheel_zoom_sensitivity, defaults.wheel_zoom_sensitivity);
        self.pinch_zoom_sensitivity = fix(self.pinch_zoom_sensitivity, defaults.pinch_zoom_sensitivity);
        self.wheel_line_height = fix(self.wheel_line_height, defaults.wheel_line_height);
        self.stage.item_width = fix(self.stage.item_width, defaults.stage.item_width);
        if !self.stage.padding.is_finite() || self.stage.padding < 0.0 {
            self.stage.padding = defaults.stage.padding;
        }
        if !self.stage.gap.is_finite() || self.stage.gap < 0.0 {
            self.stage.gap = defaults.stage.gap;
        }
        self
    }
}
