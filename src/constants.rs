//! Application-wide constants.
//!
//! Centralizes magic numbers for zoom bounds, sizing and input handling.
//! Values that hosts may want to tune live in [`crate::settings::Settings`]
//! and use these as defaults.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom scale
pub const MIN_SCALE: f64 = 0.3;

/// Maximum zoom scale
pub const MAX_SCALE: f64 = 3.0;

/// Default zoom scale
pub const DEFAULT_SCALE: f64 = 1.0;

/// Zoom change per pixel of modifier-held wheel delta
pub const WHEEL_ZOOM_SENSITIVITY: f64 = 0.01;

/// Zoom change per unit of native pinch gesture scale
pub const PINCH_ZOOM_SENSITIVITY: f64 = 0.1;

/// Pixels per line for line-based wheel deltas
pub const WHEEL_LINE_HEIGHT: f64 = 20.0;

// ============================================================================
// Node Sizing
// ============================================================================

/// On-screen length of a node's dominant axis after fitting to the footprint
pub const NODE_FOOTPRINT: f64 = 200.0;

/// Aspect ratio used until media finishes loading
pub const DEFAULT_ASPECT_RATIO: f64 = 1.0;

/// Width / height of a PDF page (US letter)
pub const PDF_ASPECT_RATIO: f64 = 1.0 / 1.2941;

// ============================================================================
// Text Nodes
// ============================================================================

/// Body of a text node spawned by double-clicking empty canvas
pub const DEFAULT_TEXT_BODY: &str = "Click to edit.";

/// On-screen width of a spawned text node in pixels
pub const DEFAULT_TEXT_WIDTH: f64 = 200.0;

/// On-screen font size of a spawned text node in pixels
pub const DEFAULT_TEXT_FONT_SIZE: f64 = 14.0;

/// Offset from the pointer at which a spawned text node is placed
pub const TEXT_SPAWN_OFFSET: f64 = 10.0;

// ============================================================================
// Stage
// ============================================================================

/// On-screen width of a template in the stage tray
pub const STAGE_ITEM_WIDTH: f64 = 120.0;

/// Inner padding of the stage tray in pixels
pub const STAGE_PADDING: f64 = 10.0;

/// Vertical gap between stage templates in pixels
pub const STAGE_GAP: f64 = 10.0;

// ============================================================================
// Persistence
// ============================================================================

/// File name of the persisted layout inside the browsed directory
pub const LAYOUT_FILE_NAME: &str = ".canvas_layout.json";

/// Application directory name under the platform config dir
pub const APP_DIR_NAME: &str = "spatial-canvas";

/// Settings file name inside the application config dir
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// ============================================================================
// Input Handling
// ============================================================================

/// Pointer travel in pixels below which a press-release counts as a click
pub const CLICK_SLOP: f64 = 3.0;
