//! Defines constants used throughout unit conversion.

// Everything is anchored on the CSS reference pixel: 96 px per inch.
pub const PX_PER_IN: f64 = 96.0;
pub const CM_PER_IN: f64 = 2.54;
pub const MM_PER_IN: f64 = 25.4;
pub const PT_PER_IN: f64 = 72.0;
pub const PC_PER_IN: f64 = 6.0;
pub const Q_PER_IN: f64 = 101.6; // quarter-millimetres

// Default values used when a conversion context leaves a parameter unset.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;
pub const DEFAULT_X_HEIGHT_RATIO: f64 = 0.5;
pub const DEFAULT_ZERO_WIDTH_RATIO: f64 = 0.5;
pub const DEFAULT_REFERENCE_LENGTH: f64 = 100.0;
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 100.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 100.0;

/// Unit assumed for a literal without a suffix.
pub const DEFAULT_UNIT_TAG: &str = "px";
