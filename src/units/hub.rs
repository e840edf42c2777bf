//! Unit conversion through pixels.
//!
//! Every unit only knows how to reach pixels (`to_px`) and how to come back
//! (`from_px`); any pair of units converts by going through both.

use log::{debug, trace};

use super::context::{ConversionContext, ResolvedContext};
use super::kind::UnitKind;
use super::table::UNIT_TABLE;
use crate::errors::ConversionError;

fn finite(value: f64, unit: UnitKind) -> Result<f64, ConversionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        debug!("[hub] Conversion involving '{}' produced {}", unit, value);
        Err(ConversionError::NonFinite { unit })
    }
}

/// Pixels per one absolute `unit`. Relative units have no fixed factor and
/// yield NaN, which the finiteness check turns into an error.
fn absolute_factor(unit: UnitKind) -> f64 {
    UNIT_TABLE.absolute_px_factor(unit).unwrap_or(f64::NAN)
}

/// Converts `magnitude` in `unit` to pixels.
pub fn to_px_resolved(
    magnitude: f64,
    unit: UnitKind,
    ctx: &ResolvedContext,
) -> Result<f64, ConversionError> {
    let px = match unit {
        UnitKind::Px
        | UnitKind::In
        | UnitKind::Cm
        | UnitKind::Mm
        | UnitKind::Pt
        | UnitKind::Pc
        | UnitKind::Q => magnitude * absolute_factor(unit),
        UnitKind::Em => magnitude * ctx.font_size,
        UnitKind::Ex => magnitude * ctx.font_size * ctx.x_height_ratio,
        UnitKind::Ch => magnitude * ctx.font_size * ctx.zero_width_ratio,
        UnitKind::Rem => magnitude * ctx.root_font_size,
        UnitKind::Lh => magnitude * ctx.line_height,
        UnitKind::Percent => (magnitude / 100.0) * ctx.reference_length,
        UnitKind::Vw => (magnitude / 100.0) * ctx.viewport_width,
        UnitKind::Vh => (magnitude / 100.0) * ctx.viewport_height,
        UnitKind::Vmin => (magnitude / 100.0) * ctx.vmin,
        UnitKind::Vmax => (magnitude / 100.0) * ctx.vmax,
    };
    finite(px, unit)
}

/// Converts a pixel length to `unit`; the inverse of [`to_px_resolved`].
pub fn from_px_resolved(
    px: f64,
    unit: UnitKind,
    ctx: &ResolvedContext,
) -> Result<f64, ConversionError> {
    let magnitude = match unit {
        UnitKind::Px
        | UnitKind::In
        | UnitKind::Cm
        | UnitKind::Mm
        | UnitKind::Pt
        | UnitKind::Pc
        | UnitKind::Q => px / absolute_factor(unit),
        UnitKind::Em => px / ctx.font_size,
        UnitKind::Ex => px / (ctx.font_size * ctx.x_height_ratio),
        UnitKind::Ch => px / (ctx.font_size * ctx.zero_width_ratio),
        UnitKind::Rem => px / ctx.root_font_size,
        UnitKind::Lh => px / ctx.line_height,
        UnitKind::Percent => (px / ctx.reference_length) * 100.0,
        UnitKind::Vw => (px / ctx.viewport_width) * 100.0,
        UnitKind::Vh => (px / ctx.viewport_height) * 100.0,
        UnitKind::Vmin => (px / ctx.vmin) * 100.0,
        UnitKind::Vmax => (px / ctx.vmax) * 100.0,
    };
    finite(magnitude, unit)
}

pub fn to_px(
    magnitude: f64,
    unit: UnitKind,
    ctx: &ConversionContext,
) -> Result<f64, ConversionError> {
    to_px_resolved(magnitude, unit, &ctx.resolve())
}

pub fn from_px(px: f64, unit: UnitKind, ctx: &ConversionContext) -> Result<f64, ConversionError> {
    from_px_resolved(px, unit, &ctx.resolve())
}

/// Converts `magnitude` from one unit to another, pivoting through pixels.
///
/// Converting a unit to itself returns `magnitude` untouched, whatever the context holds.
pub fn convert(
    magnitude: f64,
    from: UnitKind,
    to: UnitKind,
    ctx: &ConversionContext,
) -> Result<f64, ConversionError> {
    if from == to {
        return Ok(magnitude);
    }
    let resolved = ctx.resolve();
    let px = to_px_resolved(magnitude, from, &resolved)?;
    let result = from_px_resolved(px, to, &resolved)?;
    trace!("[convert] {}{} -> {}{}", magnitude, from, result, to);
    Ok(result)
}

/// Context-free conversion between two absolute units.
///
/// Returns [`ConversionError::RequiresContext`] if either unit is relative.
pub fn convert_absolute(
    magnitude: f64,
    from: UnitKind,
    to: UnitKind,
) -> Result<f64, ConversionError> {
    let from_factor = UNIT_TABLE
        .absolute_px_factor(from)
        .ok_or(ConversionError::RequiresContext(from))?;
    let to_factor = UNIT_TABLE
        .absolute_px_factor(to)
        .ok_or(ConversionError::RequiresContext(to))?;
    if from == to {
        return Ok(magnitude);
    }
    finite(magnitude * from_factor / to_factor, to)
}

fn unit_from_tag(tag: &str) -> Result<UnitKind, ConversionError> {
    UNIT_TABLE
        .lookup(tag)
        .ok_or_else(|| ConversionError::UnsupportedUnit(tag.to_string()))
}

/// [`to_px`] for callers holding the unit as a raw tag.
pub fn to_px_raw(
    magnitude: f64,
    unit: &str,
    ctx: &ConversionContext,
) -> Result<f64, ConversionError> {
    to_px(magnitude, unit_from_tag(unit)?, ctx)
}

/// [`from_px`] for callers holding the unit as a raw tag.
pub fn from_px_raw(
    px: f64,
    unit: &str,
    ctx: &ConversionContext,
) -> Result<f64, ConversionError> {
    from_px(px, unit_from_tag(unit)?, ctx)
}

/// [`convert`] for callers holding both units as raw tags.
pub fn convert_raw(
    magnitude: f64,
    from: &str,
    to: &str,
    ctx: &ConversionContext,
) -> Result<f64, ConversionError> {
    convert(magnitude, unit_from_tag(from)?, unit_from_tag(to)?, ctx)
}
