//! Parsing and conversion of SVG/CSS length values.
//!
//! ```
//! use svg_units::{convert, parse_length, to_px, ConversionContext, UnitKind};
//!
//! let ctx = ConversionContext::builder().set_font_size(20.0).build().unwrap();
//! let width = parse_length("1.5em").unwrap();
//! assert_eq!(to_px(&width, &ctx).unwrap(), 30.0);
//! assert_eq!(convert(&width, UnitKind::Px, &ctx).unwrap().to_string(), "30px");
//! ```

pub mod errors;
pub mod units;
pub mod wasm;

pub use errors::{ConversionError, LengthError, ParseError, Result};
pub use units::{
    hub, parse_length_list, ConversionContext, ConversionContextBuilder, UnitKind, Value,
};

/// Parses a length literal such as `"19.6679in"`. A missing unit means `px`.
pub fn parse_length(text: &str) -> std::result::Result<Value, ParseError> {
    Value::parse(text)
}

/// Resolves `value` to pixels under `ctx`.
pub fn to_px(value: &Value, ctx: &ConversionContext) -> std::result::Result<f64, ConversionError> {
    value.in_pixels(ctx)
}

/// Returns `value` expressed in `target`.
pub fn convert(
    value: &Value,
    target: UnitKind,
    ctx: &ConversionContext,
) -> std::result::Result<Value, ConversionError> {
    value.converted_to(target, ctx)
}

/// Parses `text` and converts it to the unit tagged `to_unit`, returning the bare magnitude.
///
/// An unknown `to_unit` tag is reported as [`ConversionError::UnsupportedUnit`].
pub fn convert_str(text: &str, to_unit: &str, ctx: &ConversionContext) -> Result<f64> {
    let value = Value::parse(text)?;
    Ok(hub::convert_raw(
        value.magnitude(),
        value.unit().as_str(),
        to_unit,
        ctx,
    )?)
}
