//! JavaScript bindings for the length engine.
//!
//! The context is passed as an optional JSON string with camelCase keys
//! (`{"fontSize": 12, "viewportWidth": 800}`); errors reach JavaScript as strings.

use wasm_bindgen::prelude::*;

use crate::{convert_str, errors::Result, units::ConversionContext, Value};

fn context_from(context_json: Option<&str>) -> Result<ConversionContext> {
    match context_json {
        Some(json) if !json.trim().is_empty() => Ok(ConversionContext::from_json(json)?),
        _ => Ok(ConversionContext::new()),
    }
}

fn length_to_px_inner(text: &str, context_json: Option<&str>) -> Result<f64> {
    let ctx = context_from(context_json)?;
    Ok(Value::parse(text)?.in_pixels(&ctx)?)
}

fn convert_length_inner(text: &str, to_unit: &str, context_json: Option<&str>) -> Result<String> {
    let ctx = context_from(context_json)?;
    let magnitude = convert_str(text, to_unit, &ctx)?;
    Ok(format!("{}{}", magnitude, to_unit))
}

/// Resolves a length literal to pixels.
#[wasm_bindgen(js_name = lengthToPx)]
pub fn length_to_px(
    text: &str,
    context_json: Option<String>,
) -> std::result::Result<f64, JsValue> {
    length_to_px_inner(text, context_json.as_deref())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Converts a length literal to another unit and returns the new literal.
#[wasm_bindgen(js_name = convertLength)]
pub fn convert_length(
    text: &str,
    to_unit: &str,
    context_json: Option<String>,
) -> std::result::Result<String, JsValue> {
    convert_length_inner(text, to_unit, context_json.as_deref())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Sends `log` output to the browser console and, with the
/// `console_error_panic_hook` feature, panics as well.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second call finds the logger already set; that is fine.
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ConversionError, LengthError};

    #[test]
    fn test_length_to_px_with_json_context() {
        assert_eq!(length_to_px_inner("2em", None).unwrap(), 32.0);
        assert_eq!(length_to_px_inner("2em", Some("")).unwrap(), 32.0);
        assert_eq!(length_to_px_inner("2em", Some(r#"{"fontSize": 10}"#)).unwrap(), 20.0);
        assert_eq!(
            length_to_px_inner("10vw", Some(r#"{"viewportWidth": 300}"#)).unwrap(),
            30.0
        );
    }

    #[test]
    fn test_convert_length_returns_literal() {
        assert_eq!(convert_length_inner("1in", "px", None).unwrap(), "96px");
        assert_eq!(convert_length_inner("5mm", "mm", None).unwrap(), "5mm");
    }

    #[test]
    fn test_bad_context_json() {
        assert!(matches!(
            length_to_px_inner("1px", Some("{not json")),
            Err(LengthError::Conversion(ConversionError::InvalidContextJson(_)))
        ));
    }
}
