//! The explicit parameters needed to resolve relative units to pixels.

use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::errors::ConversionError;

/// Caller-supplied parameters for relative-unit conversion.
///
/// Every field is optional; [`ConversionContext::resolve`] fills the gaps with
/// CSS-style defaults, so an empty context is always usable. All lengths are
/// in pixels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionContext {
    /// Font size of the element, used by `em`, `ex` and `ch`. Defaults to 16.
    pub font_size: Option<f64>,
    /// Font size of the root element, used by `rem`. Defaults to `font_size`.
    pub root_font_size: Option<f64>,
    /// x-height as a fraction of the font size, used by `ex`. Defaults to 0.5.
    pub x_height_ratio: Option<f64>,
    /// Advance of "0" as a fraction of the font size, used by `ch`. Defaults to 0.5.
    pub zero_width_ratio: Option<f64>,
    /// Used by `lh`. Defaults to `font_size`.
    pub line_height: Option<f64>,
    /// The length that `100%` refers to. Defaults to 100.
    pub reference_length: Option<f64>,
    /// Defaults to 100.
    pub viewport_width: Option<f64>,
    /// Defaults to 100.
    pub viewport_height: Option<f64>,
    /// Defaults to the smaller viewport dimension.
    pub vmin: Option<f64>,
    /// Defaults to the larger viewport dimension.
    pub vmax: Option<f64>,
}

/// A [`ConversionContext`] with every default applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedContext {
    pub font_size: f64,
    pub root_font_size: f64,
    pub x_height_ratio: f64,
    pub zero_width_ratio: f64,
    pub line_height: f64,
    pub reference_length: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub vmin: f64,
    pub vmax: f64,
}

impl ConversionContext {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn builder() -> ConversionContextBuilder {
        ConversionContextBuilder::new()
    }

    /// Reads a context from JSON with camelCase keys, e.g. `{"fontSize": 12}`.
    /// Missing keys fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConversionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Applies the defaults to every unset parameter.
    pub fn resolve(&self) -> ResolvedContext {
        let font_size = self.font_size.unwrap_or(DEFAULT_FONT_SIZE);
        let viewport_width = self.viewport_width.unwrap_or(DEFAULT_VIEWPORT_WIDTH);
        let viewport_height = self.viewport_height.unwrap_or(DEFAULT_VIEWPORT_HEIGHT);

        ResolvedContext {
            font_size,
            root_font_size: self.root_font_size.unwrap_or(font_size),
            x_height_ratio: self.x_height_ratio.unwrap_or(DEFAULT_X_HEIGHT_RATIO),
            zero_width_ratio: self.zero_width_ratio.unwrap_or(DEFAULT_ZERO_WIDTH_RATIO),
            line_height: self.line_height.unwrap_or(font_size),
            reference_length: self.reference_length.unwrap_or(DEFAULT_REFERENCE_LENGTH),
            viewport_width,
            viewport_height,
            vmin: self.vmin.unwrap_or(viewport_width.min(viewport_height)),
            vmax: self.vmax.unwrap_or(viewport_width.max(viewport_height)),
        }
    }
}

impl Default for ResolvedContext {
    fn default() -> Self {
        ConversionContext::default().resolve()
    }
}

/// Builder for creating a validated [`ConversionContext`].
#[derive(Default)]
pub struct ConversionContextBuilder {
    context: ConversionContext,
}

impl ConversionContextBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set_font_size(mut self, font_size: f64) -> Self {
        self.context.font_size = Some(font_size);
        self
    }

    pub fn set_root_font_size(mut self, root_font_size: f64) -> Self {
        self.context.root_font_size = Some(root_font_size);
        self
    }

    pub fn set_x_height_ratio(mut self, ratio: f64) -> Self {
        self.context.x_height_ratio = Some(ratio);
        self
    }

    pub fn set_zero_width_ratio(mut self, ratio: f64) -> Self {
        self.context.zero_width_ratio = Some(ratio);
        self
    }

    pub fn set_line_height(mut self, line_height: f64) -> Self {
        self.context.line_height = Some(line_height);
        self
    }

    pub fn set_reference_length(mut self, reference_length: f64) -> Self {
        self.context.reference_length = Some(reference_length);
        self
    }

    /// Sets both viewport dimensions; `vmin`/`vmax` are derived unless set explicitly.
    pub fn set_viewport(mut self, width: f64, height: f64) -> Self {
        self.context.viewport_width = Some(width);
        self.context.viewport_height = Some(height);
        self
    }

    pub fn set_vmin(mut self, vmin: f64) -> Self {
        self.context.vmin = Some(vmin);
        self
    }

    pub fn set_vmax(mut self, vmax: f64) -> Self {
        self.context.vmax = Some(vmax);
        self
    }

    /// Builds the context.
    /// Returns an error if any supplied parameter is not finite and strictly positive.
    pub fn build(self) -> Result<ConversionContext, ConversionError> {
        let c = &self.context;
        let supplied = [
            ("font_size", c.font_size),
            ("root_font_size", c.root_font_size),
            ("x_height_ratio", c.x_height_ratio),
            ("zero_width_ratio", c.zero_width_ratio),
            ("line_height", c.line_height),
            ("reference_length", c.reference_length),
            ("viewport_width", c.viewport_width),
            ("viewport_height", c.viewport_height),
            ("vmin", c.vmin),
            ("vmax", c.vmax),
        ];

        for (parameter, value) in supplied {
            if let Some(value) = value {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ConversionError::InvalidContext { parameter, value });
                }
            }
        }
        Ok(self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context_defaults() {
        let resolved = ConversionContext::new().resolve();
        assert_eq!(resolved.font_size, 16.0);
        assert_eq!(resolved.root_font_size, 16.0);
        assert_eq!(resolved.x_height_ratio, 0.5);
        assert_eq!(resolved.zero_width_ratio, 0.5);
        assert_eq!(resolved.line_height, 16.0);
        assert_eq!(resolved.reference_length, 100.0);
        assert_eq!(resolved.viewport_width, 100.0);
        assert_eq!(resolved.viewport_height, 100.0);
        assert_eq!(resolved.vmin, 100.0);
        assert_eq!(resolved.vmax, 100.0);
    }

    #[test]
    fn test_font_size_feeds_dependent_defaults() {
        let ctx = ConversionContext {
            font_size: Some(20.0),
            ..Default::default()
        };
        let resolved = ctx.resolve();
        assert_eq!(resolved.root_font_size, 20.0);
        assert_eq!(resolved.line_height, 20.0);

        let ctx = ConversionContext {
            font_size: Some(20.0),
            root_font_size: Some(10.0),
            line_height: Some(24.0),
            ..Default::default()
        };
        let resolved = ctx.resolve();
        assert_eq!(resolved.root_font_size, 10.0);
        assert_eq!(resolved.line_height, 24.0);
    }

    #[test]
    fn test_vmin_vmax_derivation() {
        let ctx = ConversionContext::builder()
            .set_viewport(50.0, 80.0)
            .build()
            .unwrap();
        let resolved = ctx.resolve();
        assert_eq!(resolved.vmin, 50.0);
        assert_eq!(resolved.vmax, 80.0);

        let ctx = ConversionContext::builder()
            .set_viewport(50.0, 80.0)
            .set_vmin(10.0)
            .build()
            .unwrap();
        assert_eq!(ctx.resolve().vmin, 10.0, "Explicit vmin should win over derivation");
        assert_eq!(ctx.resolve().vmax, 80.0);
    }

    #[test]
    fn test_builder_rejects_bad_parameters() {
        let err = ConversionContext::builder()
            .set_font_size(0.0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConversionError::InvalidContext { parameter: "font_size", .. }
        ));

        let err = ConversionContext::builder()
            .set_viewport(f64::NAN, 10.0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConversionError::InvalidContext { parameter: "viewport_width", .. }
        ));

        assert!(ConversionContext::builder()
            .set_reference_length(-5.0)
            .build()
            .is_err());
    }

    #[test]
    fn test_context_from_json() {
        let ctx = ConversionContext::from_json(r#"{"fontSize": 12, "viewportWidth": 800}"#).unwrap();
        assert_eq!(ctx.font_size, Some(12.0));
        assert_eq!(ctx.viewport_width, Some(800.0));
        assert_eq!(ctx.viewport_height, None);

        let resolved = ctx.resolve();
        assert_eq!(resolved.line_height, 12.0);
        assert_eq!(resolved.vmin, 100.0);
        assert_eq!(resolved.vmax, 800.0);

        assert_eq!(ConversionContext::from_json("{}").unwrap(), ConversionContext::new());
        assert!(matches!(
            ConversionContext::from_json(r#"{"fontSize": "big"}"#),
            Err(ConversionError::InvalidContextJson(_))
        ));
    }
}
