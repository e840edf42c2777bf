//! The typed length value: a finite magnitude paired with a [`UnitKind`].

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr, sync::OnceLock};

use super::context::ConversionContext;
use super::hub;
use super::kind::UnitKind;
use super::lexer::split_magnitude_and_unit;
use crate::errors::{ConversionError, ParseError};

/// A parsed length such as `19.6679in`.
///
/// The canonical text form (`"{magnitude}{unit}"`) is computed on first use and
/// cached; every setter drops the cache, so the text never lags behind the fields.
#[derive(Clone)]
pub struct Value {
    magnitude: f64,
    unit: UnitKind,
    text: OnceLock<String>,
}

impl Value {
    /// Creates a value from its parts.
    /// Returns an error if `magnitude` is NaN or infinite.
    pub fn new(magnitude: f64, unit: UnitKind) -> Result<Self, ParseError> {
        if !magnitude.is_finite() {
            return Err(ParseError::InvalidMagnitude(magnitude.to_string()));
        }
        Ok(Self::from_parts(magnitude, unit))
    }

    /// Parses a literal such as `"12.5mm"`, `"-3em"` or `"12"` (pixels).
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let (magnitude, unit) = split_magnitude_and_unit(text)?;
        Ok(Self::from_parts(magnitude, unit))
    }

    fn from_parts(magnitude: f64, unit: UnitKind) -> Self {
        Self {
            magnitude,
            unit,
            text: OnceLock::new(),
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> UnitKind {
        self.unit
    }

    /// The canonical text form, e.g. `"19.6679in"`.
    pub fn as_str(&self) -> &str {
        self.text
            .get_or_init(|| format!("{}{}", self.magnitude, self.unit))
    }

    /// Replaces the magnitude, keeping the unit.
    /// Returns an error (and leaves the value untouched) if `magnitude` is not finite.
    pub fn set_magnitude(&mut self, magnitude: f64) -> Result<(), ParseError> {
        if !magnitude.is_finite() {
            return Err(ParseError::InvalidMagnitude(magnitude.to_string()));
        }
        self.magnitude = magnitude;
        self.text = OnceLock::new();
        Ok(())
    }

    /// Relabels the magnitude with another unit *without* converting it:
    /// `12px` becomes `12in`. Use [`Value::converted_to`] to keep the length.
    pub fn set_unit_without_conversion(&mut self, unit: UnitKind) {
        self.unit = unit;
        self.text = OnceLock::new();
    }

    /// Returns this length expressed in `unit`. The receiver is not modified.
    pub fn converted_to(
        &self,
        unit: UnitKind,
        ctx: &ConversionContext,
    ) -> Result<Value, ConversionError> {
        let magnitude = hub::convert(self.magnitude, self.unit, unit, ctx)?;
        Ok(Self::from_parts(magnitude, unit))
    }

    /// Converts this length to `unit` in place.
    /// On error the value is left as it was.
    pub fn convert_in_place(
        &mut self,
        unit: UnitKind,
        ctx: &ConversionContext,
    ) -> Result<(), ConversionError> {
        *self = self.converted_to(unit, ctx)?;
        Ok(())
    }

    /// The length in pixels.
    pub fn in_pixels(&self, ctx: &ConversionContext) -> Result<f64, ConversionError> {
        hub::to_px(self.magnitude, self.unit, ctx)
    }

    /// True if `text` parses to the same magnitude and unit as this value.
    pub fn matches_text(&self, text: &str) -> bool {
        Value::parse(text).is_ok_and(|other| other == *self)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.magnitude == other.magnitude && self.unit == other.unit
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("magnitude", &self.magnitude)
            .field("unit", &self.unit)
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Value::parse(text)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Value::parse(&text).map_err(de::Error::custom)
    }
}
