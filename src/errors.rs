use thiserror::Error;

use crate::units::UnitKind;

/// Errors raised while turning a length literal into a [`crate::Value`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The numeric portion is empty, malformed (e.g. two decimal points) or not finite.
    #[error("Invalid magnitude: '{0}'")]
    InvalidMagnitude(String),

    /// The literal carries a non-empty unit suffix that is not a supported length unit.
    #[error("Unsupported unit: '{0}'")]
    UnsupportedUnit(String),
}

/// Errors raised by the px-pivot conversion functions.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// A raw unit tag passed across a string boundary is not a supported length unit.
    #[error("Unsupported unit: '{0}'")]
    UnsupportedUnit(String),

    /// The context-free absolute conversion was asked to handle a relative unit.
    #[error("Unit '{0}' is relative and needs a conversion context")]
    RequiresContext(UnitKind),

    /// The conversion produced NaN or an infinity, usually from a zero divisor in the context.
    #[error("Conversion to '{unit}' produced a non-finite value")]
    NonFinite { unit: UnitKind },

    /// A context parameter handed to the builder is not finite and positive.
    #[error("Invalid conversion context parameter {parameter}: {value}")]
    InvalidContext { parameter: &'static str, value: f64 },

    /// A conversion context could not be read from JSON.
    #[error("Failed to deserialize conversion context: {0}")]
    InvalidContextJson(#[from] serde_json::Error),
}

/// Any error the crate can produce, for callers that parse and convert in one step.
#[derive(Error, Debug)]
pub enum LengthError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// A type alias for `Result<T, LengthError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, LengthError>;
