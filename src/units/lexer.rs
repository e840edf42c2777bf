//! Splits a length literal into its numeric and unit parts.
//!
//! The split is purely character-class based, so it never needs to know which
//! unit names exist: everything up to the first character that cannot belong
//! to a number is the magnitude, and the remainder is the unit.

use log::debug;

use super::constants::DEFAULT_UNIT_TAG;
use super::kind::UnitKind;
use crate::errors::ParseError;

fn is_magnitude_char(index: usize, c: char) -> bool {
    c.is_ascii_digit() || c == '.' || (index == 0 && (c == '+' || c == '-'))
}

/// Splits `text` into `(magnitude_text, unit_text)`.
///
/// Surrounding ASCII whitespace is ignored. An empty unit part is reported as `"px"`.
pub fn split(text: &str) -> (&str, &str) {
    let text = text.trim_matches(|c: char| c.is_ascii_whitespace());
    let boundary = text
        .char_indices()
        .find(|&(i, c)| !is_magnitude_char(i, c))
        .map_or(text.len(), |(i, _)| i);

    let (magnitude, unit) = text.split_at(boundary);
    if unit.is_empty() {
        (magnitude, DEFAULT_UNIT_TAG)
    } else {
        (magnitude, unit)
    }
}

/// Lexes `text` and parses both halves.
///
/// The magnitude is validated before the unit, so a literal with no digits at
/// all (e.g. `"abc"`) reports [`ParseError::InvalidMagnitude`].
pub fn split_magnitude_and_unit(text: &str) -> Result<(f64, UnitKind), ParseError> {
    let (magnitude_text, unit_text) = split(text);

    let magnitude = magnitude_text
        .parse::<f64>()
        .ok()
        .filter(|m| m.is_finite())
        .ok_or_else(|| {
            debug!("[split_magnitude_and_unit] Bad magnitude in '{}'", text);
            ParseError::InvalidMagnitude(magnitude_text.to_string())
        })?;

    let unit = unit_text.parse::<UnitKind>().map_err(|e| {
        debug!("[split_magnitude_and_unit] Bad unit in '{}'", text);
        e
    })?;

    Ok((magnitude, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        assert_eq!(split("19.6679in"), ("19.6679", "in"));
        assert_eq!(split("200.234px"), ("200.234", "px"));
        assert_eq!(split("-3.5vmin"), ("-3.5", "vmin"));
        assert_eq!(split("+50%"), ("+50", "%"));
    }

    #[test]
    fn test_split_defaults_unit_to_px() {
        assert_eq!(split("12"), ("12", "px"));
        assert_eq!(split("  12 "), ("12", "px"));
    }

    #[test]
    fn test_split_does_not_depend_on_known_units() {
        // Unknown suffixes are still separated cleanly.
        assert_eq!(split("12pct"), ("12", "pct"));
        assert_eq!(split("7furlong3"), ("7", "furlong3"));
        // A sign after the first position ends the magnitude.
        assert_eq!(split("1-2"), ("1", "-2"));
        // Exponents are not part of the grammar.
        assert_eq!(split("1e3"), ("1", "e3"));
        // Inner whitespace belongs to the unit text.
        assert_eq!(split("12 px"), ("12", " px"));
    }

    #[test]
    fn test_split_magnitude_and_unit() {
        assert_eq!(split_magnitude_and_unit("19.6679in"), Ok((19.6679, UnitKind::In)));
        assert_eq!(split_magnitude_and_unit("200.234px"), Ok((200.234, UnitKind::Px)));
        assert_eq!(split_magnitude_and_unit("12"), Ok((12.0, UnitKind::Px)));
        assert_eq!(split_magnitude_and_unit(".5em"), Ok((0.5, UnitKind::Em)));
        assert_eq!(split_magnitude_and_unit("-0.25q"), Ok((-0.25, UnitKind::Q)));
    }

    #[test]
    fn test_invalid_magnitudes() {
        for text in ["abc", "", "px", ".", "+", "-%", "1.2.3cm", "..5"] {
            assert!(
                matches!(
                    split_magnitude_and_unit(text),
                    Err(ParseError::InvalidMagnitude(_))
                ),
                "'{}' should be rejected as an invalid magnitude",
                text
            );
        }
        // Too large to be finite.
        let huge = format!("1{}px", "0".repeat(400));
        assert!(matches!(
            split_magnitude_and_unit(&huge),
            Err(ParseError::InvalidMagnitude(_))
        ));
    }

    #[test]
    fn test_unsupported_units() {
        assert_eq!(
            split_magnitude_and_unit("12zz"),
            Err(ParseError::UnsupportedUnit("zz".to_string()))
        );
        assert_eq!(
            split_magnitude_and_unit("12 px"),
            Err(ParseError::UnsupportedUnit(" px".to_string()))
        );
        assert_eq!(
            split_magnitude_and_unit("4PT"),
            Err(ParseError::UnsupportedUnit("PT".to_string()))
        );
    }
}
