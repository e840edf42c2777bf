use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::table::UNIT_TABLE;
use crate::errors::ParseError;

/// A CSS/SVG length unit.
/// Derived from: https://www.w3.org/TR/css-values-4/#lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    // Absolute units
    /// The CSS reference pixel, 1/96 inch.
    #[serde(rename = "px")]
    Px,
    /// Inches.
    #[serde(rename = "in")]
    In,
    /// Centimetres.
    #[serde(rename = "cm")]
    Cm,
    /// Millimetres.
    #[serde(rename = "mm")]
    Mm,
    /// Points, 1/72 inch.
    #[serde(rename = "pt")]
    Pt,
    /// Picas, 12 points.
    #[serde(rename = "pc")]
    Pc,
    /// Quarter-millimetres.
    #[serde(rename = "q")]
    Q,

    // Relative units
    /// The element's font size.
    #[serde(rename = "em")]
    Em,
    /// The font's x-height.
    #[serde(rename = "ex")]
    Ex,
    /// The advance of the "0" glyph.
    #[serde(rename = "ch")]
    Ch,
    /// The root element's font size.
    #[serde(rename = "rem")]
    Rem,
    /// The element's line height.
    #[serde(rename = "lh")]
    Lh,
    /// Hundredths of a caller-supplied reference length.
    #[serde(rename = "%")]
    Percent,
    /// 1% of the viewport width.
    #[serde(rename = "vw")]
    Vw,
    /// 1% of the viewport height.
    #[serde(rename = "vh")]
    Vh,
    /// 1% of the smaller viewport dimension.
    #[serde(rename = "vmin")]
    Vmin,
    /// 1% of the larger viewport dimension.
    #[serde(rename = "vmax")]
    Vmax,
}

impl UnitKind {
    /// Returns the canonical suffix written after a magnitude, e.g. `"px"` or `"%"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            UnitKind::Px => "px",
            UnitKind::In => "in",
            UnitKind::Cm => "cm",
            UnitKind::Mm => "mm",
            UnitKind::Pt => "pt",
            UnitKind::Pc => "pc",
            UnitKind::Q => "q",
            UnitKind::Em => "em",
            UnitKind::Ex => "ex",
            UnitKind::Ch => "ch",
            UnitKind::Rem => "rem",
            UnitKind::Lh => "lh",
            UnitKind::Percent => "%",
            UnitKind::Vw => "vw",
            UnitKind::Vh => "vh",
            UnitKind::Vmin => "vmin",
            UnitKind::Vmax => "vmax",
        }
    }

    /// True for units with a fixed pixel ratio.
    pub fn is_absolute(self) -> bool {
        UNIT_TABLE.absolute_px_factor(self).is_some()
    }

    pub fn is_relative(self) -> bool {
        !self.is_absolute()
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for UnitKind {
    type Err = ParseError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        UNIT_TABLE
            .lookup(tag)
            .ok_or_else(|| ParseError::UnsupportedUnit(tag.to_string()))
    }
}

impl TryFrom<&str> for UnitKind {
    type Error = ParseError;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_from_str() {
        for unit in UNIT_TABLE.iter() {
            let parsed: UnitKind = unit.as_str().parse().expect("canonical tag should parse");
            assert_eq!(parsed, unit, "Tag '{}' did not map back to {:?}", unit, unit);
        }
    }

    #[test]
    fn test_unknown_and_miscased_tags_are_rejected() {
        assert_eq!(
            "pct".parse::<UnitKind>(),
            Err(ParseError::UnsupportedUnit("pct".to_string()))
        );
        // Matching is case-sensitive.
        assert!("PX".parse::<UnitKind>().is_err());
        assert!("Q".parse::<UnitKind>().is_err());
        assert!("".parse::<UnitKind>().is_err());
    }

    #[test]
    fn test_serde_uses_canonical_tags() {
        let json = serde_json::to_string(&UnitKind::Percent).unwrap();
        assert_eq!(json, r#""%""#);
        let unit: UnitKind = serde_json::from_str(r#""vmin""#).unwrap();
        assert_eq!(unit, UnitKind::Vmin);
        assert!(serde_json::from_str::<UnitKind>(r#""furlong""#).is_err());
    }

    #[test]
    fn test_absolute_relative_partition() {
        assert!(UnitKind::Q.is_absolute());
        assert!(UnitKind::Px.is_absolute());
        assert!(UnitKind::Percent.is_relative());
        assert!(UnitKind::Rem.is_relative());
    }
}
