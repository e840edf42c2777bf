//! The static registry of supported units and their absolute pixel factors.

use super::constants::*;
use super::kind::UnitKind;

/// Read-only registry of every supported length unit.
///
/// Absolute units are stored together with their "pixels per one unit" factor;
/// relative units have no fixed factor and need a [`super::ConversionContext`].
pub struct UnitTable {
    absolute: &'static [(UnitKind, f64)],
    relative: &'static [UnitKind],
}

/// The process-wide unit table.
pub static UNIT_TABLE: UnitTable = UnitTable {
    absolute: &[
        (UnitKind::Px, 1.0),
        (UnitKind::In, PX_PER_IN),
        (UnitKind::Cm, PX_PER_IN / CM_PER_IN),
        (UnitKind::Mm, PX_PER_IN / MM_PER_IN),
        (UnitKind::Pt, PX_PER_IN / PT_PER_IN),
        (UnitKind::Pc, PX_PER_IN / PC_PER_IN),
        (UnitKind::Q, PX_PER_IN / Q_PER_IN),
    ],
    relative: &[
        UnitKind::Em,
        UnitKind::Ex,
        UnitKind::Ch,
        UnitKind::Rem,
        UnitKind::Lh,
        UnitKind::Percent,
        UnitKind::Vw,
        UnitKind::Vh,
        UnitKind::Vmin,
        UnitKind::Vmax,
    ],
};

impl UnitTable {
    /// Finds the unit whose canonical tag is exactly `tag` (case-sensitive).
    pub fn lookup(&self, tag: &str) -> Option<UnitKind> {
        self.iter().find(|unit| unit.as_str() == tag)
    }

    pub fn is_supported(&self, tag: &str) -> bool {
        self.lookup(tag).is_some()
    }

    /// Pixels per one `unit`, or `None` if the unit is relative.
    pub fn absolute_px_factor(&self, unit: UnitKind) -> Option<f64> {
        self.absolute
            .iter()
            .find(|(candidate, _)| *candidate == unit)
            .map(|(_, factor)| *factor)
    }

    pub fn absolute_units(&self) -> impl Iterator<Item = UnitKind> + '_ {
        self.absolute.iter().map(|(unit, _)| *unit)
    }

    pub fn relative_units(&self) -> impl Iterator<Item = UnitKind> + '_ {
        self.relative.iter().copied()
    }

    /// Every supported unit, absolute units first.
    pub fn iter(&self) -> impl Iterator<Item = UnitKind> + '_ {
        self.absolute_units().chain(self.relative_units())
    }
}
