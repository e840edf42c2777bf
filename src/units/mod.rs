//! Length parsing and unit conversion.
//!
//! This module organizes the engine into submodules:
//! *   `table`: the static registry of supported units and absolute px factors.
//! *   `lexer`: character-class splitting of literals into magnitude and unit.
//! *   `context`: the caller-supplied parameters for relative units.
//! *   `hub`: `to_px` / `from_px` and every conversion built on them.
//! *   `value`: the public [`Value`] type.
//!
//! Pixels are the pivot: each unit defines one formula to reach pixels and its
//! inverse, so N units need 2N formulas rather than N² pairwise ones.

mod constants;
mod context;
pub mod hub;
mod kind;
pub mod lexer;
mod list;
mod table;
mod value;

pub use constants::{CM_PER_IN, MM_PER_IN, PC_PER_IN, PT_PER_IN, PX_PER_IN, Q_PER_IN};
pub use context::{ConversionContext, ConversionContextBuilder, ResolvedContext};
pub use kind::UnitKind;
pub use lexer::split_magnitude_and_unit;
pub use list::parse_length_list;
pub use table::{UnitTable, UNIT_TABLE};
pub use value::Value;
