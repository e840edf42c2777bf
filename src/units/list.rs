//! Parsing of length lists, as found in `stroke-dasharray`, `x`/`y` lists and
//! the argument lists of `transform` functions.

use super::value::Value;
use crate::errors::ParseError;

/// Parses a list of lengths separated by commas and/or whitespace,
/// e.g. `"10, 20px 5mm"`.
///
/// Blank input yields an empty list. A comma with nothing before it (or two
/// commas in a row) is an [`ParseError::InvalidMagnitude`].
pub fn parse_length_list(text: &str) -> Result<Vec<Value>, ParseError> {
    let text = text.trim_matches(|c: char| c.is_ascii_whitespace());
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut values = Vec::new();
    for item in text.split(',') {
        let item = item.trim_matches(|c: char| c.is_ascii_whitespace());
        if item.is_empty() {
            return Err(ParseError::InvalidMagnitude(String::new()));
        }
        for token in item.split_ascii_whitespace() {
            values.push(Value::parse(token)?);
        }
    }
    Ok(values)
}
