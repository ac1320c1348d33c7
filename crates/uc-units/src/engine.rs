//! Conversion engine: dispatch on category, validate, compute.

use uc_core::{Category, ensure_finite};

use crate::error::{ConvertError, ConvertResult};
use crate::parse::parse_value;
use crate::table::table_for;
use crate::temperature::convert_temperature;

/// A single conversion as submitted by a front end.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub category: Category,
    pub from_unit: String,
    pub to_unit: String,
    /// Text as entered; must parse to a finite number.
    pub raw_value: String,
}

impl ConversionRequest {
    pub fn new(
        category: Category,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
        raw_value: impl Into<String>,
    ) -> Self {
        Self {
            category,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            raw_value: raw_value.into(),
        }
    }

    pub fn execute(&self) -> ConvertResult<f64> {
        convert(self.category, &self.from_unit, &self.to_unit, &self.raw_value)
    }
}

/// Convert raw text from one unit to another within a category.
///
/// The result is never rounded; display precision belongs to the caller.
pub fn convert(category: Category, from: &str, to: &str, raw: &str) -> ConvertResult<f64> {
    let value = parse_value(raw)?;
    convert_value(category, from, to, value)
}

/// Numeric entry point with the same validation as [`convert`].
pub fn convert_value(category: Category, from: &str, to: &str, value: f64) -> ConvertResult<f64> {
    let value = finite_or_invalid(value, value)?;

    let Some(table) = table_for(category) else {
        return convert_temperature(value, from, to);
    };

    let from_factor = table
        .factor(from)
        .ok_or_else(|| ConvertError::invalid_unit(from, category))?;
    let to_factor = table
        .factor(to)
        .ok_or_else(|| ConvertError::invalid_unit(to, category))?;

    // Same unit is exact; scaling there and back can drift by an ulp
    if from == to {
        return Ok(value);
    }

    // Always pivot through the base unit
    let base = finite_or_invalid(value * from_factor, value)?;
    finite_or_invalid(base / to_factor, value)
}

/// `x` if finite, otherwise `InvalidNumber` for the entered `input`.
pub(crate) fn finite_or_invalid(x: f64, input: f64) -> ConvertResult<f64> {
    ensure_finite(x, "value").map_err(|_| ConvertError::InvalidNumber {
        input: input.to_string(),
    })
}
