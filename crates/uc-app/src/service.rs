//! One-shot conversion + formatting, shared by sessions and the CLI.

use serde::Serialize;
use uc_core::Category;
use uc_units::{ConversionRequest, ConvertResult, convert_value, parse_value};

use crate::format::{Precision, format_conversion};

/// A successful conversion with its display line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub category: Category,
    pub from: String,
    pub to: String,
    pub value: f64,
    /// Un-rounded engine output.
    pub result: f64,
    pub display: String,
}

/// Run a request through the engine and format the result for display.
pub fn convert_and_format(
    request: &ConversionRequest,
    precision: Precision,
) -> ConvertResult<Conversion> {
    let value = parse_value(&request.raw_value)?;
    let result = convert_value(request.category, &request.from_unit, &request.to_unit, value)?;
    let display = format_conversion(
        value,
        &request.from_unit,
        result,
        &request.to_unit,
        precision,
    );

    tracing::debug!(
        category = %request.category,
        from = %request.from_unit,
        to = %request.to_unit,
        value,
        result,
        "converted"
    );

    Ok(Conversion {
        category: request.category,
        from: request.from_unit.clone(),
        to: request.to_unit.clone(),
        value,
        result,
        display,
    })
}
