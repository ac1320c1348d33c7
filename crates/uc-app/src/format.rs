//! Display formatting: precision, rounding and user-facing messages.
//!
//! Rounding here is presentation only. Engine results are never rounded.

use serde::{Deserialize, Serialize};
use uc_units::ConvertError;

use crate::error::{AppError, AppResult};

/// Number of decimal places shown for a result, 0..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Precision(u8);

impl Precision {
    pub const MAX: u8 = 10;

    pub fn new(value: i64) -> AppResult<Self> {
        if (0..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(AppError::InvalidPrecision {
                value,
                max: Self::MAX,
            })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(4)
    }
}

impl TryFrom<i64> for Precision {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Precision> for u8 {
    fn from(p: Precision) -> Self {
        p.0
    }
}

/// Round half away from zero to `precision` decimals.
///
/// Values too large to scale without losing integer precision are returned
/// unchanged.
pub fn round_for_display(value: f64, precision: Precision) -> f64 {
    const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

    let scale = 10f64.powi(i32::from(precision.get()));
    let scaled = value * scale;
    let rounded = if scaled.is_finite() && scaled.abs() < EXACT_INT_LIMIT {
        scaled.round() / scale
    } else {
        value
    };

    // -0 reads badly in a result line
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Shortest text that reads back as the same number.
///
/// Magnitudes at or above 1e16, or non-zero below 1e-4, switch to exponent
/// form (`1e306`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    const EXP_ABOVE: f64 = 1e16;
    const EXP_BELOW: f64 = 1e-4;

    let magnitude = value.abs();
    if magnitude >= EXP_ABOVE || (magnitude != 0.0 && magnitude < EXP_BELOW) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

/// `"<value> <from> = <rounded result> <to>"`
pub fn format_conversion(
    value: f64,
    from: &str,
    result: f64,
    to: &str,
    precision: Precision,
) -> String {
    format!(
        "{} {} = {} {}",
        format_number(value),
        from,
        format_number(round_for_display(result, precision)),
        to
    )
}

/// Message shown to the user for a failed conversion.
pub fn failure_message(err: &ConvertError) -> String {
    match err {
        ConvertError::InvalidNumber { .. } => "Please enter a valid number.".to_string(),
        ConvertError::InvalidUnit { unit, category } => {
            format!("Unsupported unit '{unit}' for {category}.")
        }
    }
}
