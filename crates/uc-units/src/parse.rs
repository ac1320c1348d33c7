//! Raw value parsing.
//!
//! The parsing boundary between front-end text and the engine: everything
//! that reaches a conversion formula has passed through here and is finite.

use uc_core::ensure_finite;

use crate::error::{ConvertError, ConvertResult};

/// Parse user text to a finite `f64`.
///
/// Surrounding whitespace is ignored. `NaN` and infinities parse as floats
/// but are rejected like any other non-number.
pub fn parse_value(raw: &str) -> ConvertResult<f64> {
    let invalid = || ConvertError::InvalidNumber {
        input: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    ensure_finite(value, "value").map_err(|_| invalid())
}
