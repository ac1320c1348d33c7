//! Temperature conversion through a Celsius pivot.
//!
//! No range checks: values below absolute zero convert like any other.

use uc_core::{Category, TemperatureUnit};

use crate::engine::finite_or_invalid;
use crate::error::{ConvertError, ConvertResult};

const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Convert a temperature between two named scales.
pub fn convert_temperature(value: f64, from: &str, to: &str) -> ConvertResult<f64> {
    let from = lookup(from)?;
    let to = lookup(to)?;
    if from == to {
        return Ok(value);
    }
    finite_or_invalid(to.convert_from_celsius(from.to_celsius(value)), value)
}

fn lookup(name: &str) -> ConvertResult<TemperatureUnit> {
    TemperatureUnit::from_name(name)
        .ok_or_else(|| ConvertError::invalid_unit(name, Category::Temperature))
}

/// Celsius-pivot formulas for a typed unit.
pub trait CelsiusPivot {
    fn to_celsius(self, value: f64) -> f64;
    fn convert_from_celsius(self, celsius: f64) -> f64;
}

impl CelsiusPivot for TemperatureUnit {
    fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
        }
    }

    fn convert_from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
            TemperatureUnit::Kelvin => celsius + KELVIN_OFFSET,
        }
    }
}
