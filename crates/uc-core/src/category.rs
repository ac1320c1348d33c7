//! Unit categories and the temperature unit set.

use core::fmt;
use core::str::FromStr;

use crate::UcError;

/// Closed set of unit families the converter understands.
///
/// Declaration order is the picker order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Length,
    Mass,
    Volume,
    Temperature,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Mass,
        Category::Volume,
        Category::Temperature,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Mass => "Mass",
            Self::Volume => "Volume",
            Self::Temperature => "Temperature",
        }
    }

    /// Linear categories convert by pure scaling through a base unit.
    pub fn is_linear(self) -> bool {
        !matches!(self, Self::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UcError::UnknownCategory {
                name: trimmed.to_string(),
            })
    }
}

/// Temperature scales, converted through Celsius rather than a factor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    /// Names exactly as shown in unit pickers.
    pub const NAMES: [&'static str; 3] = ["Celsius", "Fahrenheit", "Kelvin"];

    pub fn name(self) -> &'static str {
        match self {
            Self::Celsius => "Celsius",
            Self::Fahrenheit => "Fahrenheit",
            Self::Kelvin => "Kelvin",
        }
    }

    /// Exact (case-sensitive) lookup, matching how linear unit keys behave.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.name() == name)
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
