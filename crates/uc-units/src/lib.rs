//! uc-units: unit tables and the conversion engine.
//!
//! Provides:
//! - Factor tables for the linear categories (length, mass, volume)
//! - Celsius-pivot temperature conversion
//! - Raw value parsing (text -> finite f64)
//! - `convert`, the single entry point front ends call
//!
//! # Example
//!
//! ```
//! use uc_core::Category;
//! use uc_units::convert;
//!
//! let feet = convert(Category::Length, "m", "ft", "1").unwrap();
//! assert!((feet - 3.280_839_895).abs() < 1e-9);
//! ```

pub mod engine;
pub mod error;
pub mod parse;
pub mod table;
pub mod temperature;

// Re-exports for ergonomics
pub use engine::{ConversionRequest, convert, convert_value};
pub use error::{ConvertError, ConvertResult, FailureKind};
pub use parse::parse_value;
pub use table::{LENGTH, MASS, UnitTable, VOLUME, is_valid_unit, table_for, units_for};
pub use temperature::{CelsiusPivot, convert_temperature};
