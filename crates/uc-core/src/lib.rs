//! uc-core: stable foundation for the unit converter.
//!
//! Contains:
//! - category (the closed set of unit categories + temperature units)
//! - numeric (tolerances + finiteness check)
//! - error (shared error types)

pub mod category;
pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use category::{Category, TemperatureUnit};
pub use error::{UcError, UcResult};
pub use numeric::*;
