//! Conversion errors.

use uc_core::Category;
use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors returned by the conversion engine.
///
/// These are values, never panics: a front end maps each kind to a message
/// and keeps the form usable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Raw input did not parse to a finite real number.
    #[error("Not a valid number: '{input}'")]
    InvalidNumber { input: String },

    /// Unit is not a member of the category's unit set.
    #[error("Unsupported unit '{unit}' for {category}")]
    InvalidUnit { unit: String, category: Category },
}

/// Coarse failure classification for front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidNumber,
    InvalidUnit,
}

impl ConvertError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidNumber { .. } => FailureKind::InvalidNumber,
            Self::InvalidUnit { .. } => FailureKind::InvalidUnit,
        }
    }

    pub(crate) fn invalid_unit(unit: &str, category: Category) -> Self {
        Self::InvalidUnit {
            unit: unit.to_string(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ConvertError::InvalidNumber {
            input: "abc".into(),
        };
        assert!(err.to_string().contains("abc"));

        let err = ConvertError::invalid_unit("parsecs", Category::Length);
        let msg = err.to_string();
        assert!(msg.contains("parsecs"));
        assert!(msg.contains("Length"));
    }

    #[test]
    fn kind_classifies_variants() {
        let err = ConvertError::InvalidNumber { input: "".into() };
        assert_eq!(err.kind(), FailureKind::InvalidNumber);
        let err = ConvertError::invalid_unit("x", Category::Mass);
        assert_eq!(err.kind(), FailureKind::InvalidUnit);
    }
}
