use thiserror::Error;

pub type UcResult<T> = Result<T, UcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Unknown category: '{name}'")]
    UnknownCategory { name: String },
}
