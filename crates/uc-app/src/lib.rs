//! Shared application service layer for the unit converter.
//!
//! This crate provides a unified interface for both CLI and GUI frontends,
//! centralizing per-session state (unit selections, history, precision),
//! display formatting, and configuration. Front ends own rendering only.

pub mod config;
pub mod error;
pub mod events;
pub mod format;
pub mod history;
pub mod selection;
pub mod service;
pub mod session;

// Re-export key types for convenience
pub use config::ConverterConfig;
pub use error::{AppError, AppResult};
pub use events::{ChangeQueue, StateChange, needs_render};
pub use format::{Precision, failure_message, format_conversion, format_number, round_for_display};
pub use history::{DEFAULT_DISPLAY_LIMIT, History, HistoryEntry};
pub use selection::{SelectionPair, SelectionState, default_pair};
pub use service::{Conversion, convert_and_format};
pub use session::Session;
