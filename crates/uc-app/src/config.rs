//! Converter configuration loaded from YAML.
//!
//! Every field is optional in the file; missing fields take their defaults.
//!
//! ```yaml
//! precision: 6
//! default_category: Temperature
//! history_display_limit: 8
//! record_history: true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use uc_core::Category;

use crate::error::{AppError, AppResult};
use crate::format::Precision;
use crate::history::DEFAULT_DISPLAY_LIMIT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Decimal places shown for results, 0..=10.
    pub precision: Precision,
    /// Category selected when a session starts.
    pub default_category: Category,
    /// Number of history entries front ends display.
    pub history_display_limit: usize,
    /// Whether successful conversions are appended to the history.
    pub record_history: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            precision: Precision::default(),
            default_category: Category::Length,
            history_display_limit: DEFAULT_DISPLAY_LIMIT,
            record_history: true,
        }
    }
}

impl ConverterConfig {
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::from_yaml_str(&content)?;
        tracing::info!(path = %path.display(), ?config, "loaded converter config");
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        // An empty file is a valid, all-default config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| AppError::ConfigParse(format!("Failed to parse config YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.history_display_limit == 0 {
            return Err(AppError::InvalidConfig(
                "history_display_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
