//! Per-session form state.
//!
//! A `Session` is owned by exactly one front end and passed by `&mut` into
//! each handler. Nothing here is global: two sessions never share
//! selections or history.

use uc_core::Category;
use uc_units::{ConversionRequest, ConvertError, is_valid_unit, units_for};

use crate::config::ConverterConfig;
use crate::error::AppResult;
use crate::events::{ChangeQueue, StateChange};
use crate::format::Precision;
use crate::history::History;
use crate::selection::{SelectionPair, SelectionState};
use crate::service::{Conversion, convert_and_format};

#[derive(Debug, Clone)]
pub struct Session {
    category: Category,
    precision: Precision,
    value_text: String,
    record_history: bool,
    selection: SelectionState,
    history: History,
    changes: ChangeQueue,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&ConverterConfig::default())
    }
}

impl Session {
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            category: config.default_category,
            precision: config.precision,
            value_text: "1.0".to_string(),
            record_history: config.record_history,
            selection: SelectionState::new(),
            history: History::new(config.history_display_limit),
            changes: ChangeQueue::default(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Switch the active category and repair its stored pair if needed.
    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        self.changes.push(StateChange::CategoryChanged { category });

        if self.selection.validate(category) {
            let pair = self.selection.get(category);
            self.changes
                .push(StateChange::SelectionRepaired { category, pair });
        }
    }

    /// Units the pickers may offer for the active category.
    pub fn units(&self) -> Vec<&'static str> {
        units_for(self.category)
    }

    pub fn pair(&self) -> SelectionPair {
        self.selection.get(self.category)
    }

    pub fn set_from(&mut self, unit: &str) -> AppResult<()> {
        self.check_unit(unit)?;
        self.selection.set_from(self.category, unit);
        self.selection_changed();
        Ok(())
    }

    pub fn set_to(&mut self, unit: &str) -> AppResult<()> {
        self.check_unit(unit)?;
        self.selection.set_to(self.category, unit);
        self.selection_changed();
        Ok(())
    }

    /// Exchange from/to for the active category; returns the new pair.
    pub fn swap(&mut self) -> SelectionPair {
        self.selection.swap(self.category);
        let pair = self.pair();
        self.changes.push(StateChange::Swapped {
            category: self.category,
            pair: pair.clone(),
        });
        pair
    }

    pub fn value_text(&self) -> &str {
        &self.value_text
    }

    pub fn set_value_text(&mut self, text: impl Into<String>) {
        self.value_text = text.into();
        self.changes.push(StateChange::ValueEdited);
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn set_precision(&mut self, value: i64) -> AppResult<()> {
        let precision = Precision::new(value)?;
        self.precision = precision;
        self.changes.push(StateChange::PrecisionChanged { precision });
        Ok(())
    }

    /// Convert the current form contents.
    ///
    /// On success the pair is remembered for the category and, when enabled,
    /// the display line is added to the history. A failure changes nothing
    /// but the queued signal; the form stays usable.
    pub fn submit(&mut self) -> Result<Conversion, ConvertError> {
        let pair = self.pair();
        let request = ConversionRequest::new(
            self.category,
            pair.from.as_str(),
            pair.to.as_str(),
            self.value_text.as_str(),
        );

        match convert_and_format(&request, self.precision) {
            Ok(conversion) => {
                self.selection.set(self.category, &pair.from, &pair.to);
                if self.record_history {
                    self.history.push(conversion.display.clone());
                }
                self.changes.push(StateChange::Converted {
                    display: conversion.display.clone(),
                });
                Ok(conversion)
            }
            Err(err) => {
                tracing::warn!(category = %self.category, error = %err, "conversion failed");
                self.changes
                    .push(StateChange::ConversionFailed { kind: err.kind() });
                Err(err)
            }
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Drain queued state changes; a non-empty result means re-render.
    pub fn take_changes(&mut self) -> Vec<StateChange> {
        self.changes.drain()
    }

    fn check_unit(&self, unit: &str) -> Result<(), ConvertError> {
        if is_valid_unit(self.category, unit) {
            Ok(())
        } else {
            Err(ConvertError::InvalidUnit {
                unit: unit.to_string(),
                category: self.category,
            })
        }
    }

    fn selection_changed(&mut self) {
        self.changes.push(StateChange::SelectionChanged {
            category: self.category,
            pair: self.pair(),
        });
    }
}
