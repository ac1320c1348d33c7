//! State-change signals consumed by front-end render loops.
//!
//! The session never calls into UI code. Each mutation queues a change; a
//! front end drains the queue and re-renders when it is non-empty.

use uc_core::Category;
use uc_units::FailureKind;

use crate::format::Precision;
use crate::selection::SelectionPair;

#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    CategoryChanged { category: Category },
    SelectionRepaired { category: Category, pair: SelectionPair },
    SelectionChanged { category: Category, pair: SelectionPair },
    Swapped { category: Category, pair: SelectionPair },
    PrecisionChanged { precision: Precision },
    ValueEdited,
    Converted { display: String },
    ConversionFailed { kind: FailureKind },
}

#[derive(Debug, Clone, Default)]
pub struct ChangeQueue {
    pending: Vec<StateChange>,
}

impl ChangeQueue {
    pub fn push(&mut self, change: StateChange) {
        tracing::trace!(?change, "state change queued");
        self.pending.push(change);
    }

    pub fn drain(&mut self) -> Vec<StateChange> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

pub fn needs_render(changes: &[StateChange]) -> bool {
    !changes.is_empty()
}
