//! Conversion history: unbounded storage, bounded display.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppResult;

/// How many entries front ends show by default.
pub const DEFAULT_DISPLAY_LIMIT: usize = 8;

/// One completed conversion, as it was displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    text: String,
    recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// Most-recent-first list of conversions for one session.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    display_limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_LIMIT)
    }
}

impl History {
    /// A zero limit is bumped to one so the newest entry is always visible.
    pub fn new(display_limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            display_limit: display_limit.max(1),
        }
    }

    pub fn push(&mut self, text: impl Into<String>) -> &HistoryEntry {
        self.entries.push_front(HistoryEntry {
            text: text.into(),
            recorded_at: Utc::now(),
        });
        &self.entries[0]
    }

    /// Newest entries, at most `display_limit` of them.
    pub fn recent(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().take(self.display_limit)
    }

    /// Every stored entry, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn display_limit(&self) -> usize {
        self.display_limit
    }

    pub fn to_json(&self) -> AppResult<String> {
        let entries: Vec<&HistoryEntry> = self.entries.iter().collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first() {
        let mut history = History::default();
        history.push("first");
        history.push("second");

        let texts: Vec<_> = history.iter().map(|e| e.text()).collect();
        assert_eq!(texts, vec!["second", "first"]);
    }

    #[test]
    fn display_is_capped_but_storage_is_not() {
        let mut history = History::default();
        for i in 0..20 {
            history.push(format!("entry {i}"));
        }

        assert_eq!(history.len(), 20);
        let shown: Vec<_> = history.recent().map(|e| e.text().to_string()).collect();
        assert_eq!(shown.len(), DEFAULT_DISPLAY_LIMIT);
        assert_eq!(shown[0], "entry 19");
        assert_eq!(shown[7], "entry 12");
    }

    #[test]
    fn zero_limit_still_shows_newest() {
        let mut history = History::new(0);
        history.push("only");
        assert_eq!(history.display_limit(), 1);
        assert_eq!(history.recent().count(), 1);
    }

    #[test]
    fn timestamps_do_not_go_backwards() {
        let mut history = History::default();
        history.push("a");
        history.push("b");
        let stamps: Vec<_> = history.iter().map(|e| e.recorded_at()).collect();
        assert!(stamps[0] >= stamps[1]);
    }

    #[test]
    fn exports_json() {
        let mut history = History::default();
        history.push("1 m = 3.2808 ft");
        let json = history.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["text"], "1 m = 3.2808 ft");
        assert!(parsed[0]["recorded_at"].is_string());
    }
}
