//! Bounded list of past calculations.

use std::collections::VecDeque;
use std::fmt;

use crate::calculator::CalcResult;

/// A successful calculation kept in the history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The expression entered by the user.
    pub expression: String,
    /// The result formatted for display.
    pub display_result: String,
}

impl HistoryEntry {
    /// Create an entry from a CalcResult. Errors are never recorded.
    pub fn from_calc_result(result: &CalcResult) -> Option<Self> {
        match result {
            CalcResult::Success {
                expression,
                display_result,
                ..
            } => Some(Self {
                expression: expression.clone(),
                display_result: display_result.clone(),
            }),
            CalcResult::Error { .. } => None,
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.display_result)
    }
}

/// History of calculations, newest first.
#[derive(Clone, Debug)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// Record an entry, dropping the oldest ones beyond the limit.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.limit);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
