//! Bounded query history

use docintel_core::{ProcessingResult, QueryHistoryEntry};
use std::collections::VecDeque;

/// Fixed-capacity, newest-first history.
///
/// Pushing into a full buffer evicts the oldest entry first, so the buffer
/// never holds more than `capacity` entries.
#[derive(Debug, Clone)]
pub struct QueryHistory {
    entries: VecDeque<QueryHistoryEntry>,
    capacity: usize,
}

impl QueryHistory {
    /// Create an empty history. Capacity must be at least 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record an entry as the newest, returning the evicted oldest entry if any
    pub fn push(&mut self, entry: QueryHistoryEntry) -> Option<QueryHistoryEntry> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_back()
        } else {
            None
        };
        self.entries.push_front(entry);
        evicted
    }

    /// Entries, newest first
    pub fn iter(&self) -> impl Iterator<Item = &QueryHistoryEntry> {
        self.entries.iter()
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&QueryHistoryEntry> {
        self.entries.front()
    }

    pub fn get(&self, id: &str) -> Option<&QueryHistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Stored result of an entry, for replay
    pub fn result(&self, id: &str) -> Option<&ProcessingResult> {
        self.get(id).map(|e| &e.result)
    }
}

impl Default for QueryHistory {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_HISTORY_CAPACITY)
    }
}
