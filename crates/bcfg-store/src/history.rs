//! Bounded linear undo/redo history.
//!
//! Snapshots are shared (`Arc`) and never mutated once recorded. Recording a
//! new snapshot discards everything after the current position, so an edit
//! made after an undo drops the undone future for good.

use std::collections::VecDeque;
use std::sync::Arc;

/// Maximum number of snapshots kept.
pub const HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<Arc<T>>,
    /// Current position; `None` exactly when `entries` is empty.
    index: Option<usize>,
    limit: usize,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// History holding at most `limit` snapshots (at least one).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            index: None,
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn get(&self, index: usize) -> Option<&Arc<T>> {
        self.entries.get(index)
    }

    /// Snapshot at the current position.
    pub fn current(&self) -> Option<&Arc<T>> {
        self.index.and_then(|i| self.entries.get(i))
    }

    /// Snapshots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> {
        self.entries.iter()
    }

    pub fn can_undo(&self) -> bool {
        self.index.is_some_and(|i| i > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.index.is_some_and(|i| i + 1 < self.entries.len())
    }

    /// Replace the whole history with a single snapshot at position 0.
    pub fn reset(&mut self, initial: Arc<T>) {
        self.entries.clear();
        self.entries.push_back(initial);
        self.index = Some(0);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index = None;
    }

    /// Record a snapshot after the current position.
    ///
    /// Entries after the current position are discarded, the snapshot is
    /// appended, the oldest entry is evicted when the limit is exceeded, and
    /// the position moves to the new last entry.
    pub fn record(&mut self, snapshot: Arc<T>) {
        let keep = self.index.map_or(0, |i| i + 1);
        self.entries.truncate(keep);
        self.entries.push_back(snapshot);
        if self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        self.index = Some(self.entries.len() - 1);
    }

    /// Step back one snapshot. Returns `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<Arc<T>> {
        let index = self.index.filter(|i| *i > 0)? - 1;
        self.index = Some(index);
        self.entries.get(index).cloned()
    }

    /// Step forward one snapshot. Returns `None` at the newest entry.
    pub fn redo(&mut self) -> Option<Arc<T>> {
        let index = self.index.filter(|i| i + 1 < self.entries.len())? + 1;
        self.index = Some(index);
        self.entries.get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(history: &History<u32>) -> Vec<u32> {
        history.iter().map(|v| **v).collect()
    }

    #[test]
    fn empty_history_has_no_position() {
        let mut history: History<u32> = History::new();
        assert!(history.is_empty());
        assert_eq!(history.index(), None);
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_after_undo_truncates_future() {
        let mut history = History::new();
        history.reset(Arc::new(0));
        history.record(Arc::new(1));
        history.record(Arc::new(2));

        assert_eq!(history.undo().as_deref(), Some(&1));
        history.record(Arc::new(3));

        assert_eq!(values(&history), vec![0, 1, 3]);
        assert_eq!(history.index(), Some(2));
        assert!(!history.can_redo());
    }

    #[test]
    fn record_evicts_oldest_beyond_limit() {
        let mut history = History::with_limit(3);
        history.reset(Arc::new(0));
        for value in 1..=4 {
            history.record(Arc::new(value));
        }
        assert_eq!(values(&history), vec![2, 3, 4]);
        assert_eq!(history.index(), Some(2));
    }

    #[test]
    fn undo_and_redo_stop_at_bounds() {
        let mut history = History::new();
        history.reset(Arc::new(0));
        history.record(Arc::new(1));

        assert!(history.redo().is_none());
        assert_eq!(history.undo().as_deref(), Some(&0));
        assert!(history.undo().is_none());
        assert_eq!(history.index(), Some(0));
        assert_eq!(history.redo().as_deref(), Some(&1));
    }

    #[test]
    fn recording_into_empty_history_starts_at_zero() {
        let mut history = History::new();
        history.record(Arc::new(7));
        assert_eq!(history.index(), Some(0));
        assert_eq!(history.current().map(|v| **v), Some(7));
    }

    #[test]
    fn zero_limit_is_raised_to_one() {
        let mut history = History::with_limit(0);
        history.record(Arc::new(1));
        history.record(Arc::new(2));
        assert_eq!(values(&history), vec![2]);
    }
}
