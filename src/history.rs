//! Snapshot history (undo/redo)
//!
//! A linear history of [`Snapshot`]s split into `past`, `present` and
//! `future`. Every commit invalidates the redo stack; the oldest entries of
//! `past` are evicted once `max_size` is exceeded.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::SystemTime;

use crate::selection::Selection;
use crate::style::StyleStore;
use crate::table::Table;

/// Default number of undo steps kept
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Table, styles and selection captured at one instant
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub table: Arc<Table>,
    pub styles: Arc<StyleStore>,
    pub selection: Selection,
    pub timestamp: SystemTime,
}

impl Snapshot {
    pub fn new(table: Arc<Table>, styles: Arc<StyleStore>, selection: Selection) -> Self {
        Self {
            table,
            styles,
            selection,
            timestamp: SystemTime::now(),
        }
    }

    /// Snapshot of a bare table with no styles and no selection
    pub fn of_table(table: Table) -> Self {
        Self::new(
            Arc::new(table),
            Arc::new(StyleStore::default()),
            Selection::default(),
        )
    }
}

/// Depth counters for enabling undo/redo controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistorySummary {
    pub past: usize,
    pub future: usize,
}

/// Linear undo/redo history
#[derive(Debug, Clone)]
pub struct History {
    /// Oldest first
    past: VecDeque<Snapshot>,
    present: Snapshot,
    /// Nearest first
    future: VecDeque<Snapshot>,
    max_size: usize,
}

impl History {
    /// Create a history whose present is `initial`
    pub fn new(initial: Snapshot) -> Self {
        Self::with_max_size(initial, DEFAULT_MAX_HISTORY)
    }

    /// Create a history with a specific `past` capacity
    pub fn with_max_size(initial: Snapshot, max_size: usize) -> Self {
        Self {
            past: VecDeque::new(),
            present: initial,
            future: VecDeque::new(),
            max_size,
        }
    }

    /// Record a new present (clears the redo stack)
    pub fn commit(&mut self, snapshot: Snapshot) {
        let previous = std::mem::replace(&mut self.present, snapshot);
        self.past.push_back(previous);
        self.future.clear();
        self.evict();
    }

    /// Step back; `None` when there is nothing to undo
    pub fn undo(&mut self) -> Option<&Snapshot> {
        let previous = self.past.pop_back()?;
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        Some(&self.present)
    }

    /// Step forward; `None` when there is nothing to redo
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let next = self.future.pop_front()?;
        let current = std::mem::replace(&mut self.present, next);
        self.past.push_back(current);
        Some(&self.present)
    }

    pub fn present(&self) -> &Snapshot {
        &self.present
    }

    /// Keep the present's selection in step with the live selection
    /// without recording an entry
    pub fn sync_selection(&mut self, selection: &Selection) {
        self.present.selection = selection.clone();
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn summary(&self) -> HistorySummary {
        HistorySummary {
            past: self.past.len(),
            future: self.future.len(),
        }
    }

    /// Forget everything but the present
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Change the capacity, evicting immediately if needed
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size;
        self.evict();
    }

    fn evict(&mut self) {
        let excess = self.past.len().saturating_sub(self.max_size);
        if excess > 0 {
            self.past.drain(..excess);
            tracing::debug!("Evicted {} oldest history entries", excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CellCoord;

    fn table(label: &str) -> Table {
        Table::new(vec![label.to_string()], vec![])
    }

    fn label(snapshot: &Snapshot) -> &str {
        &snapshot.table.headers[0]
    }

    #[test]
    fn test_commit_undo_redo() {
        let mut history = History::new(Snapshot::of_table(table("start")));
        history.commit(Snapshot::of_table(table("A")));
        history.commit(Snapshot::of_table(table("B")));

        assert_eq!(history.summary(), HistorySummary { past: 2, future: 0 });

        assert_eq!(label(history.undo().unwrap()), "A");
        assert_eq!(history.summary(), HistorySummary { past: 1, future: 1 });

        assert_eq!(label(history.redo().unwrap()), "B");
        assert!(!history.can_redo());
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut history = History::new(Snapshot::of_table(table("only")));
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert_eq!(label(history.present()), "only");
    }

    #[test]
    fn test_commit_clears_redo() {
        let mut history = History::new(Snapshot::of_table(table("start")));
        history.commit(Snapshot::of_table(table("A")));
        history.undo();
        assert!(history.can_redo());

        history.commit(Snapshot::of_table(table("B")));
        assert!(!history.can_redo());
        assert_eq!(label(history.undo().unwrap()), "start");
    }

    #[test]
    fn test_n_commits_then_n_undos_restore_start() {
        let mut history = History::new(Snapshot::of_table(table("start")));
        for i in 0..5 {
            history.commit(Snapshot::of_table(table(&i.to_string())));
        }
        for _ in 0..5 {
            history.undo();
        }
        assert_eq!(label(history.present()), "start");
        assert_eq!(history.summary(), HistorySummary { past: 0, future: 5 });
    }

    #[test]
    fn test_future_is_nearest_first() {
        let mut history = History::new(Snapshot::of_table(table("0")));
        history.commit(Snapshot::of_table(table("1")));
        history.commit(Snapshot::of_table(table("2")));
        history.undo();
        history.undo();

        assert_eq!(label(history.redo().unwrap()), "1");
        assert_eq!(label(history.redo().unwrap()), "2");
    }

    #[test]
    fn test_max_size_evicts_oldest() {
        let mut history = History::with_max_size(Snapshot::of_table(table("start")), 3);
        for i in 0..5 {
            history.commit(Snapshot::of_table(table(&i.to_string())));
        }

        assert_eq!(history.summary().past, 3);
        history.undo();
        history.undo();
        assert_eq!(label(history.undo().unwrap()), "1");
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_set_max_size_shrinks() {
        let mut history = History::new(Snapshot::of_table(table("start")));
        for i in 0..10 {
            history.commit(Snapshot::of_table(table(&i.to_string())));
        }
        history.set_max_size(4);
        assert_eq!(history.summary().past, 4);
    }

    #[test]
    fn test_sync_selection_does_not_record() {
        let mut history = History::new(Snapshot::of_table(table("start")));
        history.sync_selection(&Selection::single(CellCoord::new(0, 0)));

        assert_eq!(history.summary().past, 0);
        assert_eq!(history.present().selection.cells.len(), 1);
    }
}
