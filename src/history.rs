//! Linear undo/redo history over immutable snapshots.
//!
//! The history is a log of snapshots plus a cursor marking the current one.
//! Saving while the cursor sits behind the newest entry drops every entry
//! after the cursor first (branch-on-edit), the same way editors do it.
//!
//! ```
//! use design_patterns::History;
//!
//! let mut history = History::new();
//! history.save("A");
//! history.save("B");
//! history.save("C");
//!
//! assert_eq!(history.undo(), Some(&"B"));
//! assert_eq!(history.undo(), Some(&"A"));
//! assert_eq!(history.redo(), Some(&"B"));
//!
//! history.save("D");
//! assert_eq!(history.redo(), None);
//! assert_eq!(history.entries(), &["A", "B", "D"]);
//! ```

use std::num::NonZeroUsize;

use log::{debug, trace};
use serde::Serialize;

/// Tuning knobs for a [`History`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Oldest entries are evicted once the log grows past this size.
    /// `None` keeps everything.
    pub max_entries: Option<NonZeroUsize>,
}

impl HistoryConfig {
    pub fn bounded(max_entries: NonZeroUsize) -> Self {
        HistoryConfig {
            max_entries: Some(max_entries),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History<T> {
    entries: Vec<T>,
    cursor: Option<usize>,
    #[serde(skip)]
    config: HistoryConfig,
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    pub fn with_config(config: HistoryConfig) -> Self {
        History {
            entries: Vec::new(),
            cursor: None,
            config,
        }
    }

    /// Records `snapshot` as the current state.
    ///
    /// Any redo entries after the cursor are discarded before appending.
    pub fn save(&mut self, snapshot: T) {
        if let Some(cursor) = self.cursor {
            let discarded = self.entries.len() - (cursor + 1);
            if discarded > 0 {
                self.entries.truncate(cursor + 1);
                debug!("history: branch discarded {discarded} redo entries");
            }
        }

        self.entries.push(snapshot);

        if let Some(max) = self.config.max_entries {
            let overflow = self.entries.len().saturating_sub(max.get());
            if overflow > 0 {
                self.entries.drain(..overflow);
                debug!("history: evicted {overflow} oldest entries (max {max})");
            }
        }

        self.cursor = Some(self.entries.len() - 1);
        debug!("history: saved entry {}", self.entries.len() - 1);
    }

    /// Steps back one entry. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<&T> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                trace!("history: undo to {}", cursor - 1);
                self.entries.get(cursor - 1)
            }
            _ => {
                trace!("history: nothing to undo");
                None
            }
        }
    }

    /// Steps forward one entry. Returns `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<&T> {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.entries.len() => {
                self.cursor = Some(cursor + 1);
                trace!("history: redo to {}", cursor + 1);
                self.entries.get(cursor + 1)
            }
            _ => {
                trace!("history: nothing to redo");
                None
            }
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.cursor.and_then(|cursor| self.entries.get(cursor))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor + 1 < self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn config(&self) -> HistoryConfig {
        self.config
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a History<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    #[derive(Debug, Clone)]
    enum Op {
        Save(u32),
        Undo,
        Redo,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u32>().prop_map(Op::Save),
            Just(Op::Undo),
            Just(Op::Redo),
        ]
    }

    fn filled(values: &[u32]) -> History<u32> {
        let mut history = History::new();
        for value in values {
            history.save(*value);
        }
        history
    }

    proptest! {
        #[test]
        fn test_saves_without_undo_fill_the_log(values in prop::collection::vec(any::<u32>(), 1..50)) {
            let history = filled(&values);
            prop_assert_eq!(history.len(), values.len());
            prop_assert_eq!(history.cursor(), Some(values.len() - 1));
            prop_assert_eq!(history.entries(), values.as_slice());
        }

        #[test]
        fn test_undo_walks_back_then_stops(values in prop::collection::vec(any::<u32>(), 1..30)) {
            let mut history = filled(&values);
            let n = values.len();
            for k in 1..n {
                prop_assert_eq!(history.undo(), Some(&values[n - 1 - k]));
                prop_assert_eq!(history.cursor(), Some(n - 1 - k));
            }
            prop_assert_eq!(history.undo(), None);
            prop_assert_eq!(history.cursor(), Some(0));
        }

        #[test]
        fn test_redo_reverses_undo(values in prop::collection::vec(any::<u32>(), 2..30), steps in 1usize..30) {
            let mut history = filled(&values);
            let steps = steps.min(values.len() - 1);
            for _ in 1..steps {
                history.undo();
            }

            let before = history.current().copied();
            prop_assert!(history.undo().is_some());
            prop_assert_eq!(history.redo().copied(), before);
        }

        #[test]
        fn test_save_after_undo_discards_redo(
            values in prop::collection::vec(any::<u32>(), 2..30),
            undos in 1usize..30,
            branch in any::<u32>(),
        ) {
            let mut history = filled(&values);
            let undos = undos.min(values.len() - 1);
            for _ in 0..undos {
                history.undo();
            }

            let cursor = history.cursor().unwrap();
            history.save(branch);

            prop_assert_eq!(history.redo(), None);
            prop_assert_eq!(history.len(), cursor + 2);
            prop_assert_eq!(&history.entries()[..=cursor], &values[..=cursor]);
            prop_assert_eq!(history.current(), Some(&branch));
        }

        #[test]
        fn test_cursor_always_in_bounds(ops in prop::collection::vec(op(), 0..100)) {
            let mut history = History::new();
            for op in ops {
                match op {
                    Op::Save(value) => history.save(value),
                    Op::Undo => {
                        history.undo();
                    }
                    Op::Redo => {
                        history.redo();
                    }
                }

                match history.cursor() {
                    None => prop_assert!(history.is_empty()),
                    Some(cursor) => prop_assert!(cursor < history.len()),
                }
            }
        }
    }

    #[test]
    fn test_branch_drops_c() {
        let mut history = History::new();
        history.save("A");
        history.save("B");
        history.save("C");

        assert_eq!(history.undo(), Some(&"B"));
        assert_eq!(history.undo(), Some(&"A"));
        assert_eq!(history.redo(), Some(&"B"));

        history.save("D");
        assert_eq!(history.redo(), None);
        assert_eq!(history.entries(), &["A", "B", "D"]);
    }
}
