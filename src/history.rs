//! Linear undo/redo history of scene snapshots.
//!
//! The stack always holds at least one entry (the initial empty scene) and the
//! cursor always indexes a real entry. Snapshotting while the cursor is behind
//! the tail drops the redo branch before appending. Depth is bounded: once the
//! stack exceeds its limit the oldest entries are dropped.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use tracing::debug;

use crate::doc::Scene;

/// Fewest entries a bounded history may keep (the base state plus one edit).
pub const MIN_HISTORY_LIMIT: usize = 2;

/// Snapshot stack with a cursor.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Scene>,
    cursor: usize,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_limit(100)
    }
}

impl History {
    /// Create a history holding the empty scene, bounded to `limit` entries.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self { entries: vec![Scene::default()], cursor: 0, limit: limit.max(MIN_HISTORY_LIMIT) }
    }

    /// Record a completed action: truncate after the cursor, append a copy of
    /// `scene`, and move the cursor to the new tail.
    pub fn snapshot(&mut self, scene: &Scene) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(scene.clone());
        if self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len() - 1;
        debug!(cursor = self.cursor, len = self.entries.len(), "history snapshot");
    }

    /// Step back one entry and return it, or `None` at the first entry.
    pub fn undo(&mut self) -> Option<&Scene> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        debug!(cursor = self.cursor, "history undo");
        self.entries.get(self.cursor)
    }

    /// Step forward one entry and return it, or `None` at the tail.
    pub fn redo(&mut self) -> Option<&Scene> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        debug!(cursor = self.cursor, "history redo");
        self.entries.get(self.cursor)
    }

    /// Back to a single empty entry.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(Scene::default());
        self.cursor = 0;
    }

    /// The entry under the cursor.
    #[must_use]
    pub fn current(&self) -> &Scene {
        &self.entries[self.cursor]
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the stack keeps at least one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}
