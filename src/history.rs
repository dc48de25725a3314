use crate::document::Document;

/// Linear undo/redo log of full document snapshots.
///
/// The first snapshot is always the empty document. The cursor points at
/// the snapshot equal to the live document; a commit truncates everything
/// after the cursor before appending (branch-discard semantics).
///
/// Full snapshots instead of diffs trade memory for simplicity, which is
/// fine at the document sizes the page cap allows; the snapshot count is
/// capped at `max_undo_steps + 1`, dropping the oldest state.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Document>,
    cursor: usize,
    max_snapshots: usize,
}

impl History {
    pub fn new(max_undo_steps: usize) -> Self {
        Self {
            snapshots: vec![Document::new()],
            cursor: 0,
            max_snapshots: max_undo_steps.saturating_add(1).max(2),
        }
    }

    /// The sole write path. Every mutating document operation calls this
    /// exactly once, synchronously, after applying its change.
    pub fn commit(&mut self, document: &Document) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(document.clone());
        if self.snapshots.len() > self.max_snapshots {
            self.snapshots.remove(0);
        }
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step back one snapshot; `None` at the bottom.
    pub fn undo(&mut self) -> Option<&Document> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Step forward one snapshot; `None` at the top.
    pub fn redo(&mut self) -> Option<&Document> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(crate::config::EditorConfig::default().max_undo_steps)
    }
}
