use crate::document::Document;

/// Linear undo/redo history of full document snapshots.
///
/// Each entry is the complete shape list as it was before (undo) or after
/// (redo) an edit. Recording a new snapshot drops the redo stack.
#[derive(Debug, Clone, Default)]
pub struct SnapshotHistory {
    /// Prior documents, most recent last
    undo_stack: Vec<Document>,
    /// Undone documents, most recently undone last
    redo_stack: Vec<Document>,
}

impl SnapshotHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Remember `before` as the state to return to, invalidating any redo entries.
    pub fn record(&mut self, before: Document) {
        self.undo_stack.push(before);
        self.redo_stack.clear();
    }

    /// Step back one edit. `current` moves onto the redo stack and the
    /// previous document is returned. `None` (and no change) when there is nothing to undo.
    pub fn undo(&mut self, current: &Document) -> Option<Document> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current.clone());
        Some(previous)
    }

    /// Step forward one undone edit, mirroring `undo`.
    pub fn redo(&mut self, current: &Document) -> Option<Document> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current.clone());
        Some(next)
    }

    /// Returns true if there are snapshots that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are snapshots that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Document] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Document] {
        &self.redo_stack
    }

    /// Forget all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
