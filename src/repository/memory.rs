use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{ops, NoteRepository};
use crate::entity::{Note, NoteDraft};
use crate::error::{NoteError, Result};

#[derive(Debug, Default)]
struct State {
    notes: BTreeMap<i64, Note>,
    last_id: i64,
}

/// Repository kept entirely in memory, with the same semantics as the
/// SQLite one. Useful for tests and throwaway servers.
#[derive(Debug, Default)]
pub struct InMemoryNoteRepository {
    state: Mutex<State>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of stored notes
    pub fn len(&self) -> usize {
        self.state().notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn create(&self, note: &NoteDraft) -> Result<i64> {
        let mut state = self.state();
        state.last_id += 1;
        let id = state.last_id;
        state.notes.insert(id, Note::new(id, note.clone()));
        Ok(id)
    }

    fn get_by_id(&self, id: i64) -> Result<Note> {
        self.state()
            .notes
            .get(&id)
            .cloned()
            .ok_or(NoteError::NotFound {
                op: ops::GET_BY_ID,
                id,
            })
    }

    fn get_all(&self) -> Result<Vec<Note>> {
        Ok(self.state().notes.values().cloned().collect())
    }

    fn update_by_id(&self, id: i64, note: &NoteDraft) -> Result<()> {
        if let Some(existing) = self.state().notes.get_mut(&id) {
            existing.title.clone_from(&note.title);
            existing.content.clone_from(&note.content);
        }
        Ok(())
    }

    fn delete_by_id(&self, id: i64) -> Result<()> {
        self.state().notes.remove(&id);
        Ok(())
    }
}
