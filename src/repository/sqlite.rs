use std::sync::Arc;

use rusqlite::{params, Row};
use tracing::debug;

use super::{ops, NoteRepository};
use crate::entity::{Note, NoteDraft};
use crate::error::{NoteError, Result};
use crate::storage::SqliteStore;

/// Production repository over a shared [`SqliteStore`].
#[derive(Clone)]
pub struct SqliteNoteRepository {
    store: Arc<SqliteStore>,
}

impl SqliteNoteRepository {
    pub fn new(store: Arc<SqliteStore>) -> Self {
        Self { store }
    }
}

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
    })
}

impl NoteRepository for SqliteNoteRepository {
    fn create(&self, note: &NoteDraft) -> Result<i64> {
        let id = self
            .store
            .insert(
                "INSERT INTO notes (title, content) VALUES (?1, ?2)",
                params![note.title, note.content],
            )
            .map_err(|e| NoteError::store(ops::CREATE, None, e))?;
        debug!(id, "note inserted");
        Ok(id)
    }

    fn get_by_id(&self, id: i64) -> Result<Note> {
        self.store
            .query_one(
                "SELECT id, title, content FROM notes WHERE id = ?1",
                [id],
                note_from_row,
            )
            .map_err(|e| NoteError::store(ops::GET_BY_ID, Some(id), e))?
            .ok_or(NoteError::NotFound {
                op: ops::GET_BY_ID,
                id,
            })
    }

    fn get_all(&self) -> Result<Vec<Note>> {
        self.store
            .query(
                "SELECT id, title, content FROM notes ORDER BY id",
                [],
                note_from_row,
            )
            .map_err(|e| NoteError::store(ops::GET_ALL, None, e))
    }

    fn update_by_id(&self, id: i64, note: &NoteDraft) -> Result<()> {
        let affected = self
            .store
            .execute(
                "UPDATE notes SET title = ?1, content = ?2 WHERE id = ?3",
                params![note.title, note.content, id],
            )
            .map_err(|e| NoteError::store(ops::UPDATE_BY_ID, Some(id), e))?;
        debug!(id, affected, "note updated");
        Ok(())
    }

    fn delete_by_id(&self, id: i64) -> Result<()> {
        let affected = self
            .store
            .execute("DELETE FROM notes WHERE id = ?1", [id])
            .map_err(|e| NoteError::store(ops::DELETE_BY_ID, Some(id), e))?;
        debug!(id, affected, "note deleted");
        Ok(())
    }
}
