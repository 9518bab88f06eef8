//! Validation gate in front of the repository.

use tracing::debug;

use crate::entity::{Note, NoteDraft};
use crate::error::{NoteError, Result};
use crate::repository::NoteRepository;

/// Operation names recorded in service errors.
pub mod ops {
    pub const GET: &str = "GetNote";
    pub const CREATE: &str = "CreateNote";
    pub const GET_ALL: &str = "GetAllNotes";
    pub const UPDATE: &str = "UpdateNote";
    pub const DELETE: &str = "DeleteNote";
}

pub trait NoteService: Send + Sync {
    fn get_note(&self, id: i64) -> Result<Note>;

    /// Returns the id the store assigned to the new note.
    fn create_note(&self, note: Option<&NoteDraft>) -> Result<i64>;

    fn get_all_notes(&self) -> Result<Vec<Note>>;

    fn update_note(&self, id: i64, note: Option<&NoteDraft>) -> Result<()>;

    fn delete_note(&self, id: i64) -> Result<()>;
}

/// [`NoteService`] backed by any [`NoteRepository`].
pub struct Notes<R> {
    repo: R,
}

impl<R: NoteRepository> Notes<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    #[cfg(test)]
    fn repository(&self) -> &R {
        &self.repo
    }
}

fn check_id(op: &'static str, id: i64) -> Result<()> {
    if id < 1 {
        debug!(op, id, "rejected invalid id");
        return Err(NoteError::InvalidId { op, id });
    }
    Ok(())
}

fn check_note<'a>(op: &'static str, note: Option<&'a NoteDraft>) -> Result<&'a NoteDraft> {
    match note {
        Some(note) if note.is_complete() => Ok(note),
        _ => {
            debug!(op, "rejected incomplete note");
            Err(NoteError::InvalidNote { op })
        }
    }
}

impl<R: NoteRepository> NoteService for Notes<R> {
    fn get_note(&self, id: i64) -> Result<Note> {
        check_id(ops::GET, id)?;
        self.repo
            .get_by_id(id)
            .map_err(|e| e.context(ops::GET, Some(id)))
    }

    fn create_note(&self, note: Option<&NoteDraft>) -> Result<i64> {
        let note = check_note(ops::CREATE, note)?;
        self.repo
            .create(note)
            .map_err(|e| e.context(ops::CREATE, None))
    }

    fn get_all_notes(&self) -> Result<Vec<Note>> {
        self.repo
            .get_all()
            .map_err(|e| e.context(ops::GET_ALL, None))
    }

    fn update_note(&self, id: i64, note: Option<&NoteDraft>) -> Result<()> {
        check_id(ops::UPDATE, id)?;
        let note = check_note(ops::UPDATE, note)?;
        self.repo
            .update_by_id(id, note)
            .map_err(|e| e.context(ops::UPDATE, Some(id)))
    }

    fn delete_note(&self, id: i64) -> Result<()> {
        check_id(ops::DELETE, id)?;
        self.repo
            .delete_by_id(id)
            .map_err(|e| e.context(ops::DELETE, Some(id)))
    }
}
