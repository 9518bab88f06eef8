//! Persistence access for notes.
//!
//! [`NoteRepository`] is the only layer that talks to the store. It does no
//! validation; it translates an absent row into [`NoteError::NotFound`] and
//! every lower-level failure into [`NoteError::Store`].
//!
//! [`NoteError::NotFound`]: crate::error::NoteError::NotFound
//! [`NoteError::Store`]: crate::error::NoteError::Store

mod memory;
mod sqlite;

pub use memory::InMemoryNoteRepository;
pub use sqlite::SqliteNoteRepository;

use crate::entity::{Note, NoteDraft};
use crate::error::Result;

/// Operation names recorded in repository errors.
pub mod ops {
    pub const CREATE: &str = "CreateNote";
    pub const GET_BY_ID: &str = "GetNoteByID";
    pub const GET_ALL: &str = "GetAllNotes";
    pub const UPDATE_BY_ID: &str = "UpdateNoteByID";
    pub const DELETE_BY_ID: &str = "DeleteNoteByID";
}

pub trait NoteRepository: Send + Sync {
    /// Insert a note and return the id the store assigned to it.
    fn create(&self, note: &NoteDraft) -> Result<i64>;

    /// Fetch one note, failing with `NotFound` when no row has `id`.
    fn get_by_id(&self, id: i64) -> Result<Note>;

    /// Fetch every note, in ascending id order. Empty table gives an empty vec.
    fn get_all(&self) -> Result<Vec<Note>>;

    /// Overwrite title and content. A missing id is a no-op.
    fn update_by_id(&self, id: i64, note: &NoteDraft) -> Result<()>;

    /// Remove a note. A missing id is a no-op.
    fn delete_by_id(&self, id: i64) -> Result<()>;
}
