pub mod api;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod logging;
pub mod repository;
pub mod service;
pub mod storage;

pub use config::ServerConfig;
pub use entity::{Note, NoteDraft};
pub use error::{ErrorKind, NoteError, Result};
pub use repository::{InMemoryNoteRepository, NoteRepository, SqliteNoteRepository};
pub use service::{NoteService, Notes};
pub use storage::SqliteStore;
