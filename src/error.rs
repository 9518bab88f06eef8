use thiserror::Error;

/// Discriminant of a [`NoteError`], independent of its message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidId,
    InvalidNote,
    NotFound,
    Store,
    Transport,
}

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("{op}: id must be greater than 0, got {id}")]
    InvalidId { op: &'static str, id: i64 },

    #[error("{op}: note must have title and content")]
    InvalidNote { op: &'static str },

    #[error("{op}: note {id} not found")]
    NotFound { op: &'static str, id: i64 },

    #[error("{op}{}: store error: {source}", fmt_id(.id))]
    Store {
        op: &'static str,
        id: Option<i64>,
        #[source]
        source: rusqlite::Error,
    },

    #[error("{op}{}: {source}", fmt_id(.id))]
    Context {
        op: &'static str,
        id: Option<i64>,
        #[source]
        source: Box<NoteError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn fmt_id(id: &Option<i64>) -> String {
    id.map(|id| format!(" with id {id}")).unwrap_or_default()
}

impl NoteError {
    /// The kind of the innermost error, looking through any `Context` wrappers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NoteError::InvalidId { .. } => ErrorKind::InvalidId,
            NoteError::InvalidNote { .. } => ErrorKind::InvalidNote,
            NoteError::NotFound { .. } => ErrorKind::NotFound,
            NoteError::Store { .. } | NoteError::Io(_) => ErrorKind::Store,
            NoteError::Context { source, .. } => source.kind(),
        }
    }

    /// Name of the operation that produced (or last wrapped) this error.
    pub fn operation(&self) -> &'static str {
        match self {
            NoteError::InvalidId { op, .. }
            | NoteError::InvalidNote { op }
            | NoteError::NotFound { op, .. }
            | NoteError::Store { op, .. }
            | NoteError::Context { op, .. } => op,
            NoteError::Io(_) => "io",
        }
    }

    /// Id of the note involved, if the operation had one.
    pub fn id(&self) -> Option<i64> {
        match self {
            NoteError::InvalidId { id, .. } | NoteError::NotFound { id, .. } => Some(*id),
            NoteError::Store { id, .. } | NoteError::Context { id, .. } => *id,
            NoteError::InvalidNote { .. } | NoteError::Io(_) => None,
        }
    }

    /// Wrap this error with the calling operation's name and id.
    pub fn context(self, op: &'static str, id: Option<i64>) -> Self {
        NoteError::Context {
            op,
            id,
            source: Box::new(self),
        }
    }

    pub fn store(op: &'static str, id: Option<i64>, source: rusqlite::Error) -> Self {
        NoteError::Store { op, id, source }
    }
}

pub type Result<T> = std::result::Result<T, NoteError>;
