use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rusqlite::{Connection, OptionalExtension, Params, Row};

/// SQLite-backed store reached only through parameterized statements.
///
/// The connection is serialized behind a mutex so one store can be shared
/// across request handlers.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create the database file and make sure the schema exists
    pub fn open(path: &Path) -> rusqlite::Result<Self> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> rusqlite::Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> rusqlite::Result<Self> {
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn init_schema(&self) -> rusqlite::Result<()> {
        self.conn().execute(
            "CREATE TABLE IF NOT EXISTS notes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                content TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        // A panic while holding the lock leaves no partial state behind:
        // every statement is its own transaction.
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run a statement and return the number of affected rows
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> rusqlite::Result<usize> {
        self.conn().execute(sql, params)
    }

    /// Run an INSERT and return the rowid the store assigned to it
    pub fn insert<P: Params>(&self, sql: &str, params: P) -> rusqlite::Result<i64> {
        let conn = self.conn();
        conn.execute(sql, params)?;
        Ok(conn.last_insert_rowid())
    }

    /// Run a query and map every row
    pub fn query<T, P, F>(&self, sql: &str, params: P, map: F) -> rusqlite::Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.conn();
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, map)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Run a query expected to match at most one row
    pub fn query_one<T, P, F>(&self, sql: &str, params: P, map: F) -> rusqlite::Result<Option<T>>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        self.conn().query_row(sql, params, map).optional()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::params;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_db() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("notes.db");
        let store = SqliteStore::open(&path).unwrap();
        assert!(path.exists());
        let ids = store
            .query("SELECT id FROM notes", [], |row| row.get::<_, i64>(0))
            .unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_schema_creation_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("notes.db");

        let store = SqliteStore::open(&path).unwrap();
        store
            .insert(
                "INSERT INTO notes (title, content) VALUES (?1, ?2)",
                params!["kept", "across reopen"],
            )
            .unwrap();
        drop(store);

        let store = SqliteStore::open(&path).unwrap();
        let titles = store
            .query("SELECT title FROM notes", [], |row| row.get::<_, String>(0))
            .unwrap();
        assert_eq!(titles, vec!["kept".to_string()]);
    }

    #[test]
    fn test_insert_returns_increasing_ids() {
        let store = SqliteStore::open_in_memory().unwrap();

        let sql = "INSERT INTO notes (title, content) VALUES (?1, ?2)";
        let first = store.insert(sql, params!["a", "b"]).unwrap();
        let second = store.insert(sql, params!["c", "d"]).unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn test_query_one_absent_row_is_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        let row = store
            .query_one("SELECT id FROM notes WHERE id = ?1", [5], |row| {
                row.get::<_, i64>(0)
            })
            .unwrap();
        assert!(row.is_none());
    }

    #[test]
    fn test_execute_reports_affected_rows() {
        let store = SqliteStore::open_in_memory().unwrap();
        let affected = store.execute("DELETE FROM notes WHERE id = ?1", [1]).unwrap();
        assert_eq!(affected, 0);
    }
}
