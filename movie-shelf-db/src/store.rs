//! Connection lifecycle for the catalog database file.
//!
//! A [`StorageHandle`] is bound to one file path and holds at most one open
//! connection. Higher layers acquire it for the duration of a single
//! operation through [`StorageHandle::acquire`], which closes the connection
//! again when the returned [`Session`] is dropped.

use std::ops::Deref;
use std::path::{Path, PathBuf};

use rusqlite::types::FromSql;
use rusqlite::{Connection, Params, Row, Rows, Transaction};
use thiserror::Error;

/// File name of the catalog database inside the application data directory.
pub const DATABASE_FILE_NAME: &str = "database.sqlite";

/// Directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "movie-shelf";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Cannot open database at {}: {source}", path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("Statement failed: {message}")]
    Statement {
        /// Extended SQLite result code, when the engine produced one.
        code: Option<i32>,
        message: String,
    },
    #[error("Database connection is not open")]
    NotOpen,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    pub(crate) fn statement(err: rusqlite::Error) -> Self {
        let code = match &err {
            rusqlite::Error::SqliteFailure(failure, _) => Some(failure.extended_code),
            _ => None,
        };
        Self::Statement {
            code,
            message: err.to_string(),
        }
    }
}

/// Default location of the catalog database: `<data dir>/movie-shelf/database.sqlite`.
pub fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(DATABASE_FILE_NAME)
}

// ── Handle ──────────────────────────────────────────────────────────────────

/// Owner of the database path and of the (optional) open connection.
#[derive(Debug)]
pub struct StorageHandle {
    path: PathBuf,
    conn: Option<Connection>,
}

impl StorageHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            conn: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Whether the database file exists on disk.
    pub fn file_exists(&self) -> bool {
        self.path.is_file()
    }

    /// Open a connection if none is held. The file is created when missing;
    /// no schema is created.
    pub fn open(&mut self) -> Result<(), StorageError> {
        if self.conn.is_some() {
            return Ok(());
        }

        let conn = Connection::open(&self.path).map_err(|source| StorageError::Connection {
            path: self.path.clone(),
            source,
        })?;

        // Connection::open is lazy about the file header; reading the schema
        // cookie surfaces "file is not a database" here instead of later.
        conn.query_row("PRAGMA schema_version", [], |row| row.get::<_, i64>(0))
            .map_err(|source| StorageError::Connection {
                path: self.path.clone(),
                source,
            })?;

        log::debug!("Opened database {}", self.path.display());
        self.conn = Some(conn);
        Ok(())
    }

    /// Release the connection. Does nothing when not open.
    pub fn close(&mut self) {
        let Some(conn) = self.conn.take() else {
            return;
        };
        match conn.close() {
            Ok(()) => log::debug!("Closed database {}", self.path.display()),
            Err((_, e)) => log::warn!("Failed to close database {}: {}", self.path.display(), e),
        }
    }

    /// Open the handle and return a guard that closes it on drop.
    pub fn acquire(&mut self) -> Result<Session<'_>, StorageError> {
        self.open()?;
        Ok(Session { handle: self })
    }

    /// Run a single parameterized statement. Returns the number of rows changed.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize, StorageError> {
        self.connection()?
            .execute(sql, params)
            .map_err(StorageError::statement)
    }

    /// Row id assigned by the most recent successful insert on this connection.
    pub fn last_insert_id(&self) -> Result<i64, StorageError> {
        Ok(self.connection()?.last_insert_rowid())
    }

    /// Run a read statement and hand a forward-only cursor over its rows to `consume`.
    ///
    /// The cursor cannot outlive the call; whatever `consume` leaves unread is
    /// discarded when it returns.
    pub fn query<P, T, F>(&self, sql: &str, params: P, consume: F) -> Result<T, StorageError>
    where
        P: Params,
        F: FnOnce(&mut Cursor<'_>) -> Result<T, StorageError>,
    {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(sql).map_err(StorageError::statement)?;
        let rows = stmt.query(params).map_err(StorageError::statement)?;
        let mut cursor = Cursor { rows };
        consume(&mut cursor)
    }

    /// Run `f` inside a transaction. Commits on `Ok`, rolls back on `Err`.
    pub fn transaction<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, StorageError>,
    {
        let tx = self
            .connection()?
            .unchecked_transaction()
            .map_err(StorageError::statement)?;
        let value = f(&tx)?;
        tx.commit().map_err(StorageError::statement)?;
        Ok(value)
    }

    fn connection(&self) -> Result<&Connection, StorageError> {
        self.conn.as_ref().ok_or(StorageError::NotOpen)
    }
}

/// An open [`StorageHandle`] that is closed when this guard goes out of scope.
pub struct Session<'h> {
    handle: &'h mut StorageHandle,
}

impl Deref for Session<'_> {
    type Target = StorageHandle;

    fn deref(&self) -> &StorageHandle {
        self.handle
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        self.handle.close();
    }
}

// ── Rows ────────────────────────────────────────────────────────────────────

/// Lazy, forward-only sequence of result rows.
pub struct Cursor<'stmt> {
    rows: Rows<'stmt>,
}

impl<'stmt> Cursor<'stmt> {
    /// Advance to the next row, or `None` once the result set is exhausted.
    pub fn next_row(&mut self) -> Result<Option<RowView<'_, 'stmt>>, StorageError> {
        let row = self.rows.next().map_err(StorageError::statement)?;
        Ok(row.map(|row| RowView { row }))
    }
}

/// Typed, by-name access to the columns of one row.
pub struct RowView<'a, 'stmt> {
    row: &'a Row<'stmt>,
}

impl RowView<'_, '_> {
    pub fn get<T: FromSql>(&self, column: &str) -> Result<T, StorageError> {
        self.row.get(column).map_err(StorageError::statement)
    }

    pub fn integer(&self, column: &str) -> Result<i64, StorageError> {
        self.get(column)
    }

    pub fn text(&self, column: &str) -> Result<String, StorageError> {
        self.get(column)
    }

    pub fn optional_text(&self, column: &str) -> Result<Option<String>, StorageError> {
        self.get(column)
    }

    pub fn boolean(&self, column: &str) -> Result<bool, StorageError> {
        self.get(column)
    }
}
