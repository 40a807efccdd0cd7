//! SQLite schema creation for the movie catalog.
//!
//! There is exactly one table and no migration path: the schema is created
//! once, when the database file does not exist yet.

use crate::store::{StorageError, StorageHandle};

/// Name of the single catalog table.
pub const TABLE_NAME: &str = "movies";

/// Column names, in table order.
pub mod columns {
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const CATEGORY: &str = "category";
    pub const YEAR: &str = "year";
    pub const URL: &str = "url";
    pub const COVER_URL: &str = "cover_url";
    pub const WATCHED: &str = "watched";
    pub const LIKES: &str = "likes";
}

/// Create the catalog table if the database file does not exist yet.
///
/// Returns `Ok(true)` when the file and table were created, `Ok(false)` when
/// the file was already there (nothing is touched). If the DDL fails, the
/// freshly created file is removed again so a later attempt starts clean.
pub fn create_schema_if_absent(handle: &mut StorageHandle) -> Result<bool, StorageError> {
    create_schema_with(handle, SCHEMA_SQL)
}

fn create_schema_with(handle: &mut StorageHandle, ddl: &str) -> Result<bool, StorageError> {
    if handle.file_exists() {
        log::debug!(
            "Database {} already exists; skipping schema creation",
            handle.path().display()
        );
        return Ok(false);
    }

    if let Some(parent) = handle.path().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let result = {
        let session = handle.acquire()?;
        session.execute(ddl, [])
    };

    match result {
        Ok(_) => {
            log::info!("Created catalog schema in {}", handle.path().display());
            Ok(true)
        }
        Err(e) => {
            if let Err(rm) = std::fs::remove_file(handle.path()) {
                log::warn!(
                    "Failed to remove {} after schema error: {}",
                    handle.path().display(),
                    rm
                );
            }
            Err(e)
        }
    }
}

/// Whether the catalog table exists in an already open handle.
pub fn table_exists(handle: &StorageHandle) -> Result<bool, StorageError> {
    handle.query(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1) AS present",
        [TABLE_NAME],
        |cursor| match cursor.next_row()? {
            Some(row) => row.boolean("present"),
            None => Ok(false),
        },
    )
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    title TEXT NOT NULL CHECK (length(title) > 0),
    category TEXT NOT NULL CHECK (length(category) > 0),
    year INTEGER NOT NULL,
    url TEXT,
    cover_url TEXT NOT NULL CHECK (length(cover_url) > 0),
    watched BOOLEAN NOT NULL DEFAULT 0,
    likes INTEGER NOT NULL DEFAULT 0
)
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_ddl_removes_the_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.sqlite");
        let mut handle = StorageHandle::new(&path);

        let err = create_schema_with(&mut handle, "CREATE TABLE movies (").unwrap_err();
        assert!(matches!(err, StorageError::Statement { .. }));
        assert!(!path.exists());
        assert!(!handle.is_open());

        assert!(create_schema_if_absent(&mut handle).unwrap());
        let session = handle.acquire().unwrap();
        assert!(table_exists(&session).unwrap());
    }
}
