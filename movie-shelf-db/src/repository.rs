//! The catalog repository: the only surface consumers use.
//!
//! Construct one [`CatalogRepository`] at startup and pass it to whatever
//! needs the catalog. Each method opens the database, runs its statements and
//! closes the database again before returning, on success and on error.

use std::path::{Path, PathBuf};

use movie_shelf_catalog::{BUNDLED_SEED, MovieRecord, NewMovie, SeedFormat, parse_seed};
use thiserror::Error;

use crate::operations::{self, SeedStats};
use crate::queries::{self, MovieQuery};
use crate::schema;
use crate::store::{Session, StorageError, StorageHandle, default_database_path};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Catalog database {} has not been created yet", path.display())]
    NotInitialized { path: PathBuf },
    #[error("Cannot read seed file {}: {source}", path.display())]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub struct CatalogRepository {
    handle: StorageHandle,
    seed_format: SeedFormat,
}

impl CatalogRepository {
    /// Repository backed by the database file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            handle: StorageHandle::new(path),
            seed_format: SeedFormat::default(),
        }
    }

    /// Repository backed by the default database location.
    pub fn at_default_location() -> Self {
        Self::new(default_database_path())
    }

    /// Use `format` instead of CRLF/tab when splitting seed text.
    pub fn with_seed_format(mut self, format: SeedFormat) -> Self {
        self.seed_format = format;
        self
    }

    pub fn path(&self) -> &Path {
        self.handle.path()
    }

    // ── Schema ──────────────────────────────────────────────────────────────

    /// Create the database file and table on first run.
    ///
    /// Returns `false` without touching anything when the file already exists.
    pub fn create_schema_if_absent(&mut self) -> Result<bool, CatalogError> {
        Ok(schema::create_schema_if_absent(&mut self.handle)?)
    }

    /// Whether the catalog table exists. `false` when there is no database file.
    pub fn table_exists(&mut self) -> Result<bool, CatalogError> {
        if !self.handle.file_exists() {
            return Ok(false);
        }
        let session = self.handle.acquire()?;
        Ok(schema::table_exists(&session)?)
    }

    /// Open the existing database file.
    ///
    /// Opening creates a missing file, which `create_schema_if_absent` would
    /// then take for an initialized catalog, so a missing file is refused.
    fn session(&mut self) -> Result<Session<'_>, CatalogError> {
        if !self.handle.file_exists() {
            return Err(CatalogError::NotInitialized {
                path: self.handle.path().to_path_buf(),
            });
        }
        Ok(self.handle.acquire()?)
    }

    // ── Seed ────────────────────────────────────────────────────────────────

    /// Parse `source` and insert every well-formed entry in one transaction.
    ///
    /// Malformed entries are skipped and counted in [`SeedStats::skipped`].
    /// If any insert fails, nothing is stored.
    pub fn import_seed_data(&mut self, source: &str) -> Result<SeedStats, CatalogError> {
        let parsed = parse_seed(source, &self.seed_format);

        let session = self.session()?;
        let inserted = operations::insert_movies(&session, &parsed.movies)?;

        let stats = SeedStats {
            inserted,
            skipped: parsed.skipped,
        };
        log::info!(
            "Seeded {} movies ({} malformed entries skipped)",
            stats.inserted,
            stats.skipped,
        );
        Ok(stats)
    }

    /// Import the seed resource shipped with the catalog crate.
    pub fn import_bundled_seed(&mut self) -> Result<SeedStats, CatalogError> {
        self.import_seed_data(BUNDLED_SEED)
    }

    /// Import seed text from a file on disk.
    pub fn import_seed_file(&mut self, path: &Path) -> Result<SeedStats, CatalogError> {
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::SeedRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.import_seed_data(&source)
    }

    // ── Reads ───────────────────────────────────────────────────────────────

    /// Every movie, oldest first.
    pub fn list_all(&mut self) -> Result<Vec<MovieRecord>, CatalogError> {
        self.list(&MovieQuery::all())
    }

    /// Movies matching `query`, in the order it asks for.
    pub fn list(&mut self, query: &MovieQuery) -> Result<Vec<MovieRecord>, CatalogError> {
        let session = self.session()?;
        Ok(queries::list_movies(&session, query)?)
    }

    /// The movie with `id`, or `None` when there is none.
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<MovieRecord>, CatalogError> {
        let session = self.session()?;
        Ok(queries::find_movie(&session, id)?)
    }

    pub fn count(&mut self) -> Result<u64, CatalogError> {
        let session = self.session()?;
        Ok(queries::count_movies(&session)?)
    }

    // ── Writes ──────────────────────────────────────────────────────────────

    /// Store a new movie and return its id.
    pub fn insert_movie(&mut self, movie: &NewMovie) -> Result<i64, CatalogError> {
        let session = self.session()?;
        Ok(operations::insert_movie(&session, movie)?)
    }

    /// Set the watched flag and like count of a movie. Unknown ids are ignored.
    pub fn update_user_state(
        &mut self,
        id: i64,
        watched: bool,
        likes: i64,
    ) -> Result<(), CatalogError> {
        let session = self.session()?;
        operations::update_user_state(&session, id, watched, likes)?;
        Ok(())
    }

    /// Delete a movie. Returns `true` only when a row was actually removed.
    pub fn delete_by_id(&mut self, id: i64) -> Result<bool, CatalogError> {
        let session = self.session()?;
        Ok(operations::delete_movie(&session, id)?)
    }

    /// Whether the underlying handle currently holds a connection.
    ///
    /// Always `false` between calls.
    pub fn is_connected(&self) -> bool {
        self.handle.is_open()
    }
}
