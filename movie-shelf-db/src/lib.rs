//! SQLite persistence layer for the movie catalog.
//!
//! Provides the connection handle, schema creation, seed loading, CRUD
//! operations and query APIs backed by SQLite (via rusqlite with bundled
//! feature). Most callers only need [`CatalogRepository`].

pub mod operations;
pub mod queries;
pub mod repository;
pub mod schema;
pub mod store;

pub use operations::{SeedStats, delete_movie, insert_movie, insert_movies, update_user_state};
pub use queries::{MovieOrder, MovieQuery, count_movies, find_movie, list_movies, row_to_movie};
pub use repository::{CatalogError, CatalogRepository};
pub use schema::{TABLE_NAME, create_schema_if_absent, table_exists};
pub use store::{
    Cursor, DATABASE_FILE_NAME, RowView, Session, StorageError, StorageHandle,
    default_database_path,
};
