//! Write operations: inserts, seed loading, user-state updates and deletes.

use movie_shelf_catalog::NewMovie;
use rusqlite::params;

use crate::store::{StorageError, StorageHandle};

const INSERT_MOVIE: &str = "INSERT INTO movies (title, category, year, url, cover_url, watched, likes)
     VALUES (?1, ?2, ?3, ?4, ?5, 0, 0)";

// ── Inserts ─────────────────────────────────────────────────────────────────

/// Insert a new movie. Returns the assigned id.
pub fn insert_movie(handle: &StorageHandle, movie: &NewMovie) -> Result<i64, StorageError> {
    handle.execute(
        INSERT_MOVIE,
        params![
            movie.title,
            movie.category,
            movie.year,
            movie.url,
            movie.cover_url,
        ],
    )?;
    handle.last_insert_id()
}

// ── Seed Loading ────────────────────────────────────────────────────────────

/// Statistics from importing seed text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedStats {
    pub inserted: usize,
    pub skipped: usize,
}

/// Insert all `movies` in one transaction.
///
/// Either every movie is stored or, if any insert fails, none are.
pub fn insert_movies(handle: &StorageHandle, movies: &[NewMovie]) -> Result<usize, StorageError> {
    handle.transaction(|tx| {
        let mut stmt = tx.prepare(INSERT_MOVIE).map_err(StorageError::statement)?;
        for movie in movies {
            stmt.execute(params![
                movie.title,
                movie.category,
                movie.year,
                movie.url,
                movie.cover_url,
            ])
            .map_err(StorageError::statement)?;
        }
        Ok(movies.len())
    })
}

// ── User State ──────────────────────────────────────────────────────────────

/// Set `watched` and `likes` for one movie. Returns the number of rows
/// changed, which is zero when no movie has that id.
pub fn update_user_state(
    handle: &StorageHandle,
    id: i64,
    watched: bool,
    likes: i64,
) -> Result<usize, StorageError> {
    let changed = handle.execute(
        "UPDATE movies SET watched = ?1, likes = ?2 WHERE id = ?3",
        params![watched, likes, id],
    )?;
    if changed == 0 {
        log::debug!("update_user_state: no movie with id {}", id);
    }
    Ok(changed)
}

// ── Deletes ─────────────────────────────────────────────────────────────────

/// Delete a movie. Returns `true` when a row was removed.
pub fn delete_movie(handle: &StorageHandle, id: i64) -> Result<bool, StorageError> {
    let changed = handle.execute("DELETE FROM movies WHERE id = ?1", params![id])?;
    Ok(changed > 0)
}
