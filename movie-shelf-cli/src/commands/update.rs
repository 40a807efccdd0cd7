use movie_shelf_catalog::UserState;
use movie_shelf_db::CatalogRepository;

use crate::CliError;

use super::{require_catalog, watched_mark};

/// Apply the given changes on top of the current state.
pub(crate) fn merge_user_state(
    current: UserState,
    watched: Option<bool>,
    likes: Option<i64>,
) -> UserState {
    UserState {
        watched: watched.unwrap_or(current.watched),
        likes: likes.unwrap_or(current.likes),
    }
}

pub(crate) fn run_update(
    repo: &mut CatalogRepository,
    id: i64,
    watched: Option<bool>,
    likes: Option<i64>,
) -> Result<(), CliError> {
    require_catalog(repo)?;

    if watched.is_none() && likes.is_none() {
        log::warn!("Nothing to update; pass --watched and/or --likes.");
        return Ok(());
    }

    let movie = repo
        .get_by_id(id)
        .map_err(|e| CliError::database(format!("Failed to load movie {}: {}", id, e)))?
        .ok_or(CliError::NotFound(id))?;

    let state = merge_user_state(movie.user_state(), watched, likes);
    repo.update_user_state(id, state.watched, state.likes)
        .map_err(|e| CliError::database(format!("Failed to update movie {}: {}", id, e)))?;

    log::info!(
        "Updated \"{}\": watched {}, {} like(s)",
        movie.title,
        watched_mark(state.watched),
        state.likes,
    );
    Ok(())
}
