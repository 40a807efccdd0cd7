use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movie_shelf_db::CatalogRepository;

use crate::CliError;
use crate::cli_types::ListFilterArgs;

use super::{truncate_str, watched_mark};

pub(crate) fn run_list(
    repo: &mut CatalogRepository,
    filter: &ListFilterArgs,
    json: bool,
) -> Result<(), CliError> {
    if !repo.path().exists() {
        log::warn!("No catalog database found at {}", repo.path().display());
        log::info!("Run 'movie-shelf init' to create one.");
        return Ok(());
    }

    let movies = repo
        .list(&filter.to_query())
        .map_err(|e| CliError::database(format!("Failed to list movies: {}", e)))?;

    if json {
        let out = serde_json::to_string_pretty(&movies)
            .map_err(|e| CliError::other(format!("Failed to encode JSON: {}", e)))?;
        println!("{out}");
        return Ok(());
    }

    if movies.is_empty() {
        log::info!("No movies found.");
        return Ok(());
    }

    log::info!(
        "{}",
        format!(
            "{:>5}  {:<4}  {:<36}  {:<12}  {:<7}  {:>5}",
            "ID", "Year", "Title", "Category", "Watched", "Likes"
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
    for movie in &movies {
        log::info!(
            "{:>5}  {:<4}  {:<36}  {:<12}  {:<7}  {:>5}",
            movie.id,
            movie.year,
            truncate_str(&movie.title, 36),
            truncate_str(&movie.category, 12),
            watched_mark(movie.watched),
            movie.likes,
        );
    }
    crate::log_blank();
    log::info!("{} movie(s)", movies.len());

    Ok(())
}
