use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movie_shelf_db::CatalogRepository;

use crate::CliError;

use super::{require_catalog, watched_mark};

pub(crate) fn run_show(repo: &mut CatalogRepository, id: i64, json: bool) -> Result<(), CliError> {
    require_catalog(repo)?;

    let movie = repo
        .get_by_id(id)
        .map_err(|e| CliError::database(format!("Failed to load movie {}: {}", id, e)))?
        .ok_or(CliError::NotFound(id))?;

    if json {
        let out = serde_json::to_string_pretty(&movie)
            .map_err(|e| CliError::other(format!("Failed to encode JSON: {}", e)))?;
        println!("{out}");
        return Ok(());
    }

    log::info!(
        "{} ({})",
        movie.title.if_supports_color(Stdout, |t| t.bold()),
        movie.year,
    );
    log::info!("  ID:       {}", movie.id);
    log::info!("  Category: {}", movie.category);
    log::info!("  Watched:  {}", watched_mark(movie.watched));
    log::info!("  Likes:    {}", movie.likes);
    log::info!("  Play:     {}", movie.url.as_deref().unwrap_or("-"));
    log::info!("  Cover:    {}", movie.cover_url);

    Ok(())
}
