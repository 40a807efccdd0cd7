use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movie_shelf_db::CatalogRepository;

use crate::CliError;

/// Create the catalog on first run and load seed data into it.
///
/// A schema failure is fatal. A seed failure leaves an empty but usable
/// catalog and is only reported as a warning.
pub(crate) fn run_init(
    repo: &mut CatalogRepository,
    seed: Option<PathBuf>,
    no_seed: bool,
) -> Result<(), CliError> {
    let created = repo
        .create_schema_if_absent()
        .map_err(|e| CliError::database(format!("Failed to create catalog schema: {}", e)))?;

    if !created {
        log::info!(
            "Catalog already initialized at {}",
            repo.path().display().if_supports_color(Stdout, |t| t.cyan()),
        );
        return Ok(());
    }

    log::info!(
        "{}",
        "Catalog database created.".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Path: {}", repo.path().display());

    if no_seed {
        return Ok(());
    }

    let result = match &seed {
        Some(path) => repo.import_seed_file(path),
        None => repo.import_bundled_seed(),
    };
    let source = seed
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "bundled catalog".to_string());

    match result {
        Ok(stats) => {
            log::info!("  Seeded {} movies from {}", stats.inserted, source);
            if stats.skipped > 0 {
                log::info!("  Skipped {} malformed entries", stats.skipped);
            }
        }
        Err(e) => {
            log::warn!("Failed to load seed data from {}: {}", source, e);
            log::info!("The catalog was created empty.");
        }
    }

    Ok(())
}
