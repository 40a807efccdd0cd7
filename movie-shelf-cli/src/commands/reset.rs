use movie_shelf_db::CatalogRepository;

use crate::CliError;

/// Remove the catalog file so the next `init` starts from the seed again.
///
/// Without `confirm` this only reports how many movies would be lost.
pub(crate) fn run_reset(repo: &mut CatalogRepository, confirm: bool) -> Result<(), CliError> {
    let path = repo.path().to_path_buf();
    if !path.exists() {
        log::info!("Catalog {} does not exist, nothing to reset", path.display());
        return Ok(());
    }

    if !confirm {
        match repo.count() {
            Ok(n) => log::warn!("Resetting would drop {} movies from {}", n, path.display()),
            Err(e) => log::warn!("Resetting would drop {} (unreadable: {})", path.display(), e),
        }
        log::info!("Watched flags and likes are not recoverable. Pass --confirm to go ahead.");
        return Ok(());
    }

    std::fs::remove_file(&path)
        .map_err(|e| CliError::other(format!("Cannot remove {}: {}", path.display(), e)))?;
    log::info!("Removed {}. 'movie-shelf init' reloads the seed catalog.", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_repo(dir: &tempfile::TempDir) -> CatalogRepository {
        let mut repo = CatalogRepository::new(dir.path().join("database.sqlite"));
        repo.create_schema_if_absent().unwrap();
        repo.import_seed_data("Heat\tCrime\t1995\tu\tc\r\n").unwrap();
        repo
    }

    #[test]
    fn dry_run_keeps_movies() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = seeded_repo(&dir);
        run_reset(&mut repo, false).unwrap();
        assert_eq!(repo.count().unwrap(), 1);
        assert!(!repo.is_connected());
    }

    #[test]
    fn confirmed_reset_allows_fresh_init() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = seeded_repo(&dir);
        run_reset(&mut repo, true).unwrap();
        assert!(!repo.path().exists());
        assert!(repo.create_schema_if_absent().unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn missing_catalog_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = CatalogRepository::new(dir.path().join("database.sqlite"));
        run_reset(&mut repo, true).unwrap();
        run_reset(&mut repo, false).unwrap();
        assert!(!repo.path().exists());
    }
}
