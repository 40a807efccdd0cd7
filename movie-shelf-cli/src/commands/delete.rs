use movie_shelf_db::CatalogRepository;

use crate::CliError;

use super::require_catalog;

pub(crate) fn run_delete(repo: &mut CatalogRepository, id: i64) -> Result<(), CliError> {
    require_catalog(repo)?;

    let deleted = repo
        .delete_by_id(id)
        .map_err(|e| CliError::database(format!("Failed to delete movie {}: {}", id, e)))?;

    if !deleted {
        return Err(CliError::NotFound(id));
    }
    log::info!("Deleted movie {}", id);
    Ok(())
}
