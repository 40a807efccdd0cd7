pub(crate) mod delete;
pub(crate) mod init;
pub(crate) mod list;
pub(crate) mod path;
pub(crate) mod reset;
pub(crate) mod show;
pub(crate) mod update;

use movie_shelf_db::CatalogRepository;

use crate::CliError;

/// Fail with a hint when the database file has not been created yet.
///
/// Opening a missing file would create an empty one, after which `init`
/// would consider the catalog already initialized.
pub(crate) fn require_catalog(repo: &CatalogRepository) -> Result<(), CliError> {
    if repo.path().exists() {
        Ok(())
    } else {
        Err(CliError::database(format!(
            "No catalog database found at {}. Run 'movie-shelf init' to create one.",
            repo.path().display()
        )))
    }
}

/// Truncate a string to a maximum number of characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max).collect()
    }
}

pub(crate) fn watched_mark(watched: bool) -> &'static str {
    if watched { "yes" } else { "no" }
}
