use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::settings::settings_path;

fn describe(path: &Path) -> String {
    let status = if path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found)".if_supports_color(Stdout, |t| t.dimmed()).to_string()
    };
    format!(
        "{} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status
    )
}

/// Print where the catalog database and settings file live.
pub(crate) fn run_path(db_path: &Path) {
    log::info!("  Database: {}", describe(db_path));
    log::info!("  Settings: {}", describe(&settings_path()));
}
