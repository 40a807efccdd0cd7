//! Application settings (database location, seed source).
//!
//! The settings file is `~/.config/movie-shelf/settings.toml`. Every key is
//! optional; a missing file means defaults everywhere.

use std::path::{Path, PathBuf};

use movie_shelf_catalog::SeedFormat;
use serde::{Deserialize, Serialize};

use crate::CliError;

/// Canonical path to the settings file: `~/.config/movie-shelf/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("movie-shelf").join("settings.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub storage: StorageSettings,
    pub seed: SeedSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct StorageSettings {
    pub database_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct SeedSettings {
    /// Seed file used by `init` instead of the bundled one.
    pub path: Option<PathBuf>,
    pub record_separator: Option<String>,
    pub field_separator: Option<String>,
}

impl SeedSettings {
    /// Seed separators, falling back to CRLF/tab for unset keys.
    pub(crate) fn format(&self) -> SeedFormat {
        let defaults = SeedFormat::default();
        SeedFormat {
            record_separator: self
                .record_separator
                .clone()
                .unwrap_or(defaults.record_separator),
            field_separator: self
                .field_separator
                .clone()
                .unwrap_or(defaults.field_separator),
        }
    }
}

impl Settings {
    /// Load settings from the canonical path.
    ///
    /// A missing file yields defaults. An unreadable or invalid file is
    /// reported as a warning and also yields defaults.
    pub(crate) fn load() -> Self {
        let path = settings_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub(crate) fn load_from(path: &Path) -> Result<Self, CliError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub(crate) fn parse(contents: &str) -> Result<Self, CliError> {
        toml::from_str(contents).map_err(|e| CliError::config(e.to_string()))
    }
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `storage.database_path` in `settings.toml`
/// 3. The default data-directory location
pub(crate) fn resolve_database_path(cli_override: Option<PathBuf>, settings: &Settings) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = &settings.storage.database_path {
        return p.clone();
    }
    movie_shelf_db::default_database_path()
}
