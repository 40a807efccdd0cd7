//! Data model types for the movie catalog.

use serde::{Deserialize, Serialize};

// ── Movie ───────────────────────────────────────────────────────────────────

/// A persisted movie, as read back from the `movies` table.
///
/// Values handed out by the repository are owned copies; mutating one does
/// not touch the stored row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub year: i32,
    /// Playback location, if known.
    #[serde(default)]
    pub url: Option<String>,
    /// Artwork location.
    pub cover_url: String,
    #[serde(default)]
    pub watched: bool,
    #[serde(default)]
    pub likes: i64,
}

/// A movie that has not been stored yet.
///
/// The id is assigned by the database; `watched` and `likes` start at
/// `false` and `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub category: String,
    pub year: i32,
    #[serde(default)]
    pub url: Option<String>,
    pub cover_url: String,
}

impl NewMovie {
    /// True when every required text field is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.category.is_empty() && !self.cover_url.is_empty()
    }
}

/// User-mutable state of a movie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    pub watched: bool,
    pub likes: i64,
}

impl MovieRecord {
    pub fn user_state(&self) -> UserState {
        UserState {
            watched: self.watched,
            likes: self.likes,
        }
    }
}
