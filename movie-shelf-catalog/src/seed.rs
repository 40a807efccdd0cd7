//! Parser for the delimited seed text that bootstraps an empty catalog.
//!
//! Seed text is a sequence of entries separated by a record separator, each
//! entry holding exactly five fields separated by a field separator:
//! ```text
//! title<TAB>category<TAB>year<TAB>url<TAB>cover_url<CR><LF>
//! ```
//!
//! Entries that do not fit this shape are dropped and counted, never
//! reported as errors.

use serde::{Deserialize, Serialize};

use crate::types::NewMovie;

/// The seed resource shipped with the crate.
pub const BUNDLED_SEED: &str = include_str!("../data/movies.tsv");

/// Separators used to split seed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedFormat {
    pub record_separator: String,
    pub field_separator: String,
}

impl Default for SeedFormat {
    fn default() -> Self {
        Self {
            record_separator: "\r\n".to_string(),
            field_separator: "\t".to_string(),
        }
    }
}

/// Result of parsing seed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSeed {
    /// Well-formed entries, in source order.
    pub movies: Vec<NewMovie>,
    /// Non-empty entries that were dropped as malformed.
    pub skipped: usize,
}

/// Parse seed text into insertable movies.
///
/// An entry is dropped when it does not have exactly five fields, when its
/// year is not an integer, or when the title, category or cover URL is empty.
/// An empty URL field becomes `None`. Empty entries (such as the one after a
/// trailing record separator) are ignored without counting.
///
/// # Examples
///
/// ```
/// use movie_shelf_catalog::seed::{parse_seed, SeedFormat};
///
/// let text = "Inception\tSci-Fi\t2010\thttp://a\thttp://cover1\r\nBad\tRow\r\n";
/// let parsed = parse_seed(text, &SeedFormat::default());
/// assert_eq!(parsed.movies.len(), 1);
/// assert_eq!(parsed.movies[0].title, "Inception");
/// assert_eq!(parsed.movies[0].year, 2010);
/// assert_eq!(parsed.skipped, 1);
/// ```
pub fn parse_seed(content: &str, format: &SeedFormat) -> ParsedSeed {
    let mut parsed = ParsedSeed::default();

    let entries = split_records(content, &format.record_separator);
    for (index, entry) in entries.into_iter().enumerate() {
        if entry.is_empty() {
            continue;
        }
        match parse_entry(entry, &format.field_separator) {
            Some(movie) => parsed.movies.push(movie),
            None => {
                log::debug!("Skipping malformed seed entry #{}: {:?}", index + 1, entry);
                parsed.skipped += 1;
            }
        }
    }

    parsed
}

fn split_records<'a>(content: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        vec![content]
    } else {
        content.split(separator).collect()
    }
}

/// Parse one entry. Returns `None` when the entry is malformed.
fn parse_entry(entry: &str, separator: &str) -> Option<NewMovie> {
    if separator.is_empty() {
        return None;
    }

    let fields: Vec<&str> = entry.split(separator).collect();
    let [title, category, year, url, cover_url] = fields.as_slice() else {
        return None;
    };

    let movie = NewMovie {
        title: title.to_string(),
        category: category.to_string(),
        year: year.trim().parse().ok()?,
        url: (!url.is_empty()).then(|| url.to_string()),
        cover_url: cover_url.to_string(),
    };

    movie.is_complete().then_some(movie)
}
