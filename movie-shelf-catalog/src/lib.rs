//! Movie catalog data model and seed text format.
//!
//! This crate defines the persistent record type and the delimited seed
//! format without any database dependencies. Consumers can use these types
//! directly for display or serialization, or hand them to `movie-shelf-db`
//! for persistence.

pub mod seed;
pub mod types;

pub use seed::{BUNDLED_SEED, ParsedSeed, SeedFormat, parse_seed};
pub use types::*;
