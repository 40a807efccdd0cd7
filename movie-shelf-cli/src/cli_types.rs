//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use movie_shelf_db::{MovieOrder, MovieQuery};

#[derive(Parser)]
#[command(name = "movie-shelf")]
#[command(about = "Keep a local catalog of movies", long_about = None)]
pub(crate) struct Cli {
    /// Path to the catalog database file (default: <data dir>/movie-shelf/database.sqlite)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by listing commands.
#[derive(Args, Clone, Debug)]
pub(crate) struct ListFilterArgs {
    /// Only movies in this category (exact match)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only movies released after this year
    #[arg(short, long)]
    pub after: Option<i32>,

    /// Sort order
    #[arg(short, long, value_enum, default_value_t = OrderArg::Year)]
    pub order: OrderArg,
}

impl ListFilterArgs {
    pub(crate) fn to_query(&self) -> MovieQuery {
        let mut query = MovieQuery::all().order_by(self.order.into());
        if let Some(category) = &self.category {
            query = query.category(category.clone());
        }
        if let Some(year) = self.after {
            query = query.after_year(year);
        }
        query
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OrderArg {
    /// Oldest first
    Year,
    /// Newest entries first
    IdDesc,
    /// Alphabetical by title
    Title,
}

impl From<OrderArg> for MovieOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Year => MovieOrder::YearAsc,
            OrderArg::IdDesc => MovieOrder::IdDesc,
            OrderArg::Title => MovieOrder::Title,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create the catalog database and load seed data on first run
    Init {
        /// Seed file to load instead of the bundled catalog
        #[arg(long, conflicts_with = "no_seed")]
        seed: Option<PathBuf>,

        /// Create an empty catalog
        #[arg(long)]
        no_seed: bool,
    },

    /// List movies
    List {
        #[command(flatten)]
        filter: ListFilterArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one movie
    Show {
        /// Movie ID
        id: i64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Change a movie's watched flag and/or like count
    Update {
        /// Movie ID
        id: i64,

        /// Mark as watched (true) or unwatched (false)
        #[arg(long)]
        watched: Option<bool>,

        /// New like count
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
        likes: Option<i64>,
    },

    /// Delete a movie
    Delete {
        /// Movie ID
        id: i64,
    },

    /// Delete the catalog database file
    Reset {
        /// Actually delete (without this flag, only shows what would happen)
        #[arg(long)]
        confirm: bool,
    },

    /// Print the database and settings file paths
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_arguments_build_query() {
        let cli = Cli::try_parse_from([
            "movie-shelf",
            "list",
            "--category",
            "Crime",
            "--after",
            "1990",
            "--order",
            "id-desc",
        ])
        .unwrap();
        let Commands::List { filter, json } = cli.command else {
            panic!("expected list command");
        };
        assert!(!json);
        assert_eq!(
            filter.to_query(),
            MovieQuery::all()
                .category("Crime")
                .after_year(1990)
                .order_by(MovieOrder::IdDesc)
        );
    }

    #[test]
    fn list_defaults_to_year_order() {
        let cli = Cli::try_parse_from(["movie-shelf", "list"]).unwrap();
        let Commands::List { filter, .. } = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(filter.to_query(), MovieQuery::all());
    }

    #[test]
    fn update_parses_bool_and_likes() {
        let cli =
            Cli::try_parse_from(["movie-shelf", "update", "3", "--watched", "true", "--likes", "5"])
                .unwrap();
        let Commands::Update { id, watched, likes } = cli.command else {
            panic!("expected update command");
        };
        assert_eq!((id, watched, likes), (3, Some(true), Some(5)));
    }

    #[test]
    fn negative_likes_are_rejected() {
        assert!(Cli::try_parse_from(["movie-shelf", "update", "3", "--likes", "-1"]).is_err());
    }

    #[test]
    fn seed_conflicts_with_no_seed() {
        assert!(
            Cli::try_parse_from(["movie-shelf", "init", "--seed", "x.tsv", "--no-seed"]).is_err()
        );
    }

    #[test]
    fn global_db_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["movie-shelf", "path", "--db", "/tmp/x.sqlite"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.sqlite")));
    }

    #[test]
    fn clap_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
