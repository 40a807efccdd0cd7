//! movie-shelf CLI
//!
//! Command-line front end for the local movie catalog.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;

use movie_shelf_db::CatalogRepository;

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;
use settings::Settings;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Settings::load();
    let db_path = settings::resolve_database_path(cli.db, &settings);
    let mut repo = CatalogRepository::new(db_path).with_seed_format(settings.seed.format());

    match cli.command {
        Commands::Init { seed, no_seed } => {
            let seed = seed.or_else(|| settings.seed.path.clone());
            commands::init::run_init(&mut repo, seed, no_seed)
        }
        Commands::List { filter, json } => commands::list::run_list(&mut repo, &filter, json),
        Commands::Show { id, json } => commands::show::run_show(&mut repo, id, json),
        Commands::Update { id, watched, likes } => {
            commands::update::run_update(&mut repo, id, watched, likes)
        }
        Commands::Delete { id } => commands::delete::run_delete(&mut repo, id),
        Commands::Reset { confirm } => commands::reset::run_reset(&mut repo, confirm),
        Commands::Path => {
            commands::path::run_path(repo.path());
            Ok(())
        }
    }
}

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
