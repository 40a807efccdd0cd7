//! Logger setup for the CLI.
//!
//! Normal output goes through `log::info!`, so the logger doubles as the
//! console printer: info lines are bare messages on stdout, warnings and
//! errors carry a level prefix. `RUST_LOG` overrides the chosen level.

use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

pub(crate) fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub(crate) fn init(verbose: bool, quiet: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbose, quiet))
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(move |buf, record| {
            if verbose {
                let ts = buf.timestamp_millis();
                write!(buf, "{ts} ")?;
            }
            match record.level() {
                Level::Info => writeln!(buf, "{}", record.args()),
                Level::Warn => writeln!(
                    buf,
                    "{} {}",
                    "warning:".if_supports_color(Stdout, |t| t.yellow()),
                    record.args()
                ),
                Level::Error => writeln!(
                    buf,
                    "{} {}",
                    "error:".if_supports_color(Stdout, |t| t.red()),
                    record.args()
                ),
                level => writeln!(buf, "[{} {}] {}", level, record.target(), record.args()),
            }
        });

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
