//! mediateca CLI
//!
//! Command-line shell for a catalog of books, films, and magazine articles.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediateca_lib::settings;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let library = settings::resolve_library_path(cli.library);
    log::debug!("Library file: {}", library.display());
    let dry_run = cli.dry_run;

    match cli.command {
        Commands::Kinds => {
            commands::library::run_kinds();
            Ok(())
        }
        Commands::List { kind } => commands::library::run_list(&library, kind),
        Commands::Show { index } => commands::library::run_show(&library, index),
        Commands::Add { record } => commands::library::run_add(&library, &record, dry_run),
        Commands::Edit { index, record } => {
            commands::library::run_edit(&library, index, &record, dry_run)
        }
        Commands::Remove { index } => commands::library::run_remove(&library, index, dry_run),
        Commands::Search { title, year } => {
            commands::library::run_search(&library, title.as_deref(), year)
        }
        Commands::Import { file, append } => {
            commands::transfer::run_import(&library, &file, append, dry_run)
        }
        Commands::Export { file } => commands::transfer::run_export(&library, &file),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show();
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetLibrary { file } => commands::config::run_set_library(&file),
            ConfigAction::ClearLibrary => commands::config::run_clear_library(),
        },
    }
}

/// Route `log` output to the terminal.
///
/// Info lines are printed bare (they are the command's normal output);
/// warnings and errors get a colored prefix. `--verbose` switches to
/// timestamped debug output, and `RUST_LOG` overrides the level.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            _ => writeln!(buf, "{}", record.args()),
        });
    }

    builder.init();
}

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
