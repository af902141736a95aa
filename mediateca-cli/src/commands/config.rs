use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediateca_lib::settings;

use crate::CliError;

pub(crate) fn run_config_show() {
    let path = settings::settings_path();
    log::info!(
        "{}",
        "mediateca settings".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  Settings file: {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "  Library file:  {}",
        settings::resolve_library_path(None)
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    crate::log_blank();
    match settings::load_settings_string() {
        Some(contents) => log::info!("{}", contents.trim_end()),
        None => log::info!(
            "{}",
            "(no settings saved)".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

pub(crate) fn run_set_library(file: &Path) -> Result<(), CliError> {
    let absolute = std::path::absolute(file)?;
    settings::save_library_path(Some(&absolute))?;
    log::info!("Library file set to {}", absolute.display());
    Ok(())
}

pub(crate) fn run_clear_library() -> Result<(), CliError> {
    settings::save_library_path(None)?;
    log::info!(
        "Library file cleared; using {}",
        settings::default_session_path().display()
    );
    Ok(())
}
