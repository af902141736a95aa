pub(crate) mod config;
pub(crate) mod library;
pub(crate) mod transfer;

use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediateca_lib::session::{self, Session, SessionSource};
use mediateca_lib::{Catalog, Record, SkippedRecord};

use crate::CliError;

/// Open the library file, falling back to the sample library.
pub(crate) fn open_library(path: &Path) -> Result<Catalog, CliError> {
    let Session { source, report } = session::open_session(path)?;
    if source == SessionSource::Sample {
        log::debug!("Using sample library (no file at {})", path.display());
    }
    report_skipped(&report.skipped);
    Ok(report.catalog)
}

/// Persist `catalog` unless this is a dry run.
pub(crate) fn commit(catalog: &Catalog, path: &Path, dry_run: bool) -> Result<(), CliError> {
    if dry_run {
        log::info!(
            "{}",
            "Dry run: library file not written".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }
    session::save_session(catalog, path)?;
    log::debug!("Saved {} records to {}", catalog.size(), path.display());
    Ok(())
}

pub(crate) fn report_skipped(skipped: &[SkippedRecord]) {
    for s in skipped {
        log::warn!("Record {} was skipped: {}", s.index, s.error);
    }
    if !skipped.is_empty() {
        log::warn!(
            "{} record(s) could not be loaded and will be dropped on the next save",
            skipped.len()
        );
    }
}

/// One-line listing entry: position, kind, title, year.
pub(crate) fn print_row(index: usize, record: &Record) {
    log::info!(
        "  {:>4}  {:<17} {} ({})",
        index.if_supports_color(Stdout, |t| t.dimmed()),
        record.kind().display_name().if_supports_color(Stdout, |t| t.cyan()),
        record.title.if_supports_color(Stdout, |t| t.bold()),
        record.year,
    );
}
