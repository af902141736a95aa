use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediateca_lib::json;

use crate::CliError;

use super::{commit, open_library, report_skipped};

pub(crate) fn run_import(
    library: &Path,
    file: &Path,
    append: bool,
    dry_run: bool,
) -> Result<(), CliError> {
    let report = json::deserialize_from_file(file)?;
    report_skipped(&report.skipped);
    let imported = report.catalog.size();

    let catalog = if append {
        let mut catalog = open_library(library)?;
        for record in report.catalog.iter() {
            catalog.add_record(record.duplicate())?;
        }
        catalog
    } else {
        report.catalog
    };

    commit(&catalog, library, dry_run)?;
    log::info!(
        "{} {} records from {} ({} total)",
        "Imported".if_supports_color(Stdout, |t| t.green()),
        imported,
        file.display(),
        catalog.size(),
    );
    Ok(())
}

pub(crate) fn run_export(library: &Path, file: &Path) -> Result<(), CliError> {
    let catalog = open_library(library)?;
    json::serialize_to_file(&catalog, file)?;
    log::info!(
        "{} {} records to {}",
        "Exported".if_supports_color(Stdout, |t| t.green()),
        catalog.size(),
        file.display(),
    );
    Ok(())
}
