use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediateca_lib::{Catalog, KindFilter, MediaKind, Record};

use crate::CliError;
use crate::cli_types::RecordArgs;

use super::{commit, open_library, print_row};

pub(crate) fn run_kinds() {
    log::info!("{}", "Supported kinds:".if_supports_color(Stdout, |t| t.bold()));
    for kind in MediaKind::all() {
        log::info!(
            "  {:<17} aliases: {}",
            kind.tag().if_supports_color(Stdout, |t| t.cyan()),
            kind.aliases().join(", "),
        );
    }
}

pub(crate) fn run_list(library: &Path, filter: KindFilter) -> Result<(), CliError> {
    let catalog = open_library(library)?;
    let shown = with_positions(&catalog, catalog.collect_by_kind(filter));
    for (index, record) in &shown {
        print_row(*index, record);
    }
    crate::log_blank();
    log::info!("{} of {} records", shown.len(), catalog.size());
    Ok(())
}

pub(crate) fn run_show(library: &Path, index: usize) -> Result<(), CliError> {
    let catalog = open_library(library)?;
    let record = catalog.get_at(index)?;
    log::info!("{}", record.detail_text());
    Ok(())
}

pub(crate) fn run_add(library: &Path, args: &RecordArgs, dry_run: bool) -> Result<(), CliError> {
    let mut catalog = open_library(library)?;
    let record = args.build()?;
    let summary = record.to_string();
    catalog.add_record(record)?;
    commit(&catalog, library, dry_run)?;
    log::info!(
        "{} {} at position {}",
        "Added".if_supports_color(Stdout, |t| t.green()),
        summary,
        catalog.size() - 1,
    );
    Ok(())
}

pub(crate) fn run_edit(
    library: &Path,
    index: usize,
    args: &RecordArgs,
    dry_run: bool,
) -> Result<(), CliError> {
    let mut catalog = open_library(library)?;
    let replacement = args.build()?;
    catalog.update_at(index, replacement)?;
    commit(&catalog, library, dry_run)?;
    log::info!(
        "{} {}",
        "Updated".if_supports_color(Stdout, |t| t.green()),
        catalog.get_at(index)?,
    );
    Ok(())
}

pub(crate) fn run_remove(library: &Path, index: usize, dry_run: bool) -> Result<(), CliError> {
    let mut catalog = open_library(library)?;
    let removed = catalog.remove_at(index)?;
    commit(&catalog, library, dry_run)?;
    log::info!(
        "{} {}",
        "Removed".if_supports_color(Stdout, |t| t.yellow()),
        removed,
    );
    Ok(())
}

pub(crate) fn run_search(
    library: &Path,
    title: Option<&str>,
    year: Option<i32>,
) -> Result<(), CliError> {
    if title.is_none() && year.is_none() {
        return Err(CliError::usage("search needs --title and/or --year"));
    }
    let catalog = open_library(library)?;
    let matches = search(&catalog, title, year);

    if matches.is_empty() {
        log::info!("No matching records");
        return Ok(());
    }
    for (index, record) in &matches {
        print_row(*index, record);
    }
    crate::log_blank();
    log::info!("{} match(es)", matches.len());
    Ok(())
}

/// Records matching every given criterion, with their positions.
fn search<'a>(
    catalog: &'a Catalog,
    title: Option<&str>,
    year: Option<i32>,
) -> Vec<(usize, &'a Record)> {
    let mut hits = match title {
        Some(t) => catalog.search_by_title(t),
        None => catalog.all(),
    };
    if let Some(y) = year {
        hits.retain(|r| r.year == y);
    }
    with_positions(catalog, hits)
}

/// Pair each record with its current position in `catalog`.
fn with_positions<'a>(catalog: &Catalog, records: Vec<&'a Record>) -> Vec<(usize, &'a Record)> {
    records
        .into_iter()
        .filter_map(|r| catalog.position_of(r.id()).map(|i| (i, r)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediateca_lib::session::sample_library;

    #[test]
    fn search_combines_criteria() {
        let catalog = sample_library().unwrap().catalog;
        let by_year = search(&catalog, None, Some(1954));
        assert_eq!(by_year.len(), 2);
        let both = search(&catalog, Some("samurai"), Some(1954));
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].0, 3);
        assert!(search(&catalog, Some("samurai"), Some(1999)).is_empty());
    }

    #[test]
    fn kind_listing_keeps_catalog_positions() {
        let catalog = sample_library().unwrap().catalog;
        let films = with_positions(&catalog, catalog.collect_by_kind(KindFilter::FilmsOnly));
        let positions: Vec<_> = films.iter().map(|(i, _)| *i).collect();
        assert_eq!(positions, [2, 3]);
        assert!(films.iter().all(|(_, r)| r.kind() == MediaKind::Film));
    }
}
