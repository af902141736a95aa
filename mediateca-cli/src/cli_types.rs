//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use mediateca_lib::{KindFilter, MediaFactory, Record, RecordError};

#[derive(Parser)]
#[command(name = "mediateca")]
#[command(about = "Manage a catalog of books, films, and magazine articles", long_about = None)]
pub(crate) struct Cli {
    /// Library file to open (defaults to the saved library, then the last session)
    #[arg(short, long, global = true)]
    pub library: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Apply changes in memory only; never write the library file
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the supported media kinds
    Kinds,

    /// List records, optionally restricted to one kind
    List {
        /// all, books, films, or articles
        #[arg(short, long, default_value = "all")]
        kind: KindFilter,
    },

    /// Show every field of one record
    Show {
        /// Position in the list (0-based)
        index: usize,
    },

    /// Add a new record
    Add {
        #[command(subcommand)]
        record: RecordArgs,
    },

    /// Replace the fields of an existing record
    Edit {
        /// Position in the list (0-based)
        index: usize,

        #[command(subcommand)]
        record: RecordArgs,
    },

    /// Remove a record
    Remove {
        /// Position in the list (0-based)
        index: usize,
    },

    /// Find records by title and/or year
    Search {
        /// Case-insensitive title fragment
        #[arg(short, long)]
        title: Option<String>,

        /// Exact publication year
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Load records from another library file
    Import {
        /// JSON library file to read
        file: PathBuf,

        /// Keep existing records and append the imported ones
        #[arg(long)]
        append: bool,
    },

    /// Write the library to another file
    Export {
        /// Destination JSON file
        file: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Shared attributes of every record.
#[derive(Args, Clone)]
pub(crate) struct CommonArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long, allow_negative_numbers = true)]
    pub year: i32,

    /// Path to a cover image
    #[arg(long)]
    pub cover: Option<String>,
}

#[derive(Subcommand, Clone)]
pub(crate) enum RecordArgs {
    /// A book
    Book {
        #[command(flatten)]
        common: CommonArgs,
        #[arg(long)]
        author: String,
        #[arg(long)]
        isbn: String,
        #[arg(long)]
        publisher: String,
    },

    /// A film
    Film {
        #[command(flatten)]
        common: CommonArgs,
        #[arg(long)]
        director: String,
        /// Running time in minutes
        #[arg(long, allow_negative_numbers = true)]
        duration: i32,
        #[arg(long)]
        genre: String,
    },

    /// A magazine article
    Article {
        #[command(flatten)]
        common: CommonArgs,
        #[arg(long)]
        author: String,
        #[arg(long)]
        magazine: String,
        #[arg(long)]
        doi: String,
    },
}

impl RecordArgs {
    /// Validate the arguments through the factory.
    pub(crate) fn build(&self) -> Result<Record, RecordError> {
        match self {
            Self::Book {
                common,
                author,
                isbn,
                publisher,
            } => MediaFactory::create_book(
                &common.title,
                common.year,
                author,
                isbn,
                publisher,
                common.cover.as_deref(),
            ),
            Self::Film {
                common,
                director,
                duration,
                genre,
            } => MediaFactory::create_film(
                &common.title,
                common.year,
                director,
                *duration,
                genre,
                common.cover.as_deref(),
            ),
            Self::Article {
                common,
                author,
                magazine,
                doi,
            } => MediaFactory::create_magazine_article(
                &common.title,
                common.year,
                author,
                magazine,
                doi,
                common.cover.as_deref(),
            ),
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file contents
    Show,

    /// Print the settings file path
    Path,

    /// Remember a library file for later runs
    SetLibrary {
        /// JSON library file
        file: PathBuf,
    },

    /// Forget the remembered library file
    ClearLibrary,
}
