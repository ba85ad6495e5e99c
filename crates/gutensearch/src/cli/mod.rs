pub mod authors;
pub mod fetch;
pub mod index;
pub mod query;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "guten",
    about = "Build and query a searchable corpus of public-domain books",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the book catalog for works by an author
    Authors {
        /// Author name, e.g. "Jane Austen" or "Sayers, Dorothy L."
        author: String,
        /// Print book-ids file lines instead of detail lines
        #[arg(long)]
        ids: bool,
    },
    /// Download text and metadata for every id in the book-ids file
    Fetch {
        /// File with one book id per line (default: book-ids.dat)
        #[arg(long = "ids-file")]
        ids_file: Option<PathBuf>,
        /// Directory for downloaded artifacts (default: text-store)
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Rebuild the full-text index from the local store
    Index {
        /// Directory holding downloaded artifacts (default: text-store)
        #[arg(long)]
        store: Option<PathBuf>,
        /// Database path (default: db/text-search.db)
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Run boolean term queries from a file against the index
    Query {
        /// Path to the query file
        query_file: PathBuf,
        /// Database path (default: db/text-search.db)
        #[arg(long)]
        db: Option<PathBuf>,
    },
}
