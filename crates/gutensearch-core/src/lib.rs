pub mod catalog;
pub mod config;
pub mod db;
pub mod fetch;
pub mod ingest;
pub mod query;

pub use catalog::{CatalogClient, CatalogError, CatalogResult};
pub use config::Config;
pub use db::{IndexRecord, ParagraphRow, ParagraphStore, StoreError, StoreResult};
pub use fetch::{load_book_ids, Downloader, FetchError, FetchResult};
pub use ingest::{
    book_id_from_filename, extract_content, index_books, load_metadata, parse_author_title,
    split_into_paragraphs, BookMetadata, ExtractError, IndexError, MetadataError,
};
pub use query::{
    format_result_block, load_query_file, parse_query_line, ParsedQuery, QueryError, QueryOp,
};
