mod client;
pub mod matcher;
mod types;

pub use client::{dedupe_by_title, surname_term, CatalogClient, CatalogError, CatalogResult};
pub use types::{format_book_line, format_id_line, AuthorRecord, BookSummary, BooksPage};
