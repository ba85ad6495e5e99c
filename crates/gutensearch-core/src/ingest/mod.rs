mod extractor;
mod indexer;
mod metadata;
mod segmenter;

pub use extractor::{extract_content, ExtractError, ExtractResult};
pub use indexer::{book_id_from_filename, index_books, IndexError, IndexResult};
pub use metadata::{
    load_metadata, parse_author_title, BookMetadata, MetaRecord, MetadataError, MetadataResult,
};
pub use segmenter::split_into_paragraphs;
