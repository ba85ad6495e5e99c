//! Per-book indexing orchestration: walk the local store, extract and
//! segment each book, and write paragraph records into the full-text store.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::{info, warn};

use super::extractor::extract_content;
use super::metadata::load_metadata;
use super::segmenter::split_into_paragraphs;
use crate::config::Config;
use crate::db::{IndexRecord, ParagraphStore, StoreError};

static BOOK_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^pg(\d+)\.txt$").expect("filename pattern is valid"));

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to read store directory: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type IndexResult<T> = Result<T, IndexError>;

/// Extract the numeric book id embedded in a raw-text filename,
/// e.g. `pg12345.txt` -> `12345`.
#[must_use]
pub fn book_id_from_filename(filename: &str) -> Option<String> {
    BOOK_FILENAME
        .captures(filename)
        .map(|captures| captures[1].to_string())
}

/// Index every book under `store_dir` into the paragraph store.
///
/// Books are processed in lexicographic filename order so identical input
/// sets produce identical stores. Malformed inputs — unparseable filename,
/// missing or unreadable metadata, absent boundary markers — are logged
/// and skipped without aborting the run. All inserts are committed once
/// at the end; returns the total number of paragraphs written.
pub fn index_books(
    store_dir: &Path,
    store: &mut ParagraphStore,
    config: &Config,
) -> IndexResult<usize> {
    let mut text_files: Vec<PathBuf> = fs::read_dir(store_dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("pg") && name.ends_with(".txt"))
        })
        .collect();
    text_files.sort();

    let mut indexed = 0usize;
    let run = store.begin()?;

    for path in &text_files {
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let Some(book_id) = book_id_from_filename(file_name) else {
            warn!("could not extract a book id from {file_name}, skipping");
            continue;
        };

        let meta_path = store_dir.join(format!("{book_id}-meta.json"));
        if !meta_path.exists() {
            warn!("[{book_id}] metadata file not found, skipping");
            continue;
        }
        let metadata = match load_metadata(&meta_path) {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!("[{book_id}] unusable metadata, skipping: {err}");
                continue;
            }
        };

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("[{book_id}] failed to read text file, skipping: {err}");
                continue;
            }
        };
        let text = String::from_utf8_lossy(&bytes);

        let content = match extract_content(&text) {
            Ok(content) => content,
            Err(err) => {
                warn!("[{book_id}] could not extract content, skipping: {err}");
                continue;
            }
        };

        let paragraphs = split_into_paragraphs(content, config);
        for (offset, paragraph) in paragraphs.iter().enumerate() {
            run.insert_paragraph(&IndexRecord {
                book_id: &book_id,
                paragraph_num: offset as i64 + 1,
                author: &metadata.author,
                title: &metadata.title,
                content: paragraph,
            })?;
            indexed += 1;
        }

        let title: String = metadata.title.chars().take(50).collect();
        info!(
            "[{book_id}] indexed: {title} ({} paragraphs)",
            paragraphs.len()
        );
    }

    run.commit()?;
    Ok(indexed)
}
