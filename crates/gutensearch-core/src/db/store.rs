use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, params_from_iter, Connection, Transaction};
use thiserror::Error;

use super::schema::PARAGRAPHS_SCHEMA;
use crate::query::QueryOp;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to create database directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// One paragraph as written to the full-text store.
#[derive(Debug, Clone)]
pub struct IndexRecord<'a> {
    pub book_id: &'a str,
    pub paragraph_num: i64,
    pub author: &'a str,
    pub title: &'a str,
    pub content: &'a str,
}

/// One paragraph as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphRow {
    pub book_id: String,
    pub paragraph_num: i64,
    pub author: String,
    pub title: String,
    pub content: String,
}

/// SQLite-backed paragraph store with a porter-stemmed FTS5 collection.
///
/// Not safe for concurrent indexing runs against the same path; the
/// rebuild in [`ParagraphStore::create`] assumes exclusive access.
pub struct ParagraphStore {
    conn: Connection,
}

impl ParagraphStore {
    /// Create (or recreate) the store at `path` for a fresh indexing run.
    ///
    /// Parent directories are created idempotently; any existing paragraph
    /// table is dropped. There is no merge with prior state.
    pub fn create(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(PARAGRAPHS_SCHEMA)?;
        Ok(Self { conn })
    }

    /// Open an existing store for querying.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Start a write run. All inserts go through the returned handle and
    /// become durable only on [`IndexRun::commit`].
    pub fn begin(&mut self) -> StoreResult<IndexRun<'_>> {
        Ok(IndexRun {
            tx: self.conn.transaction()?,
        })
    }

    /// Execute a term query: one `content MATCH` clause per term, joined
    /// with the given operator, ordered by paragraph number, capped at
    /// `limit` rows.
    pub fn search(
        &self,
        terms: &[String],
        op: QueryOp,
        limit: usize,
    ) -> StoreResult<Vec<ParagraphRow>> {
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let clause = terms
            .iter()
            .map(|_| "content MATCH ?")
            .collect::<Vec<_>>()
            .join(&format!(" {} ", op.as_sql()));
        let sql = format!(
            "SELECT book_id, paragraph_num, author, title, content \
             FROM paragraphs WHERE {clause} ORDER BY paragraph_num LIMIT {limit}"
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(terms.iter()), |row| {
            Ok(ParagraphRow {
                book_id: row.get(0)?,
                paragraph_num: row.get(1)?,
                author: row.get(2)?,
                title: row.get(3)?,
                content: row.get(4)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Total number of indexed paragraphs.
    pub fn paragraph_count(&self) -> StoreResult<i64> {
        let count = self
            .conn
            .query_row("SELECT count(*) FROM paragraphs", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// A single transactional write run against the store.
pub struct IndexRun<'a> {
    tx: Transaction<'a>,
}

impl IndexRun<'_> {
    pub fn insert_paragraph(&self, record: &IndexRecord<'_>) -> StoreResult<()> {
        self.tx.execute(
            "INSERT INTO paragraphs (book_id, paragraph_num, author, title, content) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.book_id,
                record.paragraph_num,
                record.author,
                record.title,
                record.content
            ],
        )?;
        Ok(())
    }

    /// Commit the whole run at once.
    pub fn commit(self) -> StoreResult<()> {
        self.tx.commit()?;
        Ok(())
    }
}
