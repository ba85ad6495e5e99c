//! Downloader for raw book text and scraped metadata artifacts.
//!
//! Each book id yields two files in the local store: `pg<id>.txt` with the
//! raw text, and `<id>-meta.json` holding every `<meta>` tag of the ebook
//! landing page as a JSON array of attribute maps. Existing files are never
//! re-downloaded; each request gets a single bounded attempt.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use reqwest::blocking::Client;
use scraper::{Html, Selector};
use thiserror::Error;
use tracing::{error, info};

use crate::config::Config;

static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta").expect("meta selector is valid"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("cannot reach the book archive: {0}")]
    Unreachable(reqwest::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to write artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode metadata: {0}")]
    Json(#[from] serde_json::Error),
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Load book ids from a file, one per line. Blank lines and `#` comment
/// lines are skipped; only the first whitespace-delimited token of a line
/// is taken, so annotated lines like `1342  # Pride and Prejudice` work.
pub fn load_book_ids(path: &Path) -> io::Result<Vec<String>> {
    let raw = fs::read_to_string(path)?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_whitespace().next())
        .map(String::from)
        .collect())
}

/// Extract every `<meta>` tag's attributes from an HTML page.
#[must_use]
pub fn extract_meta_tags(html: &str) -> Vec<HashMap<String, String>> {
    let document = Html::parse_document(html);
    document
        .select(&META_SELECTOR)
        .map(|element| {
            element
                .value()
                .attrs()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect::<HashMap<String, String>>()
        })
        .filter(|attrs| !attrs.is_empty())
        .collect()
}

/// Blocking downloader for book text and metadata.
pub struct Downloader {
    http: Client,
    config: Config,
}

impl Downloader {
    pub fn new(config: &Config) -> FetchResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// Download a book's raw text into `store_dir/pg<id>.txt`.
    ///
    /// Returns `Ok(true)` when a file was written, `Ok(false)` when it
    /// already existed or the server refused the request (logged, batch
    /// continues). Only an unreachable endpoint is escalated as an error.
    pub fn download_text(&self, book_id: &str, store_dir: &Path) -> FetchResult<bool> {
        let filename = format!("pg{book_id}.txt");
        let filepath = store_dir.join(&filename);
        if filepath.exists() {
            info!("[{book_id}] text already exists, skipping: {filename}");
            return Ok(false);
        }

        let url = self.config.text_url(book_id);
        info!("[{book_id}] downloading text from {url}");
        let bytes = match self.get_bytes(&url) {
            Ok(bytes) => bytes,
            Err(err) if err.is_connect() => return Err(FetchError::Unreachable(err)),
            Err(err) => {
                error!("[{book_id}] failed to download text: {err}");
                return Ok(false);
            }
        };

        fs::write(&filepath, bytes)?;
        info!("[{book_id}] saved text to {}", filepath.display());
        Ok(true)
    }

    /// Download a book's ebook page and store its meta tags as
    /// `store_dir/<id>-meta.json`. Same return contract as
    /// [`Downloader::download_text`].
    pub fn download_metadata(&self, book_id: &str, store_dir: &Path) -> FetchResult<bool> {
        let filename = format!("{book_id}-meta.json");
        let filepath = store_dir.join(&filename);
        if filepath.exists() {
            info!("[{book_id}] metadata already exists, skipping: {filename}");
            return Ok(false);
        }

        let url = self.config.ebook_url(book_id);
        info!("[{book_id}] downloading metadata from {url}");
        let html = match self.get_text(&url) {
            Ok(html) => html,
            Err(err) if err.is_connect() => return Err(FetchError::Unreachable(err)),
            Err(err) => {
                error!("[{book_id}] failed to download metadata: {err}");
                return Ok(false);
            }
        };

        let meta_tags = extract_meta_tags(&html);
        fs::write(&filepath, serde_json::to_string_pretty(&meta_tags)?)?;
        info!("[{book_id}] saved metadata to {}", filepath.display());
        Ok(true)
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, reqwest::Error> {
        Ok(self
            .http
            .get(url)
            .send()?
            .error_for_status()?
            .bytes()?
            .to_vec())
    }

    fn get_text(&self, url: &str) -> Result<String, reqwest::Error> {
        self.http.get(url).send()?.error_for_status()?.text()
    }
}
