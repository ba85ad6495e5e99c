use std::collections::HashMap;

use reqwest::blocking::Client;
use tracing::{debug, error, info, warn};
use url::Url;

use super::matcher;
use super::types::{BookSummary, BooksPage};
use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot reach the catalog service: {0}")]
    Unreachable(reqwest::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid catalog URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Blocking client for the book catalog's search API.
///
/// Requests are issued one at a time; pagination follows the server's
/// continuation link until it runs out or the page ceiling is hit.
pub struct CatalogClient {
    http: Client,
    base_url: String,
    languages: String,
    max_pages: usize,
}

impl CatalogClient {
    pub fn new(config: &Config) -> CatalogResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.catalog_url.clone(),
            languages: config.languages.clone(),
            max_pages: config.max_pages,
        })
    }

    /// Search the catalog for books by the given author.
    ///
    /// The request uses only the author's surname as the search term (the
    /// catalog's engine handles initials poorly); every returned page is then
    /// re-filtered with the full name via [`matcher::matches`]. Results are
    /// deduplicated by title, keeping the highest id.
    ///
    /// A connection-level failure is fatal and returned as
    /// [`CatalogError::Unreachable`]; any other failure mid-pagination stops
    /// the walk and returns what was accumulated so far.
    pub fn search_by_author(&self, author: &str) -> CatalogResult<Vec<BookSummary>> {
        info!("searching catalog for books by '{author}'");

        let term = surname_term(author);
        let first = Url::parse_with_params(
            &self.base_url,
            &[("search", term.as_str()), ("languages", self.languages.as_str())],
        )?;

        let mut matched: Vec<BookSummary> = Vec::new();
        let mut next_url = Some(first);
        let mut page = 0usize;

        while let Some(url) = next_url.take() {
            page += 1;
            if page > self.max_pages {
                warn!("reached maximum page limit ({}), stopping", self.max_pages);
                break;
            }

            debug!("fetching page {page}: {url}");
            let body = match self.fetch_page(&url) {
                Ok(body) => body,
                Err(err) if err.is_connect() => {
                    return Err(CatalogError::Unreachable(err));
                }
                Err(err) => {
                    error!("failed to fetch catalog page {page}: {err}");
                    break;
                }
            };

            let page_matches = body
                .results
                .into_iter()
                .filter(|book| {
                    book.authors
                        .iter()
                        .any(|record| matcher::matches(author, &record.name))
                })
                .collect::<Vec<_>>();
            debug!(
                "page {page}: count={}, matches={}, next={:?}",
                body.count,
                page_matches.len(),
                body.next
            );
            matched.extend(page_matches);

            // The continuation link already carries its own query parameters.
            next_url = match body.next.as_deref().map(Url::parse) {
                Some(Ok(url)) => Some(url),
                Some(Err(err)) => {
                    error!("catalog returned an unparseable continuation link: {err}");
                    None
                }
                None => None,
            };
        }

        let books = dedupe_by_title(matched);
        info!("found {} book(s) by '{author}'", books.len());
        Ok(books)
    }

    fn fetch_page(&self, url: &Url) -> Result<BooksPage, reqwest::Error> {
        self.http
            .get(url.clone())
            .send()?
            .error_for_status()?
            .json::<BooksPage>()
    }
}

/// Derive the narrowed search term: the surname token of the normalized
/// name, i.e. its last word. Falls back to the full normalized form when
/// the name is a single token or empty.
#[must_use]
pub fn surname_term(author: &str) -> String {
    let normalized = matcher::normalize(author);
    normalized
        .split_whitespace()
        .last()
        .map_or(normalized.clone(), ToString::to_string)
}

/// Collapse duplicate titles, keeping the entry with the numerically
/// highest id. Output is sorted by id for reproducible listings.
#[must_use]
pub fn dedupe_by_title(books: Vec<BookSummary>) -> Vec<BookSummary> {
    let mut by_title: HashMap<String, BookSummary> = HashMap::new();
    for book in books {
        match by_title.get(&book.title) {
            Some(existing) if existing.id >= book.id => {}
            _ => {
                by_title.insert(book.title.clone(), book);
            }
        }
    }

    let mut books: Vec<BookSummary> = by_title.into_values().collect();
    books.sort_by_key(|book| book.id);
    books
}
