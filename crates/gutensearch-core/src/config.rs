use std::path::PathBuf;
use std::time::Duration;

/// Default noise substrings stripped from indexed paragraphs. Matched
/// case-sensitively, anywhere in the paragraph.
const SKIP_PARAGRAPH_PATTERNS: &[&str] = &[
    "[_Copyright",
    "[Illustration",
    "[Blank Page]",
    "[**",
    "[Transcriber's Note",
    "[Editor's Note",
    "[Technical Note",
];

/// Runtime configuration shared by every component.
///
/// Constructed explicitly and passed by reference; there is no process-wide
/// configuration state.
#[derive(Debug, Clone)]
pub struct Config {
    /// File listing one book id per line (`#` lines are comments).
    pub book_ids_path: PathBuf,
    /// Directory holding downloaded text and metadata artifacts.
    pub store_dir: PathBuf,
    /// Path of the SQLite full-text database.
    pub db_path: PathBuf,
    /// Base URL of the catalog search endpoint.
    pub catalog_url: String,
    /// URL template for raw book text; `{book_id}` is substituted.
    pub text_url_template: String,
    /// URL template for the ebook landing page; `{book_id}` is substituted.
    pub ebook_url_template: String,
    /// Language filter passed to the catalog on the first page request.
    pub languages: String,
    /// Per-request timeout for all HTTP calls.
    pub request_timeout: Duration,
    /// Hard ceiling on catalog result pages fetched in one search.
    pub max_pages: usize,
    /// Row cap applied to every full-text query.
    pub max_results: usize,
    /// Paragraphs shorter than this (in characters, after trimming) are dropped.
    pub min_paragraph_len: usize,
    /// Paragraphs containing any of these substrings are dropped.
    pub skip_patterns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            book_ids_path: PathBuf::from("book-ids.dat"),
            store_dir: PathBuf::from("text-store"),
            db_path: PathBuf::from("db/text-search.db"),
            catalog_url: "https://gutendex.com/books".to_string(),
            text_url_template: "https://www.gutenberg.org/cache/epub/{book_id}/pg{book_id}.txt"
                .to_string(),
            ebook_url_template: "https://www.gutenberg.org/ebooks/{book_id}".to_string(),
            languages: "en".to_string(),
            request_timeout: Duration::from_secs(30),
            max_pages: 100,
            max_results: 100,
            min_paragraph_len: 4,
            skip_patterns: SKIP_PARAGRAPH_PATTERNS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl Config {
    /// Resolve the raw-text URL for a book id.
    #[must_use]
    pub fn text_url(&self, book_id: &str) -> String {
        self.text_url_template.replace("{book_id}", book_id)
    }

    /// Resolve the ebook landing-page URL for a book id.
    #[must_use]
    pub fn ebook_url(&self, book_id: &str) -> String {
        self.ebook_url_template.replace("{book_id}", book_id)
    }
}
