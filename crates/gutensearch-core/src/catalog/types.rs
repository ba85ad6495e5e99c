use serde::Deserialize;

/// One page of the catalog's paginated JSON response.
#[derive(Debug, Clone, Deserialize)]
pub struct BooksPage {
    #[serde(default)]
    pub count: u64,
    /// Absolute URL of the next page, or `None` on the last one.
    pub next: Option<String>,
    #[serde(default)]
    pub results: Vec<BookSummary>,
}

/// A single catalog entry for a book.
#[derive(Debug, Clone, Deserialize)]
pub struct BookSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<AuthorRecord>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub summaries: Vec<String>,
}

/// An author entry inside a catalog record. Only the name is consulted;
/// other fields the catalog sends are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorRecord {
    pub name: String,
}

/// Format a book as a tab-separated detail line:
/// `id<TAB>title<TAB>first-subject<TAB>first-summary`.
///
/// Missing subjects or summaries yield empty fields so the column count
/// stays fixed.
#[must_use]
pub fn format_book_line(book: &BookSummary) -> String {
    let subject = book.subjects.first().map(String::as_str).unwrap_or("");
    let summary = book.summaries.first().map(String::as_str).unwrap_or("");
    format!("{}\t{}\t{}\t{}", book.id, book.title, subject, summary)
}

/// Format a book as a book-ids file line: `"<id>  # <title>"`, with the
/// title truncated to 50 characters.
#[must_use]
pub fn format_id_line(book: &BookSummary) -> String {
    let title: String = book.title.chars().take(50).collect();
    format!("{}  # {}", book.id, title)
}
