//! Boolean query-line parsing and result formatting.
//!
//! A query line is a list of terms joined by `&` (AND) or `|` (OR) — never
//! both — with an optional trailing comment after `#`:
//!
//! ```text
//! whale & ship   # Moby Dick scenes
//! ```

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::db::ParagraphRow;

/// Column order of every tab-separated result block.
pub const RESULT_COLUMNS: [&str; 5] = ["book_id", "paragraph_num", "author", "title", "content"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("empty query")]
    Empty,
    #[error("cannot mix '&' and '|' operators in the same query")]
    MixedOperators,
    #[error("no search terms found")]
    NoTerms,
}

pub type QueryResult<T> = Result<T, QueryError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOp {
    And,
    Or,
}

impl QueryOp {
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub terms: Vec<String>,
    pub op: QueryOp,
    pub comment: String,
}

/// Parse one query line into terms, operator, and comment.
///
/// The comment starts at the first `#`. A single term defaults to AND
/// (the operator is irrelevant for one term). Mixing `&` and `|` is a
/// syntax error, as is a line with no terms left after trimming.
pub fn parse_query_line(line: &str) -> QueryResult<ParsedQuery> {
    let (expr, comment) = match line.split_once('#') {
        Some((expr, comment)) => (expr, comment.trim().to_string()),
        None => (line, String::new()),
    };

    let expr = expr.trim();
    if expr.is_empty() {
        return Err(QueryError::Empty);
    }

    let has_and = expr.contains('&');
    let has_or = expr.contains('|');

    let (op, raw_terms) = match (has_and, has_or) {
        (true, true) => return Err(QueryError::MixedOperators),
        (true, false) => (QueryOp::And, expr.split('&').collect::<Vec<_>>()),
        (false, true) => (QueryOp::Or, expr.split('|').collect::<Vec<_>>()),
        (false, false) => (QueryOp::And, vec![expr]),
    };

    let terms: Vec<String> = raw_terms
        .into_iter()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(String::from)
        .collect();

    if terms.is_empty() {
        return Err(QueryError::NoTerms);
    }

    Ok(ParsedQuery { terms, op, comment })
}

/// Load query lines from a file: stripped, with empty lines and
/// comment-only lines removed. Lines carrying inline comments are kept
/// whole for [`parse_query_line`].
pub fn load_query_file(path: &Path) -> io::Result<Vec<String>> {
    let raw = fs::read_to_string(path)?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

/// Format one query's rows as a tab-separated block with comment headers.
/// Tabs and newlines inside values are replaced by spaces so every record
/// stays on one line.
#[must_use]
pub fn format_result_block(rows: &[ParagraphRow], query: &str, comment: &str) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 3);

    lines.push(format!("# Query: {query}"));
    if !comment.is_empty() {
        lines.push(format!("# Original comment: {comment}"));
    }

    if rows.is_empty() {
        lines.push("# No results found".to_string());
    } else {
        lines.push(RESULT_COLUMNS.join("\t"));
        for row in rows {
            let fields = [
                row.book_id.clone(),
                row.paragraph_num.to_string(),
                row.author.clone(),
                row.title.clone(),
                row.content.clone(),
            ];
            let escaped: Vec<String> = fields
                .iter()
                .map(|value| value.replace(['\t', '\n'], " "))
                .collect();
            lines.push(escaped.join("\t"));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn row(book_id: &str, num: i64, content: &str) -> ParagraphRow {
        ParagraphRow {
            book_id: book_id.to_string(),
            paragraph_num: num,
            author: "Jane Austen".to_string(),
            title: "Pride and Prejudice".to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_parse_and_query() {
        let parsed = parse_query_line("term1 & term2").unwrap();
        assert_eq!(parsed.terms, vec!["term1", "term2"]);
        assert_eq!(parsed.op, QueryOp::And);
        assert_eq!(parsed.comment, "");
    }

    #[test]
    fn test_parse_or_query() {
        let parsed = parse_query_line("term1 | term2 | term3").unwrap();
        assert_eq!(parsed.terms, vec!["term1", "term2", "term3"]);
        assert_eq!(parsed.op, QueryOp::Or);
    }

    #[test]
    fn test_parse_with_comment() {
        let parsed = parse_query_line("term1 & term2 # note").unwrap();
        assert_eq!(parsed.terms, vec!["term1", "term2"]);
        assert_eq!(parsed.op, QueryOp::And);
        assert_eq!(parsed.comment, "note");
    }

    #[test]
    fn test_parse_single_term() {
        let parsed = parse_query_line("whale").unwrap();
        assert_eq!(parsed.terms, vec!["whale"]);
        assert_eq!(parsed.op, QueryOp::And);
    }

    #[test]
    fn test_parse_strips_whitespace() {
        let parsed = parse_query_line("  term1  &  term2  ").unwrap();
        assert_eq!(parsed.terms, vec!["term1", "term2"]);
    }

    #[test]
    fn test_parse_mixed_operators() {
        assert_eq!(
            parse_query_line("term1 & term2 | term3"),
            Err(QueryError::MixedOperators)
        );
    }

    #[test]
    fn test_parse_empty_query() {
        assert_eq!(parse_query_line(""), Err(QueryError::Empty));
    }

    #[test]
    fn test_parse_only_comment() {
        assert_eq!(parse_query_line("# just a note"), Err(QueryError::Empty));
    }

    #[test]
    fn test_parse_whitespace_only() {
        assert_eq!(parse_query_line("   "), Err(QueryError::Empty));
    }

    #[test]
    fn test_parse_empty_terms_after_split() {
        assert_eq!(parse_query_line("&&"), Err(QueryError::NoTerms));
    }

    #[test]
    fn test_parse_comment_containing_hash() {
        let parsed = parse_query_line("term # first # second").unwrap();
        assert_eq!(parsed.terms, vec!["term"]);
        assert_eq!(parsed.comment, "first # second");
    }

    #[test]
    fn test_load_basic_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("queries.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "whale & ship").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "# a comment line").unwrap();
        writeln!(file, "love | war # inline").unwrap();

        let lines = load_query_file(&path).unwrap();
        assert_eq!(lines, vec!["whale & ship", "love | war # inline"]);
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("queries.txt");
        std::fs::File::create(&path).unwrap();

        assert!(load_query_file(&path).unwrap().is_empty());
    }

    #[test]
    fn test_format_with_results() {
        let rows = vec![row("1342", 1, "It is a truth universally acknowledged.")];
        let block = format_result_block(&rows, "truth", "opening");

        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "# Query: truth");
        assert_eq!(lines[1], "# Original comment: opening");
        assert_eq!(lines[2], "book_id\tparagraph_num\tauthor\ttitle\tcontent");
        assert_eq!(
            lines[3],
            "1342\t1\tJane Austen\tPride and Prejudice\tIt is a truth universally acknowledged."
        );
    }

    #[test]
    fn test_format_without_comment() {
        let block = format_result_block(&[row("1", 1, "text here")], "q", "");
        assert!(!block.contains("# Original comment:"));
    }

    #[test]
    fn test_format_empty_results() {
        let block = format_result_block(&[], "nothing", "");
        assert_eq!(block, "# Query: nothing\n# No results found");
    }

    #[test]
    fn test_format_escapes_tabs_and_newlines() {
        let rows = vec![row("1", 1, "has\ttab and\nnewline")];
        let block = format_result_block(&rows, "q", "");
        let data_line = block.lines().last().unwrap();
        assert!(data_line.ends_with("has tab and newline"));
    }
}
