//! Author/title metadata derived from scraped attribute records.
//!
//! The metadata artifact for a book is a JSON array of loosely-typed
//! records — one map of string attributes per scraped `<meta>` tag. A
//! record is either recognized (its `name` is `"title"`) or ignored; no
//! field order is assumed.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

/// One scraped attribute record. Arbitrary keys; only `name` and
/// `content` are ever consulted.
pub type MetaRecord = HashMap<String, String>;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to read metadata file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed metadata JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MetadataResult<T> = Result<T, MetadataError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookMetadata {
    pub author: String,
    pub title: String,
}

/// Split a combined `"<title> by <author>"` field on its **last** `" by "`
/// occurrence, so titles that themselves contain " by " survive intact.
/// Without the separator the author is empty and the title is the whole
/// field.
#[must_use]
pub fn parse_author_title(full_title: &str) -> (String, String) {
    match full_title.rfind(" by ") {
        Some(pos) => {
            let title = full_title[..pos].trim().to_string();
            let author = full_title[pos + 4..].trim().to_string();
            (author, title)
        }
        None => (String::new(), full_title.to_string()),
    }
}

/// Load a metadata artifact and derive [`BookMetadata`] from the record
/// whose `name` attribute equals `"title"`. Both fields are empty when no
/// such record exists.
pub fn load_metadata(meta_path: &Path) -> MetadataResult<BookMetadata> {
    let raw = fs::read_to_string(meta_path)?;
    let records: Vec<MetaRecord> = serde_json::from_str(&raw)?;
    Ok(metadata_from_records(&records))
}

/// A scraped record is either the one attribute we recognize or noise.
enum MetaAttr<'a> {
    Title(&'a str),
    Ignored,
}

fn classify(record: &MetaRecord) -> MetaAttr<'_> {
    match record.get("name") {
        Some(name) if name == "title" => {
            MetaAttr::Title(record.get("content").map_or("", String::as_str))
        }
        _ => MetaAttr::Ignored,
    }
}

fn metadata_from_records(records: &[MetaRecord]) -> BookMetadata {
    for record in records {
        if let MetaAttr::Title(full_title) = classify(record) {
            let (author, title) = parse_author_title(full_title);
            return BookMetadata { author, title };
        }
    }
    BookMetadata::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_METADATA: &str = r#"[
    {"name": "title", "content": "Pride and Prejudice by Jane Austen"},
    {"name": "author", "content": "Jane Austen"},
    {"charset": "utf-8"}
]"#;

    fn write_meta(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_author_title_with_by() {
        assert_eq!(
            parse_author_title("Pride and Prejudice by Jane Austen"),
            ("Jane Austen".to_string(), "Pride and Prejudice".to_string())
        );
    }

    #[test]
    fn test_parse_author_title_without_by() {
        assert_eq!(
            parse_author_title("Untitled Work"),
            (String::new(), "Untitled Work".to_string())
        );
    }

    #[test]
    fn test_parse_author_title_multiple_by() {
        assert_eq!(
            parse_author_title("Stand by Me by Stephen King"),
            ("Stephen King".to_string(), "Stand by Me".to_string())
        );
    }

    #[test]
    fn test_parse_author_title_strips_whitespace() {
        assert_eq!(
            parse_author_title("  Title  by  Author  "),
            ("Author".to_string(), "Title".to_string())
        );
    }

    #[test]
    fn test_load_metadata_finds_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_meta(&dir, "1342-meta.json", SAMPLE_METADATA);

        let metadata = load_metadata(&path).unwrap();
        assert_eq!(metadata.author, "Jane Austen");
        assert_eq!(metadata.title, "Pride and Prejudice");
    }

    #[test]
    fn test_load_metadata_no_title_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_meta(&dir, "m.json", r#"[{"name": "author", "content": "X"}]"#);

        let metadata = load_metadata(&path).unwrap();
        assert_eq!(metadata, BookMetadata::default());
    }

    #[test]
    fn test_load_metadata_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_meta(&dir, "m.json", "[]");

        let metadata = load_metadata(&path).unwrap();
        assert!(metadata.author.is_empty());
        assert!(metadata.title.is_empty());
    }

    #[test]
    fn test_load_metadata_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_meta(&dir, "m.json", "{not json");

        assert!(matches!(load_metadata(&path), Err(MetadataError::Json(_))));
    }

    #[test]
    fn test_load_metadata_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(matches!(load_metadata(&path), Err(MetadataError::Io(_))));
    }

    #[test]
    fn test_load_metadata_title_without_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_meta(&dir, "m.json", r#"[{"name": "title"}]"#);

        let metadata = load_metadata(&path).unwrap();
        assert_eq!(metadata, BookMetadata::default());
    }
}
