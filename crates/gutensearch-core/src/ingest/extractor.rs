//! Boundary-marker extraction of the literary body from raw book text.
//!
//! Historical source files wrap the licensed content in marker lines such as
//! `*** START OF THE PROJECT GUTENBERG EBOOK ... ***`, but the exact wording
//! drifted over the decades: the "OF" may be missing, "THIS" and "THE" are
//! interchangeable, and the asterisk runs vary in length. The patterns below
//! tolerate all observed variants.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static START_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\*+\s*START\s+(?:OF\s+)?(?:THIS\s+|THE\s+)?PROJECT\s+GUTENBERG.*?\*+",
    )
    .expect("start marker pattern is valid")
});

static END_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\*+\s*END\s+(?:OF\s+)?(?:THIS\s+|THE\s+)?PROJECT\s+GUTENBERG.*?\*+",
    )
    .expect("end marker pattern is valid")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no start marker found")]
    NoStartMarker,
    #[error("no end marker found")]
    NoEndMarker,
    #[error("start and end markers are out of order")]
    MarkersOutOfOrder,
}

pub type ExtractResult<T> = Result<T, ExtractError>;

/// Extract the text strictly between the first start marker and the first
/// end marker, trimmed of surrounding whitespace.
///
/// Fails when either marker is absent or the start marker does not end
/// before the end marker begins.
pub fn extract_content(raw: &str) -> ExtractResult<&str> {
    let start = START_MARKER
        .find(raw)
        .ok_or(ExtractError::NoStartMarker)?;
    let end = END_MARKER.find(raw).ok_or(ExtractError::NoEndMarker)?;

    if start.end() >= end.start() {
        return Err(ExtractError::MarkersOutOfOrder);
    }

    Ok(raw[start.end()..end.start()].trim())
}
