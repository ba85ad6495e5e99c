//! Paragraph segmentation with noise filtering.

use crate::config::Config;

/// Split extracted content into paragraphs on blank-line boundaries.
///
/// Each candidate is trimmed; candidates shorter than the configured
/// minimum, and candidates containing any configured noise substring
/// (illustration markers, transcriber notes, and the like), are dropped.
/// Surviving paragraphs keep their source order.
#[must_use]
pub fn split_into_paragraphs<'a>(content: &'a str, config: &Config) -> Vec<&'a str> {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| {
            paragraph.chars().count() >= config.min_paragraph_len
                && !should_skip_paragraph(paragraph, config)
        })
        .collect()
}

fn should_skip_paragraph(paragraph: &str, config: &Config) -> bool {
    config
        .skip_patterns
        .iter()
        .any(|pattern| paragraph.contains(pattern.as_str()))
}
