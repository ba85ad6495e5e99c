//! Author-name normalization and matching.
//!
//! Catalog records arrive as `"Last, First"`, sometimes with abbreviated
//! initials and a parenthetical full-name suffix, e.g.
//! `"Sayers, Dorothy L. (Dorothy Leigh)"`. Queries arrive as whatever the
//! user typed. Both sides are projected onto a canonical lowercase
//! token sequence before comparison.

use std::collections::HashSet;

/// Normalize an author name to its canonical comparison form.
///
/// Drops any parenthetical suffix, reorders `"Last, First"` to
/// `"First Last"`, un-abbreviates initials by turning periods into spaces,
/// collapses whitespace, and lowercases. Idempotent.
#[must_use]
pub fn normalize(name: &str) -> String {
    let name = match name.find('(') {
        Some(pos) => &name[..pos],
        None => name,
    };

    let reordered = match name.split_once(',') {
        Some((surname, given)) => format!("{given} {surname}"),
        None => name.to_string(),
    };

    reordered
        .replace('.', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// True when every token of the normalized search name occurs in the
/// normalized candidate name.
///
/// The subset test (rather than equality) lets a catalog name carrying
/// extra given-name or parenthetical tokens match a shorter query, while a
/// query token absent from the candidate still rejects it.
#[must_use]
pub fn matches(search_name: &str, candidate_name: &str) -> bool {
    let candidate = normalize(candidate_name);
    let candidate_tokens: HashSet<&str> = candidate.split_whitespace().collect();

    normalize(search_name)
        .split_whitespace()
        .all(|token| candidate_tokens.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_simple_name() {
        assert_eq!(normalize("Jane Austen"), "jane austen");
    }

    #[test]
    fn test_normalize_last_first_format() {
        assert_eq!(normalize("Austen, Jane"), "jane austen");
    }

    #[test]
    fn test_normalize_handles_extra_spaces() {
        assert_eq!(normalize("Austen,  Jane "), "jane austen");
    }

    #[test]
    fn test_normalize_preserves_middle_names() {
        assert_eq!(normalize("Doyle, Arthur Conan"), "arthur conan doyle");
    }

    #[test]
    fn test_normalize_expands_initials() {
        assert_eq!(normalize("Sayers, Dorothy L."), "dorothy l sayers");
        assert_eq!(normalize("W.C. Sayers"), "w c sayers");
    }

    #[test]
    fn test_normalize_strips_parenthetical() {
        assert_eq!(
            normalize("Sayers, Dorothy L. (Dorothy Leigh)"),
            "dorothy l sayers"
        );
    }

    #[test]
    fn test_normalize_empty_string() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for name in [
            "Austen, Jane",
            "Sayers, Dorothy L. (Dorothy Leigh)",
            "W. C. Berwick Sayers",
            "",
        ] {
            let once = normalize(name);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_comma_order_and_periods_converge() {
        assert_eq!(
            normalize("Dorothy L. Sayers"),
            normalize("Sayers, Dorothy L.")
        );
        assert_eq!(
            normalize("Sayers, Dorothy L."),
            normalize("Sayers, Dorothy L. (Dorothy Leigh)")
        );
    }

    #[test]
    fn test_matches_exact() {
        assert!(matches("Jane Austen", "Austen, Jane"));
    }

    #[test]
    fn test_matches_with_parenthetical() {
        assert!(matches("Dorothy L. Sayers", "Sayers, Dorothy L. (Dorothy Leigh)"));
    }

    #[test]
    fn test_matches_rejects_different_author() {
        assert!(!matches("Jane Austen", "Dickens, Charles"));
    }

    #[test]
    fn test_matches_rejects_partial_overlap() {
        assert!(!matches("Dorothy L. Sayers", "Sayers, W. C. Berwick"));
    }

    #[test]
    fn test_matches_ignores_token_order() {
        assert!(matches("Sayers Dorothy", "Sayers, Dorothy L."));
    }
}
