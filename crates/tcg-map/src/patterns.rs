//! Declarative pattern lists consumed by the resolver.
//!
//! These lists are the extension point when new card variants or
//! non-creature product lines appear; keep the literals here rather than
//! at the call sites.

/// Power-level/variant suffix tokens stripped from the end of a card
/// name, case-insensitively, until none remain.
pub const VARIANT_SUFFIXES: &[&str] = &["ex", "gx", "v", "vmax", "vstar"];

/// Keywords marking a name as a non-creature card (trainer items,
/// supporter names, energy). Matched by containment against the
/// normalized name.
pub const EXCLUSION_KEYWORDS: &[&str] = &[
    "professor",
    "energy",
    "potion",
    "ball",
    "stadium",
    "supporter",
    "item",
    "tool",
    "fossil",
    "trainer",
    "rocket",
    // Well-known supporter character names.
    "oak",
    "juniper",
    "sycamore",
    "cynthia",
    "guzma",
    "marnie",
];

/// Delimiter separating the subjects of a multi-entity card name.
pub const COMPOUND_DELIMITER: char = '&';

/// Strips trailing variant suffixes repeatedly until a fixpoint, so
/// chained decorations all come off. A suffix only matches as a whole
/// whitespace-separated token.
pub fn strip_variant_suffixes(name: &str) -> String {
    let mut current = name.trim().to_string();
    loop {
        let Some(next) = strip_one_suffix(&current) else {
            return current;
        };
        current = next;
    }
}

fn strip_one_suffix(name: &str) -> Option<String> {
    for suffix in VARIANT_SUFFIXES {
        let Some(split) = name.len().checked_sub(suffix.len()) else {
            continue;
        };
        if !name.is_char_boundary(split) {
            continue;
        }
        let (head, tail) = name.split_at(split);
        if tail.eq_ignore_ascii_case(suffix) && head.ends_with(char::is_whitespace) {
            return Some(head.trim_end().to_string());
        }
    }
    None
}

/// True when a normalized name contains any non-creature keyword.
pub fn contains_exclusion_keyword(normalized: &str) -> bool {
    EXCLUSION_KEYWORDS
        .iter()
        .any(|keyword| normalized.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_suffix() {
        assert_eq!(strip_variant_suffixes("Charizard EX"), "Charizard");
        assert_eq!(strip_variant_suffixes("Pikachu VMAX"), "Pikachu");
        assert_eq!(strip_variant_suffixes("Arceus VSTAR"), "Arceus");
    }

    #[test]
    fn strips_chained_suffixes() {
        assert_eq!(strip_variant_suffixes("Mewtwo V EX"), "Mewtwo");
    }

    #[test]
    fn suffix_must_be_a_separate_token() {
        assert_eq!(strip_variant_suffixes("Vulpix"), "Vulpix");
        assert_eq!(strip_variant_suffixes("Eevee"), "Eevee");
        assert_eq!(strip_variant_suffixes("Klinklang"), "Klinklang");
    }

    #[test]
    fn stripping_is_idempotent() {
        let once = strip_variant_suffixes("Charizard VMAX EX");
        assert_eq!(strip_variant_suffixes(&once), once);
    }

    #[test]
    fn keyword_containment() {
        assert!(contains_exclusion_keyword("professor oak"));
        assert!(contains_exclusion_keyword("double colorless energy"));
        assert!(!contains_exclusion_keyword("charizard"));
    }
}
