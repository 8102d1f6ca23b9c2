//! Matching-key normalization for card and catalog names.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// True for the two kana blocks (hiragana U+3040–U+309F, katakana
/// U+30A0–U+30FF).
pub fn contains_kana(text: &str) -> bool {
    text.chars().any(|ch| ('\u{3040}'..='\u{30FF}').contains(&ch))
}

fn contains_japanese(text: &str) -> bool {
    text.chars()
        .any(|ch| ('\u{3040}'..='\u{30FF}').contains(&ch) || ('\u{4E00}'..='\u{9FFF}').contains(&ch))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Produces the matching key for a name.
///
/// Japanese-script text is case-folded and whitespace-collapsed only;
/// diacritic and punctuation handling do not apply to kana or han. Other
/// text is NFKD-decomposed with combining marks dropped (é → e), then
/// lower-cased, stripped of punctuation, and whitespace-collapsed.
///
/// Empty or whitespace-only input yields the empty string, which never
/// matches a catalog key. Idempotent.
pub fn normalize_name(raw: &str) -> String {
    if contains_japanese(raw) {
        return collapse_whitespace(&raw.to_lowercase());
    }
    let stripped: String = raw
        .nfkd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .filter(|ch| ch.is_alphanumeric() || *ch == '_' || ch.is_whitespace())
        .collect();
    collapse_whitespace(&stripped)
}
