//! Kana to romaji conversion and search-variant generation.

use std::collections::BTreeSet;

use crate::table::syllable;

const LONG_VOWEL_MARKER: char = 'ー';

/// Long-vowel spellings collapsed to their short form, macron forms
/// included. Each pair yields at most one variant.
const LONG_VOWEL_VARIANTS: &[(&str, &str)] = &[
    ("ō", "o"),
    ("oo", "o"),
    ("ū", "u"),
    ("uu", "u"),
    ("ā", "a"),
    ("aa", "a"),
    ("ē", "e"),
    ("ee", "e"),
    ("ī", "i"),
    ("ii", "i"),
];

/// Hepburn spellings with their kunrei-style counterparts.
const SPELLING_VARIANTS: &[(&str, &str)] = &[
    ("shi", "si"),
    ("chi", "ti"),
    ("tsu", "tu"),
    ("fu", "hu"),
    ("ji", "zi"),
];

fn is_geminate_marker(ch: char) -> bool {
    ch == 'ッ' || ch == 'っ'
}

fn small_y(ch: char) -> Option<&'static str> {
    match ch {
        'ャ' | 'ゃ' => Some("ya"),
        'ュ' | 'ゅ' => Some("yu"),
        'ョ' | 'ょ' => Some("yo"),
        _ => None,
    }
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Converts kana text to lowercase Hepburn romaji.
///
/// The small tsu doubles the following syllable's initial consonant and
/// contributes nothing before a vowel-initial or unmapped syllable. The
/// long-vowel marker repeats the previously emitted vowel. Small
/// ya/yu/yo replace the trailing `i` of the preceding syllable
/// (`キ` + `ャ` → `kya`; `sh`/`ch`/`j` hosts absorb the `y`, so
/// `シ` + `ョ` → `sho`). Code points outside the kana table pass through
/// lower-cased.
pub fn romanize(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if is_geminate_marker(ch) {
            let doubled = chars
                .get(i + 1)
                .and_then(|next| syllable(*next))
                .and_then(|romaji| romaji.chars().next())
                .filter(|first| !is_vowel(*first));
            if let Some(first) = doubled {
                out.push(first);
            }
            i += 1;
            continue;
        }
        if ch == LONG_VOWEL_MARKER {
            if let Some(last) = out.chars().last().filter(|last| is_vowel(*last)) {
                out.push(last);
            }
            i += 1;
            continue;
        }
        if let Some(small) = chars.get(i + 1).copied().and_then(small_y) {
            let host: String = match syllable(ch) {
                Some(host) => host.to_string(),
                None => ch.to_lowercase().collect(),
            };
            match host.strip_suffix('i') {
                // sh, ch and j absorb the digraph's y entirely:
                // シ+ョ → sho, チ+ュ → chu, ジ+ャ → ja.
                Some(stem @ ("sh" | "ch" | "j")) => {
                    out.push_str(stem);
                    out.push_str(&small[1..]);
                }
                Some(stem) => {
                    out.push_str(stem);
                    out.push_str(small);
                }
                None => {
                    out.push_str(&host);
                    out.push_str(small);
                }
            }
            i += 2;
            continue;
        }
        match syllable(ch) {
            Some(romaji) => out.push_str(romaji),
            None => out.extend(ch.to_lowercase()),
        }
        i += 1;
    }
    out
}

/// Generates alternate spellings of a romanization.
///
/// Each rule (r→l, long-vowel collapse, Hepburn/kunrei pairs) is applied
/// independently to the base, never combinatorially, so the result is
/// bounded by the number of rules. The base itself is not included;
/// duplicates and empty strings are dropped.
pub fn generate_variants(base: &str) -> BTreeSet<String> {
    let mut variants = BTreeSet::new();
    if base.contains('r') {
        variants.insert(base.replace('r', "l"));
    }
    for (long, short) in LONG_VOWEL_VARIANTS {
        if base.contains(long) {
            variants.insert(base.replace(long, short));
        }
    }
    for (hepburn, kunrei) in SPELLING_VARIANTS {
        if base.contains(hepburn) {
            variants.insert(base.replace(hepburn, kunrei));
        }
    }
    variants.remove(base);
    variants.remove("");
    variants
}

/// Romanizes kana text and returns the base spelling together with all
/// generated variants, sorted and deduplicated. Empty input yields an
/// empty list.
pub fn romanize_with_variants(text: &str) -> Vec<String> {
    let base = romanize(text);
    if base.is_empty() {
        return Vec::new();
    }
    let mut all = generate_variants(&base);
    all.insert(base);
    all.into_iter().collect()
}
