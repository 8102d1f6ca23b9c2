//! Property tests for the transliteration codec.

use proptest::prelude::*;

use tcg_romaji::{generate_variants, romanize, romanize_with_variants};

/// Sample of kana input, including both markers and small kana.
const KANA: &[char] = &[
    'ア', 'カ', 'ガ', 'シ', 'チ', 'ツ', 'フ', 'リ', 'ル', 'ン', 'ー', 'ッ', 'ャ', 'ュ', 'ョ',
    'ヴ', 'ぴ', 'か', 'ち', 'ゅ', 'う', 'っ', 'ー',
];

fn is_kana(ch: char) -> bool {
    ('\u{3040}'..='\u{30FF}').contains(&ch)
}

proptest! {
    #[test]
    fn romanize_leaves_no_kana(
        chars in proptest::collection::vec(proptest::sample::select(KANA), 0..12)
    ) {
        let input: String = chars.into_iter().collect();
        let romaji = romanize(&input);
        prop_assert!(romaji.chars().all(|ch| !is_kana(ch)), "kana left in {romaji:?}");
    }

    #[test]
    fn r_inputs_always_get_an_l_variant(base in "[a-z]{1,12}") {
        let variants = generate_variants(&base);
        if base.contains('r') {
            prop_assert!(variants.contains(&base.replace('r', "l")));
        } else {
            prop_assert!(variants.iter().all(|v| v.matches('l').count() == base.matches('l').count()));
        }
    }

    #[test]
    fn variant_lists_are_deduplicated_and_non_empty(
        chars in proptest::collection::vec(proptest::sample::select(KANA), 1..12)
    ) {
        let input: String = chars.into_iter().collect();
        let all = romanize_with_variants(&input);
        let unique: std::collections::BTreeSet<_> = all.iter().collect();
        prop_assert_eq!(unique.len(), all.len());
        prop_assert!(all.iter().all(|v| !v.is_empty()));
    }
}

#[test]
fn charizard_romanization_end_to_end() {
    assert_eq!(romanize("リザードン"), "rizaadon");
    let all = romanize_with_variants("リザードン");
    assert!(all.contains(&"rizadon".to_string()));
    assert!(all.contains(&"lizaadon".to_string()));
}
