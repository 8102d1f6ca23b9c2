//! Property tests for normalization and suffix stripping.

use proptest::prelude::*;

use tcg_map::normalize::normalize_name;
use tcg_map::patterns::{VARIANT_SUFFIXES, strip_variant_suffixes};

proptest! {
    #[test]
    fn normalization_is_idempotent(
        raw in "[A-Za-zàâäéèêëïîôöùûüñçÀÉÎÖÜ0-9 '&.,!?ー一-十ァ-ヺぁ-ゖ-]{0,24}"
    ) {
        let once = normalize_name(&raw);
        prop_assert_eq!(normalize_name(&once), once);
    }

    #[test]
    fn normalization_never_leaves_edge_whitespace(raw in ".{0,24}") {
        let normalized = normalize_name(&raw);
        prop_assert_eq!(normalized.trim(), normalized.as_str());
        prop_assert!(!normalized.contains("  "));
    }

    #[test]
    fn stripping_is_idempotent(raw in "[A-Za-z ]{0,24}") {
        let once = strip_variant_suffixes(&raw);
        prop_assert_eq!(strip_variant_suffixes(&once), once);
    }

    #[test]
    fn stripping_removes_whole_suffix_chains(
        base in "[A-Za-z]{1,10}",
        suffixes in proptest::collection::vec(proptest::sample::select(VARIANT_SUFFIXES), 0..4)
    ) {
        let mut name = base.clone();
        for suffix in suffixes {
            name.push(' ');
            name.push_str(&suffix.to_uppercase());
        }
        prop_assert_eq!(strip_variant_suffixes(&name), base);
    }
}
