//! Alias index build scenarios.

use tcg_index::build_alias_index;
use tcg_model::{Catalog, Category, Entity, EntityId, LanguageTag, NameRecord};

fn charizard_catalog() -> Catalog {
    Catalog::new(vec![Entity {
        id: EntityId::new("charizard").unwrap(),
        canonical_name: "Charizard".to_string(),
        category: Category::Creature,
        ordinal: Some(6),
        names: vec![
            NameRecord::new(LanguageTag::english(), "Charizard", true),
            NameRecord::new(LanguageTag::new("ja").unwrap(), "リザードン", false),
        ],
    }])
    .unwrap()
}

#[test]
fn emits_official_and_romanized_aliases() {
    let index = build_alias_index(&charizard_catalog());
    let aliases = index.aliases();

    let canonical: Vec<_> = aliases.iter().filter(|a| a.is_canonical).collect();
    assert_eq!(canonical.len(), 1);
    assert_eq!(canonical[0].text, "Charizard");
    assert_eq!(canonical[0].normalized, "charizard");
    assert!(canonical[0].language.is_reference());

    assert!(
        aliases
            .iter()
            .any(|a| a.text == "リザードン" && !a.is_canonical)
    );

    let romanized: Vec<_> = aliases
        .iter()
        .filter(|a| a.language == LanguageTag::romanized())
        .collect();
    assert!(romanized.len() >= 2, "base plus variants expected");
    assert!(romanized.iter().all(|a| !a.is_canonical));
    assert!(romanized.iter().all(|a| a.normalized == a.text));
    for spelling in ["rizaadon", "rizadon", "lizaadon"] {
        assert!(romanized.iter().any(|a| a.text == spelling));
    }
}

#[test]
fn non_kana_names_get_no_romanization() {
    let catalog = Catalog::new(vec![Entity {
        id: EntityId::new("zekrom").unwrap(),
        canonical_name: "Zekrom".to_string(),
        category: Category::Creature,
        ordinal: Some(644),
        names: vec![NameRecord::new(LanguageTag::english(), "Zekrom", true)],
    }])
    .unwrap();
    let index = build_alias_index(&catalog);
    assert_eq!(index.len(), 1);
    assert!(
        index
            .aliases()
            .iter()
            .all(|a| a.language != LanguageTag::romanized())
    );
}

#[test]
fn build_is_deterministic() {
    let catalog = charizard_catalog();
    assert_eq!(build_alias_index(&catalog), build_alias_index(&catalog));
}

#[test]
fn summary_counts_match() {
    let index = build_alias_index(&charizard_catalog());
    let summary = index.summary();
    assert_eq!(summary.entity_count, 1);
    assert_eq!(summary.alias_count, index.len());
    assert_eq!(summary.canonical_count, 1);
    assert!(summary.romanized_count >= 2);
    assert_eq!(summary.by_language.get("en"), Some(&1));
    assert_eq!(summary.by_language.get("ja"), Some(&1));
    assert_eq!(
        summary.by_language.get("ja-latn"),
        Some(&summary.romanized_count)
    );

    let json = serde_json::to_value(&summary).expect("serialize summary");
    assert_eq!(json["entity_count"], 1);
}
