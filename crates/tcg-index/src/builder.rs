//! Alias table construction.

use std::collections::BTreeSet;

use tracing::info;

use tcg_map::{contains_kana, normalize_name};
use tcg_model::{Alias, Catalog, LanguageTag};

use crate::summary::IndexSummary;

/// The flat, immutable alias table for one catalog snapshot.
///
/// Holds one alias per attested name plus the romanized spellings of
/// kana names. Regenerated wholesale on every build; set equality is the
/// only ordering contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasIndex {
    entity_count: usize,
    aliases: BTreeSet<Alias>,
}

impl AliasIndex {
    pub fn aliases(&self) -> &BTreeSet<Alias> {
        &self.aliases
    }

    pub fn into_aliases(self) -> BTreeSet<Alias> {
        self.aliases
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn summary(&self) -> IndexSummary {
        IndexSummary::from_aliases(self.entity_count, &self.aliases)
    }
}

/// Builds the alias table for a validated catalog.
///
/// Every name record yields one alias with its language and canonical
/// flag carried over and its matching key computed with the same
/// normalizer the resolver uses. Name records containing kana
/// additionally yield one non-canonical alias per romanized spelling,
/// tagged [`LanguageTag::romanized`]; romanizations are lowercase by
/// construction, so they are their own matching key.
pub fn build_alias_index(catalog: &Catalog) -> AliasIndex {
    let mut aliases = BTreeSet::new();
    for entity in catalog.entities() {
        for name in &entity.names {
            aliases.insert(Alias {
                entity_id: entity.id.clone(),
                text: name.text.clone(),
                normalized: normalize_name(&name.text),
                language: name.language.clone(),
                is_canonical: name.is_canonical,
            });
            if contains_kana(&name.text) {
                for variant in tcg_romaji::romanize_with_variants(&name.text) {
                    aliases.insert(Alias {
                        entity_id: entity.id.clone(),
                        text: variant.clone(),
                        normalized: variant,
                        language: LanguageTag::romanized(),
                        is_canonical: false,
                    });
                }
            }
        }
    }
    info!(
        entities = catalog.len(),
        aliases = aliases.len(),
        "alias index built"
    );
    AliasIndex {
        entity_count: catalog.len(),
        aliases,
    }
}
