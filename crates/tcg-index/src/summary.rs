//! Build statistics for an alias index.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use tcg_model::{Alias, LanguageTag};

/// Counts reported after an alias index build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexSummary {
    pub entity_count: usize,
    pub alias_count: usize,
    pub canonical_count: usize,
    pub romanized_count: usize,
    pub by_language: BTreeMap<String, usize>,
}

impl IndexSummary {
    pub(crate) fn from_aliases(entity_count: usize, aliases: &BTreeSet<Alias>) -> Self {
        let mut by_language: BTreeMap<String, usize> = BTreeMap::new();
        let mut canonical_count = 0;
        let mut romanized_count = 0;
        for alias in aliases {
            *by_language
                .entry(alias.language.as_str().to_string())
                .or_insert(0) += 1;
            if alias.is_canonical {
                canonical_count += 1;
            }
            if alias.language == LanguageTag::romanized() {
                romanized_count += 1;
            }
        }
        Self {
            entity_count,
            alias_count: aliases.len(),
            canonical_count,
            romanized_count,
            by_language,
        }
    }
}
