//! Card-name to entity resolution against a frozen catalog snapshot.

use std::collections::BTreeMap;

use tracing::debug;

use tcg_model::{CardRecord, Catalog, EntityId, EntityMapping, EntityMatch};

use crate::normalize::{contains_kana, normalize_name};
use crate::patterns::{COMPOUND_DELIMITER, contains_exclusion_keyword, strip_variant_suffixes};

/// Confidence recorded for an exact normalized-key hit.
pub const EXACT_CONFIDENCE: f32 = 1.0;
/// Confidence recorded for a containment fuzzy hit.
pub const FUZZY_CONFIDENCE: f32 = 0.7;
/// Default threshold below which a mapping goes to manual review.
pub const REVIEW_THRESHOLD: f32 = 0.9;

/// Fuzzy matching is skipped for normalized queries shorter than this.
const FUZZY_MIN_CHARS: usize = 3;

/// Resolves raw card names to catalog entities.
///
/// The lookup table is built once at construction: per entity, official
/// names register first (the canonical reference name leads), then the
/// romanization variants of kana names, so canonical spellings win key
/// collisions. The resolver holds no mutable state afterwards; resolving
/// many cards concurrently against one instance is safe.
pub struct EntityResolver {
    /// Registration-ordered keys; backs the fuzzy scan and fixes its
    /// tie-break.
    keys: Vec<(String, EntityId)>,
    by_key: BTreeMap<String, EntityId>,
}

impl EntityResolver {
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let mut keys = Vec::new();
        let mut by_key = BTreeMap::new();
        for entity in catalog.entities() {
            for name in &entity.names {
                register(&mut keys, &mut by_key, normalize_name(&name.text), &entity.id);
            }
            for name in &entity.names {
                if contains_kana(&name.text) {
                    for variant in tcg_romaji::romanize_with_variants(&name.text) {
                        register(&mut keys, &mut by_key, variant, &entity.id);
                    }
                }
            }
        }
        debug!(
            entities = catalog.len(),
            keys = keys.len(),
            "resolver lookup table built"
        );
        Self { keys, by_key }
    }

    /// Resolves one card to an [`EntityMapping`].
    ///
    /// Non-creature cards (by type hint or keyword) are excluded before
    /// any matching. The remaining name has variant suffixes stripped,
    /// is split on the compound delimiter, and each part is matched
    /// exactly, then by substring containment. Containment takes the
    /// first key in registration order; this is a deliberate
    /// approximation kept for reproducible output, not a best-match
    /// search. Never fails: unmatched input yields an empty mapping
    /// with confidence 0.0.
    #[must_use]
    pub fn resolve(&self, card: &CardRecord) -> EntityMapping {
        if card.type_hint.is_some_and(|hint| !hint.is_creature())
            || contains_exclusion_keyword(&normalize_name(&card.display_name))
        {
            return EntityMapping::unmatched(card.id.clone());
        }

        let stripped = strip_variant_suffixes(&card.display_name);
        let parts: Vec<&str> = stripped
            .split(COMPOUND_DELIMITER)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        let mut matches = Vec::new();
        let mut confidence: Option<f32> = None;
        for (index, part) in parts.iter().enumerate() {
            let key = normalize_name(part);
            let hit = match self.by_key.get(&key) {
                Some(id) => Some((id, EXACT_CONFIDENCE)),
                None => self.fuzzy_match(&key).map(|id| (id, FUZZY_CONFIDENCE)),
            };
            if let Some((entity_id, part_confidence)) = hit {
                matches.push(EntityMatch {
                    entity_id: entity_id.clone(),
                    is_primary: index == 0,
                });
                confidence = Some(confidence.map_or(part_confidence, |c| c.min(part_confidence)));
            }
        }

        EntityMapping {
            card_id: card.id.clone(),
            matches,
            confidence: confidence.unwrap_or(0.0),
        }
    }

    /// Resolves a batch of cards in input order.
    #[must_use]
    pub fn resolve_all(&self, cards: &[CardRecord]) -> Vec<EntityMapping> {
        cards.iter().map(|card| self.resolve(card)).collect()
    }

    fn fuzzy_match(&self, key: &str) -> Option<&EntityId> {
        if key.chars().count() < FUZZY_MIN_CHARS {
            return None;
        }
        self.keys
            .iter()
            .find(|(candidate, _)| candidate.contains(key) || key.contains(candidate.as_str()))
            .map(|(_, id)| id)
    }
}

fn register(
    keys: &mut Vec<(String, EntityId)>,
    by_key: &mut BTreeMap<String, EntityId>,
    key: String,
    id: &EntityId,
) {
    if key.is_empty() || by_key.contains_key(&key) {
        return;
    }
    by_key.insert(key.clone(), id.clone());
    keys.push((key, id.clone()));
}

/// Mappings that failed to resolve or sit below the confidence
/// threshold, for manual review.
#[must_use]
pub fn needs_review(mappings: &[EntityMapping], threshold: f32) -> Vec<&EntityMapping> {
    mappings
        .iter()
        .filter(|mapping| mapping.is_unmatched() || mapping.confidence < threshold)
        .collect()
}
