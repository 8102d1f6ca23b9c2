//! Core records exchanged between the catalog, the resolver, and the
//! alias index builder.

use serde::{Deserialize, Serialize};

use crate::enums::Category;
use crate::ids::{CardId, EntityId, LanguageTag};

/// One attested name for an entity in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub language: LanguageTag,
    pub text: String,
    /// True for exactly the reference-language entry used as the entity's
    /// canonical display name.
    pub is_canonical: bool,
}

impl NameRecord {
    pub fn new(language: LanguageTag, text: impl Into<String>, is_canonical: bool) -> Self {
        Self {
            language,
            text: text.into(),
            is_canonical,
        }
    }
}

/// A canonical catalog concept that card names resolve to.
///
/// Immutable once the catalog snapshot is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub canonical_name: String,
    pub category: Category,
    /// Stable ranking number where the source defines one (a dex index).
    pub ordinal: Option<u32>,
    pub names: Vec<NameRecord>,
}

impl Entity {
    /// The reference-language record backing `canonical_name`, if present.
    pub fn reference_name(&self) -> Option<&NameRecord> {
        self.names.iter().find(|name| name.language.is_reference())
    }
}

/// A searchable spelling pointing at one entity. Derived output of the
/// alias index build; regenerated wholesale on every run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Alias {
    pub entity_id: EntityId,
    pub text: String,
    pub normalized: String,
    pub language: LanguageTag,
    pub is_canonical: bool,
}

/// A card as ingested from an upstream source. Read-only input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: CardId,
    pub display_name: String,
    pub language: LanguageTag,
    pub type_hint: Option<Category>,
}

/// One resolved entity reference within an [`EntityMapping`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMatch {
    pub entity_id: EntityId,
    /// True only for the match derived from the first compound part.
    pub is_primary: bool,
}

/// The resolver's verdict for one card: zero or more entity references
/// and an overall confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMapping {
    pub card_id: CardId,
    pub matches: Vec<EntityMatch>,
    pub confidence: f32,
}

impl EntityMapping {
    /// The mapping for a card that resolved to nothing, either through
    /// exclusion or through absence of any catalog match.
    pub fn unmatched(card_id: CardId) -> Self {
        Self {
            card_id,
            matches: Vec::new(),
            confidence: 0.0,
        }
    }

    pub fn is_unmatched(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn primary(&self) -> Option<&EntityId> {
        self.matches
            .iter()
            .find(|entry| entry.is_primary)
            .map(|entry| &entry.entity_id)
    }
}
