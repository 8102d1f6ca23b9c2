use std::fmt;

use crate::error::ModelError;

/// Stable identifier for a catalog entity (e.g. `charizard`, `mr-mime`).
///
/// Normalized to a lowercase slug on construction; only ASCII
/// alphanumerics and `-` are accepted.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let slug = value.trim().to_ascii_lowercase();
        if slug.is_empty() || !slug.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-') {
            return Err(ModelError::InvalidEntityId(value));
        }
        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a card printing as assigned by its upstream source.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CardId(String);

impl CardId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidCardId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// BCP-47-style language tag, lowercased on construction (`en`, `ja`,
/// `zh-tw`). Generated romanizations carry the distinguished `ja-latn` tag.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// The reference language: every entity must carry an `en` name.
    pub const REFERENCE: &'static str = "en";

    /// Tag for generated romanizations of kana names.
    pub const ROMANIZED: &'static str = "ja-latn";

    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let tag = value.trim().to_ascii_lowercase();
        if tag.is_empty() || !tag.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-') {
            return Err(ModelError::InvalidLanguageTag(value));
        }
        Ok(Self(tag))
    }

    pub fn english() -> Self {
        Self(Self::REFERENCE.to_string())
    }

    pub fn romanized() -> Self {
        Self(Self::ROMANIZED.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_reference(&self) -> bool {
        self.0 == Self::REFERENCE
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_normalizes_to_slug() {
        let id = EntityId::new("  Charizard ").unwrap();
        assert_eq!(id.as_str(), "charizard");
        assert!(EntityId::new("mr-mime").is_ok());
        assert!(EntityId::new("").is_err());
        assert!(EntityId::new("no spaces").is_err());
    }

    #[test]
    fn language_tag_lowercases() {
        let tag = LanguageTag::new("ja-Latn").unwrap();
        assert_eq!(tag.as_str(), "ja-latn");
        assert_eq!(tag, LanguageTag::romanized());
        assert!(LanguageTag::english().is_reference());
        assert!(LanguageTag::new(" ").is_err());
    }
}
