//! Closed enumerations for catalog concepts carried as strings upstream.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// What kind of card a catalog entity (or a card record's type hint)
/// describes.
///
/// Upstream sources carry this as a free string; keeping it closed means a
/// new category is an exhaustive-match change instead of a string
/// comparison that silently stops matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A creature species with multilingual names and a dex ordinal.
    Creature,
    /// Trainer cards: supporters, items, tools, stadiums.
    Trainer,
    /// Energy cards.
    Energy,
}

impl Category {
    pub fn is_creature(self) -> bool {
        matches!(self, Self::Creature)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Creature => "creature",
            Self::Trainer => "trainer",
            Self::Energy => "energy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // "pokemon" is what the original catalog bootstrap emits for
        // creature entries.
        match value.trim().to_ascii_lowercase().as_str() {
            "creature" | "pokemon" => Ok(Self::Creature),
            "trainer" => Ok(Self::Trainer),
            "energy" => Ok(Self::Energy),
            _ => Err(ModelError::UnknownCategory(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_categories() {
        assert_eq!("creature".parse::<Category>().unwrap(), Category::Creature);
        assert_eq!("Pokemon".parse::<Category>().unwrap(), Category::Creature);
        assert_eq!("TRAINER".parse::<Category>().unwrap(), Category::Trainer);
        assert_eq!("energy".parse::<Category>().unwrap(), Category::Energy);
        assert!("stadium".parse::<Category>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for category in [Category::Creature, Category::Trainer, Category::Energy] {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }
}
