//! The validated catalog snapshot both resolution and alias generation
//! read from.

use std::collections::BTreeMap;

use crate::entity::Entity;
use crate::error::{ModelError, Result};
use crate::ids::EntityId;

/// An immutable snapshot of the entity catalog for one build.
///
/// Construction enforces the invariants downstream components rely on:
/// unique entity ids, and at least one reference-language name per
/// entity. Iteration order is the bootstrap order, which also fixes the
/// resolver's lookup registration order.
#[derive(Debug, Clone)]
pub struct Catalog {
    entities: Vec<Entity>,
    by_id: BTreeMap<EntityId, usize>,
}

impl Catalog {
    pub fn new(entities: Vec<Entity>) -> Result<Self> {
        let mut by_id = BTreeMap::new();
        for (index, entity) in entities.iter().enumerate() {
            if by_id.insert(entity.id.clone(), index).is_some() {
                return Err(ModelError::DuplicateEntity(entity.id.clone()));
            }
            if entity.names.is_empty() {
                return Err(ModelError::EntityWithoutNames(entity.id.clone()));
            }
            if entity.reference_name().is_none() {
                return Err(ModelError::MissingReferenceName(entity.id.clone()));
            }
        }
        Ok(Self { entities, by_id })
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.by_id.get(id).map(|index| &self.entities[*index])
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
