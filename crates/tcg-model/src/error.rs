use thiserror::Error;

use crate::ids::EntityId;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid entity id: {0:?}")]
    InvalidEntityId(String),
    #[error("invalid card id: {0:?}")]
    InvalidCardId(String),
    #[error("invalid language tag: {0:?}")]
    InvalidLanguageTag(String),
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),
    #[error("duplicate entity id: {0}")]
    DuplicateEntity(EntityId),
    #[error("entity {0} has no names")]
    EntityWithoutNames(EntityId),
    #[error("entity {0} has no reference-language name")]
    MissingReferenceName(EntityId),
}

pub type Result<T> = std::result::Result<T, ModelError>;
