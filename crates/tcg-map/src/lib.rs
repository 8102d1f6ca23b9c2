//! Name normalization and card-name to entity resolution.
//!
//! Built from a validated [`tcg_model::Catalog`], the resolver turns raw,
//! possibly compound, possibly suffixed card names into entity mappings
//! with a confidence score. Normalization keys here are shared with the
//! alias index so that resolver lookups and search aliases agree.

pub mod normalize;
pub mod patterns;
pub mod resolver;

pub use normalize::{contains_kana, normalize_name};
pub use resolver::{
    EXACT_CONFIDENCE, EntityResolver, FUZZY_CONFIDENCE, REVIEW_THRESHOLD, needs_review,
};
