//! Kana-to-romaji transliteration codec.
//!
//! Converts katakana/hiragana text into lowercase Hepburn romaji and
//! derives a bounded set of alternate spellings (r/l substitution,
//! long-vowel collapse, Hepburn/kunrei pairs) for search matching. The
//! conversion is total: unmapped code points pass through lower-cased.

mod convert;
mod table;

pub use convert::{generate_variants, romanize, romanize_with_variants};
