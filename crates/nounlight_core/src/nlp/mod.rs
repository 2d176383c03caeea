//! Noun extraction.
//!
//! # Responsibility
//! - Tag free text with a lightweight part-of-speech tagger.
//! - Return the distinct noun tokens and compound noun phrases it finds.
//!
//! # Invariants
//! - Extraction is pure: same text, same noun set.
//! - Nouns are identified by exact surface string; casing variants are
//!   distinct candidates.

mod lexicon;
pub mod nouns;
pub mod tagger;

pub use nouns::{extract_nouns, extract_nouns_with};
pub use tagger::{LexiconTagger, PartOfSpeechTagger, Pos, TaggedToken};
