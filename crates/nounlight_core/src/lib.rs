//! Core logic for Nounlight, the repeated-noun highlighter.
//! This crate owns extraction, coloring, rendering and persistence; display
//! surfaces only feed it text and show the markup it returns.

pub mod config;
pub mod db;
pub mod highlight;
pub mod logging;
pub mod model;
pub mod nlp;
pub mod session;
pub mod store;

pub use config::{ConfigError, HighlightConfig};
pub use highlight::color::ColorAssignments;
pub use highlight::{Highlight, Highlighter};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::color::HslColor;
pub use model::saved_item::{SavedItem, SavedItemValidationError};
pub use nlp::{extract_nouns, LexiconTagger, PartOfSpeechTagger, Pos, TaggedToken};
pub use session::{Rendered, Session};
pub use store::kv::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
pub use store::{StoreError, StoreResult};

/// Minimal health-check API for embedding surfaces.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
