//! Editing session: the object a text surface drives.
//!
//! # Responsibility
//! - Own draft text, color assignments, preferences and saved items.
//! - Recompute display markup synchronously on every user action.
//! - Persist draft, preference and saved-item changes through one backend.
//!
//! # Invariants
//! - Every action that can change the display returns the freshly rendered
//!   output with a strictly increasing revision; older revisions are stale.
//! - Storage failures are logged and never alter in-memory state.
//! - Startup read failures degrade to empty/default state.

use crate::config::{ConfigError, HighlightConfig};
use crate::highlight::color::ColorAssignments;
use crate::highlight::{Highlight, Highlighter};
use crate::model::saved_item::SavedItem;
use crate::store::kv::KeyValueStore;
use crate::store::preferences::{load_draft, persist_draft, Preferences};
use crate::store::saved::SavedTexts;
use crate::store::{StoreError, StoreResult};
use log::{info, warn};

/// Display output for one revision of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    revision: u64,
    highlight: Highlight,
}

impl Rendered {
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Sanitized markup for the display surface.
    pub fn markup(&self) -> &str {
        self.highlight.markup()
    }

    pub fn repeated(&self) -> &[String] {
        self.highlight.repeated()
    }

    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }
}

/// One user's editing session over a key-value backend.
pub struct Session<S: KeyValueStore> {
    backend: S,
    highlighter: Highlighter,
    preferences: Preferences,
    saved: SavedTexts,
    draft: String,
    current: Rendered,
}

impl<S: KeyValueStore> Session<S> {
    /// Restores persisted state from `backend` with the default config.
    pub fn open(backend: S) -> Self {
        Self::with_highlighter(backend, Highlighter::default())
    }

    /// Like [`Session::open`] with a caller-provided config.
    ///
    /// # Errors
    /// - `ConfigError::OutOfRange` when `config` fails validation.
    pub fn open_with_config(backend: S, config: HighlightConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_highlighter(backend, Highlighter::new(config)?))
    }

    /// Restores preferences, saved items and the draft, then renders the
    /// draft with `highlighter` as if it had just been typed.
    pub fn with_highlighter(backend: S, mut highlighter: Highlighter) -> Self {
        let preferences = Preferences::load(&backend);
        let saved = SavedTexts::load(&backend);
        let draft = load_draft(&backend);
        let highlight = highlighter.highlight(&draft, preferences.bionic_reading);

        info!(
            "event=session_open module=session status=ok saved={} draft_chars={} bionic={}",
            saved.len(),
            draft.chars().count(),
            preferences.bionic_reading
        );

        Self {
            backend,
            highlighter,
            preferences,
            saved,
            draft,
            current: Rendered {
                revision: 0,
                highlight,
            },
        }
    }

    /// Replaces the draft with `text`, persists it and re-renders.
    pub fn text_changed(&mut self, text: &str) -> &Rendered {
        self.draft = text.to_string();
        if let Err(err) = persist_draft(&mut self.backend, &self.draft) {
            warn!("event=draft_persist module=session status=error error={err}");
        }
        self.rerender()
    }

    pub fn set_bionic_reading(&mut self, enabled: bool) -> &Rendered {
        self.preferences.bionic_reading = enabled;
        if let Err(err) = self.preferences.persist(&mut self.backend) {
            warn!("event=preferences_persist module=session status=error error={err}");
        }
        self.rerender()
    }

    pub fn toggle_bionic_reading(&mut self) -> &Rendered {
        self.set_bionic_reading(!self.preferences.bionic_reading)
    }

    /// Saves the current draft as a new snapshot.
    ///
    /// # Errors
    /// - `StoreError::Validation` when the draft is blank.
    pub fn save_current(&mut self) -> StoreResult<SavedItem> {
        self.saved.save(&mut self.backend, &self.draft)
    }

    /// Saves `text` as a new snapshot without touching the draft.
    pub fn save_text(&mut self, text: &str) -> StoreResult<SavedItem> {
        self.saved.save(&mut self.backend, text)
    }

    pub fn delete_saved(&mut self, date: &str) -> StoreResult<SavedItem> {
        self.saved.delete(&mut self.backend, date)
    }

    /// Makes the snapshot saved under `date` the draft and renders it.
    pub fn load_saved(&mut self, date: &str) -> StoreResult<&Rendered> {
        let text = self
            .saved
            .text_of(date)
            .ok_or_else(|| StoreError::NotFound(date.to_string()))?
            .to_string();
        Ok(self.text_changed(&text))
    }

    /// Forgets all color assignments and re-renders with fresh ones.
    pub fn reset_colors(&mut self) -> &Rendered {
        self.highlighter.reset_colors();
        self.rerender()
    }

    pub fn saved_items(&self) -> &[SavedItem] {
        self.saved.list()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn current(&self) -> &Rendered {
        &self.current
    }

    pub fn colors(&self) -> &ColorAssignments {
        self.highlighter.colors()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    fn rerender(&mut self) -> &Rendered {
        let highlight = self
            .highlighter
            .highlight(&self.draft, self.preferences.bionic_reading);
        self.current = Rendered {
            revision: self.current.revision + 1,
            highlight,
        };
        &self.current
    }
}
