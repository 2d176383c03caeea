//! Saved text snapshots.
//!
//! # Responsibility
//! - Keep the ordered list of saved items in memory.
//! - Mirror every change to [`SAVED_TEXTS_KEY`] as a JSON array.
//!
//! # Invariants
//! - Items keep insertion order; dates are unique within the list.
//! - A persisted collection with any malformed entry is rejected whole.
//! - Write failures are logged and never roll back the in-memory list.

use super::kv::KeyValueStore;
use super::{StoreError, StoreResult, SAVED_TEXTS_KEY};
use crate::model::saved_item::SavedItem;
use chrono::{DateTime, Local};
use log::{info, warn};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// In-memory saved items plus their persistence rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedTexts {
    items: Vec<SavedItem>,
}

impl SavedTexts {
    /// Reads the persisted collection, degrading to empty when it is
    /// missing, unreadable or invalid.
    pub fn load(backend: &dyn KeyValueStore) -> Self {
        let raw = match backend.get(SAVED_TEXTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(err) => {
                warn!(
                    "event=saved_texts_load module=store status=degraded error_code=read_failed error={err}"
                );
                return Self::default();
            }
        };

        match decode_items(&raw) {
            Ok(items) => {
                info!(
                    "event=saved_texts_load module=store status=ok count={}",
                    items.len()
                );
                Self { items }
            }
            Err(err) => {
                warn!(
                    "event=saved_texts_load module=store status=degraded error_code=invalid_collection error={err}"
                );
                Self::default()
            }
        }
    }

    pub fn list(&self) -> &[SavedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Saves `text` stamped with the current local time.
    pub fn save(
        &mut self,
        backend: &mut dyn KeyValueStore,
        text: &str,
    ) -> StoreResult<SavedItem> {
        self.save_at(backend, text, Local::now())
    }

    /// Saves `text` stamped with `at`.
    ///
    /// A date already in the list gets a ` #n` suffix so every item keeps a
    /// distinct delete key.
    pub fn save_at(
        &mut self,
        backend: &mut dyn KeyValueStore,
        text: &str,
        at: DateTime<Local>,
    ) -> StoreResult<SavedItem> {
        let item = SavedItem::new(text, self.unique_date(at));
        item.validate()?;

        self.items.push(item.clone());
        self.persist_logged(backend, "save");
        Ok(item)
    }

    /// Removes the item with `date` and returns it.
    pub fn delete(
        &mut self,
        backend: &mut dyn KeyValueStore,
        date: &str,
    ) -> StoreResult<SavedItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.date == date)
            .ok_or_else(|| StoreError::NotFound(date.to_string()))?;

        let removed = self.items.remove(index);
        self.persist_logged(backend, "delete");
        Ok(removed)
    }

    /// Text of the item saved under `date`.
    pub fn text_of(&self, date: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.date == date)
            .map(|item| item.text.as_str())
    }

    /// Writes the whole collection under [`SAVED_TEXTS_KEY`].
    pub fn persist(&self, backend: &mut dyn KeyValueStore) -> StoreResult<()> {
        let encoded = serde_json::to_string(&self.items).map_err(StoreError::Encode)?;
        backend.set(SAVED_TEXTS_KEY, &encoded)
    }

    fn persist_logged(&self, backend: &mut dyn KeyValueStore, action: &str) {
        match self.persist(backend) {
            Ok(()) => info!(
                "event=saved_texts_{action} module=store status=ok count={}",
                self.items.len()
            ),
            Err(err) => warn!(
                "event=saved_texts_{action} module=store status=error error_code=persist_failed count={} error={err}",
                self.items.len()
            ),
        }
    }

    fn unique_date(&self, at: DateTime<Local>) -> String {
        let base = at.format(DATE_FORMAT).to_string();
        let taken = |date: &str| self.items.iter().any(|item| item.date == date);
        if !taken(&base) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base} #{n}");
            if !taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Decodes a JSON array of saved items, rejecting it if any entry is
/// malformed.
pub fn decode_items(raw: &str) -> StoreResult<Vec<SavedItem>> {
    let items: Vec<SavedItem> = serde_json::from_str(raw).map_err(|err| StoreError::Decode {
        key: SAVED_TEXTS_KEY,
        message: err.to_string(),
    })?;

    for (index, item) in items.iter().enumerate() {
        item.validate().map_err(|err| StoreError::Decode {
            key: SAVED_TEXTS_KEY,
            message: format!("entry {index}: {err}"),
        })?;
    }
    Ok(items)
}
