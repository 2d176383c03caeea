//! Bionic reading preference and draft text persistence.

use super::kv::KeyValueStore;
use super::{StoreError, StoreResult, BIONIC_READING_KEY, DRAFT_TEXT_KEY};
use log::warn;

/// User preferences held in memory after startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub bionic_reading: bool,
}

impl Preferences {
    /// Reads preferences, falling back to defaults on any failure.
    pub fn load(backend: &dyn KeyValueStore) -> Self {
        let bionic_reading = match backend.get(BIONIC_READING_KEY) {
            Ok(Some(raw)) => parse_flag(&raw).unwrap_or_else(|err| {
                warn!(
                    "event=preferences_load module=store status=degraded error_code=invalid_flag error={err}"
                );
                false
            }),
            Ok(None) => false,
            Err(err) => {
                warn!(
                    "event=preferences_load module=store status=degraded error_code=read_failed error={err}"
                );
                false
            }
        };
        Self { bionic_reading }
    }

    pub fn persist(&self, backend: &mut dyn KeyValueStore) -> StoreResult<()> {
        backend.set(BIONIC_READING_KEY, format_flag(self.bionic_reading))
    }
}

/// Accepts exactly `"true"` or `"false"`.
pub fn parse_flag(raw: &str) -> StoreResult<bool> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(StoreError::Decode {
            key: BIONIC_READING_KEY,
            message: format!("expected `true` or `false`, got {} chars", other.len()),
        }),
    }
}

pub fn format_flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Last edited text, or empty when none is stored or it cannot be read.
pub fn load_draft(backend: &dyn KeyValueStore) -> String {
    backend
        .get(DRAFT_TEXT_KEY)
        .unwrap_or_else(|err| {
            warn!(
                "event=draft_load module=store status=degraded error_code=read_failed error={err}"
            );
            None
        })
        .unwrap_or_default()
}

pub fn persist_draft(backend: &mut dyn KeyValueStore, text: &str) -> StoreResult<()> {
    backend.set(DRAFT_TEXT_KEY, text)
}

#[cfg(test)]
mod tests {
    use super::{format_flag, load_draft, parse_flag, persist_draft, Preferences};
    use crate::store::kv::{KeyValueStore, MemoryKeyValueStore};
    use crate::store::BIONIC_READING_KEY;

    #[test]
    fn flag_uses_literal_strings() {
        assert_eq!(format_flag(true), "true");
        assert_eq!(format_flag(false), "false");
        assert!(parse_flag("true").unwrap());
        assert!(!parse_flag("false").unwrap());
        assert!(parse_flag("TRUE").is_err());
        assert!(parse_flag("1").is_err());
    }

    #[test]
    fn preferences_round_trip() {
        let mut backend = MemoryKeyValueStore::new();
        assert_eq!(Preferences::load(&backend), Preferences::default());

        Preferences {
            bionic_reading: true,
        }
        .persist(&mut backend)
        .unwrap();
        assert_eq!(
            backend.get(BIONIC_READING_KEY).unwrap().as_deref(),
            Some("true")
        );
        assert!(Preferences::load(&backend).bionic_reading);
    }

    #[test]
    fn garbage_flag_falls_back_to_default() {
        let mut backend = MemoryKeyValueStore::new();
        backend.set(BIONIC_READING_KEY, "yes please").unwrap();
        assert!(!Preferences::load(&backend).bionic_reading);
    }

    #[test]
    fn draft_is_restored_verbatim() {
        let mut backend = MemoryKeyValueStore::new();
        assert_eq!(load_draft(&backend), "");
        persist_draft(&mut backend, "line one\n\tline two").unwrap();
        assert_eq!(load_draft(&backend), "line one\n\tline two");
    }
}
