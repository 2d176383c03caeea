//! Durable key-value persistence for saved texts, draft and preferences.
//!
//! # Responsibility
//! - Define the key-value contract the session persists through.
//! - Provide SQLite and in-memory backends.
//! - Encode and validate saved items and preferences on top of it.
//!
//! # Invariants
//! - Values are stored as UTF-8 strings under the well-known keys below.
//! - Decoding never partially accepts a corrupt saved-items collection.

use crate::db::DbError;
use crate::model::saved_item::SavedItemValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod kv;
pub mod preferences;
pub mod saved;

/// Key holding the bionic reading flag (`"true"`/`"false"`).
pub const BIONIC_READING_KEY: &str = "bionicReading";
/// Key holding the last edited raw text.
pub const DRAFT_TEXT_KEY: &str = "text";
/// Key holding the JSON array of saved items.
pub const SAVED_TEXTS_KEY: &str = "savedTexts";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Encode(serde_json::Error),
    /// Persisted value does not match its expected format.
    Decode { key: &'static str, message: String },
    Validation(SavedItemValidationError),
    /// No saved item has the requested date key.
    NotFound(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode stored value: {err}"),
            Self::Decode { key, message } => {
                write!(f, "invalid stored value under `{key}`: {message}")
            }
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(date) => write!(f, "saved item not found: {date}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::Decode { .. } | Self::NotFound(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<SavedItemValidationError> for StoreError {
    fn from(value: SavedItemValidationError) -> Self {
        Self::Validation(value)
    }
}
