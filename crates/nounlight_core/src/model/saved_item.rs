//! Saved text snapshot.
//!
//! # Responsibility
//! - Describe one user-saved text and the display date that identifies it.
//! - Enforce the non-empty field rules shared by writes and decoding.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One saved snapshot. `date` doubles as the delete/load key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedItem {
    pub text: String,
    pub date: String,
}

/// Field rule violated by a [`SavedItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedItemValidationError {
    EmptyText,
    EmptyDate,
}

impl Display for SavedItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "saved item text must not be empty"),
            Self::EmptyDate => write!(f, "saved item date must not be empty"),
        }
    }
}

impl Error for SavedItemValidationError {}

impl SavedItem {
    pub fn new(text: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            date: date.into(),
        }
    }

    /// Checks that both fields carry visible content.
    pub fn validate(&self) -> Result<(), SavedItemValidationError> {
        if self.text.trim().is_empty() {
            return Err(SavedItemValidationError::EmptyText);
        }
        if self.date.trim().is_empty() {
            return Err(SavedItemValidationError::EmptyDate);
        }
        Ok(())
    }
}
