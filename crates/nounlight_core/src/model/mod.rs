//! Plain data records shared by the store and the session.
//!
//! # Invariants
//! - A `SavedItem` is never constructed in a state that fails `validate()`
//!   by the store; decoded items are validated before use.

pub mod color;
pub mod saved_item;
