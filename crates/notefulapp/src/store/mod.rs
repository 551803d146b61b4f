//! # Storage Layer
//!
//! This module defines the storage abstraction for noteful. The [`NoteStore`] trait
//! is the whole store contract; the HTTP layer never touches a collection directly.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only backend. Notes live in a `Vec` so insertion
//!   order is the listing order, and ids come from a counter that never goes backwards.
//!
//! ## Seeding
//!
//! [`seed`] holds the fixed dataset the server starts with. It is embedded at compile
//! time and can be swapped for a JSON file of the same shape at startup.
//!
//! ## Absence vs. Failure
//!
//! Lookups return `Ok(None)` when nothing matches. `Err` is reserved for validation
//! failures and for backends that can genuinely fail.

use crate::error::Result;
use crate::model::{Note, NoteDraft, NoteId};

pub mod memory;
pub mod seed;

/// Abstract interface for note storage.
pub trait NoteStore {
    /// All notes whose title or content contains `search_term`, in insertion order.
    /// `None` or an empty term returns everything.
    fn list(&self, search_term: Option<&str>) -> Result<Vec<Note>>;

    /// Get a note by id
    fn get(&self, id: NoteId) -> Result<Option<Note>>;

    /// Validate the draft, assign a fresh id and append the note.
    fn create(&mut self, draft: NoteDraft) -> Result<Note>;

    /// Validate the draft, then replace title/content of an existing note.
    /// Returns `Ok(None)` when `id` is unknown.
    fn update(&mut self, id: NoteId, draft: NoteDraft) -> Result<Option<Note>>;

    /// Remove a note. Returns whether anything was removed.
    fn delete(&mut self, id: NoteId) -> Result<bool>;

    /// Number of stored notes
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
