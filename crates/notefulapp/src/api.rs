//! # API Facade
//!
//! The API layer is a **thin facade** over the store. It is the single entry point
//! for note operations, whatever transport sits in front of it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Normalizes inputs**: ids arrive as raw path segments and are parsed here. A
//!   segment that is not a number simply matches no note.
//! - **Dispatches** to the [`NoteStore`]
//! - **Reports absence** as [`NotefulError::NoteNotFound`] for single-note reads and
//!   updates, where the caller has to say "not found"
//!
//! Deletion is the exception: removing a note that is not there is not an error, so
//! [`NotefulApi::delete_note`] returns whether anything was removed and lets the
//! caller decide.
//!
//! ## Generic Over NoteStore
//!
//! `NotefulApi<S: NoteStore>` is generic over the storage backend so tests can drive
//! it with stores that fail on demand.

use crate::error::{NotefulError, Result};
use crate::model::{Note, NoteDraft, NoteId};
use crate::store::NoteStore;
use log::debug;

/// The main API facade for note operations.
pub struct NotefulApi<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> NotefulApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_notes(&self, search_term: Option<&str>) -> Result<Vec<Note>> {
        self.store.list(search_term)
    }

    pub fn get_note(&self, raw_id: &str) -> Result<Note> {
        let found = match parse_id(raw_id) {
            Some(id) => self.store.get(id)?,
            None => None,
        };
        found.ok_or_else(|| NotefulError::NoteNotFound(raw_id.to_string()))
    }

    pub fn create_note(&mut self, draft: NoteDraft) -> Result<Note> {
        let note = self.store.create(draft)?;
        debug!("event=note_created id={}", note.id);
        Ok(note)
    }

    /// Validation runs first, so a bad body on an unknown id is still a validation error.
    pub fn update_note(&mut self, raw_id: &str, draft: NoteDraft) -> Result<Note> {
        let updated = match parse_id(raw_id) {
            Some(id) => self.store.update(id, draft)?,
            None => {
                draft.validate()?;
                None
            }
        };

        match updated {
            Some(note) => {
                debug!("event=note_updated id={}", note.id);
                Ok(note)
            }
            None => Err(NotefulError::NoteNotFound(raw_id.to_string())),
        }
    }

    pub fn delete_note(&mut self, raw_id: &str) -> Result<bool> {
        let removed = match parse_id(raw_id) {
            Some(id) => self.store.delete(id)?,
            None => false,
        };
        debug!("event=note_deleted id={} removed={}", raw_id, removed);
        Ok(removed)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn parse_id(raw: &str) -> Option<NoteId> {
    raw.parse().ok()
}
