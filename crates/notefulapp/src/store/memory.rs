use super::NoteStore;
use crate::error::{NotefulError, Result};
use crate::model::{Note, NoteDraft, NoteId};
use std::collections::HashSet;

const FIRST_ID: NoteId = NoteId(1);

/// In-memory note storage. Does NOT persist data.
///
/// Notes are kept in a `Vec` so listing preserves insertion order. `next_id` only
/// moves forward: deleting the newest note does not free its id.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    notes: Vec<Note>,
    next_id: NoteId,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            next_id: FIRST_ID,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing records, keeping their order and ids.
    pub fn from_notes(notes: Vec<Note>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(notes.len());
        for note in &notes {
            if !seen.insert(note.id) {
                return Err(NotefulError::Store(format!("duplicate note id {}", note.id)));
            }
            if note.title.is_empty() {
                return Err(NotefulError::Store(format!(
                    "note {} has an empty title",
                    note.id
                )));
            }
        }

        let next_id = match notes.iter().map(|n| n.id).max() {
            Some(max) => max.next().ok_or_else(id_space_exhausted)?,
            None => FIRST_ID,
        };

        Ok(Self { notes, next_id })
    }

    /// The id the next created note will receive.
    pub fn peek_next_id(&self) -> NoteId {
        self.next_id
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }
}

fn id_space_exhausted() -> NotefulError {
    NotefulError::Store("id space exhausted".to_string())
}

impl NoteStore for InMemoryStore {
    fn list(&self, search_term: Option<&str>) -> Result<Vec<Note>> {
        let notes = match search_term.filter(|t| !t.is_empty()) {
            Some(term) => self.notes.iter().filter(|n| n.matches(term)).cloned().collect(),
            None => self.notes.clone(),
        };
        Ok(notes)
    }

    fn get(&self, id: NoteId) -> Result<Option<Note>> {
        Ok(self.notes.iter().find(|n| n.id == id).cloned())
    }

    fn create(&mut self, draft: NoteDraft) -> Result<Note> {
        let valid = draft.validate()?;
        let following = self.next_id.next().ok_or_else(id_space_exhausted)?;
        let note = Note::new(self.next_id, valid.title, valid.content.unwrap_or_default());
        self.next_id = following;
        self.notes.push(note.clone());
        Ok(note)
    }

    fn update(&mut self, id: NoteId, draft: NoteDraft) -> Result<Option<Note>> {
        let valid = draft.validate()?;
        let Some(pos) = self.position(id) else {
            return Ok(None);
        };

        let note = &mut self.notes[pos];
        note.title = valid.title;
        if let Some(content) = valid.content {
            note.content = content;
        }
        Ok(Some(note.clone()))
    }

    fn delete(&mut self, id: NoteId) -> Result<bool> {
        match self.position(id) {
            Some(pos) => {
                self.notes.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn len(&self) -> usize {
        self.notes.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::seed;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Start from the embedded seed dataset.
        pub fn seeded() -> Self {
            Self {
                store: seed::seeded_store(None).expect("embedded seed is valid"),
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = NoteDraft::new(
                    format!("Test Note {}", i + 1),
                    Some(format!("Content for note {}", i + 1)),
                );
                self.store.create(draft).unwrap();
            }
            self
        }

        pub fn with_note(mut self, title: &str, content: &str) -> Self {
            self.store
                .create(NoteDraft::new(title, Some(content.to_string())))
                .unwrap();
            self
        }
    }
}
