//! The dataset a fresh server starts with.
//!
//! The default seed is compiled into the binary so the server needs no files to
//! boot. A replacement seed is a JSON array of `{id, title, content}` objects.

use super::memory::InMemoryStore;
use crate::error::Result;
use crate::model::Note;
use log::{debug, info};
use std::fs;
use std::path::Path;

const EMBEDDED_SEED: &str = include_str!("../../seed/notes.json");

pub fn parse_notes(json: &str) -> Result<Vec<Note>> {
    Ok(serde_json::from_str(json)?)
}

/// Load the seed from `path`, or the embedded dataset when `path` is `None`.
pub fn load_notes(path: Option<&Path>) -> Result<Vec<Note>> {
    match path {
        Some(path) => {
            debug!("event=seed_read path={}", path.display());
            let raw = fs::read_to_string(path)?;
            parse_notes(&raw)
        }
        None => parse_notes(EMBEDDED_SEED),
    }
}

pub fn seeded_store(path: Option<&Path>) -> Result<InMemoryStore> {
    let notes = load_notes(path)?;
    let count = notes.len();
    let store = InMemoryStore::from_notes(notes)?;
    info!(
        "event=seed_loaded source={} count={} next_id={}",
        path.map(|p| p.display().to_string())
            .unwrap_or_else(|| "embedded".to_string()),
        count,
        store.peek_next_id()
    );
    Ok(store)
}
