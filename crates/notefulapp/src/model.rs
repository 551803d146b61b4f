use crate::error::{NotefulError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned note identifier. Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub u64);

impl NoteId {
    /// The following id, or `None` once `u64::MAX` is reached.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(NoteId)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(NoteId)
    }
}

impl From<u64> for NoteId {
    fn from(value: u64) -> Self {
        NoteId(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Note {
    pub fn new(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Case-sensitive substring match against title or content.
    pub fn matches(&self, term: &str) -> bool {
        self.title.contains(term) || self.content.contains(term)
    }
}

/// Unvalidated note fields as they arrive from a client.
///
/// Unknown fields are ignored and `null` reads as absent, so
/// `{"going": "to fail"}` deserializes fine and is then rejected by
/// [`NoteDraft::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoteDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// A draft whose title has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub title: String,
    pub content: Option<String>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: Option<String>) -> Self {
        Self {
            title: Some(title.into()),
            content,
        }
    }

    pub fn title_only(title: impl Into<String>) -> Self {
        Self::new(title, None)
    }

    pub fn validate(self) -> Result<ValidDraft> {
        match self.title {
            Some(title) if !title.is_empty() => Ok(ValidDraft {
                title,
                content: self.content,
            }),
            _ => Err(NotefulError::missing_title()),
        }
    }
}
