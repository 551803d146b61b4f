use thiserror::Error;

/// Message returned whenever a draft arrives without a usable title.
pub const MISSING_TITLE: &str = "Missing `title` in request body";

#[derive(Error, Debug)]
pub enum NotefulError {
    #[error("{0}")]
    Validation(String),

    /// Holds the id exactly as the caller sent it, which may not even be numeric.
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Malformed JSON in request body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("Request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl NotefulError {
    pub fn missing_title() -> Self {
        NotefulError::Validation(MISSING_TITLE.to_string())
    }

    /// True for errors caused by the caller's input rather than by the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            NotefulError::Validation(_)
                | NotefulError::NoteNotFound(_)
                | NotefulError::MalformedBody(_)
                | NotefulError::PayloadTooLarge { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, NotefulError>;
