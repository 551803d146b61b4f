use notefulapp::error::{NotefulError, Result};
use serde::Serialize;
use serde_json::json;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// A transport-independent HTTP response. The server turns it into a `tiny_http`
/// response; tests inspect it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn json<T: Serialize>(status: u16, body: &T) -> Result<Self> {
        Ok(Self::raw(status, JSON_CONTENT_TYPE, serde_json::to_vec(body)?))
    }

    pub fn ok<T: Serialize>(body: &T) -> Result<Self> {
        Self::json(200, body)
    }

    pub fn created<T: Serialize>(body: &T, location: impl Into<String>) -> Result<Self> {
        Ok(Self::json(201, body)?.with_header("Location", location))
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn raw(status: u16, content_type: &str, body: Vec<u8>) -> Self {
        Self {
            status,
            headers: vec![("Content-Type".to_string(), content_type.to_string())],
            body,
        }
    }

    pub fn not_found() -> Self {
        Self::message(404, NOT_FOUND_MESSAGE, None)
    }

    /// Map an error to its status code and `{message, error}` payload.
    ///
    /// Client errors keep their own message; anything else is a 500 whose
    /// `error` field carries the underlying cause.
    pub fn from_error(err: &NotefulError) -> Self {
        match err {
            NotefulError::Validation(message) => Self::message(400, message, None),
            NotefulError::NoteNotFound(_) => Self::not_found(),
            NotefulError::MalformedBody(cause) => Self::message(
                400,
                "Malformed JSON in request body",
                Some(cause.to_string()),
            ),
            NotefulError::PayloadTooLarge { .. } => {
                Self::message(413, "Request body too large", Some(err.to_string()))
            }
            other => Self::message(500, "Internal Server Error", Some(other.to_string())),
        }
    }

    fn message(status: u16, message: &str, error: Option<String>) -> Self {
        let payload = match error {
            Some(error) => json!({ "message": message, "error": error }),
            None => json!({ "message": message }),
        };
        Self::raw(status, JSON_CONTENT_TYPE, payload.to_string().into_bytes())
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Parse the body back into JSON. Mostly useful in tests and logs.
    pub fn json_body(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_slice(&self.body)
    }

    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}
