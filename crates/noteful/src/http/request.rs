use notefulapp::error::{NotefulError, Result};
use serde::de::DeserializeOwned;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Other(String),
}

impl From<&str> for Method {
    fn from(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Method::Get,
            "HEAD" => Method::Head,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            other => Method::Other(other.to_string()),
        }
    }
}

impl FromStr for Method {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Method::from(s))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Other(name) => name.as_str(),
        };
        f.write_str(name)
    }
}

/// A transport-independent HTTP request, as the handlers see it.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path without the query string
    pub path: String,
    /// Decoded query pairs, in the order they appeared
    pub query: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl ApiRequest {
    /// Build a request from a raw request target such as `/api/notes?searchTerm=ways`.
    pub fn new(method: Method, target: &str, body: Vec<u8>) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, query),
            None => (target, ""),
        };

        let query = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        Self {
            method,
            path: path.to_string(),
            query,
            body,
        }
    }

    pub fn get(target: &str) -> Self {
        Self::new(Method::Get, target, Vec::new())
    }

    pub fn delete(target: &str) -> Self {
        Self::new(Method::Delete, target, Vec::new())
    }

    pub fn post_json(target: &str, body: &serde_json::Value) -> Self {
        Self::new(Method::Post, target, body.to_string().into_bytes())
    }

    pub fn put_json(target: &str, body: &serde_json::Value) -> Self {
        Self::new(Method::Put, target, body.to_string().into_bytes())
    }

    /// First value for `name`; repeated parameters after the first are ignored.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Non-empty path segments, so `/api/notes/` and `/api/notes` match alike.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.path.split('/').filter(|s| !s.is_empty())
    }

    /// Deserialize the body, treating an empty body as `T::default()`.
    pub fn json_body<T: DeserializeOwned + Default>(&self) -> Result<T> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(T::default());
        }
        serde_json::from_slice(&self.body).map_err(NotefulError::MalformedBody)
    }
}
