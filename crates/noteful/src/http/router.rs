//! Explicit `(method, pattern) → handler` table.
//!
//! Patterns are `/`-separated; a segment starting with `:` captures the matching
//! path segment under that name. Matching ignores empty segments, so trailing
//! slashes do not matter. Routes are tried in registration order. A HEAD request
//! matches the GET route for the same path.

use super::request::{ApiRequest, Method};
use super::response::ApiResponse;
use notefulapp::api::NotefulApi;
use log::{debug, error};
use notefulapp::error::Result;
use notefulapp::store::NoteStore;

pub type Handler<S> = fn(&mut NotefulApi<S>, &ApiRequest, &Params) -> Result<ApiResponse>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(&'static str),
    Param(&'static str),
}

/// Values captured from `:name` pattern segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: Vec<(&'static str, String)>,
}

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

pub struct Route<S: NoteStore> {
    method: Method,
    pattern: &'static str,
    segments: Vec<Segment>,
    handler: Handler<S>,
}

impl<S: NoteStore> Route<S> {
    fn new(method: Method, pattern: &'static str, handler: Handler<S>) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name),
                None => Segment::Literal(s),
            })
            .collect();

        Self {
            method,
            pattern,
            segments,
            handler,
        }
    }

    fn matches(&self, req: &ApiRequest) -> Option<Params> {
        let method_matches = self.method == req.method
            || (self.method == Method::Get && req.method == Method::Head);
        if !method_matches {
            return None;
        }

        let mut params = Params::default();
        let mut path = req.segments();
        for segment in &self.segments {
            let part = path.next()?;
            match segment {
                Segment::Literal(lit) if *lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => params.values.push((*name, part.to_string())),
            }
        }

        match path.next() {
            Some(_) => None,
            None => Some(params),
        }
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }
}

pub struct Router<S: NoteStore> {
    routes: Vec<Route<S>>,
}

impl<S: NoteStore> Default for Router<S> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<S: NoteStore> Router<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, method: Method, pattern: &'static str, handler: Handler<S>) -> Self {
        self.routes.push(Route::new(method, pattern, handler));
        self
    }

    pub fn get(self, pattern: &'static str, handler: Handler<S>) -> Self {
        self.route(Method::Get, pattern, handler)
    }

    pub fn post(self, pattern: &'static str, handler: Handler<S>) -> Self {
        self.route(Method::Post, pattern, handler)
    }

    pub fn put(self, pattern: &'static str, handler: Handler<S>) -> Self {
        self.route(Method::Put, pattern, handler)
    }

    pub fn delete(self, pattern: &'static str, handler: Handler<S>) -> Self {
        self.route(Method::Delete, pattern, handler)
    }

    /// First route matching the request, with its captured params.
    pub fn find(&self, req: &ApiRequest) -> Option<(&Route<S>, Params)> {
        self.routes
            .iter()
            .find_map(|route| route.matches(req).map(|params| (route, params)))
    }

    /// Run the matching handler. `None` means no route matched; handler errors
    /// are already mapped to responses.
    pub fn dispatch(&self, api: &mut NotefulApi<S>, req: &ApiRequest) -> Option<ApiResponse> {
        let (route, params) = self.find(req)?;
        let response = (route.handler)(api, req, &params).unwrap_or_else(|err| {
            if err.is_client_error() {
                debug!(
                    "event=request_rejected route={} path={} err={}",
                    route.pattern, req.path, err
                );
            } else {
                error!(
                    "event=handler_error route={} path={} err={}",
                    route.pattern, req.path, err
                );
            }
            ApiResponse::from_error(&err)
        });
        Some(response)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
